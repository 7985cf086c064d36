//! # DocSage Gateway
//!
//! Thin HTTP surface over the answer engine. All Q&A logic lives in
//! `docsage-engine`; this crate only parses requests, maps errors to
//! status codes, and serves JSON.

pub mod routes;
pub mod server;

pub use server::{AppState, start};
