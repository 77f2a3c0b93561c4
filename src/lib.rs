//! Trivia Relay — Shared Library
//!
//! This crate contains the Gemini client, the trivia models and
//! validation, and the response helpers used by the API handlers.
//!
//! Each serverless function in `api/` is a thin `main` that calls
//! into `handlers` so the request flow can be tested without the
//! Vercel runtime.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod response;
pub mod trivia;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
