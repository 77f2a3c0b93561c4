//! Data types for the relay.
//!
//! `gemini` holds the upstream wire format, `trivia` the validated
//! question returned to callers, and `api` the error body.

pub mod api;
pub mod gemini;
pub mod trivia;
