//! Request handlers behind the serverless entry points in `api/`.
//!
//! Each takes the request method and a configuration loader so the
//! flow can be driven from tests with a mock upstream.

pub mod models;
pub mod trivia;
