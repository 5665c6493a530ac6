//! Smart API test case generator.
//!
//! Analyzes an endpoint string such as `GET /users/{id}`, suggests test case
//! descriptions through an external text generator (with a deterministic
//! fallback), and renders executable pytest code from fixed templates.

pub mod agent;
pub mod ai;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod http;
pub mod storage;
pub mod testing;

pub use agent::{GenerationReport, TestGeneratorAgent};
pub use analyzer::{analyze, EndpointDescriptor};
pub use config::Config;
