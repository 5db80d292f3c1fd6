//! HTTP client for the agify.io age prediction API.
//!
//! The client is thin: one method per kind of request the test
//! suite needs, a fixed timeout, and errors that keep whatever the service
//! sent back so callers can inspect status codes and error bodies.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::AgifyClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use types::{ApiResponse, Prediction};

pub use reqwest::StatusCode;
