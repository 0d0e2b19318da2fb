//! Backend API module
//!
//! HTTP access to the external calorie counter backend.

pub mod client;

pub use client::{ApiClient, ApiError, ApiResult};
