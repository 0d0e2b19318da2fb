//! Calorie Tracker (caltrack) Library
//!
//! Nutrition aggregation and a client for the calorie counter REST backend.

pub mod api;
pub mod build_info;
pub mod models;
pub mod nutrition;
