//! User model
//!
//! Represents an account that owns daily intakes.

use serde::{Deserialize, Serialize};

/// A user of the tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
    /// Body weight in kilograms
    pub weight: i32,
    /// Height in centimeters
    pub height: i32,
}

/// Payload for creating or replacing a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
    pub weight: i32,
    pub height: i32,
}
