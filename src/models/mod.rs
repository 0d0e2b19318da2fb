//! Data models
//!
//! Rust structs mirroring the backend's wire entities.

mod food;
mod intake;
mod nutrition;
mod user;

pub use food::{Food, FoodCreate};
pub use intake::{
    DailyIntake, DailyIntakeFood, DailyIntakeRequest, IntakeEntry, UpdateDailyIntakeRequest,
};
pub use nutrition::Nutrition;
pub use user::{User, UserCreate};
