//! Application layer: roster management on top of the domain entities

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
