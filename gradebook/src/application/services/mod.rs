//! Application services

mod roster;

pub use roster::{GradeEntry, Roster};
