//! gradebook: a student roster with grade averages, maxima and letter grades.
//!
//! Layers, innermost first:
//! - [`domain`]: `Student`, `Grade`, `GradeLevel` and the grading rules
//! - [`application`]: the `Roster` service and application errors
//! - [`config`]: `GRADEBOOK_*` settings
//! - [`cli`]: argument parsing, command dispatch and colored output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
