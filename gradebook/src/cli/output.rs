//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::StudentSummary;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print a label/value line (green label)
pub fn field(label: &str, value: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), value);
}

/// Print a blank separator line
pub fn blank() {
    println!();
}

/// Print one student's summary block
pub fn student_info(summary: &StudentSummary, precision: usize) {
    for (label, value) in summary.rows(precision) {
        field(label, &value);
    }
}
