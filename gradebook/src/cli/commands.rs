//! Command execution: builds the roster and prints each student's summary

use tracing::{debug, instrument};

use crate::application::services::{GradeEntry, Roster};
use crate::application::ApplicationResult;
use crate::cli::output;
use crate::cli::{Cli, CliResult};
use crate::config::Settings;
use crate::domain::StudentId;

/// Students enrolled by the binary: id, name and raw grade entries.
pub const DEMO_ROSTER: &[(u32, &str, &[i32])] = &[
    (1001, "Alice Johnson", &[95, 88, 92]),
    (1002, "Bob Smith", &[78, 82, 75]),
];

pub const BANNER: &str = "=== Student Grade System ===";
pub const SECTION_TITLE: &str = "Student Information:";
pub const SECTION_RULE: &str = "-------------------";
pub const FOOTER: &str = "System demo completed!";

#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    debug!("debug level: {}", cli.debug);
    let settings = Settings::load()?;
    settings.apply();
    debug!("settings: {:?}", settings);

    output::header(BANNER);

    let (roster, rejected) = build_roster(DEMO_ROSTER)?;
    for msg in &rejected {
        output::warning(msg);
    }

    print_roster(&roster, settings.precision);

    output::blank();
    output::header(FOOTER);
    Ok(())
}

/// Enroll each student and record their grades.
///
/// Returns the roster and one message per rejected grade, in entry order.
pub fn build_roster(entries: &[(u32, &str, &[i32])]) -> ApplicationResult<(Roster, Vec<String>)> {
    let mut roster = Roster::new();
    let mut rejected = Vec::new();
    for &(id, name, grades) in entries {
        let id = StudentId(id);
        roster.enroll(id, name)?;
        for entry in roster.record_grades(id, grades)? {
            if let GradeEntry::Rejected(e) = entry {
                rejected.push(format!("{} ({}): {}", name, id, e));
            }
        }
    }
    Ok((roster, rejected))
}

fn print_roster(roster: &Roster, precision: usize) {
    output::blank();
    output::header(SECTION_TITLE);
    output::info(SECTION_RULE);
    for (i, summary) in roster.summaries().iter().enumerate() {
        if i > 0 {
            output::blank();
        }
        output::student_info(summary, precision);
    }
}
