//! Tests for the Roster service

use gradebook::application::services::{GradeEntry, Roster};
use gradebook::application::ApplicationError;
use gradebook::domain::{DomainError, GradeLevel, StudentId};
use gradebook::util::testing;

#[test]
fn given_new_roster_when_enrolling_then_students_keep_enrollment_order() {
    testing::init_test_setup();
    let mut roster = Roster::new();
    assert!(roster.is_empty());

    roster.enroll(StudentId(2), "Bob").unwrap();
    roster.enroll(StudentId(1), "Alice").unwrap();

    let names: Vec<&str> = roster.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);
    assert_eq!(roster.len(), 2);
}

#[test]
fn given_enrolled_id_when_enrolling_again_then_duplicate_error() {
    testing::init_test_setup();
    let mut roster = Roster::new();
    roster.enroll(StudentId(1), "Alice").unwrap();

    let err = roster.enroll(StudentId(1), "Other").unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::DuplicateStudent(StudentId(1)))
    ));
    assert_eq!(roster.student(StudentId(1)).unwrap().name(), "Alice");
}

#[test]
fn given_out_of_range_grade_when_recording_then_rejected_without_error() {
    testing::init_test_setup();
    let mut roster = Roster::new();
    roster.enroll(StudentId(2), "Bob").unwrap();

    let entry = roster.record_grade(StudentId(2), 105).unwrap();

    assert_eq!(
        entry,
        GradeEntry::Rejected(DomainError::GradeOutOfRange { value: 105 })
    );
    assert!(roster.student(StudentId(2)).unwrap().grades().is_empty());
}

#[test]
fn given_unknown_student_when_recording_then_unknown_error() {
    testing::init_test_setup();
    let mut roster = Roster::new();

    let err = roster.record_grade(StudentId(42), 80).unwrap_err();

    assert_eq!(err.to_string(), "student not found: 42");
}

#[test]
fn given_populated_roster_when_summarizing_then_one_summary_per_student() {
    testing::init_test_setup();
    let mut roster = Roster::new();
    roster.enroll(StudentId(1), "Alice").unwrap();
    roster.record_grades(StudentId(1), &[95, 88, 92]).unwrap();
    roster.enroll(StudentId(2), "Bob").unwrap();
    roster.record_grades(StudentId(2), &[78, 82, 75, 105]).unwrap();

    let summaries = roster.summaries();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].level, GradeLevel::A);
    assert_eq!(summaries[0].highest, 95);
    assert_eq!(summaries[1].level, GradeLevel::C);
    assert_eq!(summaries[1].highest, 82);
}

#[test]
fn given_batch_with_rejects_when_recording_then_one_entry_per_value() {
    testing::init_test_setup();
    let mut roster = Roster::new();
    roster.enroll(StudentId(1002), "Bob Smith").unwrap();

    let entries = roster
        .record_grades(StudentId(1002), &[78, -5, 82, 75, 101])
        .unwrap();

    let recorded = entries.iter().filter(|e| e.is_recorded()).count();
    assert_eq!(entries.len(), 5);
    assert_eq!(recorded, 3);
    assert_eq!(
        entries[1],
        GradeEntry::Rejected(DomainError::GradeOutOfRange { value: -5 })
    );
    assert_eq!(
        entries[4],
        GradeEntry::Rejected(DomainError::GradeOutOfRange { value: 101 })
    );
    assert_eq!(roster.student(StudentId(1002)).unwrap().grades().len(), 3);
}
