//! Roster service
//!
//! Owns the enrolled students. Rejected grades are handed back to the caller,
//! which reports them, instead of failing the whole operation.

use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{DomainError, Grade, Student, StudentId, StudentSummary};

/// Outcome of recording a single grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeEntry {
    Recorded(Grade),
    Rejected(DomainError),
}

impl GradeEntry {
    pub fn is_recorded(&self) -> bool {
        matches!(self, GradeEntry::Recorded(_))
    }
}

/// Ordered set of students; enrollment order is display order.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student with no grades.
    pub fn enroll(&mut self, id: StudentId, name: &str) -> ApplicationResult<&mut Student> {
        if self.student(id).is_some() {
            return Err(DomainError::DuplicateStudent(id).into());
        }
        debug!("enroll: id={} name={}", id, name);
        self.students.push(Student::new(id, name));
        let idx = self.students.len() - 1;
        Ok(&mut self.students[idx])
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    fn student_mut(&mut self, id: StudentId) -> ApplicationResult<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| DomainError::UnknownStudent(id).into())
    }

    /// Record one grade for a student.
    ///
    /// An out-of-range value comes back as [`GradeEntry::Rejected`]; only an
    /// unknown student is an error.
    #[instrument(skip(self))]
    pub fn record_grade(&mut self, id: StudentId, value: i32) -> ApplicationResult<GradeEntry> {
        let student = self.student_mut(id)?;
        match student.add_grade(value) {
            Ok(grade) => {
                debug!("recorded grade {} for {}", grade, student.name());
                Ok(GradeEntry::Recorded(grade))
            }
            Err(e @ DomainError::GradeOutOfRange { .. }) => {
                debug!("rejected grade for {}: {}", student.name(), e);
                Ok(GradeEntry::Rejected(e))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Record grades in order, returning one entry per value.
    pub fn record_grades(
        &mut self,
        id: StudentId,
        values: &[i32],
    ) -> ApplicationResult<Vec<GradeEntry>> {
        values
            .iter()
            .map(|&value| self.record_grade(id, value))
            .collect()
    }

    pub fn summaries(&self) -> Vec<StudentSummary> {
        self.students.iter().map(Student::summary).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_unknown_student_when_recording_then_errors() {
        let mut roster = Roster::new();
        let result = roster.record_grade(StudentId(9), 50);
        assert!(result.is_err());
    }

    #[test]
    fn given_mixed_values_when_recording_batch_then_keeps_order_of_entries() {
        let mut roster = Roster::new();
        roster.enroll(StudentId(1), "Alice").unwrap();
        let entries = roster.record_grades(StudentId(1), &[70, 101, 80]).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_recorded());
        assert_eq!(
            entries[1],
            GradeEntry::Rejected(DomainError::GradeOutOfRange { value: 101 })
        );
        assert!(entries[2].is_recorded());
        assert_eq!(roster.student(StudentId(1)).unwrap().grades().len(), 2);
    }
}
