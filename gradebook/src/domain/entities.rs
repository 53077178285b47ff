//! Domain entities: students, grades and letter levels

use std::fmt;

use crate::domain::{DomainError, DomainResult};

/// Lowest accepted grade.
pub const MIN_GRADE: i32 = 0;
/// Highest accepted grade.
pub const MAX_GRADE: i32 = 100;

/// Significant digits used when a summary is formatted without an explicit precision.
pub const DEFAULT_PRECISION: usize = 6;
/// Fewest significant digits accepted; keeps `100` from needing an exponent.
pub const MIN_PRECISION: usize = 3;
/// Most significant digits accepted.
pub const MAX_PRECISION: usize = 15;

/// Lower bounds of each letter band, checked top-down; anything below is `F`.
const GRADE_THRESHOLDS: [(f64, GradeLevel); 4] = [
    (90.0, GradeLevel::A),
    (80.0, GradeLevel::B),
    (70.0, GradeLevel::C),
    (60.0, GradeLevel::D),
];

/// Student identifier, fixed at enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single score in `[MIN_GRADE, MAX_GRADE]`.
///
/// Only constructible through [`Grade::new`], so an out-of-range grade
/// never exists as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
    pub fn new(value: i32) -> DomainResult<Self> {
        if (MIN_GRADE..=MAX_GRADE).contains(&value) {
            // bounds checked above, fits in u8
            Ok(Self(value as u8))
        } else {
            Err(DomainError::GradeOutOfRange { value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Grade {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letter classification of an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeLevel {
    A,
    B,
    C,
    D,
    F,
}

impl GradeLevel {
    /// Map an average onto its letter band. Boundaries belong to the higher band.
    pub fn from_average(average: f64) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(lower, _)| average >= *lower)
            .map(|(_, level)| *level)
            .unwrap_or(GradeLevel::F)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GradeLevel::A => "A",
            GradeLevel::B => "B",
            GradeLevel::C => "C",
            GradeLevel::D => "D",
            GradeLevel::F => "F",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student and the grades recorded so far.
///
/// Id and name are fixed at creation; grades only grow by appending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    name: String,
    grades: Vec<Grade>,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grades in insertion order.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Append a grade.
    ///
    /// Values outside `[0, 100]` are rejected with
    /// [`DomainError::GradeOutOfRange`] and leave the student unchanged.
    /// Nothing is printed here; the caller reports the rejected value.
    pub fn add_grade(&mut self, value: i32) -> DomainResult<Grade> {
        let grade = Grade::new(value)?;
        self.grades.push(grade);
        Ok(grade)
    }

    /// Arithmetic mean of all grades, `0.0` when there are none.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: u32 = self.grades.iter().map(|g| u32::from(g.value())).sum();
        f64::from(total) / self.grades.len() as f64
    }

    /// Highest grade, `0` when there are none.
    pub fn highest_grade(&self) -> u8 {
        self.grades.iter().map(|g| g.value()).max().unwrap_or(0)
    }

    pub fn grade_level(&self) -> GradeLevel {
        GradeLevel::from_average(self.average())
    }

    /// Snapshot of the computed statistics for display.
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            id: self.id,
            name: self.name.clone(),
            average: self.average(),
            level: self.grade_level(),
            highest: self.highest_grade(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary(), f)
    }
}

/// Computed statistics of one student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary {
    pub id: StudentId,
    pub name: String,
    pub average: f64,
    pub level: GradeLevel,
    pub highest: u8,
}

impl StudentSummary {
    /// `(label, value)` rows in display order, average shown with `precision` significant digits.
    pub fn rows(&self, precision: usize) -> [(&'static str, String); 5] {
        [
            ("Student ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Average", format_significant(self.average, precision)),
            ("Grade level", self.level.to_string()),
            ("Highest", self.highest.to_string()),
        ]
    }
}

/// Format `value` with at most `digits` significant digits, dropping trailing zeros.
///
/// `91.666...` with 6 digits is `91.6667`, `90.0` is `90`. `digits` is
/// clamped to `[MIN_PRECISION, MAX_PRECISION]`.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.clamp(MIN_PRECISION, MAX_PRECISION);
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Plain multi-line block; the formatter precision (`{:.3}`) sets the
/// significant digits of the average.
impl fmt::Display for StudentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        let rows = self.rows(precision);
        for (i, (label, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}
