//! Student record value type
//!
//! A [`StudentRecord`] is immutable once stored: the store has no update
//! operation, so every field is fixed from the moment the record is added.
//!
//! Two display forms are provided:
//! - [`fmt::Display`]: the one-line form used when listing every record
//! - [`StudentRecord::card`]: the labelled multi-line form shown by a search

use std::fmt;

/// Student identifier (unique key within a store)
pub type StudentId = i32;

/// A single student record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub course: String,
    pub grade: i32,
}

impl StudentRecord {
    pub fn new(
        id: StudentId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course: impl Into<String>,
        grade: i32,
    ) -> Self {
        StudentRecord {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            course: course.into(),
            grade,
        }
    }

    /// Labelled multi-line view of this record
    pub fn card(&self) -> RecordCard<'_> {
        RecordCard(self)
    }
}

/// `id first last course grade`
impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.id, self.first_name, self.last_name, self.course, self.grade
        )
    }
}

/// Borrowed view that renders a record as labelled, tab-aligned lines
pub struct RecordCard<'a>(&'a StudentRecord);

impl fmt::Display for RecordCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "Student ID: \t{}", r.id)?;
        writeln!(f, "First Name: \t{}", r.first_name)?;
        writeln!(f, "Last Name: \t{}", r.last_name)?;
        writeln!(f, "Course: \t{}", r.course)?;
        write!(f, "Grade: \t\t{}", r.grade)
    }
}
