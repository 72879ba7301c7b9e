//! Display wrappers for terminal output.
//!
//! Collections and contextual views are formatted here so the same data can
//! be rendered consistently wherever it appears. Bare-model Display
//! implementations live in [`models`]; the wrappers in this module add the
//! context a single record cannot carry (page numbers, resolved school
//! names).

use std::fmt;

use crate::models::{School, Student};

pub mod models;

/// A student row paired with its resolved school name for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub student: Student,
    /// Name of the referenced school, when it still resolves.
    pub school_name: Option<String>,
}

impl fmt::Display for StudentRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let school = self.school_name.as_deref().unwrap_or("(unknown)");
        write!(f, "{} | School: {}", self.student, school)
    }
}

/// One page of the student listing.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentPage {
    /// 1-based page number
    pub page: u32,
    pub rows: Vec<StudentRow>,
}

impl StudentPage {
    /// True when the page holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for StudentPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Students (Page {}) ---", self.page)?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// The numbered school list shown when choosing a school.
#[derive(Debug, Clone, PartialEq)]
pub struct Schools(pub Vec<School>);

impl fmt::Display for Schools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Schools:")?;
        for school in &self.0 {
            writeln!(f, "{school}")?;
        }
        Ok(())
    }
}
