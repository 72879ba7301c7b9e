//! Display implementations for the domain models.

use std::fmt;

use crate::models::{School, Student};

impl fmt::Display for School {
    /// One line of the school chooser: `{id}. {name}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.name)
    }
}

impl fmt::Display for Student {
    /// A listing row without the school name:
    /// `{id}. {name} | {code} | {email} | {phone}`.
    ///
    /// [`crate::display::StudentRow`] appends the resolved school.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} | {} | {} | {}",
            self.id, self.full_name, self.student_code, self.email, self.phone
        )
    }
}
