//! Parameter structures for roster operations.
//!
//! Shared parameter structs passed between the console layer and the core,
//! free of framework-specific derives. The console builds these from terminal
//! input; tests build them directly.

use serde::{Deserialize, Serialize};

/// Number of students shown per listing page.
pub const PAGE_SIZE: u32 = 10;

/// Generic parameters for operations requiring just an ID.
///
/// Used for get_student, update_student lookup, and delete_student.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new student.
///
/// All fields except `phone` are required; a blank phone is stored as the
/// empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStudent {
    /// Full name (2-100 characters)
    pub full_name: String,
    /// Student code (5-20 characters, unique)
    pub student_code: String,
    /// Email address (unique)
    pub email: String,
    /// Phone number: empty, or 10-11 digits
    #[serde(default)]
    pub phone: String,
    /// Identifier of an existing school
    pub school_id: u64,
}

/// Parameters for updating an existing student.
///
/// `None` fields are left unchanged. The student code is immutable and has
/// no counterpart here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudent {
    /// The ID of the student to update
    pub id: u64,
    /// New full name, if changing
    pub full_name: Option<String>,
    /// New email address, if changing
    pub email: Option<String>,
    /// New phone number, if changing
    pub phone: Option<String>,
    /// New school identifier, if changing
    pub school_id: Option<u64>,
}

impl UpdateStudent {
    /// True when no field is being changed.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.school_id.is_none()
    }
}

/// Parameters for listing students one page at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListStudents {
    /// 1-based page number
    pub page: u32,
}

impl Default for ListStudents {
    fn default() -> Self {
        Self { page: 1 }
    }
}
