//! Student operations for the Roster.

use super::Roster;
use crate::{
    display::{StudentPage, StudentRow},
    error::{Result, RosterError},
    models::Student,
    params::{Id, ListStudents, NewStudent, UpdateStudent, PAGE_SIZE},
    validate,
};

impl Roster {
    /// Creates a new student after validating every field.
    ///
    /// Checks length bounds, email and phone format, student code and email
    /// uniqueness, and school existence. A rejected create inserts nothing.
    pub fn create_student(&mut self, new: &NewStudent) -> Result<Student> {
        validate::full_name(&new.full_name)?;
        validate::student_code(&new.student_code)?;
        validate::email(&new.email)?;
        if !new.phone.is_empty() {
            validate::phone(&new.phone)?;
        }

        if self.db.student_code_exists(&new.student_code, None)? {
            return Err(
                RosterError::invalid_input("Student ID").with_reason("Student ID already exists.")
            );
        }

        if self.db.email_exists(&new.email, None)? {
            return Err(RosterError::invalid_input("Email").with_reason("Email already exists."));
        }

        if !self.db.school_exists(new.school_id)? {
            return Err(RosterError::SchoolNotFound { id: new.school_id });
        }

        self.db.insert_student(new)
    }

    /// Retrieves a student by ID.
    pub fn get_student(&self, params: &Id) -> Result<Option<Student>> {
        self.db.get_student(params.id)
    }

    /// Returns one page of students, each with its school name resolved.
    ///
    /// Pages are 1-based and hold [`PAGE_SIZE`] rows, ordered by ID
    /// ascending. A page past the end of the collection is empty.
    pub fn list_students_page(&self, params: &ListStudents) -> Result<StudentPage> {
        let students = self.db.list_students_page(params.page, PAGE_SIZE)?;

        let mut rows = Vec::with_capacity(students.len());
        for student in students {
            let school_name = self.db.get_school(student.school_id)?.map(|s| s.name);
            rows.push(StudentRow {
                student,
                school_name,
            });
        }

        Ok(StudentPage {
            page: params.page,
            rows,
        })
    }

    /// Updates a student, validating every provided field before any write.
    ///
    /// Absent fields are left unchanged. The first validation failure aborts
    /// the whole operation with the record untouched; on success a single
    /// UPDATE is committed. The student code is immutable.
    pub fn update_student(&mut self, update: &UpdateStudent) -> Result<Student> {
        if self.db.get_student(update.id)?.is_none() {
            return Err(RosterError::StudentNotFound { id: update.id });
        }

        if let Some(ref full_name) = update.full_name {
            validate::full_name(full_name)?;
        }

        if let Some(ref email) = update.email {
            validate::email(email)?;
            if self.db.email_exists(email, Some(update.id))? {
                return Err(
                    RosterError::invalid_input("Email").with_reason("Email already exists.")
                );
            }
        }

        if let Some(ref phone) = update.phone {
            if !phone.is_empty() {
                validate::phone(phone)?;
            }
        }

        if let Some(school_id) = update.school_id {
            if !self.db.school_exists(school_id)? {
                return Err(RosterError::SchoolNotFound { id: school_id });
            }
        }

        self.db.update_student(update)
    }

    /// Permanently deletes a student.
    ///
    /// Confirmation is the console's concern; by the time this runs the
    /// operator has already answered "y".
    pub fn delete_student(&mut self, params: &Id) -> Result<()> {
        self.db.delete_student(params.id)
    }

    /// Returns the number of students in the collection.
    pub fn count_students(&self) -> Result<u64> {
        self.db.count_students()
    }

    /// Ask-the-store check: does any student already use this code?
    pub fn student_code_exists(&self, code: &str) -> Result<bool> {
        self.db.student_code_exists(code, None)
    }

    /// Ask-the-store check: does any student other than `exclude` already use
    /// this email?
    pub fn email_exists(&self, email: &str, exclude: Option<u64>) -> Result<bool> {
        self.db.email_exists(email, exclude)
    }
}
