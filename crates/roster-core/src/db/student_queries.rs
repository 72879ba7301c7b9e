//! Student CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, RosterError},
    models::Student,
    params::{NewStudent, UpdateStudent},
};

const STUDENT_COLUMNS: &str =
    "id, school_id, full_name, student_code, email, phone, created_at, updated_at";

const INSERT_STUDENT_SQL: &str = "INSERT INTO students (school_id, full_name, student_code, email, phone, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const CHECK_STUDENT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM students WHERE id = ?1)";
const CHECK_CODE_SQL: &str = "SELECT EXISTS(SELECT 1 FROM students WHERE student_code = ?1)";
const CHECK_CODE_EXCLUDING_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM students WHERE student_code = ?1 AND id != ?2)";
const CHECK_EMAIL_SQL: &str = "SELECT EXISTS(SELECT 1 FROM students WHERE email = ?1)";
const CHECK_EMAIL_EXCLUDING_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM students WHERE email = ?1 AND id != ?2)";
const COUNT_STUDENTS_SQL: &str = "SELECT COUNT(*) FROM students";
const DELETE_STUDENT_SQL: &str = "DELETE FROM students WHERE id = ?1";

fn map_student(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get::<_, i64>(0)? as u64,
        school_id: row.get::<_, i64>(1)? as u64,
        full_name: row.get(2)?,
        student_code: row.get(3)?,
        email: row.get(4)?,
        phone: row.get(5)?,
        created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
        })?,
        updated_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
        })?,
    })
}

fn select_student_sql() -> String {
    format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = ?1")
}

impl super::Database {
    /// Inserts a new student and returns the stored row.
    ///
    /// Field validity and uniqueness are the caller's concern; the UNIQUE
    /// constraints on `student_code` and `email` remain as the store-level
    /// backstop.
    pub fn insert_student(&mut self, new: &NewStudent) -> Result<Student> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_STUDENT_SQL,
            params![
                new.school_id as i64,
                new.full_name,
                new.student_code,
                new.email,
                new.phone,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert student")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Student {
            id,
            school_id: new.school_id,
            full_name: new.full_name.clone(),
            student_code: new.student_code.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a student by its ID.
    pub fn get_student(&self, id: u64) -> Result<Option<Student>> {
        self.connection
            .query_row(&select_student_sql(), params![id as i64], map_student)
            .optional()
            .db_context("Failed to query student")
    }

    /// Lists one page of students, ordered by ID ascending.
    ///
    /// Pages are 1-based; a page past the end of the collection is empty.
    pub fn list_students_page(&self, page: u32, page_size: u32) -> Result<Vec<Student>> {
        let offset = u64::from(page.saturating_sub(1)) * u64::from(page_size);
        let sql = format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY id ASC LIMIT ?1 OFFSET ?2"
        );

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare student listing")?;

        let students = stmt
            .query_map(params![page_size as i64, offset as i64], map_student)
            .db_context("Failed to query students")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch students")?;

        Ok(students)
    }

    /// Counts all student rows.
    pub fn count_students(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_STUDENTS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|n| n as u64)
            .db_context("Failed to count students")
    }

    /// Returns true when a student with the given code exists.
    ///
    /// `exclude` skips one record, so an update comparing a student against
    /// itself does not count as a conflict.
    pub fn student_code_exists(&self, code: &str, exclude: Option<u64>) -> Result<bool> {
        match exclude {
            Some(id) => self
                .connection
                .query_row(CHECK_CODE_EXCLUDING_SQL, params![code, id as i64], |row| {
                    row.get(0)
                })
                .db_context("Failed to check student code uniqueness"),
            None => self
                .connection
                .query_row(CHECK_CODE_SQL, params![code], |row| row.get(0))
                .db_context("Failed to check student code uniqueness"),
        }
    }

    /// Returns true when a student with the given email exists.
    ///
    /// `exclude` skips one record, as for [`Self::student_code_exists`].
    pub fn email_exists(&self, email: &str, exclude: Option<u64>) -> Result<bool> {
        match exclude {
            Some(id) => self
                .connection
                .query_row(CHECK_EMAIL_EXCLUDING_SQL, params![email, id as i64], |row| {
                    row.get(0)
                })
                .db_context("Failed to check email uniqueness"),
            None => self
                .connection
                .query_row(CHECK_EMAIL_SQL, params![email], |row| row.get(0))
                .db_context("Failed to check email uniqueness"),
        }
    }

    /// Applies the provided fields to a student in a single UPDATE.
    ///
    /// Absent fields are left untouched. `updated_at` is refreshed whenever at
    /// least one field changes. Returns the refreshed row.
    pub fn update_student(&mut self, update: &UpdateStudent) -> Result<Student> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if update.is_empty() {
            // Nothing to write; just confirm the student exists.
            let student = tx
                .query_row(&select_student_sql(), params![update.id as i64], map_student)
                .optional()
                .db_context("Failed to query student")?
                .ok_or(RosterError::StudentNotFound { id: update.id })?;
            tx.commit().db_context("Failed to commit transaction")?;
            return Ok(student);
        }

        let mut sets = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref full_name) = update.full_name {
            sets.push("full_name = ?");
            params_vec.push(Box::new(full_name.clone()));
        }

        if let Some(ref email) = update.email {
            sets.push("email = ?");
            params_vec.push(Box::new(email.clone()));
        }

        if let Some(ref phone) = update.phone {
            sets.push("phone = ?");
            params_vec.push(Box::new(phone.clone()));
        }

        if let Some(school_id) = update.school_id {
            sets.push("school_id = ?");
            params_vec.push(Box::new(school_id as i64));
        }

        sets.push("updated_at = ?");
        params_vec.push(Box::new(Timestamp::now().to_string()));

        let sql = format!("UPDATE students SET {} WHERE id = ?", sets.join(", "));
        params_vec.push(Box::new(update.id as i64));

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let rows_affected = tx
            .execute(&sql, &params_refs[..])
            .db_context("Failed to update student")?;

        if rows_affected == 0 {
            return Err(RosterError::StudentNotFound { id: update.id });
        }

        let student = tx
            .query_row(&select_student_sql(), params![update.id as i64], map_student)
            .db_context("Failed to query updated student")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(student)
    }

    /// Permanently deletes a student.
    pub fn delete_student(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_STUDENT_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check student existence")?;

        if !exists {
            return Err(RosterError::StudentNotFound { id });
        }

        tx.execute(DELETE_STUDENT_SQL, params![id as i64])
            .db_context("Failed to delete student")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
