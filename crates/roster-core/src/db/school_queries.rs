//! School queries.
//!
//! Schools are reference data: inserted by the seeder, read everywhere else,
//! never updated or deleted.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::School,
};

const SELECT_SCHOOL_SQL: &str =
    "SELECT id, name, principal, address, created_at FROM schools WHERE id = ?1";
const LIST_SCHOOLS_SQL: &str =
    "SELECT id, name, principal, address, created_at FROM schools ORDER BY id ASC";
const CHECK_SCHOOL_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM schools WHERE id = ?1)";
const COUNT_SCHOOLS_SQL: &str = "SELECT COUNT(*) FROM schools";

fn map_school(row: &Row) -> rusqlite::Result<School> {
    Ok(School {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        principal: row.get(2)?,
        address: row.get(3)?,
        created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
        })?,
    })
}

impl super::Database {
    /// Retrieves a school by its ID.
    pub fn get_school(&self, id: u64) -> Result<Option<School>> {
        self.connection
            .query_row(SELECT_SCHOOL_SQL, params![id as i64], map_school)
            .optional()
            .db_context("Failed to query school")
    }

    /// Lists all schools ordered by ID ascending.
    pub fn list_schools(&self) -> Result<Vec<School>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SCHOOLS_SQL)
            .db_context("Failed to prepare school listing")?;

        let schools = stmt
            .query_map([], map_school)
            .db_context("Failed to query schools")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch schools")?;

        Ok(schools)
    }

    /// Returns true when a school with the given ID exists.
    pub fn school_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_SCHOOL_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check school existence")
    }

    /// Counts all school rows.
    pub fn count_schools(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_SCHOOLS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|n| n as u64)
            .db_context("Failed to count schools")
    }
}
