//! One-time seeding of the school reference data.

use jiff::Timestamp;
use serde::Deserialize;

use crate::error::{DatabaseResultExt, Result};

/// Deserialization target for the embedded seed asset.
#[derive(Debug, Deserialize)]
struct SeedSchool {
    name: String,
    principal: String,
    address: String,
}

impl super::Database {
    /// Seeds the fixed school list when the table is empty.
    ///
    /// Runs on every startup and is idempotent: once any school exists,
    /// nothing is inserted. Returns the number of rows inserted.
    pub fn seed_schools(&mut self) -> Result<usize> {
        if self.count_schools()? > 0 {
            return Ok(0);
        }

        let seed_json = include_str!("../../assets/schools.json");
        let schools: Vec<SeedSchool> = serde_json::from_str(seed_json)?;

        let now = Timestamp::now().to_string();
        let inserted = schools.len();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        for school in &schools {
            tx.execute(
                "INSERT INTO schools (name, principal, address, created_at) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![school.name, school.principal, school.address, &now],
            )
            .db_context("Failed to insert seed school")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(inserted)
    }
}
