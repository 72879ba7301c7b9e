//! School operations for the Roster.
//!
//! Schools are read-only reference data; the only write path is the seeder
//! invoked by the builder.

use super::Roster;
use crate::{display::Schools, error::Result};

impl Roster {
    /// Returns all schools as the numbered chooser list, ID ascending.
    pub fn list_schools(&self) -> Result<Schools> {
        Ok(Schools(self.db.list_schools()?))
    }

    /// Returns true when a school with the given ID exists.
    pub fn school_exists(&self, id: u64) -> Result<bool> {
        self.db.school_exists(id)
    }
}
