//! School model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Reference entity representing an institution.
///
/// Schools are created only by the seeder and are read-only afterwards:
/// no operation updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct School {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Name of the school
    pub name: String,

    /// Name of the school's principal
    pub principal: String,

    /// Postal address
    pub address: String,

    /// Timestamp when the school was seeded (UTC)
    pub created_at: Timestamp,
}
