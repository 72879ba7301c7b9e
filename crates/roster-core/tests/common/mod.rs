use roster_core::{Roster, RosterBuilder};
use tempfile::TempDir;

/// Helper function to create a test roster over a throwaway database.
pub fn create_test_roster() -> (TempDir, Roster) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let roster = RosterBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create roster");
    (temp_dir, roster)
}
