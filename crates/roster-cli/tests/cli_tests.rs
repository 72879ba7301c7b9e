use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command bound to a test database
fn roster_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").expect("Failed to find roster binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// One create-student menu interaction: name, code, email, phone, school 1.
fn create_script(name: &str, code: &str, email: &str, phone: &str) -> String {
    format!("2\n{name}\n{code}\n{email}\n{phone}\n1\n")
}

#[test]
fn test_menu_banner_and_clean_exit() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    roster_cmd(&db_path)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== SCHOOL MANAGEMENT SYSTEM ==="))
        .stdout(predicate::str::contains("Choose an option:"));
}

#[test]
fn test_invalid_menu_choice() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    roster_cmd(&db_path)
        .write_stdin("9\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option. Please try again."));
}

#[test]
fn test_list_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    roster_cmd(&db_path)
        .write_stdin("1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn test_create_then_list_shows_row_with_school() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let script = format!(
        "{}1\nq\n0\n",
        create_script("Alice Smith", "STU00001", "alice@example.com", "07123456789")
    );

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Create Student ---"))
        .stdout(predicate::str::contains("Available Schools:"))
        .stdout(predicate::str::contains("1. Greenwich High School"))
        .stdout(predicate::str::contains("Student created successfully."))
        .stdout(predicate::str::contains("--- Students (Page 1) ---"))
        .stdout(predicate::str::contains(
            "1. Alice Smith | STU00001 | alice@example.com | 07123456789 | School: Greenwich High School",
        ));
}

#[test]
fn test_required_field_reprompts() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    // Blank name, then a too-short name, then a valid one.
    let script = "2\n\nA\nAlice Smith\nSTU00001\nalice@example.com\n\n1\n0\n";

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Full name is required."))
        .stdout(predicate::str::contains(
            "Full name must be between 2 and 100 characters.",
        ))
        .stdout(predicate::str::contains("Student created successfully."));
}

#[test]
fn test_duplicate_email_reprompts_until_unique() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let script = format!(
        "{}2\nBob Jones\nSTU00002\nalice@example.com\nbob@example.com\n\n1\n1\nq\n0\n",
        create_script("Alice Smith", "STU00001", "alice@example.com", "07123456789")
    );

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Email already exists."))
        .stdout(predicate::str::contains(
            "2. Bob Jones | STU00002 | bob@example.com",
        ));
}

#[test]
fn test_duplicate_student_code_reprompts() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let script = format!(
        "{}2\nBob Jones\nSTU00001\nSTU00002\nbob@example.com\n\n1\n0\n",
        create_script("Alice Smith", "STU00001", "alice@example.com", "")
    );

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Student ID already exists."));
}

#[test]
fn test_bad_phone_aborts_create_without_retry() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let script = "2\nCarol White\nSTU00003\ncarol@example.com\n12ab\n1\n0\n";

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Phone number must be 10-11 digits.",
        ))
        .stdout(predicate::str::contains("No students found."))
        .stdout(predicate::str::contains("Student created successfully.").not());
}

#[test]
fn test_invalid_email_format_reprompts() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let script = "2\nAlice Smith\nSTU00001\nnot-an-email\nalice@example.com\n\n1\n0\n";

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid email format."))
        .stdout(predicate::str::contains("Student created successfully."));
}

#[test]
fn test_unknown_school_reprompts_on_create() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let script = "2\nAlice Smith\nSTU00001\nalice@example.com\n\n99\n1\n0\n";

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("School does not exist."))
        .stdout(predicate::str::contains("Student created successfully."));
}

#[test]
fn test_update_with_blanks_keeps_current_values() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    // Blank name, email, and school; only the phone changes.
    let script = format!(
        "{}3\n1\n\n\n07000000000\n\n1\nq\n0\n",
        create_script("Alice Smith", "STU00001", "alice@example.com", "07123456789")
    );

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Leave blank to keep current value."))
        .stdout(predicate::str::contains("Student updated successfully."))
        .stdout(predicate::str::contains(
            "1. Alice Smith | STU00001 | alice@example.com | 07000000000 | School: Greenwich High School",
        ));
}

#[test]
fn test_update_failure_aborts_without_changes() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    // A valid new name followed by an unknown school: the whole update is
    // abandoned, the name included.
    let script = format!(
        "{}3\n1\nNew Name\n\n\n99\n1\nq\n0\n",
        create_script("Alice Smith", "STU00001", "alice@example.com", "")
    );

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: School does not exist."))
        .stdout(predicate::str::contains("Student updated successfully.").not())
        .stdout(predicate::str::contains("1. Alice Smith | STU00001"))
        .stdout(predicate::str::contains("New Name").not());
}

#[test]
fn test_update_rejects_bad_and_unknown_ids() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    roster_cmd(&db_path)
        .write_stdin("3\nabc\n3\n99\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid ID."))
        .stdout(predicate::str::contains("Student not found."));
}

#[test]
fn test_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    // Decline with "n" (record survives), then confirm with "y".
    let script = format!(
        "{}4\n1\nn\n1\nq\n4\n1\ny\n1\n0\n",
        create_script("Alice Smith", "STU00001", "alice@example.com", "")
    );

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Are you sure you want to delete Alice Smith? (y/n):",
        ))
        .stdout(predicate::str::contains("1. Alice Smith | STU00001"))
        .stdout(predicate::str::contains("Student deleted successfully."))
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn test_listing_paginates_past_ten_students() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let mut script = String::new();
    for n in 1..=11 {
        script.push_str(&create_script(
            &format!("Student {n:02}"),
            &format!("STU{n:05}"),
            &format!("student{n}@example.com"),
            "",
        ));
    }
    script.push_str("1\nn\nq\n0\n");

    roster_cmd(&db_path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Students (Page 1) ---"))
        .stdout(predicate::str::contains("--- Students (Page 2) ---"))
        .stdout(predicate::str::contains("11. Student 11 | STU00011"));
}
