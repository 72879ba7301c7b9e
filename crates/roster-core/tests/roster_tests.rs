//! End-to-end scenarios against the Roster facade.

mod common;

use common::create_test_roster;
use roster_core::{
    params::{Id, ListStudents, NewStudent, UpdateStudent},
    PAGE_SIZE,
};

fn alice() -> NewStudent {
    NewStudent {
        full_name: "Alice Smith".to_string(),
        student_code: "STU00001".to_string(),
        email: "alice@example.com".to_string(),
        phone: "07123456789".to_string(),
        school_id: 1,
    }
}

#[test]
fn create_then_list_shows_the_full_row() {
    let (_temp_dir, mut roster) = create_test_roster();

    roster.create_student(&alice()).expect("Failed to create");

    let page = roster
        .list_students_page(&ListStudents { page: 1 })
        .expect("Failed to list");
    let rendered = page.to_string();
    assert!(rendered.contains(
        "Alice Smith | STU00001 | alice@example.com | 07123456789 | School: Greenwich High School"
    ));
}

#[test]
fn duplicate_email_is_rejected_and_collection_unchanged() {
    let (_temp_dir, mut roster) = create_test_roster();

    roster.create_student(&alice()).expect("Failed to create");

    let mut second = alice();
    second.student_code = "STU00002".to_string();
    second.full_name = "Alice Clone".to_string();
    let err = roster.create_student(&second).unwrap_err();
    assert_eq!(err.to_string(), "Email already exists.");
    assert_eq!(roster.count_students().expect("count"), 1);
}

#[test]
fn blank_update_fields_keep_current_values() {
    let (_temp_dir, mut roster) = create_test_roster();

    let student = roster.create_student(&alice()).expect("Failed to create");

    // Blank input for every field except phone translates to a patch that
    // only carries the phone.
    roster
        .update_student(&UpdateStudent {
            id: student.id,
            phone: Some("07000000000".to_string()),
            ..Default::default()
        })
        .expect("Failed to update");

    let fetched = roster
        .get_student(&Id { id: student.id })
        .expect("get")
        .expect("exists");
    assert_eq!(fetched.phone, "07000000000");
    assert_eq!(fetched.full_name, "Alice Smith");
    assert_eq!(fetched.email, "alice@example.com");
    assert_eq!(fetched.school_id, 1);
}

#[test]
fn unconfirmed_delete_never_reaches_the_store() {
    let (_temp_dir, mut roster) = create_test_roster();

    let student = roster.create_student(&alice()).expect("Failed to create");

    // The console only calls delete_student after a "y"; an unconfirmed
    // delete is simply never issued, so the record survives.
    let fetched = roster
        .get_student(&Id { id: student.id })
        .expect("get")
        .expect("exists");
    assert_eq!(fetched.id, student.id);

    roster
        .delete_student(&Id { id: student.id })
        .expect("Failed to delete");
    assert!(roster
        .get_student(&Id { id: student.id })
        .expect("get")
        .is_none());
}

#[test]
fn pages_concatenate_to_the_whole_collection() {
    let (_temp_dir, mut roster) = create_test_roster();

    let mut expected = Vec::new();
    for n in 1..=(PAGE_SIZE * 2 + 3) {
        let new = NewStudent {
            full_name: format!("Student {n}"),
            student_code: format!("STU{n:05}"),
            email: format!("student{n}@example.com"),
            phone: String::new(),
            school_id: u64::from(n % 10 + 1),
        };
        expected.push(roster.create_student(&new).expect("create").id);
    }

    let mut seen = Vec::new();
    for page in 1.. {
        let rows = roster
            .list_students_page(&ListStudents { page })
            .expect("list");
        if rows.is_empty() {
            break;
        }
        seen.extend(rows.rows.iter().map(|r| r.student.id));
    }

    assert_eq!(seen, expected);
}
