//! Core library for the roster student-records application.
//!
//! This crate provides the domain logic for managing students and their
//! schools: the SQLite persistence context, data models, field validation,
//! and error handling. The companion `roster-cli` crate drives it from an
//! interactive terminal menu.
//!
//! # Architecture
//!
//! - **Domain models** ([`models`]): plain data records for schools and
//!   students
//! - **Persistence** ([`db`]): the SQLite context with schema creation on
//!   first use and the one-time school seeder
//! - **Validation** ([`validate`]): field rules shared by every write path
//! - **Display wrappers** ([`display`]): contextual formatting for listing
//!   pages and the school chooser
//! - **Facade** ([`roster`]): the [`Roster`] capability threaded through the
//!   console, combining validation, uniqueness checks, and storage
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use roster_core::{params::NewStudent, RosterBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open (or create) the database and seed the schools on first run
//! let mut roster = RosterBuilder::new()
//!     .with_database_path(Some("roster.db"))
//!     .build()?;
//!
//! let student = roster.create_student(&NewStudent {
//!     full_name: "Alice Smith".to_string(),
//!     student_code: "STU00001".to_string(),
//!     email: "alice@example.com".to_string(),
//!     phone: "07123456789".to_string(),
//!     school_id: 1,
//! })?;
//! println!("Created student {}", student.id);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod roster;
pub mod validate;

// Re-export commonly used types
pub use db::Database;
pub use display::{Schools, StudentPage, StudentRow};
pub use error::{Result, RosterError};
pub use models::{School, Student};
pub use params::{Id, ListStudents, NewStudent, UpdateStudent, PAGE_SIZE};
pub use roster::{Roster, RosterBuilder};
