//! Interactive menu console.
//!
//! The single top-level loop of the application: shows the menu, reads one
//! line, dispatches to an operation handler, and reports any operation
//! failure as a one-line `Error:` message before resuming. No operation
//! failure is fatal; the loop only ends on the exit option or end of input.
//!
//! Validator prompts come in two flavors with deliberately different retry
//! behavior: required create-path fields (name, student code, email, school)
//! re-prompt until the input is valid, while the phone prompt and every
//! update-path prompt raise on the first bad input and abort the operation.

use std::io::{BufRead, Write};

use log::debug;
use roster_core::{
    params::{Id, ListStudents, NewStudent, UpdateStudent},
    validate, Result, Roster, RosterError,
};

use crate::renderer::TerminalRenderer;

const MENU: &str = "\n1. List students\n2. Create student\n3. Update student\n4. Delete student\n0. Exit\n";

/// The interactive console, generic over its input source so tests can pipe
/// scripted lines through it.
pub struct Console<R: BufRead> {
    roster: Roster,
    renderer: TerminalRenderer,
    input: R,
}

impl<R: BufRead> Console<R> {
    /// Create a console over a roster, renderer, and line source.
    pub fn new(roster: Roster, renderer: TerminalRenderer, input: R) -> Self {
        Self {
            roster,
            renderer,
            input,
        }
    }

    /// Run the menu loop until the operator exits.
    pub fn run(&mut self) -> Result<()> {
        self.renderer.render("=== SCHOOL MANAGEMENT SYSTEM ===\n");

        loop {
            self.renderer.render(MENU);
            self.prompt("Choose an option: ")?;

            let Some(choice) = self.read_line()? else {
                break;
            };

            debug!("menu choice: {:?}", choice.trim());

            let outcome = match choice.trim() {
                "1" => self.list_students(),
                "2" => self.create_student(),
                "3" => self.update_student(),
                "4" => self.delete_student(),
                "0" => break,
                _ => {
                    println!("Invalid option. Please try again.");
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                println!("Error: {e}");
            }
        }

        Ok(())
    }

    // ----- operations -------------------------------------------------

    /// Paginated listing: page size 10, ID ascending, n/p/other navigation.
    fn list_students(&mut self) -> Result<()> {
        let mut page = 1u32;

        loop {
            let listing = self.roster.list_students_page(&ListStudents { page })?;

            if listing.is_empty() {
                println!("No students found.");
                return Ok(());
            }

            println!();
            self.renderer.render(&listing.to_string());
            println!("\nN: Next | P: Previous | Q: Quit");

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            // The first character of the line selects the action.
            match line.chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('n') => page += 1,
                Some('p') => page = page.saturating_sub(1).max(1),
                _ => return Ok(()),
            }
        }
    }

    fn create_student(&mut self) -> Result<()> {
        println!("\n--- Create Student ---");

        let new = NewStudent {
            full_name: self.prompt_required(
                "Full name",
                validate::FULL_NAME_MIN,
                validate::FULL_NAME_MAX,
            )?,
            student_code: self.prompt_unique_student_code()?,
            email: self.prompt_unique_email()?,
            phone: self.prompt_phone()?,
            school_id: self.prompt_school_id()?,
        };

        self.roster.create_student(&new)?;
        println!("Student created successfully.");
        Ok(())
    }

    fn update_student(&mut self) -> Result<()> {
        self.prompt("\nEnter student ID to update: ")?;
        let Some(id) = self.read_student_id()? else {
            return Ok(());
        };

        let Some(student) = self.roster.get_student(&Id { id })? else {
            println!("Student not found.");
            return Ok(());
        };

        println!("Leave blank to keep current value.");

        // Every field is gathered and validated before anything is written;
        // the first failure aborts the whole operation.
        let update = UpdateStudent {
            id,
            full_name: self.prompt_optional_name()?,
            email: self.prompt_optional_email(student.id)?,
            phone: self.prompt_optional_phone()?,
            school_id: self.prompt_optional_school_id()?,
        };

        self.roster.update_student(&update)?;
        println!("Student updated successfully.");
        Ok(())
    }

    fn delete_student(&mut self) -> Result<()> {
        self.prompt("\nEnter student ID to delete: ")?;
        let Some(id) = self.read_student_id()? else {
            return Ok(());
        };

        let Some(student) = self.roster.get_student(&Id { id })? else {
            println!("Student not found.");
            return Ok(());
        };

        self.prompt(&format!(
            "Are you sure you want to delete {}? (y/n): ",
            student.full_name
        ))?;
        let answer = self.require_line()?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }

        self.roster.delete_student(&Id { id })?;
        println!("Student deleted successfully.");
        Ok(())
    }

    // ----- validator prompts: create path (re-prompt until valid) ------

    /// Required string field: loops until non-blank and within bounds.
    fn prompt_required(&mut self, label: &str, min: usize, max: usize) -> Result<String> {
        loop {
            self.prompt(&format!("{label}: "))?;
            let input = self.require_line()?;

            if input.trim().is_empty() {
                println!("{label} is required.");
            } else if let Err(e) = validate::length_bounds(label, &input, min, max) {
                println!("{e}");
            } else {
                return Ok(input);
            }
        }
    }

    /// Student code: required, then re-queries the store until unused.
    fn prompt_unique_student_code(&mut self) -> Result<String> {
        loop {
            let value = self.prompt_required(
                "Student ID",
                validate::STUDENT_CODE_MIN,
                validate::STUDENT_CODE_MAX,
            )?;
            if self.roster.student_code_exists(&value)? {
                println!("Student ID already exists.");
            } else {
                return Ok(value);
            }
        }
    }

    /// Email: loops until the format matches and no other student uses it.
    fn prompt_unique_email(&mut self) -> Result<String> {
        loop {
            self.prompt("Email: ")?;
            let email = self.require_line()?;

            if validate::email(&email).is_err() {
                println!("Invalid email format.");
            } else if self.roster.email_exists(&email, None)? {
                println!("Email already exists.");
            } else {
                return Ok(email);
            }
        }
    }

    /// Phone: blank normalizes to empty; bad input raises with no retry.
    fn prompt_phone(&mut self) -> Result<String> {
        self.prompt("Phone: ")?;
        let phone = self.require_line()?;

        if phone.trim().is_empty() {
            return Ok(String::new());
        }
        validate::phone(&phone)?;
        Ok(phone)
    }

    /// School chooser: shows the numbered list, loops until an existing ID.
    fn prompt_school_id(&mut self) -> Result<u64> {
        println!();
        self.renderer.render(&self.roster.list_schools()?.to_string());

        loop {
            self.prompt("Choose School ID: ")?;
            let line = self.require_line()?;

            if let Ok(id) = line.trim().parse::<u64>() {
                if self.roster.school_exists(id)? {
                    return Ok(id);
                }
            }
            println!("School does not exist.");
        }
    }

    // ----- validator prompts: update path (raise on first bad input) ---

    fn prompt_optional_name(&mut self) -> Result<Option<String>> {
        self.prompt("Full name: ")?;
        let input = self.require_line()?;

        if input.trim().is_empty() {
            return Ok(None);
        }
        validate::full_name(&input)?;
        Ok(Some(input))
    }

    fn prompt_optional_email(&mut self, student_id: u64) -> Result<Option<String>> {
        self.prompt("Email: ")?;
        let email = self.require_line()?;

        if email.trim().is_empty() {
            return Ok(None);
        }
        validate::email(&email)?;
        if self.roster.email_exists(&email, Some(student_id))? {
            return Err(RosterError::invalid_input("Email").with_reason("Email already exists."));
        }
        Ok(Some(email))
    }

    fn prompt_optional_phone(&mut self) -> Result<Option<String>> {
        self.prompt("Phone: ")?;
        let phone = self.require_line()?;

        if phone.trim().is_empty() {
            return Ok(None);
        }
        validate::phone(&phone)?;
        Ok(Some(phone))
    }

    fn prompt_optional_school_id(&mut self) -> Result<Option<u64>> {
        self.prompt("School ID: ")?;
        let line = self.require_line()?;

        if line.trim().is_empty() {
            return Ok(None);
        }
        if let Ok(id) = line.trim().parse::<u64>() {
            if self.roster.school_exists(id)? {
                return Ok(Some(id));
            }
        }
        Err(RosterError::invalid_input("School").with_reason("School does not exist."))
    }

    // ----- input plumbing ----------------------------------------------

    /// Write a prompt without a trailing newline and flush it.
    fn prompt(&mut self, text: &str) -> Result<()> {
        print!("{text}");
        std::io::stdout().flush()?;
        Ok(())
    }

    /// Read one line, stripped of its line ending. `None` means end of
    /// input, which the menu treats as exit.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    /// Read one line mid-operation; end of input aborts the operation.
    fn require_line(&mut self) -> Result<String> {
        self.read_line()?.ok_or_else(|| {
            RosterError::invalid_input("input").with_reason("Unexpected end of input.")
        })
    }

    /// Parse the student-ID line for update/delete; `None` was already
    /// reported to the operator.
    fn read_student_id(&mut self) -> Result<Option<u64>> {
        let line = self.require_line()?;
        match line.trim().parse::<u64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                println!("Invalid ID.");
                Ok(None)
            }
        }
    }
}
