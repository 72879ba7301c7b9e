use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the roster student records manager
///
/// Roster is a single-user, menu-driven console application for managing
/// student records and the schools they belong to. It keeps its data in a
/// local SQLite database and seeds the school reference list on first run.
/// All interaction happens through the interactive menu; the flags below only
/// configure where the data lives and how output is rendered.
#[derive(Parser)]
#[command(version, about, name = "roster")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/roster/roster.db
    #[arg(long)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
