//! Command-line argument definitions using clap
//!
//! Each command has a clap `Args` struct that converts into the matching
//! interface-neutral parameter type from `daycount_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! Validation of titles, dates and categories stays in the core so the CLI
//! and the MCP server reject exactly the same input.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use daycount_core::{dates::Locale, params::*};
use jiff::civil::Date;

/// Count down to the days that matter
///
/// `dday` keeps a list of target dates (anniversaries, exams, trips,
/// birthdays) and shows how many days remain until each one, or how many
/// have passed since. Without a command it prints the dashboard: the
/// nearest upcoming D-Day followed by every entry.
#[derive(Parser)]
#[command(version, about, name = "dday")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/daycount/daycount.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Count from this date instead of the system date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_today)]
    pub today: Option<Date>,

    /// Language for dates and category names
    #[arg(long, global = true, value_enum, default_value_t = LocaleArg::Ko)]
    pub locale: LocaleArg,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

fn parse_today(value: &str) -> Result<Date, String> {
    daycount_core::dates::parse_local_date(value).map_err(|e| e.to_string())
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new D-Day
    #[command(alias = "a")]
    Add(AddArgs),
    /// List D-Days
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show a D-Day with its milestone timeline
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Show only the milestone timeline of a D-Day
    #[command(alias = "m")]
    Milestones(ShowArgs),
    /// Edit a D-Day
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Delete a D-Day permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// Delete every D-Day
    Clear(ClearArgs),
    /// Export every D-Day as JSON
    Export(ExportArgs),
    /// Replace every D-Day with the contents of a JSON export
    Import(ImportArgs),
    /// List categories with their emoji
    Categories,
    /// Start the MCP server
    Serve,
}

/// Display language accepted by `--locale`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    /// Korean
    Ko,
    /// English
    En,
}

impl From<LocaleArg> for Locale {
    fn from(val: LocaleArg) -> Self {
        match val {
            LocaleArg::Ko => Locale::Ko,
            LocaleArg::En => Locale::En,
        }
    }
}

/// Category names accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Anniversary,
    Exam,
    Travel,
    Birthday,
    Custom,
}

impl std::fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryArg::Anniversary => write!(f, "anniversary"),
            CategoryArg::Exam => write!(f, "exam"),
            CategoryArg::Travel => write!(f, "travel"),
            CategoryArg::Birthday => write!(f, "birthday"),
            CategoryArg::Custom => write!(f, "custom"),
        }
    }
}

/// Sort orders accepted by `list --sort`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Closest to today first, past or future
    Nearest,
    /// Furthest from today first
    Farthest,
    /// Alphabetical by title
    Name,
    /// Most recently added first
    Created,
}

impl std::fmt::Display for SortArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortArg::Nearest => write!(f, "nearest"),
            SortArg::Farthest => write!(f, "farthest"),
            SortArg::Name => write!(f, "name"),
            SortArg::Created => write!(f, "created"),
        }
    }
}

/// Add a new D-Day
#[derive(ClapArgs)]
pub struct AddArgs {
    /// Title of the D-Day (1 to 30 characters)
    pub title: String,
    /// Target date in YYYY-MM-DD form
    pub date: String,
    #[arg(short, long, value_enum, default_value_t = CategoryArg::Custom)]
    pub category: CategoryArg,
    /// Emoji to show next to the title. Defaults to the category emoji
    #[arg(short, long)]
    pub emoji: Option<String>,
}

impl From<AddArgs> for CreateDDay {
    fn from(val: AddArgs) -> Self {
        CreateDDay {
            title: val.title,
            target_date: val.date,
            category: val.category.to_string(),
            emoji: val.emoji,
        }
    }
}

/// List D-Days, optionally narrowed to one category
#[derive(ClapArgs)]
pub struct ListArgs {
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryArg>,
    #[arg(short, long, value_enum, default_value_t = SortArg::Nearest)]
    pub sort: SortArg,
}

impl From<ListArgs> for ListDDays {
    fn from(val: ListArgs) -> Self {
        ListDDays {
            category: val.category.map(|c| c.to_string()),
            sort: Some(val.sort.to_string()),
        }
    }
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    #[arg(help = "ID of the D-Day to show")]
    pub id: String,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit a D-Day
///
/// Only the given fields change. Passing an empty `--emoji ""` resets the
/// emoji to the category default.
#[derive(ClapArgs)]
pub struct EditArgs {
    #[arg(help = "ID of the D-Day to edit")]
    pub id: String,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New target date in YYYY-MM-DD form")]
    pub date: Option<String>,
    #[arg(short, long, value_enum, help = "New category")]
    pub category: Option<CategoryArg>,
    #[arg(short, long, help = "New emoji")]
    pub emoji: Option<String>,
}

impl From<EditArgs> for UpdateDDay {
    fn from(val: EditArgs) -> Self {
        UpdateDDay {
            id: val.id,
            title: val.title,
            target_date: val.date,
            category: val.category.map(|c| c.to_string()),
            emoji: val.emoji,
        }
    }
}

#[derive(ClapArgs)]
pub struct DeleteArgs {
    #[arg(help = "ID of the D-Day to delete")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteArgs> for DeleteDDay {
    fn from(val: DeleteArgs) -> Self {
        DeleteDDay {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(ClapArgs)]
pub struct ClearArgs {
    /// Confirm deleting every D-Day
    #[arg(long)]
    pub confirm: bool,
}

impl From<ClearArgs> for DeleteAll {
    fn from(val: ClearArgs) -> Self {
        DeleteAll {
            confirmed: val.confirm,
        }
    }
}

#[derive(ClapArgs)]
pub struct ExportArgs {
    /// Write the export to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs)]
pub struct ImportArgs {
    /// JSON file produced by `dday export`
    pub file: PathBuf,
}
