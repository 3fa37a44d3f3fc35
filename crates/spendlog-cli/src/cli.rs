//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Spendlog - Track where your money goes
#[derive(Parser)]
#[command(name = "spendlog")]
#[command(about = "Personal expense ledger with category analytics and CSV export")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ledger snapshot file (JSON)
    #[arg(long, default_value = "spendlog.json", global = true)]
    pub ledger: PathBuf,

    /// Config file (defaults to ~/.local/share/spendlog/config/ledger.toml,
    /// then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print views as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new ledger file
    Init {
        /// Seed the ledger with sample expenses
        #[arg(long)]
        sample: bool,

        /// Overwrite an existing ledger file
        #[arg(long)]
        force: bool,
    },

    /// Add an expense
    Add {
        /// Amount (e.g. 450.50)
        #[arg(short, long)]
        amount: String,

        /// What the money was spent on
        #[arg(short, long)]
        description: String,

        /// Category name (defaults to the first category)
        #[arg(short, long)]
        category: Option<String>,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Edit an expense (unspecified fields keep their current value)
    Edit {
        /// Expense ID
        id: u64,

        #[arg(short, long)]
        amount: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: u64,
    },

    /// List expenses, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the most recently added expenses
    Recent {
        /// Number of expenses to show
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Manage categories (list, add, remove)
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Show dashboard summary
    Dashboard,

    /// Generate spending reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },

    /// Export filtered expenses to CSV
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Directory to write the file into
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Write the CSV to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List categories
    List,

    /// Add a category
    Add {
        /// Category name (case sensitive)
        name: String,
    },

    /// Remove a category; its expenses move to the fallback category
    Remove {
        /// Category name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Per-category totals, counts and share of spending
    Categories,

    /// Largest expenses
    Top {
        /// Number of expenses (defaults to reports.top_n from config)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Daily, weekly and monthly spending rates
    Averages,

    /// Years that have expenses
    Years,
}

/// Month/year/category filter shared by `list` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Month, 1-12
    #[arg(long, value_parser = parse_month)]
    pub month: Option<String>,

    /// Four-digit year
    #[arg(long, value_parser = parse_year)]
    pub year: Option<String>,

    /// Exact category name
    #[arg(long)]
    pub category: Option<String>,
}

/// Normalize a month argument to the two-digit form the filter compares
pub fn parse_month(s: &str) -> Result<String, String> {
    match s.trim().parse::<u32>() {
        Ok(month @ 1..=12) => Ok(format!("{:02}", month)),
        _ => Err(format!("Invalid month: {} (use 1-12)", s)),
    }
}

pub fn parse_year(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        Ok(s.to_string())
    } else {
        Err(format!("Invalid year: {} (use four digits)", s))
    }
}
