//! Spendlog CLI - Personal expense ledger
//!
//! Usage:
//!   spendlog init --sample              Create a ledger with sample data
//!   spendlog add -a 450.50 -d Lunch     Record an expense
//!   spendlog report categories          Category breakdown
//!   spendlog export --year 2024         Write expenses_2024.csv

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use spendlog_core::{ExpenseId, LedgerConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = LedgerConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Init { sample, force } => commands::cmd_init(&cli.ledger, config, sample, force),
        Commands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let mut ledger = commands::open_ledger(&cli.ledger, config)?;
            commands::cmd_add(
                &mut ledger,
                &amount,
                &description,
                category.as_deref(),
                date.as_deref(),
            )?;
            commands::save_ledger(&cli.ledger, &ledger)
        }
        Commands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            let mut ledger = commands::open_ledger(&cli.ledger, config)?;
            let edits = commands::ExpenseEdits {
                amount,
                description,
                category,
                date,
            };
            commands::cmd_edit(&mut ledger, ExpenseId(id), edits)?;
            commands::save_ledger(&cli.ledger, &ledger)
        }
        Commands::Delete { id } => {
            let mut ledger = commands::open_ledger(&cli.ledger, config)?;
            commands::cmd_delete(&mut ledger, ExpenseId(id));
            commands::save_ledger(&cli.ledger, &ledger)
        }
        Commands::List { filter } => {
            let ledger = commands::open_ledger(&cli.ledger, config)?;
            commands::cmd_list(&ledger, &filter, cli.json)
        }
        Commands::Recent { limit } => {
            let ledger = commands::open_ledger(&cli.ledger, config)?;
            commands::cmd_recent(&ledger, limit, cli.json)
        }
        Commands::Categories { action } => {
            let mut ledger = commands::open_ledger(&cli.ledger, config)?;
            match action {
                None | Some(CategoriesAction::List) => {
                    commands::cmd_categories_list(&ledger, cli.json)
                }
                Some(CategoriesAction::Add { name }) => {
                    commands::cmd_categories_add(&mut ledger, &name)?;
                    commands::save_ledger(&cli.ledger, &ledger)
                }
                Some(CategoriesAction::Remove { name }) => {
                    commands::cmd_categories_remove(&mut ledger, &name)?;
                    commands::save_ledger(&cli.ledger, &ledger)
                }
            }
        }
        Commands::Dashboard => {
            let ledger = commands::open_ledger(&cli.ledger, config)?;
            commands::cmd_dashboard(&ledger, cli.json)
        }
        Commands::Report { report_type } => {
            let ledger = commands::open_ledger(&cli.ledger, config)?;
            match report_type {
                ReportType::Categories => commands::cmd_report_categories(&ledger, cli.json),
                ReportType::Top { limit } => commands::cmd_report_top(&ledger, limit, cli.json),
                ReportType::Averages => commands::cmd_report_averages(&ledger, cli.json),
                ReportType::Years => commands::cmd_report_years(&ledger, cli.json),
            }
        }
        Commands::Export {
            filter,
            dir,
            stdout,
        } => {
            let ledger = commands::open_ledger(&cli.ledger, config)?;
            let output = if stdout { None } else { Some(dir.as_path()) };
            commands::cmd_export(&ledger, &filter, output)?;
            Ok(())
        }
    }
}
