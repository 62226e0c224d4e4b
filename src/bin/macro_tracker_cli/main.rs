// ABOUTME: macro-tracker CLI - command-line front end for the MacroTracker backend
// ABOUTME: Handles accounts, goals, inventories, the current day, and archived history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors
//!
//! Usage:
//! ```bash
//! # Log in; the token is stored in the credentials file
//! macro-tracker auth login --username ada --password 'correct horse'
//!
//! # Create and select a goal
//! macro-tracker goals create --name Cut --calories 2000 --protein 150 --fat 60
//! macro-tracker goals select <goal-id>
//!
//! # Log two servings of a food, or an absolute amount of a drink
//! macro-tracker day add-food <food-id> --servings 2
//! macro-tracker day add-drink <drink-id> --amount 1 --unit c
//!
//! # Show today with progress bars, then archive it
//! macro-tracker day show
//! macro-tracker day complete
//!
//! # Look up an archived day
//! macro-tracker history show --date 2024-03-02
//! ```

mod commands;
mod helpers;

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use macro_tracker::client::ApiClient;
use macro_tracker::config::ClientConfig;
use macro_tracker::credentials::FileCredentialStore;
use macro_tracker::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "macro-tracker",
    version,
    about = "MacroTracker nutrition log",
    long_about = "Log foods, drinks and freeform macros against calorie and macro goals, and browse archived days."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend URL override (defaults to MACRO_TRACKER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Account commands
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },

    /// Goal management
    Goals {
        #[command(subcommand)]
        action: GoalCommand,
    },

    /// Food inventory
    Foods {
        #[command(subcommand)]
        action: InventoryCommand,
    },

    /// Drink inventory
    Drinks {
        #[command(subcommand)]
        action: InventoryCommand,
    },

    /// The current day
    Day {
        #[command(subcommand)]
        action: DayCommand,
    },

    /// Archived days
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum AuthCommand {
    /// Create an account and log in
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Log in with username or email
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored token
    Logout,

    /// Show the logged-in user
    Whoami,
}

/// Goal targets; 0 leaves a macro untracked
#[derive(Args)]
struct TargetArgs {
    /// Calorie target (kcal)
    #[arg(long)]
    calories: Option<u32>,
    /// Protein target (g)
    #[arg(long)]
    protein: Option<u32>,
    /// Carbohydrate target (g)
    #[arg(long)]
    carbs: Option<u32>,
    /// Fat target (g)
    #[arg(long)]
    fat: Option<u32>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum GoalCommand {
    /// List goals, marking the selected one
    List,

    /// Create a goal
    Create {
        #[arg(long)]
        name: String,
        #[command(flatten)]
        targets: TargetArgs,
    },

    /// Change a goal
    Update {
        goal_id: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        targets: TargetArgs,
    },

    /// Delete a goal
    Delete { goal_id: String },

    /// Select a goal for progress tracking
    Select {
        /// Goal to select
        goal_id: Option<String>,
        /// Clear the selection instead
        #[arg(long, conflicts_with = "goal_id")]
        clear: bool,
    },
}

/// Macros of an inventory item or manual entry
#[derive(Args)]
struct MacroArgs {
    /// Calories (kcal)
    #[arg(long)]
    calories: Option<u32>,
    /// Protein (g)
    #[arg(long)]
    protein: Option<u32>,
    /// Carbohydrates (g)
    #[arg(long)]
    carbs: Option<u32>,
    /// Fat (g)
    #[arg(long)]
    fat: Option<u32>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum InventoryCommand {
    /// List the inventory
    List,

    /// Add an item; macros refer to the given amount
    Add {
        #[arg(long)]
        name: String,
        /// Reference amount
        #[arg(long)]
        amount: f64,
        /// Unit of the amount (g, kg, oz, mg for foods; mL, L, c, oz for drinks)
        #[arg(long)]
        unit: String,
        #[command(flatten)]
        macros: MacroArgs,
    },

    /// Change an item
    Update {
        item_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, requires = "unit")]
        amount: Option<f64>,
        #[arg(long, requires = "amount")]
        unit: Option<String>,
        #[command(flatten)]
        macros: MacroArgs,
        /// Stop tracking carbs for this item
        #[arg(long, conflicts_with = "carbs")]
        clear_carbs: bool,
        /// Stop tracking fat for this item
        #[arg(long, conflicts_with = "fat")]
        clear_fat: bool,
    },

    /// Remove an item
    Delete { item_id: String },
}

/// How much of an item was consumed
#[derive(Args)]
struct PortionArgs {
    /// Multiplier of the item's reference amount
    #[arg(long, conflicts_with_all = ["amount", "unit"])]
    servings: Option<f64>,
    /// Absolute amount consumed
    #[arg(long, requires = "unit")]
    amount: Option<f64>,
    /// Unit of the amount; any unit of the item's kind
    #[arg(long, requires = "amount")]
    unit: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum DayCommand {
    /// Show today's entries and progress
    Show,

    /// Log a food by id or name
    AddFood {
        food: String,
        #[command(flatten)]
        portion: PortionArgs,
    },

    /// Log a drink by id or name
    AddDrink {
        drink: String,
        #[command(flatten)]
        portion: PortionArgs,
    },

    /// Log freeform macros
    AddManual {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        calories: u32,
        #[arg(long)]
        protein: u32,
        #[arg(long)]
        carbs: Option<u32>,
        #[arg(long)]
        fat: Option<u32>,
    },

    /// Remove an entry
    Remove {
        /// food, drink or manual
        kind: String,
        entry_id: String,
    },

    /// Archive today and start a new day
    Complete,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum HistoryCommand {
    /// List archived days
    List,

    /// Show one archived day
    Show {
        /// Record id
        #[arg(required_unless_present = "date")]
        record_id: Option<String>,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "record_id")]
        date: Option<NaiveDate>,
    },

    /// Delete an archived day
    Delete { record_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init().context("Failed to initialize logging")?;

    let mut config = ClientConfig::from_env().context("Invalid configuration")?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_api_url(api_url).context("Invalid --api-url")?;
    }
    debug!(config = %config.summary(), "Configuration loaded");

    let store = Arc::new(FileCredentialStore::new(&config.credentials_path));
    let client = ApiClient::new(&config, store).context("Failed to create API client")?;

    match cli.command {
        Command::Auth { action } => commands::auth::run(&client, action).await,
        Command::Goals { action } => commands::goals::run(&client, action).await,
        Command::Foods { action } => commands::inventory::run_foods(&client, action).await,
        Command::Drinks { action } => commands::inventory::run_drinks(&client, action).await,
        Command::Day { action } => commands::day::run(client, action).await,
        Command::History { action } => commands::history::run(&client, action).await,
    }
}
