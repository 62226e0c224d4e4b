// ABOUTME: Current-day commands for macro-tracker: show, add entries, remove, complete
// ABOUTME: Runs through the day tracker so progress reflects the backend's canonical record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use anyhow::{bail, Context, Result};
use macro_tracker::client::ApiClient;
use macro_tracker::models::{EntryKind, InventoryItem, MeasureUnit, NewManualEntry};
use macro_tracker::nutrition::PortionInput;
use macro_tracker::tracker::DayTracker;

use super::inventory::parse_quantity;
use crate::helpers::display::{display_archived, display_progress, display_record};
use crate::{DayCommand, PortionArgs};

/// Run a `day` subcommand
pub async fn run(client: ApiClient, action: DayCommand) -> Result<()> {
    let tracker = DayTracker::new(client);
    tracker.refresh().await.context("Failed to load the current day")?;

    match action {
        DayCommand::Show => {}
        DayCommand::AddFood { food, portion } => {
            let foods = tracker.client().list_foods().await?;
            let food = find_item(&foods, &food, "food")?;
            tracker.add_food(food, portion_input(&portion)?).await?;
            println!("Logged {}", food.name);
        }
        DayCommand::AddDrink { drink, portion } => {
            let drinks = tracker.client().list_drinks().await?;
            let drink = find_item(&drinks, &drink, "drink")?;
            tracker.add_drink(drink, portion_input(&portion)?).await?;
            println!("Logged {}", drink.name);
        }
        DayCommand::AddManual {
            name,
            calories,
            protein,
            carbs,
            fat,
        } => {
            tracker
                .add_manual(&NewManualEntry {
                    name,
                    calories,
                    protein,
                    carbs,
                    fat,
                })
                .await?;
            println!("Logged manual entry");
        }
        DayCommand::Remove { kind, entry_id } => {
            let kind: EntryKind = kind.parse()?;
            tracker.remove_entry(kind, &entry_id).await?;
            println!("Removed {kind} entry {entry_id}");
        }
        DayCommand::Complete => {
            let archived = tracker.complete_day().await?;
            println!("Day archived");
            display_archived(&archived);
            return Ok(());
        }
    }

    let goal = tracker.selected_goal().await;
    if let Some(record) = tracker.current_record().await {
        display_record(&record, goal.as_ref().map(|g| &g.targets));
    }
    display_progress(&tracker.progress().await, goal.as_ref());
    Ok(())
}

fn portion_input<U: MeasureUnit>(args: &PortionArgs) -> Result<PortionInput<U>>
where
    U::Err: std::error::Error + Send + Sync + 'static,
{
    match (args.servings, args.amount, args.unit.as_deref()) {
        (Some(servings), None, None) => Ok(PortionInput::Servings(servings)),
        (None, Some(amount), Some(unit)) => Ok(PortionInput::Quantity(parse_quantity(amount, unit)?)),
        (None, None, None) => Ok(PortionInput::Servings(1.0)),
        _ => bail!("Pass either --servings or --amount with --unit"),
    }
}

/// Find an item by exact id, then by case-insensitive name
fn find_item<'a, U>(items: &'a [InventoryItem<U>], key: &str, kind: &str) -> Result<&'a InventoryItem<U>> {
    items
        .iter()
        .find(|item| item.id == key)
        .or_else(|| items.iter().find(|item| item.name.eq_ignore_ascii_case(key)))
        .with_context(|| format!("No {kind} with id or name '{key}'"))
}
