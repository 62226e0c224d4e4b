// ABOUTME: Food and drink inventory commands for macro-tracker
// ABOUTME: Units are parsed per inventory so foods only accept weights and drinks volumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use anyhow::{bail, Context, Result};
use macro_tracker::client::ApiClient;
use macro_tracker::models::{ItemUpdate, MeasureUnit, NewItem, Quantity, VolumeUnit, WeightUnit};

use crate::helpers::display::{display_inventory, display_item};
use crate::{InventoryCommand, MacroArgs};

/// Run a `foods` subcommand
pub async fn run_foods(client: &ApiClient, action: InventoryCommand) -> Result<()> {
    match action {
        InventoryCommand::List => display_inventory("Foods", &client.list_foods().await?),
        InventoryCommand::Add {
            name,
            amount,
            unit,
            macros,
        } => {
            let food = client
                .create_food(&new_item::<WeightUnit>(name, amount, &unit, &macros)?)
                .await?;
            println!("Food added");
            display_item(&food);
        }
        InventoryCommand::Update {
            item_id,
            name,
            amount,
            unit,
            macros,
            clear_carbs,
            clear_fat,
        } => {
            let update =
                item_update::<WeightUnit>(name, amount, unit.as_deref(), &macros, clear_carbs, clear_fat)?;
            let food = client.update_food(&item_id, update).await?;
            println!("Food updated");
            display_item(&food);
        }
        InventoryCommand::Delete { item_id } => {
            client.delete_food(&item_id).await?;
            println!("Food {item_id} deleted");
        }
    }
    Ok(())
}

/// Run a `drinks` subcommand
pub async fn run_drinks(client: &ApiClient, action: InventoryCommand) -> Result<()> {
    match action {
        InventoryCommand::List => display_inventory("Drinks", &client.list_drinks().await?),
        InventoryCommand::Add {
            name,
            amount,
            unit,
            macros,
        } => {
            let drink = client
                .create_drink(&new_item::<VolumeUnit>(name, amount, &unit, &macros)?)
                .await?;
            println!("Drink added");
            display_item(&drink);
        }
        InventoryCommand::Update {
            item_id,
            name,
            amount,
            unit,
            macros,
            clear_carbs,
            clear_fat,
        } => {
            let update =
                item_update::<VolumeUnit>(name, amount, unit.as_deref(), &macros, clear_carbs, clear_fat)?;
            let drink = client.update_drink(&item_id, update).await?;
            println!("Drink updated");
            display_item(&drink);
        }
        InventoryCommand::Delete { item_id } => {
            client.delete_drink(&item_id).await?;
            println!("Drink {item_id} deleted");
        }
    }
    Ok(())
}

/// Parse `amount` and `unit` into a quantity of the inventory's dimension
pub fn parse_quantity<U: MeasureUnit>(amount: f64, unit: &str) -> Result<Quantity<U>>
where
    U::Err: std::error::Error + Send + Sync + 'static,
{
    let unit: U = unit.parse().with_context(|| format!("Unsupported unit '{unit}'"))?;
    Ok(Quantity::new(amount, unit))
}

fn new_item<U: MeasureUnit>(name: String, amount: f64, unit: &str, macros: &MacroArgs) -> Result<NewItem<U>>
where
    U::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(NewItem {
        name,
        quantity: parse_quantity(amount, unit)?,
        calories: macros.calories.context("--calories is required")?,
        protein: macros.protein.context("--protein is required")?,
        carbs: macros.carbs,
        fat: macros.fat,
    })
}

fn item_update<U: MeasureUnit>(
    name: Option<String>,
    amount: Option<f64>,
    unit: Option<&str>,
    macros: &MacroArgs,
    clear_carbs: bool,
    clear_fat: bool,
) -> Result<ItemUpdate<U>>
where
    U::Err: std::error::Error + Send + Sync + 'static,
{
    let quantity = match (amount, unit) {
        (Some(amount), Some(unit)) => Some(parse_quantity(amount, unit)?),
        _ => None,
    };
    let update = ItemUpdate {
        name,
        quantity,
        calories: macros.calories,
        protein: macros.protein,
        carbs: if clear_carbs { Some(None) } else { macros.carbs.map(Some) },
        fat: if clear_fat { Some(None) } else { macros.fat.map(Some) },
    };
    if update.is_empty() {
        bail!("Nothing to update");
    }
    Ok(update)
}
