// ABOUTME: Goal commands for macro-tracker: list, create, update, delete, select
// ABOUTME: Targets left at zero keep the macro untracked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use anyhow::{bail, Result};
use macro_tracker::client::ApiClient;
use macro_tracker::models::{GoalTargets, GoalUpdate, NewGoal};

use crate::helpers::display::{display_goal, display_goals};
use crate::{GoalCommand, TargetArgs};

/// Run a `goals` subcommand
pub async fn run(client: &ApiClient, action: GoalCommand) -> Result<()> {
    match action {
        GoalCommand::List => {
            let goals = client.list_goals().await?;
            let selected = client.current_user().await?.selected_goal_id;
            display_goals(&goals, selected.as_deref());
        }
        GoalCommand::Create { name, targets } => {
            let goal = client
                .create_goal(&NewGoal {
                    name,
                    targets: GoalTargets {
                        calorie_goal: targets.calories.unwrap_or(0),
                        protein_goal: targets.protein.unwrap_or(0),
                        carb_goal: targets.carbs.unwrap_or(0),
                        fat_goal: targets.fat.unwrap_or(0),
                    },
                })
                .await?;
            println!("Goal created");
            display_goal(&goal, false);
        }
        GoalCommand::Update {
            goal_id,
            name,
            targets,
        } => {
            let update = goal_update(name, targets);
            if update.is_empty() {
                bail!("Nothing to update, pass at least one of --name/--calories/--protein/--carbs/--fat");
            }
            let goal = client.update_goal(&goal_id, update).await?;
            println!("Goal updated");
            display_goal(&goal, false);
        }
        GoalCommand::Delete { goal_id } => {
            client.delete_goal(&goal_id).await?;
            println!("Goal {goal_id} deleted");
        }
        GoalCommand::Select { goal_id, clear } => {
            if clear {
                client.select_goal(None).await?;
                println!("Goal selection cleared");
            } else if let Some(goal_id) = goal_id {
                let goal = client.get_goal(&goal_id).await?;
                client.select_goal(Some(&goal.id)).await?;
                println!("Selected goal {}", goal.name);
            } else {
                bail!("Pass a goal id or --clear");
            }
        }
    }
    Ok(())
}

fn goal_update(name: Option<String>, targets: TargetArgs) -> GoalUpdate {
    GoalUpdate {
        name,
        calorie_goal: targets.calories,
        protein_goal: targets.protein,
        carb_goal: targets.carbs,
        fat_goal: targets.fat,
    }
}
