// ABOUTME: Output formatting helpers for macro-tracker
// ABOUTME: Renders users, goals, inventories, records, and progress bars as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use macro_tracker::models::{
    ArchivedRecord, DailyRecord, Goal, GoalTargets, InventoryItem, MeasureUnit, User,
};
use macro_tracker::nutrition::{Macro, MacroProgress, ProgressReport};

const BAR_WIDTH: usize = 24;

/// Display the logged-in user
pub fn display_user(user: &User) {
    println!("User: {} <{}>", user.username, user.email);
    println!("   Id: {}", user.id);
    println!(
        "   Selected goal: {}",
        user.selected_goal_id.as_deref().unwrap_or("none")
    );
}

/// Display goals, marking the selected one
pub fn display_goals(goals: &[Goal], selected_id: Option<&str>) {
    if goals.is_empty() {
        println!("No goals yet. Create one with `macro-tracker goals create`.");
        return;
    }
    println!("Goals:");
    println!("{}", "-".repeat(60));
    for goal in goals {
        display_goal(goal, selected_id == Some(goal.id.as_str()));
    }
}

/// Display one goal
pub fn display_goal(goal: &Goal, selected: bool) {
    let marker = if selected { "*" } else { " " };
    println!("{marker} {} ({})", goal.name, goal.id);
    println!("     {}", format_targets(&goal.targets));
}

fn format_targets(targets: &GoalTargets) -> String {
    let parts: Vec<String> = [
        (Macro::Calories, targets.calorie_goal),
        (Macro::Protein, targets.protein_goal),
        (Macro::Carbs, targets.carb_goal),
        (Macro::Fat, targets.fat_goal),
    ]
    .into_iter()
    .filter(|(_, target)| *target > 0)
    .map(|(which, target)| format!("{which} {target} {}", which.unit()))
    .collect();

    if parts.is_empty() {
        "no targets".into()
    } else {
        parts.join(", ")
    }
}

/// Display an inventory
pub fn display_inventory<U: MeasureUnit>(title: &str, items: &[InventoryItem<U>]) {
    if items.is_empty() {
        println!("{title}: none");
        return;
    }
    println!("{title}:");
    println!("{}", "-".repeat(60));
    for item in items {
        display_item(item);
    }
}

/// Display one inventory item
pub fn display_item<U: MeasureUnit>(item: &InventoryItem<U>) {
    println!("{} ({})", item.name, item.id);
    println!(
        "   per {}: {}",
        item.quantity,
        format_macros(item.calories, item.protein, item.carbs, item.fat)
    );
}

fn format_macros(calories: u32, protein: u32, carbs: Option<u32>, fat: Option<u32>) -> String {
    let mut text = format!("{calories} kcal, {protein} g protein");
    if let Some(carbs) = carbs {
        text.push_str(&format!(", {carbs} g carbs"));
    }
    if let Some(fat) = fat {
        text.push_str(&format!(", {fat} g fat"));
    }
    text
}

/// Display a day's entries and totals
///
/// Macros the goal does not track are left out of the total line.
pub fn display_record(record: &DailyRecord, targets: Option<&GoalTargets>) {
    println!("\nDay {} ({})", record.date, record.id);
    println!("{}", "=".repeat(60));

    if record.entry_count() == 0 {
        println!("   Nothing logged yet");
    }
    for entry in &record.food_entries {
        println!(
            "   [food {}] {} {}: {}",
            entry.id,
            entry.name.as_deref().unwrap_or(&entry.item_id),
            entry.quantity,
            format_macros(entry.calories, entry.protein, entry.carbs, entry.fat)
        );
    }
    for entry in &record.drink_entries {
        println!(
            "   [drink {}] {} {}: {}",
            entry.id,
            entry.name.as_deref().unwrap_or(&entry.item_id),
            entry.quantity,
            format_macros(entry.calories, entry.protein, entry.carbs, entry.fat)
        );
    }
    for entry in &record.manual_entries {
        println!(
            "   [manual {}] {}: {}",
            entry.id,
            entry.name.as_deref().unwrap_or("manual entry"),
            format_macros(entry.calories, entry.protein, entry.carbs, entry.fat)
        );
    }

    println!("{}", "-".repeat(60));
    println!("   Total: {}", format_total(record, targets));
}

fn format_total(record: &DailyRecord, targets: Option<&GoalTargets>) -> String {
    let carbs_tracked = !matches!(targets, Some(t) if t.carb_goal == 0);
    let fat_tracked = !matches!(targets, Some(t) if t.fat_goal == 0);
    format_macros(
        record.calories,
        record.protein,
        record.carbs.filter(|_| carbs_tracked),
        record.fat.filter(|_| fat_tracked),
    )
}

/// Display progress bars for every tracked macro
pub fn display_progress(report: &ProgressReport, goal: Option<&Goal>) {
    let Some(breakdown) = report.breakdown() else {
        println!("\nNo goal selected. Pick one with `macro-tracker goals select`.");
        return;
    };

    if let Some(goal) = goal {
        println!("\nProgress towards {}:", goal.name);
    } else {
        println!("\nProgress:");
    }
    for (which, progress) in breakdown.tracked() {
        if let MacroProgress::Tracked {
            current, target, ..
        } = progress
        {
            println!(
                "   {:<9} {} {current}/{target} {}",
                which.to_string(),
                progress_bar(progress.ratio().unwrap_or(0.0)),
                which.unit()
            );
        }
    }
}

/// Display an archived day with the goal it was logged against
pub fn display_archived(archived: &ArchivedRecord) {
    let goal = archived.record.goal.as_ref();
    display_record(&archived.record, goal.map(|g| &g.targets));
    if let Some(completed_at) = archived.completed_at {
        println!("   Completed: {}", completed_at.format("%Y-%m-%d %H:%M UTC"));
    }
    if let Some(goal) = goal {
        println!(
            "   Goal: {} ({})",
            goal.name.as_deref().unwrap_or("unnamed"),
            format_targets(&goal.targets)
        );
    }
}

/// Display a one-line summary per archived day
pub fn display_archive_list(records: &[ArchivedRecord]) {
    if records.is_empty() {
        println!("No archived days");
        return;
    }
    for archived in records {
        let record = &archived.record;
        println!(
            "{}  {:>5} kcal  {:>4} g protein  {:>3} entries  ({})",
            record.date,
            record.calories,
            record.protein,
            record.entry_count(),
            record.id
        );
    }
}

/// Fixed-width bar for a ratio in `[0, 1]`
fn progress_bar(ratio: f64) -> String {
    let clamped = ratio.clamp(0.0, 1.0);
    let filled = (clamped * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        clamped * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]   0%", ".".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(1.0), format!("[{}] 100%", "#".repeat(BAR_WIDTH)));
        assert!(progress_bar(0.5).contains(&"#".repeat(BAR_WIDTH / 2)));
    }

    fn day_totals() -> DailyRecord {
        serde_json::from_value(serde_json::json!({
            "id": "r1",
            "userId": "u1",
            "date": "2024-03-02",
            "calories": 1200,
            "protein": 90,
            "carbs": 140,
            "fat": 35
        }))
        .unwrap()
    }

    #[test]
    fn test_total_hides_macros_the_goal_does_not_track() {
        let targets = GoalTargets {
            calorie_goal: 2000,
            protein_goal: 150,
            carb_goal: 0,
            fat_goal: 60,
        };
        let text = format_total(&day_totals(), Some(&targets));
        assert_eq!(text, "1200 kcal, 90 g protein, 35 g fat");

        let without_goal = format_total(&day_totals(), None);
        assert_eq!(without_goal, "1200 kcal, 90 g protein, 140 g carbs, 35 g fat");
    }

    #[test]
    fn test_untracked_targets_are_hidden() {
        let targets = GoalTargets {
            calorie_goal: 2000,
            protein_goal: 150,
            carb_goal: 0,
            fat_goal: 60,
        };
        let text = format_targets(&targets);
        assert!(text.contains("2000"));
        assert!(text.contains("Fat 60 g"));
        assert!(!text.contains("Carbs"));
    }
}
