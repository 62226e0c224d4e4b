// ABOUTME: Integration tests for the day tracker against a mock backend
// ABOUTME: Verifies canonical-record adoption, failure re-sync, and progress states
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors
#![allow(clippy::unwrap_used, clippy::float_cmp)]

mod common;

use anyhow::Result;
use common::{
    anonymous_client, archived_json, empty_record_json, goal_json, logged_in_client, record_json,
    user_json,
};
use macro_tracker::errors::ErrorCode;
use macro_tracker::models::{
    Drink, EntryKind, Food, NewManualEntry, Quantity, VolumeUnit, WeightUnit,
};
use macro_tracker::nutrition::{MacroProgress, PortionInput, ProgressReport};
use macro_tracker::tracker::DayTracker;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_day(server: &MockServer, record: serde_json::Value, selected_goal: Option<&str>) {
    Mock::given(method("GET"))
        .and(path("/dailyRecords/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .up_to_n_times(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(selected_goal)))
        .mount(server)
        .await;
}

async fn mount_goal(server: &MockServer, goal: serde_json::Value) {
    let id = goal["id"].as_str().unwrap().to_owned();
    Mock::given(method("GET"))
        .and(path(format!("/goals/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(goal))
        .mount(server)
        .await;
}

fn rice() -> Food {
    Food {
        id: "f1".into(),
        name: "Rice".into(),
        quantity: Quantity::new(100.0, WeightUnit::Grams),
        calories: 200,
        protein: 7,
        carbs: Some(45),
        fat: None,
    }
}

fn milk() -> Drink {
    Drink {
        id: "d1".into(),
        name: "Milk".into(),
        quantity: Quantity::new(250.0, VolumeUnit::Milliliters),
        calories: 110,
        protein: 8,
        carbs: Some(12),
        fat: Some(3),
    }
}

#[tokio::test]
async fn test_refresh_derives_progress_against_selected_goal() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 1000, 200, 0, 30), Some("g1")).await;
    mount_goal(&server, goal_json("g1", 2000, 150, 0, 60)).await;

    let tracker = DayTracker::new(logged_in_client(&server));
    let snapshot = tracker.refresh().await?;
    assert_eq!(snapshot.revision, 1);
    assert_eq!(snapshot.goal.unwrap().id, "g1");

    let report = tracker.progress().await;
    let breakdown = report.breakdown().unwrap();
    assert_eq!(breakdown.calories.ratio(), Some(0.5));
    assert_eq!(breakdown.protein.ratio(), Some(1.0));
    assert_eq!(breakdown.carbs, MacroProgress::Untracked);
    assert_eq!(breakdown.fat.ratio(), Some(0.5));
    assert_eq!(breakdown.tracked().count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_no_selected_goal_is_distinct_state() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 0, 0, 0, 0), None).await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;

    assert_eq!(tracker.progress().await, ProgressReport::NoGoal);
    assert!(tracker.selected_goal().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_deleted_selected_goal_counts_as_no_goal() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 500, 20, 0, 0), Some("gone")).await;

    Mock::given(method("GET"))
        .and(path("/goals/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Goal not found"})))
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;
    assert_eq!(tracker.progress().await, ProgressReport::NoGoal);
    Ok(())
}

#[tokio::test]
async fn test_add_food_posts_scaled_snapshot_and_adopts_server_record() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 0, 0, 0, 0), None).await;

    Mock::given(method("POST"))
        .and(path("/dailyRecords/current/foodEntries"))
        .and(body_partial_json(json!({
            "itemId": "f1",
            "name": "Rice",
            "servings": 2.0,
            "quantity": {"value": 200.0, "unit": "g"},
            "calories": 400,
            "protein": 14,
            "carbs": 90
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(record_json("r1", 410, 15, 90, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;

    let record = tracker.add_food(&rice(), PortionInput::Servings(2.0)).await?;
    assert_eq!(record.calories, 410);
    assert_eq!(tracker.current_record().await.unwrap().calories, 410);
    assert_eq!(tracker.revision().await, 2);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests.last().unwrap().body_json()?;
    assert!(body.get("fat").is_none());
    Ok(())
}

#[tokio::test]
async fn test_quantity_portion_derives_servings() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 0, 0, 0, 0), None).await;

    Mock::given(method("POST"))
        .and(path("/dailyRecords/current/foodEntries"))
        .and(body_partial_json(json!({
            "servings": 2.5,
            "quantity": {"value": 0.25, "unit": "kg"},
            "calories": 500,
            "protein": 17
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(record_json("r1", 500, 17, 112, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;
    tracker
        .add_food(
            &rice(),
            PortionInput::Quantity(Quantity::new(0.25, WeightUnit::Kilograms)),
        )
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_invalid_portion_is_rejected_before_request() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 0, 0, 0, 0), None).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;

    let error = tracker
        .add_food(&rice(), PortionInput::Servings(0.0))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(tracker.revision().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_failed_mutation_resyncs_current_record() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 100, 10, 0, 0), None).await;

    Mock::given(method("POST"))
        .and(path("/dailyRecords/current/manualEntries"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "write timed out"})))
        .expect(1)
        .mount(&server)
        .await;

    // The write went through on the backend even though the response failed
    Mock::given(method("GET"))
        .and(path("/dailyRecords/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json("r1", 350, 30, 0, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;

    let entry = NewManualEntry {
        name: Some("Snack".into()),
        calories: 250,
        protein: 20,
        carbs: None,
        fat: None,
    };
    let error = tracker.add_manual(&entry).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(error.message, "write timed out");

    assert_eq!(tracker.current_record().await.unwrap().calories, 350);
    assert_eq!(tracker.revision().await, 2);
    Ok(())
}

#[tokio::test]
async fn test_failed_resync_keeps_last_known_record() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 100, 10, 0, 0), None).await;

    Mock::given(method("DELETE"))
        .and(path("/dailyRecords/current/manualEntries/m9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Entry not found"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dailyRecords/current"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;

    let error = tracker
        .remove_entry("manual".parse()?, "m9")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    let record = tracker.current_record().await.unwrap();
    assert_eq!(record.calories, 100);
    assert_eq!(tracker.revision().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_complete_day_loads_new_day() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 1800, 120, 200, 60), None).await;

    Mock::given(method("POST"))
        .and(path("/dailyRecords/current/complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(archived_json("r1", "2024-03-02")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dailyRecords/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_record_json("r2", "2024-03-03")))
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;

    let archived = tracker.complete_day().await?;
    assert_eq!(archived.id(), "r1");

    let current = tracker.current_record().await.unwrap();
    assert_eq!(current.id, "r2");
    assert_eq!(current.entry_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_select_goal_updates_progress() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 500, 50, 0, 0), None).await;

    Mock::given(method("PATCH"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(Some("g1"))))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;
    assert_eq!(tracker.progress().await, ProgressReport::NoGoal);

    let goal = serde_json::from_value(goal_json("g1", 1000, 100, 0, 0))?;
    tracker.select_goal(Some(goal)).await?;

    let report = tracker.progress().await;
    let breakdown = report.breakdown().unwrap();
    assert_eq!(breakdown.calories.ratio(), Some(0.5));
    assert_eq!(breakdown.protein.ratio(), Some(0.5));
    assert_eq!(breakdown.tracked().count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_unauthenticated_mutation_skips_resync() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tracker = DayTracker::new(anonymous_client(&server));
    let entry = NewManualEntry {
        name: None,
        calories: 100,
        protein: 5,
        carbs: None,
        fat: None,
    };
    let error = tracker.add_manual(&entry).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
    assert!(tracker.current_record().await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_add_drink_by_cups_scales_against_millilitre_base() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 0, 0, 0, 0), None).await;

    // 1 c = 240 mL, 0.96 servings of the 250 mL reference
    Mock::given(method("POST"))
        .and(path("/dailyRecords/current/drinkEntries"))
        .and(body_partial_json(json!({
            "itemId": "d1",
            "name": "Milk",
            "servings": 0.96,
            "quantity": {"value": 1.0, "unit": "c"},
            "calories": 105,
            "protein": 7,
            "carbs": 11,
            "fat": 2
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(record_json("r1", 105, 7, 11, 2)))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;

    let record = tracker
        .add_drink(
            &milk(),
            PortionInput::Quantity(Quantity::new(1.0, VolumeUnit::Cups)),
        )
        .await?;
    assert_eq!(record.calories, 105);
    assert_eq!(tracker.current_record().await.unwrap().fat, Some(2));
    assert_eq!(tracker.revision().await, 2);
    Ok(())
}

#[tokio::test]
async fn test_null_macro_totals_keep_tracker_usable() -> Result<()> {
    let server = MockServer::start().await;
    let mut record = record_json("r1", 300, 20, 0, 0);
    record["carbs"] = json!(null);
    record["fat"] = json!(null);
    mount_day(&server, record, Some("g1")).await;

    let mut goal = goal_json("g1", 600, 40, 0, 0);
    goal["carbGoal"] = json!(null);
    goal["fatGoal"] = json!(null);
    mount_goal(&server, goal).await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;

    let report = tracker.progress().await;
    let breakdown = report.breakdown().unwrap();
    assert_eq!(breakdown.calories.ratio(), Some(0.5));
    assert_eq!(breakdown.carbs, MacroProgress::Untracked);
    assert_eq!(breakdown.fat, MacroProgress::Untracked);
    Ok(())
}

#[tokio::test]
async fn test_locally_rejected_removal_skips_resync() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 100, 10, 0, 0), None).await;

    Mock::given(method("GET"))
        .and(path("/dailyRecords/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json("r1", 999, 99, 0, 0)))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;

    let error = tracker
        .remove_entry(EntryKind::Manual, "  ")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.http_status.is_none());

    assert_eq!(tracker.revision().await, 1);
    assert_eq!(tracker.current_record().await.unwrap().calories, 100);
    Ok(())
}

#[tokio::test]
async fn test_backend_rejection_still_resyncs() -> Result<()> {
    let server = MockServer::start().await;
    mount_day(&server, record_json("r1", 100, 10, 0, 0), None).await;

    Mock::given(method("POST"))
        .and(path("/dailyRecords/current/manualEntries"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"message": "calories too large"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dailyRecords/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json("r1", 100, 10, 0, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = DayTracker::new(logged_in_client(&server));
    tracker.refresh().await?;

    let entry = NewManualEntry {
        name: None,
        calories: 90_000,
        protein: 0,
        carbs: None,
        fat: None,
    };
    let error = tracker.add_manual(&entry).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.http_status, Some(422));
    assert_eq!(tracker.revision().await, 2);
    Ok(())
}
