// ABOUTME: Archived day commands for macro-tracker: list, show by id or date, delete
// ABOUTME: Archived records are displayed with the goal snapshot they were logged against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use anyhow::{bail, Result};
use macro_tracker::client::ApiClient;

use crate::helpers::display::{display_archive_list, display_archived};
use crate::HistoryCommand;

/// Run a `history` subcommand
pub async fn run(client: &ApiClient, action: HistoryCommand) -> Result<()> {
    match action {
        HistoryCommand::List => {
            let mut records = client.list_archived().await?;
            records.sort_by_key(|record| std::cmp::Reverse(record.date()));
            display_archive_list(&records);
        }
        HistoryCommand::Show { record_id, date } => {
            let record = match (record_id, date) {
                (Some(record_id), _) => client.archived_by_id(&record_id).await?,
                (None, Some(date)) => client.archived_by_date(date).await?,
                (None, None) => bail!("Pass a record id or --date"),
            };
            display_archived(&record);
        }
        HistoryCommand::Delete { record_id } => {
            client.delete_archived(&record_id).await?;
            println!("Archived day {record_id} deleted");
        }
    }
    Ok(())
}
