// ABOUTME: Account commands for macro-tracker: signup, login, logout, whoami
// ABOUTME: Tokens are written to the credentials file, never printed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

use anyhow::{Context, Result};
use macro_tracker::client::ApiClient;

use crate::helpers::display::display_user;
use crate::AuthCommand;

/// Run an `auth` subcommand
pub async fn run(client: &ApiClient, action: AuthCommand) -> Result<()> {
    match action {
        AuthCommand::Signup {
            username,
            email,
            password,
        } => {
            let user = client
                .signup(&username, &email, &password)
                .await
                .context("Signup failed")?;
            println!("Account created, logged in as {}", user.username);
        }
        AuthCommand::Login { username, password } => {
            let user = client
                .login(&username, &password)
                .await
                .context("Login failed")?;
            println!("Logged in as {}", user.username);
        }
        AuthCommand::Logout => {
            client.logout().await.context("Logout failed")?;
            println!("Logged out");
        }
        AuthCommand::Whoami => {
            let user = client.current_user().await?;
            display_user(&user);
        }
    }
    Ok(())
}
