//! Login Wizard - sign in and open the dashboard

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::client::{LoginRequest, ReferralClient};
use crate::commands::user::print_user;

pub async fn run_login_wizard(url: &str) -> Result<()> {
    println!();
    println!("{}", style("  Referral Rewards Login").cyan().bold());
    println!();

    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("  Email")
        .interact_text()?;

    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("  Password")
        .interact()?;

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Signing in...");
    pb.enable_steady_tick(Duration::from_millis(80));

    let client = ReferralClient::new(url);
    let result = client
        .login(&LoginRequest {
            email: &email,
            password: &password,
        })
        .await;
    pb.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            println!("  {} Error: {}", style("✗").red(), e);
            return Ok(());
        }
    };

    match response.user {
        Some(user) if response.success => {
            println!(
                "  {} {} Welcome back, {}!",
                style("✓").green().bold(),
                response.message,
                style(&user.name).cyan()
            );
            println!("  Signed in as {}", style(&user.email).dim());
            let dashboard = client.get_user(user.id).await?;
            print_user(&dashboard);
        }
        _ => {
            println!("  {} {}", style("✗").red(), response.message);
        }
    }

    Ok(())
}
