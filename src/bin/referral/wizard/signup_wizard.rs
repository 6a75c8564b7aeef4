//! Signup Wizard - Interactive referrer registration
//!
//! Collects name, email and password, creates the account and shows the
//! referral code to share.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::client::{ReferralClient, SignupRequest};

pub async fn run_signup_wizard(url: &str) -> Result<()> {
    println!();
    println!("{}", style("  Referral Rewards Signup").cyan().bold());
    println!(
        "  {}",
        style("Create an account and get your referral code").dim()
    );
    println!();

    // Step 1: Name
    println!("  {}", style("Step 1: Your Name").bold());
    println!("  {}", style("Your referral code is derived from it").dim());
    println!();

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("  Full name")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                return Err("Name cannot be empty");
            }
            Ok(())
        })
        .interact_text()?;

    // Step 2: Email and password
    println!();
    println!("  {}", style("Step 2: Account Details").bold());
    println!();

    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("  Email")
        .validate_with(|input: &String| -> Result<(), &str> {
            if !input.contains('@') {
                return Err("Enter a valid email address");
            }
            Ok(())
        })
        .interact_text()?;

    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("  Password")
        .with_confirmation("  Confirm password", "Passwords do not match")
        .interact()?;

    // Step 3: Review and confirm
    println!();
    println!("  {}", style("Review Signup").bold());
    println!("  {}", style("─".repeat(40)).dim());
    println!();
    println!("  Name:     {}", style(&name).cyan());
    println!("  Email:    {}", email);
    println!();

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("  Create this account?")
        .default(true)
        .interact()?;

    if !confirmed {
        println!();
        println!("  {} Signup cancelled", style("✗").red());
        return Ok(());
    }

    // Step 4: Submit
    println!();
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Creating account...");
    pb.enable_steady_tick(Duration::from_millis(80));

    let client = ReferralClient::new(url);
    let request = SignupRequest {
        name: &name,
        email: &email,
        password: &password,
    };
    let result = client.signup(&request).await;

    let user = match &result {
        Ok(response) => match &response.user {
            Some(user) if response.success => client.get_user(user.id).await.ok(),
            _ => None,
        },
        Err(_) => None,
    };
    pb.finish_and_clear();

    match result {
        Ok(response) if response.success => {
            println!("  {}", style("═".repeat(50)).dim());
            println!();
            println!("  {} {}", style("✓").green().bold(), response.message);
            println!();
            if let Some(user) = user {
                println!(
                    "  Your referral code: {}",
                    style(&user.referral_code).cyan().bold()
                );
                println!();
                println!("  Check your dashboard:");
                println!(
                    "    {}",
                    style(format!("referral user {}", user.id)).yellow()
                );
            }
            println!();
        }
        Ok(response) => {
            println!();
            println!("  {} Signup failed: {}", style("✗").red(), response.message);
        }
        Err(e) => {
            println!();
            println!("  {} Error: {}", style("✗").red(), e);
            println!();
            println!("  Make sure the referral server is running and accessible.");
        }
    }

    Ok(())
}
