//! Rewards command - list the badge catalog

use crate::style::*;
use anyhow::Result;

pub async fn run(url: &str) -> Result<()> {
    print_header("Reward Catalog");

    let client = crate::client::ReferralClient::new(url);
    let rewards = client.get_rewards().await?;

    println!();
    println!(
        "{:>3}  {:<16}  {:<14}  {:>10}  Description",
        "ID", "Badge", "Requirement", "Unlocks At"
    );
    println!("{}", "─".repeat(75));

    for reward in &rewards {
        let unlocks_at = reward
            .donation_threshold
            .map(format_amount)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>3}  {}  {:<14}  {:>10}  {}",
            reward.id,
            style_bold(&format!("{:<16}", reward.name)),
            reward.requirement,
            unlocks_at,
            style_dim(&reward.description)
        );
    }

    Ok(())
}
