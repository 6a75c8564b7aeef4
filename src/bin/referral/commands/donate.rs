//! Donate command - credit a donation to a referrer

use crate::style::*;
use anyhow::Result;

pub async fn run(url: &str, id: u32, amount: u64) -> Result<()> {
    print_header("Record Donation");

    if amount == 0 {
        print_error("Donation amount must be positive.");
        return Ok(());
    }

    let client = crate::client::ReferralClient::new(url);

    let before = match client.get_user(id).await {
        Ok(user) => user,
        Err(e) => {
            print_error(&format!("Failed to fetch user {}: {}", id, e));
            return Ok(());
        }
    };

    let after = client.donate(id, amount).await?;

    print_success(&format!(
        "Credited {} to {} (total {})",
        format_amount(amount),
        after.name,
        format_amount(after.total_donations)
    ));

    for reward in after.rewards.iter().filter(|r| r.unlocked) {
        let was_unlocked = before
            .rewards
            .iter()
            .any(|b| b.id == reward.id && b.unlocked);
        if !was_unlocked {
            println!("  {} Unlocked {}!", style_yellow("★"), style_bold(&reward.name));
        }
    }

    Ok(())
}
