//! User command - show a referrer's dashboard

use crate::client::UserResponse;
use crate::style::*;
use anyhow::Result;

pub async fn run(url: &str, id: u32) -> Result<()> {
    print_header("Referrer Dashboard");

    let client = crate::client::ReferralClient::new(url);

    match client.get_user(id).await {
        Ok(user) => print_user(&user),
        Err(e) => {
            print_error(&format!("Failed to fetch user {}: {}", id, e));
        }
    }

    Ok(())
}

pub fn print_user(user: &UserResponse) {
    let unlocked = user.rewards.iter().filter(|r| r.unlocked).count();

    println!();
    println!("Name:             {}", style_bold(&user.name));
    println!("Email:            {}", user.email);
    println!("Referral Code:    {}", style_cyan(&user.referral_code));
    println!(
        "Total Donations:  {}",
        style_green(&format_amount(user.total_donations))
    );
    println!("Rewards Earned:   {}/{}", unlocked, user.rewards.len());

    println!();
    println!("{}", style_bold("Rewards & Achievements:"));
    for reward in &user.rewards {
        if reward.unlocked {
            println!(
                "  {} {:<16} {}",
                style_green("✓"),
                reward.name,
                style_dim(&reward.description)
            );
        } else {
            println!(
                "  {} {} {}",
                style_dim("·"),
                style_dim(&format!("{:<16}", reward.name)),
                style_dim(&reward.description)
            );
        }
    }
    println!();
    println!("Share your code {} to earn more!", style_cyan(&user.referral_code));
}
