//! Leaderboard command

use crate::style::*;
use anyhow::Result;

pub async fn run(url: &str, limit: usize) -> Result<()> {
    print_header("Referral Leaderboard");

    let client = crate::client::ReferralClient::new(url);

    match client.get_leaderboard(Some(limit)).await {
        Ok(entries) => {
            if entries.is_empty() {
                print_info("No referrers yet. Be the first to sign up!");
                return Ok(());
            }

            println!();
            println!(
                "{:>4}  {:<20}  {:>12}  Referral Code",
                "Rank", "Name", "Donations"
            );
            println!("{}", "─".repeat(60));

            for (i, entry) in entries.iter().enumerate() {
                // Pad before styling, escape codes would eat the width
                let rank = format!("{:>4}", format!("#{}", i + 1));
                let rank = if i == 0 {
                    style_yellow(&rank)
                } else if i < 3 {
                    style_cyan(&rank)
                } else {
                    rank
                };

                println!(
                    "{}  {:<20}  {:>12}  {}",
                    rank,
                    entry.name,
                    format_amount(entry.total_donations),
                    style_dim(&entry.referral_code)
                );
            }
        }
        Err(e) => {
            print_error(&format!("Failed to fetch leaderboard: {}", e));
            return Ok(());
        }
    }

    println!();
    match client.get_stats().await {
        Ok(stats) => {
            println!(
                "Total participants: {}",
                style_bold(&stats.participants.to_string())
            );
            println!(
                "Total donations:    {}",
                style_green(&format_amount(stats.total_donations))
            );
            println!(
                "Average donation:   {}",
                format_amount(stats.average_donation)
            );
        }
        Err(e) => print_warning(&format!("Stats unavailable: {}", e)),
    }

    Ok(())
}
