//! Referral Rewards - Donation leaderboard and reward badges for referrers
//!
//! Referrers sign up, share a referral code derived from their name, and
//! climb a leaderboard ranked by the donations they bring in.
//!
//! # How it works
//!
//! 1. Users sign up with a name and email and receive a referral code
//! 2. Donations attributed to a user raise their total
//! 3. Totals unlock badges (Bronze through Platinum) from a fixed catalog
//! 4. The leaderboard ranks everyone by total donations
//!
//! All state lives in memory and is lost on restart.

pub mod auth;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod rewards;
pub mod server;
pub mod store;

pub use auth::{AuthGateway, AuthUser, DEMO_PASSWORD};
pub use config::Config;
pub use error::RewardsError;
pub use leaderboard::{LeaderboardEntry, LeaderboardService, LeaderboardStats};
pub use rewards::{compute_unlocks, RewardCatalog, RewardDefinition};
pub use store::{RewardStatus, User, UserStore};
