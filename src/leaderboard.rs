//! Leaderboard ranking
//!
//! Ranks referrers by total donations. Nothing is cached: every call
//! projects the current store contents.

use std::sync::Arc;

use serde::Serialize;

use crate::store::{User, UserStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: u32,
    pub name: String,
    pub referral_code: String,
    pub total_donations: u64,
}

impl From<&User> for LeaderboardEntry {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            referral_code: user.referral_code.clone(),
            total_donations: user.total_donations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardStats {
    pub participants: usize,
    pub total_donations: u64,
    /// Mean donation rounded to the nearest integer, 0 when empty
    pub average_donation: u64,
}

pub struct LeaderboardService {
    store: Arc<UserStore>,
}

impl LeaderboardService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Entries sorted by total donations, highest first.
    ///
    /// Ties keep insertion order (the sort is stable).
    pub fn rank(&self) -> Vec<LeaderboardEntry> {
        rank_users(&self.store.all())
    }

    pub fn top(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut entries = self.rank();
        entries.truncate(limit);
        entries
    }

    pub fn stats(&self) -> LeaderboardStats {
        compute_stats(&self.store.all())
    }
}

pub fn rank_users(users: &[User]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = users.iter().map(LeaderboardEntry::from).collect();
    entries.sort_by(|a, b| b.total_donations.cmp(&a.total_donations));
    entries
}

pub fn compute_stats(users: &[User]) -> LeaderboardStats {
    let participants = users.len();
    // Per-user totals may already sit at u64::MAX, so sum wide
    let total: u128 = users.iter().map(|u| u128::from(u.total_donations)).sum();

    LeaderboardStats {
        participants,
        total_donations: u64::try_from(total).unwrap_or(u64::MAX),
        average_donation: rounded_mean(total, participants as u128),
    }
}

/// Integer mean with halves rounded up
fn rounded_mean(total: u128, count: u128) -> u64 {
    if count == 0 {
        return 0;
    }
    let mean = total / count + u128::from(total % count * 2 >= count);
    u64::try_from(mean).unwrap_or(u64::MAX)
}
