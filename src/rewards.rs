//! Reward catalog
//!
//! Five fixed badges. The catalog never changes at runtime; per-user
//! unlock flags are derived from it with [`compute_unlocks`].

use serde::Serialize;
use std::collections::BTreeSet;

/// Rewards every user tracks a status for (Bronze through Platinum).
pub const TRACKED_REWARD_IDS: [u32; 4] = [1, 2, 3, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardDefinition {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: &'static str,
    /// Total donations needed to unlock the badge
    pub donation_threshold: u64,
}

const CATALOG: [RewardDefinition; 5] = [
    RewardDefinition {
        id: 1,
        name: "Bronze Badge",
        description: "First referral milestone",
        requirement: "1 referral",
        donation_threshold: 100,
    },
    RewardDefinition {
        id: 2,
        name: "Silver Badge",
        description: "5 referrals achieved",
        requirement: "5 referrals",
        donation_threshold: 1_000,
    },
    RewardDefinition {
        id: 3,
        name: "Gold Badge",
        description: "10 referrals achieved",
        requirement: "10 referrals",
        donation_threshold: 2_000,
    },
    RewardDefinition {
        id: 4,
        name: "Platinum Badge",
        description: "25 referrals achieved",
        requirement: "25 referrals",
        donation_threshold: 5_000,
    },
    RewardDefinition {
        id: 5,
        name: "Diamond Badge",
        description: "50 referrals achieved",
        requirement: "50 referrals",
        donation_threshold: 10_000,
    },
];

pub struct RewardCatalog;

impl RewardCatalog {
    /// All reward definitions, ordered by id
    pub fn list() -> Vec<RewardDefinition> {
        CATALOG.to_vec()
    }

    pub fn get(id: u32) -> Option<RewardDefinition> {
        CATALOG.iter().find(|r| r.id == id).copied()
    }

    /// `(reward id, threshold)` pairs for [`compute_unlocks`]
    pub fn thresholds() -> Vec<(u32, u64)> {
        CATALOG
            .iter()
            .map(|r| (r.id, r.donation_threshold))
            .collect()
    }
}

/// Reward ids unlocked by a donation total.
///
/// A reward is unlocked once the total reaches its threshold. Pure and
/// monotonic: raising the total never locks a reward again.
pub fn compute_unlocks(total_donations: u64, thresholds: &[(u32, u64)]) -> BTreeSet<u32> {
    thresholds
        .iter()
        .filter(|(_, threshold)| total_donations >= *threshold)
        .map(|(id, _)| *id)
        .collect()
}
