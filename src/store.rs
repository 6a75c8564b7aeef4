//! In-memory user store
//!
//! Owns every user record. Lives for the lifetime of the process and is
//! never persisted; a restart starts from an empty (or freshly seeded)
//! store.

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, RewardsError};
use crate::rewards::{compute_unlocks, RewardCatalog, TRACKED_REWARD_IDS};

/// Appended to every referral code
pub const REFERRAL_CODE_SUFFIX: &str = "2025";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub total_donations: u64,
    pub rewards: Vec<RewardStatus>,
}

/// Unlock flag of one catalog reward for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardStatus {
    #[serde(rename = "id")]
    pub reward_id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

impl User {
    fn new(id: u32, name: &str, email: &str) -> Self {
        let rewards = TRACKED_REWARD_IDS
            .iter()
            .filter_map(|id| RewardCatalog::get(*id))
            .map(|reward| RewardStatus {
                reward_id: reward.id,
                name: reward.name,
                description: reward.description,
                unlocked: false,
            })
            .collect();

        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            referral_code: referral_code(name),
            total_donations: 0,
            rewards,
        }
    }

    pub fn unlocked_count(&self) -> usize {
        self.rewards.iter().filter(|r| r.unlocked).count()
    }

    fn refresh_unlocks(&mut self) {
        let unlocked = compute_unlocks(self.total_donations, &RewardCatalog::thresholds());
        for status in &mut self.rewards {
            status.unlocked = unlocked.contains(&status.reward_id);
        }
    }
}

/// Lowercased name with all whitespace removed, plus the fixed suffix
pub fn referral_code(name: &str) -> String {
    let mut code: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    code.push_str(REFERRAL_CODE_SUFFIX);
    code
}

/// Demo referrers loaded by [`UserStore::seed_demo_users`]
const DEMO_USERS: [(&str, &str, u64); 3] = [
    ("John Doe", "john@example.com", 1250),
    ("Jane Smith", "jane@example.com", 890),
    ("Mike Johnson", "mike@example.com", 2100),
];

#[derive(Default)]
pub struct UserStore {
    // Single writer lock: create() checks and inserts under one guard so
    // ids and emails stay unique.
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo referrers
    pub fn with_demo_users() -> Self {
        let store = Self::new();
        store.seed_demo_users();
        store
    }

    pub fn find_by_id(&self, id: u32) -> Option<User> {
        self.users.read().iter().find(|u| u.id == id).cloned()
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.read().iter().find(|u| u.email == email).cloned()
    }

    /// Insert a new user with the next sequential id.
    pub fn create(&self, name: &str, email: &str) -> Result<User> {
        let mut users = self.users.write();
        let user = Self::insert(&mut users, name, email)?;
        info!(
            "Created user {} ({}) with referral code {}",
            user.id, user.email, user.referral_code
        );
        Ok(user)
    }

    /// Snapshot of every user in insertion order
    pub fn all(&self) -> Vec<User> {
        self.users.read().clone()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    /// Add a donation to a user's total and re-evaluate their rewards.
    pub fn record_donation(&self, id: u32, amount: u64) -> Result<User> {
        if amount == 0 {
            return Err(RewardsError::InvalidDonation);
        }

        let mut users = self.users.write();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RewardsError::NotFound(id))?;

        let before = user.unlocked_count();
        user.total_donations = user.total_donations.saturating_add(amount);
        user.refresh_unlocks();

        info!(
            "Recorded donation of {} for user {} (total {})",
            amount, id, user.total_donations
        );
        if user.unlocked_count() > before {
            info!(
                "User {} unlocked {} new reward(s)",
                id,
                user.unlocked_count() - before
            );
        }

        Ok(user.clone())
    }

    /// Insert the demo referrers. Emails already present are skipped.
    pub fn seed_demo_users(&self) {
        let mut users = self.users.write();
        for (name, email, total) in DEMO_USERS {
            match Self::insert(&mut users, name, email) {
                Ok(user) => {
                    if let Some(seeded) = users.iter_mut().find(|u| u.id == user.id) {
                        seeded.total_donations = total;
                        seeded.refresh_unlocks();
                    }
                }
                Err(e) => debug!("Skipping demo user: {}", e),
            }
        }
        info!("Seeded demo users, store now holds {} users", users.len());
    }

    fn insert(users: &mut Vec<User>, name: &str, email: &str) -> Result<User> {
        if users.iter().any(|u| u.email == email) {
            return Err(RewardsError::DuplicateEmail(email.to_string()));
        }

        let user = User::new(users.len() as u32 + 1, name, email);
        users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked_ids(user: &User) -> Vec<u32> {
        user.rewards
            .iter()
            .filter(|r| r.unlocked)
            .map(|r| r.reward_id)
            .collect()
    }

    #[test]
    fn test_referral_code() {
        assert_eq!(referral_code("John Doe"), "johndoe2025");
        assert_eq!(referral_code("  Mary\tAnn  Lee "), "maryannlee2025");
        assert_eq!(referral_code(""), "2025");
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = UserStore::new();
        let a = store.create("Alice", "alice@example.com").unwrap();
        let b = store.create("Bob", "bob@example.com").unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_new_user_starts_locked() {
        let store = UserStore::new();
        let user = store.create("Alice Smith", "alice@example.com").unwrap();

        assert_eq!(user.total_donations, 0);
        assert_eq!(user.referral_code, "alicesmith2025");
        assert_eq!(
            user.rewards.iter().map(|r| r.reward_id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert!(user.rewards.iter().all(|r| !r.unlocked));
    }

    #[test]
    fn test_duplicate_email_leaves_store_untouched() {
        let store = UserStore::new();
        store.create("Alice", "alice@example.com").unwrap();
        let before = store.all();

        let err = store.create("Other Alice", "alice@example.com").unwrap_err();

        assert_eq!(
            err,
            RewardsError::DuplicateEmail("alice@example.com".to_string())
        );
        assert_eq!(store.all(), before);
    }

    #[test]
    fn test_lookups_agree() {
        let store = UserStore::with_demo_users();
        store.create("Alice", "alice@example.com").unwrap();

        for user in store.all() {
            assert_eq!(store.find_by_id(user.id), Some(user.clone()));
            assert_eq!(store.find_by_email(&user.email), Some(user));
        }
        assert!(store.find_by_id(99).is_none());
        assert!(store.find_by_email("JOHN@example.com").is_none());
    }

    #[test]
    fn test_seed_reproduces_demo_flags() {
        let store = UserStore::with_demo_users();

        let john = store.find_by_id(1).unwrap();
        let jane = store.find_by_id(2).unwrap();
        let mike = store.find_by_id(3).unwrap();

        assert_eq!(john.referral_code, "johndoe2025");
        assert_eq!(unlocked_ids(&john), vec![1, 2]);
        assert_eq!(unlocked_ids(&jane), vec![1]);
        assert_eq!(unlocked_ids(&mike), vec![1, 2, 3]);
    }

    #[test]
    fn test_seed_twice_is_idempotent() {
        let store = UserStore::with_demo_users();
        store.seed_demo_users();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_record_donation_unlocks_rewards() {
        let store = UserStore::new();
        let user = store.create("Alice", "alice@example.com").unwrap();

        let user = store.record_donation(user.id, 150).unwrap();
        assert_eq!(user.total_donations, 150);
        assert_eq!(unlocked_ids(&user), vec![1]);

        let user = store.record_donation(user.id, 1_900).unwrap();
        assert_eq!(user.total_donations, 2_050);
        assert_eq!(unlocked_ids(&user), vec![1, 2, 3]);
        assert_eq!(store.find_by_id(user.id), Some(user));
    }

    #[test]
    fn test_record_donation_errors() {
        let store = UserStore::with_demo_users();
        let before = store.all();

        assert_eq!(
            store.record_donation(42, 10).unwrap_err(),
            RewardsError::NotFound(42)
        );
        assert_eq!(
            store.record_donation(1, 0).unwrap_err(),
            RewardsError::InvalidDonation
        );
        assert_eq!(store.all(), before);
    }

    #[test]
    fn test_concurrent_creates_keep_ids_unique() {
        use std::sync::Arc;

        let store = Arc::new(UserStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let _ = store.create("Racer", &format!("racer{}@example.com", i % 4));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let users = store.all();
        assert_eq!(users.len(), 4);
        let mut ids: Vec<_> = users.iter().map(|u| u.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
