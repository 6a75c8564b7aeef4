//! End-to-end flow through the public library API

use std::sync::Arc;

use referral_rewards::{
    compute_unlocks, AuthGateway, LeaderboardService, RewardCatalog, RewardsError, UserStore,
    DEMO_PASSWORD,
};
use tokio_test::{assert_err, assert_ok};

#[test]
fn signup_donate_and_climb() {
    let store = Arc::new(UserStore::with_demo_users());
    let auth = AuthGateway::new(store.clone());
    let leaderboard = LeaderboardService::new(store.clone());

    let ana = assert_ok!(auth.signup("Ana Lima", "ana@example.com", "ignored"));
    assert_eq!(ana.id, 4);
    assert_eq!(leaderboard.rank().last().map(|e| e.id), Some(4));

    let updated = assert_ok!(store.record_donation(ana.id, 2_500));
    assert_eq!(updated.unlocked_count(), 3);
    assert_eq!(leaderboard.rank().first().map(|e| e.id), Some(4));

    let stats = leaderboard.stats();
    assert_eq!(stats.participants, 4);
    assert_eq!(stats.total_donations, 6_740);
    assert_eq!(stats.average_donation, 1_685);

    assert_ok!(auth.login("ana@example.com", DEMO_PASSWORD));
    assert_eq!(
        assert_err!(auth.login("ana@example.com", "ignored")),
        RewardsError::InvalidCredentials
    );
}

#[test]
fn empty_store_is_well_behaved() {
    let store = Arc::new(UserStore::new());
    let leaderboard = LeaderboardService::new(store.clone());

    assert!(store.is_empty());
    assert!(leaderboard.rank().is_empty());
    assert_eq!(leaderboard.stats().average_donation, 0);
    assert_err!(AuthGateway::new(store).login("john@example.com", DEMO_PASSWORD));
}

#[test]
fn seeded_flags_match_catalog_thresholds() {
    let store = UserStore::with_demo_users();
    let thresholds = RewardCatalog::thresholds();

    for user in store.all() {
        let expected = compute_unlocks(user.total_donations, &thresholds);
        for status in &user.rewards {
            assert_eq!(status.unlocked, expected.contains(&status.reward_id));
        }
    }
}
