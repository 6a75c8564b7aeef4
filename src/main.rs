//! Referral Rewards Server
//!
//! Serves the referral dashboard API from an in-memory store

use std::sync::Arc;

use referral_rewards::{Config, UserStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Referral Rewards Server");

    let config = Config::load()?;

    let store = Arc::new(UserStore::new());
    if config.store.seed_demo_users {
        store.seed_demo_users();
    }
    info!("In-memory store ready with {} users", store.len());

    referral_rewards::server::run_server(&config, store).await?;

    Ok(())
}
