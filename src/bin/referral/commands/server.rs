//! Server command - host the API in this process

use std::sync::Arc;

use anyhow::Result;
use referral_rewards::{Config, UserStore};

pub async fn run(host: Option<String>, port: Option<u16>, no_seed: bool) -> Result<()> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, host, port);

    let store = Arc::new(UserStore::new());
    if config.store.seed_demo_users && !no_seed {
        store.seed_demo_users();
    }

    referral_rewards::server::run_server(&config, store).await
}

/// Only flags that were actually given replace the loaded config.
fn apply_overrides(config: &mut Config, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(host: &str, port: u16) -> Config {
        let mut config = Config::default();
        config.server.host = host.to_string();
        config.server.port = port;
        config
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let mut config = config_with("127.0.0.1", 8080);
        apply_overrides(&mut config, None, None);

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = config_with("127.0.0.1", 8080);
        apply_overrides(&mut config, Some("0.0.0.0".to_string()), None);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);

        apply_overrides(&mut config, None, Some(9000));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }
}
