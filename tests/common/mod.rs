//! Common test utilities for store tests
#![allow(dead_code)]

use stylati::Store;
use stylati::config::{AppConfig, InstanceConfig, LoggingConfig, ProfileConfig, SeedConfig};

/// Literal test configuration (no files, no environment)
pub fn test_config() -> AppConfig {
    AppConfig {
        instance: InstanceConfig {
            title: "ستايلاتي".to_string(),
        },
        profile: ProfileConfig {
            default_bio: "مرحباً! أنا عضو جديد في ستايلاتي.".to_string(),
            avatar_url_template: "https://picsum.photos/seed/{seed}/200/200".to_string(),
        },
        seed: SeedConfig::default(),
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
    }
}

/// Store seeded with the built-in fixture, anonymous session
pub fn seeded_store() -> Store {
    let config = test_config();
    stylati::logging::init(&config.logging);
    Store::new(config).expect("built-in fixture must load")
}

/// Seeded store with `sara_fashion` logged in
pub fn store_as_sara() -> Store {
    let mut store = seeded_store();
    assert!(store.auth().login("sara_fashion", "password123"));
    store
}
