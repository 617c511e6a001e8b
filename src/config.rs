use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub menu_path: PathBuf,
    pub user_path: PathBuf,
    pub orders_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3003"),
            menu_path: try_load("MENU_PATH", "menu.json"),
            user_path: try_load("USER_PATH", "user.json"),
            orders_path: try_load("ORDERS_PATH", "ordered.json"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
