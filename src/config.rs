//! Runtime configuration for the match tracker.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Number of entries returned by each leaderboard query.
    pub top_limit: i64,
    /// Long-poll timeout for the Telegram getUpdates call (seconds).
    pub bot_poll_timeout: u64,
}

impl Settings {
    fn from_env() -> Self {
        let top_limit = env::var("TOP_LIMIT")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(10);

        let bot_poll_timeout = env::var("BOT_POLL_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(50);

        Settings {
            top_limit,
            bot_poll_timeout,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
