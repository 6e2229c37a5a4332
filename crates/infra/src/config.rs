use flock_domain::{RecurrenceBounds, MAX_HORIZON_DAYS, MAX_RECURRENCE_COUNT};
use flock_utils::create_random_secret;
use std::{fmt::Display, ops::RangeInclusive, str::FromStr};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Secret used to verify the HS256 signed bearer tokens
    pub jwt_secret: String,
    /// Limits applied when expanding recurrences and service schedules.
    /// A pattern without `count` or `endDate` would otherwise produce events
    /// forever.
    pub recurrence_bounds: RecurrenceBounds,
}

impl Config {
    pub fn new() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find JWT_SECRET environment variable. Going to create one.");
                let secret = create_random_secret(32);
                info!(
                    "Secret for verifying tokens was generated and set to: {}",
                    secret
                );
                secret
            }
        };
        let defaults = RecurrenceBounds::default();
        Self {
            port: env_or_default("PORT", 5000),
            jwt_secret,
            recurrence_bounds: RecurrenceBounds {
                max_occurrences: env_in_range(
                    "RECURRENCE_MAX_OCCURRENCES",
                    defaults.max_occurrences,
                    1..=MAX_RECURRENCE_COUNT as usize,
                ),
                horizon_days: env_in_range(
                    "RECURRENCE_HORIZON_DAYS",
                    defaults.horizon_days,
                    1..=MAX_HORIZON_DAYS,
                ),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn env_or_default<T: FromStr + Display>(key: &str, default: T) -> T {
    let value = match std::env::var(key) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                key, value, default
            );
            default
        }
    }
}

fn env_in_range<T>(key: &str, default: T, range: RangeInclusive<T>) -> T
where
    T: FromStr + Display + PartialOrd + Copy,
{
    let value = env_or_default(key, default);
    if range.contains(&value) {
        return value;
    }
    warn!(
        "The given {}: {} is outside of {}..={}, falling back to the default: {}.",
        key,
        value,
        range.start(),
        range.end(),
        default
    );
    default
}
