use crate::modules::leave_balances::core::policy::LeavePolicy;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const ADDR: &str = "LEAVE_BALANCES_ADDR";
pub const SEED_FILE: &str = "LEAVE_BALANCES_SEED_FILE";
pub const POLICY_JUNIOR_DAYS: &str = "LEAVE_POLICY_JUNIOR_DAYS";
pub const POLICY_SENIOR_DAYS: &str = "LEAVE_POLICY_SENIOR_DAYS";
pub const POLICY_SENIORITY_YEARS: &str = "LEAVE_POLICY_SENIORITY_YEARS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub policy: LeavePolicy,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset variables fall back to their defaults; set but unparsable ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = LeavePolicy::default();
        Ok(Self {
            addr: parse_or(&lookup, ADDR, SocketAddr::from(([0, 0, 0, 0], 8080)))?,
            policy: LeavePolicy {
                base_days_junior: parse_or(&lookup, POLICY_JUNIOR_DAYS, defaults.base_days_junior)?,
                base_days_senior: parse_or(&lookup, POLICY_SENIOR_DAYS, defaults.base_days_senior)?,
                seniority_threshold_years: parse_or(
                    &lookup,
                    POLICY_SENIORITY_YEARS,
                    defaults.seniority_threshold_years,
                )?,
            },
            seed_file: lookup(SEED_FILE)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
