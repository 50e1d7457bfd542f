//! Environment-driven configuration for the demo binary.

use core::str::FromStr;

use naming_core::{DomainError, DomainResult};

/// Optional `u64` seed for the number generator. Unset or empty: OS entropy.
pub const SEED_VAR: &str = "NAMING_DEMO_SEED";
/// How many numbers to roll.
pub const ROLLS_VAR: &str = "NAMING_DEMO_ROLLS";
/// The name the second vessel is renamed to.
pub const RENAME_VAR: &str = "NAMING_DEMO_RENAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub seed: Option<u64>,
    pub rolls: usize,
    pub rename_to: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rolls: 3,
            rename_to: "Lambda".to_string(),
        }
    }
}

impl DemoConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; missing or blank values keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = value(SEED_VAR) {
            config.seed = Some(parse(SEED_VAR, &raw)?);
        }
        if let Some(raw) = value(ROLLS_VAR) {
            config.rolls = parse(ROLLS_VAR, &raw)?;
        }
        if let Some(raw) = value(RENAME_VAR) {
            config.rename_to = raw;
        }

        Ok(config)
    }
}

fn parse<T>(key: &str, raw: &str) -> DomainResult<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| DomainError::validation(format!("{key}={raw:?}: {e}")))
}
