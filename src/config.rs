//! Environment configuration.

use crate::models::parse_amount;
use rust_decimal::Decimal;
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/state.json";
const DEFAULT_MONTHLY_GOAL: i64 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on (`PORT`).
    pub port: u16,
    /// Ledger snapshot file (`APP_DATA_PATH`).
    pub data_path: PathBuf,
    /// Goal used until the user sets one (`DEFAULT_MONTHLY_GOAL`).
    pub default_goal: Decimal,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let default_goal = lookup("DEFAULT_MONTHLY_GOAL")
            .and_then(|value| parse_amount(&value))
            .filter(|goal| *goal >= Decimal::ZERO)
            .unwrap_or_else(|| Decimal::from(DEFAULT_MONTHLY_GOAL));

        Self {
            port,
            data_path,
            default_goal,
        }
    }
}
