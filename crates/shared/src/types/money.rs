//! Currency codes for salon amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are carried as `rust_decimal::Decimal`; a salon reports in a single
//! currency and no conversion happens anywhere in the reporting engine.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the association.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Rwandan Franc
    #[default]
    Rwf,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Kenyan Shilling
    Kes,
    /// Ugandan Shilling
    Ugx,
    /// Tanzanian Shilling
    Tzs,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rwf => write!(f, "RWF"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Kes => write!(f, "KES"),
            Self::Ugx => write!(f, "UGX"),
            Self::Tzs => write!(f, "TZS"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RWF" => Ok(Self::Rwf),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "KES" => Ok(Self::Kes),
            "UGX" => Ok(Self::Ugx),
            "TZS" => Ok(Self::Tzs),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
