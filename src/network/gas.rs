use std::fmt;

use serde::Serialize;

/// How the gas price submitted with a transaction is derived from the price
/// the network reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum GasPricePolicy {
    Fixed { wei: u128 },
    Multiplier { factor: f64 },
    #[default]
    NetworkDefault,
}

impl GasPricePolicy {
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            Self::Multiplier { factor } if !factor.is_finite() || factor <= 0.0 => Err(format!(
                "gas price multiplier must be a positive finite number, got {factor}"
            )),
            _ => Ok(()),
        }
    }

    /// Integral multipliers are applied exactly. Fractional ones go through
    /// `f64`, so reported prices above 2^53 wei are rounded to the nearest
    /// representable value before scaling. Both paths saturate at `u128::MAX`.
    pub fn effective_gas_price(&self, reported_wei: u128) -> u128 {
        match *self {
            Self::Fixed { wei } => wei,
            Self::Multiplier { factor } if factor.fract() == 0.0 && factor < u128::MAX as f64 => {
                reported_wei.saturating_mul(factor as u128)
            }
            // float-to-int `as` saturates at u128::MAX
            Self::Multiplier { factor } => (reported_wei as f64 * factor).round() as u128,
            Self::NetworkDefault => reported_wei,
        }
    }
}

impl fmt::Display for GasPricePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { wei } => write!(f, "fixed {wei} wei"),
            Self::Multiplier { factor } => write!(f, "network price x{factor}"),
            Self::NetworkDefault => f.write_str("network default"),
        }
    }
}
