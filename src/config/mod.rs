//! Environment-backed gatekeeper configuration.
//!
//! All settings have defaults. Override with `GATEKEEPER_*` environment variables, or build
//! a [`GatekeeperConfig`] directly with the `with_*` methods.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ABSOLUTE_FLOOR, DEFAULT_MIN_KEEP, DEFAULT_RICHNESS_BIAS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How the absolute-floor check interacts with the threshold.
pub enum FloorPolicy {
    #[default]
    /// Threshold is fixed before the floor check runs. The check is recorded in the
    /// outcome but never changes the mask.
    Inert,
    /// Threshold is fixed after the floor check, so a weak top score forces the split to
    /// `min_keep`. Deviates from the historical behavior; opt in explicitly.
    Enforced,
}

impl FromStr for FloorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inert" => Ok(Self::Inert),
            "enforced" => Ok(Self::Enforced),
            _ => Err(ConfigError::InvalidFloorPolicy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FloorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorPolicy::Inert => write!(f, "inert"),
            FloorPolicy::Enforced => write!(f, "enforced"),
        }
    }
}

/// Gatekeeper tunables.
///
/// Use [`GatekeeperConfig::from_env`] to read `GATEKEEPER_*` overrides on top of defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatekeeperConfig {
    /// Split index forced by the strictness and floor overrides. Default: `1`.
    pub min_keep: usize,

    /// Minimum acceptable top score. Default: `0.30`.
    pub absolute_floor: f32,

    /// Decay ratio below which a rich batch's knee is distrusted. Default: `0.20`.
    pub richness_bias: f32,

    /// Default: [`FloorPolicy::Inert`].
    pub floor_policy: FloorPolicy,
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            min_keep: DEFAULT_MIN_KEEP,
            absolute_floor: DEFAULT_ABSOLUTE_FLOOR,
            richness_bias: DEFAULT_RICHNESS_BIAS,
            floor_policy: FloorPolicy::Inert,
        }
    }
}

impl GatekeeperConfig {
    const ENV_MIN_KEEP: &'static str = "GATEKEEPER_MIN_KEEP";
    const ENV_ABSOLUTE_FLOOR: &'static str = "GATEKEEPER_ABSOLUTE_FLOOR";
    const ENV_RICHNESS_BIAS: &'static str = "GATEKEEPER_RICHNESS_BIAS";
    const ENV_FLOOR_POLICY: &'static str = "GATEKEEPER_FLOOR_POLICY";

    pub fn with_min_keep(mut self, min_keep: usize) -> Self {
        self.min_keep = min_keep;
        self
    }

    pub fn with_absolute_floor(mut self, absolute_floor: f32) -> Self {
        self.absolute_floor = absolute_floor;
        self
    }

    pub fn with_richness_bias(mut self, richness_bias: f32) -> Self {
        self.richness_bias = richness_bias;
        self
    }

    pub fn with_floor_policy(mut self, floor_policy: FloorPolicy) -> Self {
        self.floor_policy = floor_policy;
        self
    }

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Unset or blank variables use the default; malformed values are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let min_keep = Self::parse_usize_from_env(Self::ENV_MIN_KEEP, defaults.min_keep)?;
        let absolute_floor =
            Self::parse_f32_from_env(Self::ENV_ABSOLUTE_FLOOR, defaults.absolute_floor)?;
        let richness_bias =
            Self::parse_f32_from_env(Self::ENV_RICHNESS_BIAS, defaults.richness_bias)?;
        let floor_policy = match Self::read_env(Self::ENV_FLOOR_POLICY) {
            Some(value) => value.parse()?,
            None => defaults.floor_policy,
        };

        Ok(Self {
            min_keep,
            absolute_floor,
            richness_bias,
            floor_policy,
        })
    }

    /// Rejects NaN and infinite thresholds. Finite values are never range-checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.absolute_floor.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "absolute_floor",
                value: self.absolute_floor,
            });
        }

        if !self.richness_bias.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "richness_bias",
                value: self.richness_bias,
            });
        }

        Ok(())
    }

    fn read_env(name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match Self::read_env(name) {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidInteger {
                    name,
                    value,
                    source: e,
                }),
            None => Ok(default),
        }
    }

    fn parse_f32_from_env(name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match Self::read_env(name) {
            Some(value) => value.parse().map_err(|e| ConfigError::InvalidFloat {
                name,
                value,
                source: e,
            }),
            None => Ok(default),
        }
    }
}
