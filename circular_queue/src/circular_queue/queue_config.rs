// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Instead of a constructor with lots of arguments, [`crate::CircularQueue::try_new`]
//! receives anything that implements [`Into<QueueConfig>`]. A [`QueueConfig`] can be
//! built from:
//!
//! - A single [`QueueOption`].
//! - Any number of [`QueueOption`]s, composed left to right with `+`, or collected from
//!   an iterator. Later options override earlier conflicting ones.
//! - A JSON string, via [`std::str::FromStr`].
//!
//! ```
//! use r3bl_circular_queue::{QueueConfig, QueueOption};
//!
//! let config = QueueConfig::default()
//!     + QueueOption::GrowthFactor { growth: 2.0, shrink: 0.5 }
//!     + QueueOption::GuaranteedSize(10);
//! assert_eq!(config.guaranteed_size, Some(10));
//!
//! let config: QueueConfig = r#"{ "growth_factor": 2.0 }"#.parse().unwrap();
//! assert_eq!(config.growth_factor, 2.0);
//! assert_eq!(config.shrink_factor, 0.0);
//! ```

use std::{ops::Add, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{QueueConfigError, ok};

/// Capacity of a queue that was not given a [`QueueOption::FixedSize`] or
/// [`QueueOption::GuaranteedSize`].
pub const DEFAULT_GUARANTEED_SIZE: usize = 8;

/// A single construction option. These mirror the three knobs of the queue's resize
/// policy, and are applied in the order they are given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueueOption {
    /// Sets the growable / shrinkable mode. `growth == 0.0` disables growth (overwrite
    /// oldest when full), `shrink == 0.0` disables shrinking.
    GrowthFactor { growth: f32, shrink: f32 },
    /// Disables growth and shrinking, and allocates exactly `n` slots. This is also the
    /// capacity the queue returns to on clear.
    FixedSize(usize),
    /// Allocates `n` slots, which is also the capacity the queue returns to on clear, and
    /// the size below which shrinking never fires. Growth and shrink factors are left
    /// untouched.
    GuaranteedSize(usize),
}

/// The resize policy of a [`crate::CircularQueue`].
///
/// Fields:
/// - `growth_factor`: `0.0` means never grow (fixed capacity, overwrite oldest). Otherwise
///   the capacity becomes `floor(growth_factor × (capacity + batch_len))` when a batch
///   doesn't fit.
/// - `shrink_factor`: `0.0` means never shrink. Otherwise the store is compacted to the
///   current size when `size <= floor(capacity × shrink_factor)`.
/// - `guaranteed_size`: the initial and post clear capacity, and the shrink floor. `None`
///   means [`DEFAULT_GUARANTEED_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub growth_factor: f32,
    pub shrink_factor: f32,
    pub guaranteed_size: Option<usize>,
}

impl QueueConfig {
    /// Fold the `options` into a default config, in order.
    #[must_use]
    pub fn from_options(options: impl IntoIterator<Item = QueueOption>) -> Self {
        options.into_iter().fold(Self::default(), Add::add)
    }

    /// The capacity the queue is allocated with, and returns to on clear.
    #[must_use]
    pub fn resolved_guaranteed_size(&self) -> usize {
        self.guaranteed_size.unwrap_or(DEFAULT_GUARANTEED_SIZE)
    }

    /// # Errors
    ///
    /// Returns an error if:
    /// - `growth_factor` is negative, `NaN`, or infinite.
    /// - `shrink_factor` is not in `[0.0, 1.0]` (this also rejects `NaN`).
    /// - `guaranteed_size` is `Some(0)`.
    pub fn validate(&self) -> Result<(), QueueConfigError> {
        if !self.growth_factor.is_finite() || self.growth_factor < 0.0 {
            return Err(QueueConfigError::InvalidGrowthFactor {
                growth_factor: self.growth_factor,
            });
        }

        if !(0.0..=1.0).contains(&self.shrink_factor) {
            return Err(QueueConfigError::InvalidShrinkFactor {
                shrink_factor: self.shrink_factor,
            });
        }

        if self.guaranteed_size == Some(0) {
            return Err(QueueConfigError::ZeroGuaranteedSize);
        }

        ok!()
    }
}

impl From<QueueOption> for QueueConfig {
    fn from(option: QueueOption) -> Self { Self::default() + option }
}

impl FromIterator<QueueOption> for QueueConfig {
    fn from_iter<I: IntoIterator<Item = QueueOption>>(iter: I) -> Self {
        Self::from_options(iter)
    }
}

/// Apply an option on top of an existing config. The `rhs` clobbers whatever fields it
/// sets, so `a + b` means "`b` wins where they conflict".
impl Add<QueueOption> for QueueConfig {
    type Output = Self;

    fn add(self, rhs: QueueOption) -> Self::Output {
        match rhs {
            QueueOption::GrowthFactor { growth, shrink } => Self {
                growth_factor: growth,
                shrink_factor: shrink,
                ..self
            },
            QueueOption::FixedSize(size) => Self {
                growth_factor: 0.0,
                shrink_factor: 0.0,
                guaranteed_size: Some(size),
            },
            QueueOption::GuaranteedSize(size) => Self {
                guaranteed_size: Some(size),
                ..self
            },
        }
    }
}

/// Parse a JSON object. Missing fields take their [`Default`] values. The result is
/// validated, so a successfully parsed config can always build a queue.
impl FromStr for QueueConfig {
    type Err = QueueConfigError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| QueueConfigError::InvalidJson {
                reason: err.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_config() {
        let config = QueueConfig::default();
        assert_eq2!(config.growth_factor, 0.0);
        assert_eq2!(config.shrink_factor, 0.0);
        assert_eq2!(config.guaranteed_size, None);
        assert_eq2!(config.resolved_guaranteed_size(), DEFAULT_GUARANTEED_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_options_apply_in_order() {
        // FixedSize resets the factors that GrowthFactor set.
        let config = QueueConfig::from_options([
            QueueOption::GrowthFactor {
                growth: 2.0,
                shrink: 0.5,
            },
            QueueOption::FixedSize(16),
        ]);
        assert_eq2!(
            config,
            QueueConfig {
                growth_factor: 0.0,
                shrink_factor: 0.0,
                guaranteed_size: Some(16),
            }
        );

        // GrowthFactor after FixedSize keeps the size, but turns growth back on.
        let config = QueueConfig::from_options([
            QueueOption::FixedSize(16),
            QueueOption::GrowthFactor {
                growth: 2.0,
                shrink: 0.5,
            },
        ]);
        assert_eq2!(
            config,
            QueueConfig {
                growth_factor: 2.0,
                shrink_factor: 0.5,
                guaranteed_size: Some(16),
            }
        );
    }

    #[test]
    fn test_guaranteed_size_keeps_factors() {
        let config = QueueConfig::default()
            + QueueOption::GrowthFactor {
                growth: 1.5,
                shrink: 0.25,
            }
            + QueueOption::GuaranteedSize(10);
        assert_eq2!(config.growth_factor, 1.5);
        assert_eq2!(config.shrink_factor, 0.25);
        assert_eq2!(config.resolved_guaranteed_size(), 10);
    }

    #[test]
    fn test_later_guaranteed_size_wins() {
        let config: QueueConfig = [
            QueueOption::GuaranteedSize(10),
            QueueOption::GuaranteedSize(32),
        ]
        .into_iter()
        .collect();
        assert_eq2!(config.guaranteed_size, Some(32));
    }

    #[test]
    fn test_from_single_option() {
        let config: QueueConfig = QueueOption::FixedSize(4).into();
        assert_eq2!(config.guaranteed_size, Some(4));
        assert_eq2!(config.growth_factor, 0.0);
    }

    #[test_case(-1.0, 0.0 ; "negative growth")]
    #[test_case(f32::NAN, 0.0 ; "nan growth")]
    #[test_case(f32::INFINITY, 0.0 ; "infinite growth")]
    fn test_invalid_growth_factor(growth: f32, shrink: f32) {
        let config = QueueConfig::from(QueueOption::GrowthFactor { growth, shrink });
        assert!(matches!(
            config.validate(),
            Err(QueueConfigError::InvalidGrowthFactor { .. })
        ));
    }

    #[test_case(2.0, -0.1 ; "negative shrink")]
    #[test_case(2.0, 1.5 ; "shrink above one")]
    #[test_case(2.0, f32::NAN ; "nan shrink")]
    fn test_invalid_shrink_factor(growth: f32, shrink: f32) {
        let config = QueueConfig::from(QueueOption::GrowthFactor { growth, shrink });
        assert!(matches!(
            config.validate(),
            Err(QueueConfigError::InvalidShrinkFactor { .. })
        ));
    }

    #[test_case(QueueOption::FixedSize(0))]
    #[test_case(QueueOption::GuaranteedSize(0))]
    fn test_zero_guaranteed_size(option: QueueOption) {
        let config = QueueConfig::from(option);
        assert_eq2!(config.validate(), Err(QueueConfigError::ZeroGuaranteedSize));
    }

    #[test_case(0.0, 0.0)]
    #[test_case(2.0, 0.0)]
    #[test_case(2.0, 1.0)]
    #[test_case(0.5, 0.5)]
    fn test_valid_factors(growth: f32, shrink: f32) {
        let config = QueueConfig::from(QueueOption::GrowthFactor { growth, shrink });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_json() {
        let config: QueueConfig =
            r#"{ "growth_factor": 2.0, "shrink_factor": 0.5, "guaranteed_size": 10 }"#
                .parse()
                .unwrap();
        assert_eq2!(
            config,
            QueueConfig {
                growth_factor: 2.0,
                shrink_factor: 0.5,
                guaranteed_size: Some(10),
            }
        );

        let config: QueueConfig = "{}".parse().unwrap();
        assert_eq2!(config, QueueConfig::default());
    }

    #[test]
    fn test_parse_json_rejects_bad_input() {
        let result = "not json".parse::<QueueConfig>();
        assert!(matches!(result, Err(QueueConfigError::InvalidJson { .. })));

        let result = r#"{ "shrink_factor": 3.0 }"#.parse::<QueueConfig>();
        assert!(matches!(
            result,
            Err(QueueConfigError::InvalidShrinkFactor { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = QueueConfig::from(QueueOption::FixedSize(16));
        let json = serde_json::to_string(&config).unwrap();
        let parsed: QueueConfig = json.parse().unwrap();
        assert_eq2!(parsed, config);
    }
}
