// locat-core/src/config.rs
//! Colorizer configuration and seed resolution.
//!
//! `ColorConfig` is validated on construction so that a malformed frequency or
//! spread is rejected at startup, before any output has been produced.
//!
//! License: MIT OR Apache-2.0

use rand::Rng;

use crate::errors::LocatError;

/// Immutable configuration for the colorizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConfig {
    /// Hue rotation speed per unit position.
    pub freq: f64,
    /// Divisor controlling how quickly hue changes across characters within a
    /// line. Larger spread means a slower per-character color change.
    pub spread: f64,
    /// Color the background instead of the foreground.
    pub inverse: bool,
    /// Colorize even when the destination is not an interactive terminal.
    pub force: bool,
}

impl ColorConfig {
    /// Builds a validated configuration.
    ///
    /// `freq` and `spread` must both be finite and strictly positive;
    /// anything else is a fatal configuration error.
    pub fn new(freq: f64, spread: f64, inverse: bool, force: bool) -> Result<Self, LocatError> {
        validate_positive("freq", freq)?;
        validate_positive("spread", spread)?;
        Ok(Self { freq, spread, inverse, force })
    }
}

fn validate_positive(option: &'static str, value: f64) -> Result<(), LocatError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LocatError::InvalidOption {
            option,
            value,
            reason: "must be a finite number greater than zero",
        });
    }
    Ok(())
}

/// Resolves the requested seed into the colorizer's starting counter.
///
/// A negative request means "pick one for me": a random value in [0, 256),
/// matching the classic behavior of a fresh rainbow on every invocation.
pub fn resolve_seed(requested: i64) -> f64 {
    if requested < 0 {
        rand::rng().random_range(0..256) as f64
    } else {
        requested as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_accepts_defaults() {
        let config = ColorConfig::new(0.1, 3.0, false, false).unwrap();
        assert_eq!(config.freq, 0.1);
        assert_eq!(config.spread, 3.0);
    }

    #[test]
    fn test_config_rejects_nonpositive_freq() {
        assert!(ColorConfig::new(0.0, 3.0, false, false).is_err());
        assert!(ColorConfig::new(-0.1, 3.0, false, false).is_err());
    }

    #[test]
    fn test_config_rejects_nonfinite_spread() {
        assert!(ColorConfig::new(0.1, f64::NAN, false, false).is_err());
        assert!(ColorConfig::new(0.1, f64::INFINITY, false, false).is_err());
    }

    #[test]
    fn test_invalid_option_message_names_the_flag() {
        let err = ColorConfig::new(0.0, 3.0, false, false).unwrap_err();
        assert!(err.to_string().contains("--freq"));
    }

    #[test]
    fn test_resolve_seed_explicit() {
        assert_eq!(resolve_seed(7), 7.0);
        assert_eq!(resolve_seed(0), 0.0);
    }

    #[test]
    fn test_resolve_seed_random_range() {
        for _ in 0..100 {
            let seed = resolve_seed(-1);
            assert!((0.0..256.0).contains(&seed));
            assert_eq!(seed, seed.trunc());
        }
    }
}
