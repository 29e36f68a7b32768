//! Generator settings and their environment defaults.
//!
//! Environment variables are read once per process:
//! - `QR_EC_LEVEL`: `L`, `M`, `Q` or `H` (default `M`)
//! - `QR_FORCE_BYTE`: `0` or `1` (default `0`)
//! - `QR_MASK`: `auto` or `0`-`7` (default `auto`)
//! - `QR_PARALLEL_MASK_SEARCH`: `0` or `1` (default `0`)
//!
//! Unparseable values fall back to the default.

use crate::canvas::MaskPattern;
use crate::models::ECLevel;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    parse_env::<u8>(name).map(|v| v != 0).unwrap_or(default)
}

/// How the data mask is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Masking {
    /// Evaluate all eight masks and keep the lowest penalty
    #[default]
    Auto,
    /// Always use this mask
    Fixed(MaskPattern),
}

impl FromStr for Masking {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Masking::Auto);
        }
        match s.parse::<i32>() {
            Ok(number @ 0..=7) => MaskPattern::from_number(number)
                .map(Masking::Fixed)
                .map_err(|e| e.to_string()),
            _ => Err(format!("expected 'auto' or a mask number 0-7, got '{}'", s)),
        }
    }
}

impl fmt::Display for Masking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Masking::Auto => f.write_str("auto"),
            Masking::Fixed(mask) => write!(f, "{}", mask.number()),
        }
    }
}

static EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

pub(crate) fn default_ec_level() -> ECLevel {
    *EC_LEVEL.get_or_init(|| parse_env("QR_EC_LEVEL").unwrap_or(ECLevel::M))
}

static FORCE_BYTE: OnceLock<bool> = OnceLock::new();

pub(crate) fn default_force_byte() -> bool {
    *FORCE_BYTE.get_or_init(|| parse_env_bool_u8("QR_FORCE_BYTE", false))
}

static MASKING: OnceLock<Masking> = OnceLock::new();

pub(crate) fn default_masking() -> Masking {
    *MASKING.get_or_init(|| parse_env("QR_MASK").unwrap_or_default())
}

static PARALLEL_MASK_SEARCH: OnceLock<bool> = OnceLock::new();

pub(crate) fn parallel_mask_search() -> bool {
    *PARALLEL_MASK_SEARCH.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASK_SEARCH", false))
}

/// Parameters of one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Always use byte mode, even for numeric or alphanumeric input
    pub force_byte: bool,
    /// Mask choice
    pub masking: Masking,
    /// Evaluate mask candidates on the rayon pool
    pub parallel_mask_search: bool,
}

impl GeneratorSettings {
    /// Settings with the given level and built-in defaults for the rest,
    /// ignoring the environment
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            force_byte: false,
            masking: Masking::Auto,
            parallel_mask_search: false,
        }
    }

    /// Settings taken from the `QR_*` environment variables
    pub fn from_env() -> Self {
        Self {
            ec_level: default_ec_level(),
            force_byte: default_force_byte(),
            masking: default_masking(),
            parallel_mask_search: parallel_mask_search(),
        }
    }

    /// Override the correction level
    pub fn with_ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Override byte-mode forcing
    pub fn with_force_byte(mut self, force_byte: bool) -> Self {
        self.force_byte = force_byte;
        self
    }

    /// Override the mask choice
    pub fn with_masking(mut self, masking: Masking) -> Self {
        self.masking = masking;
        self
    }

    /// Override parallel mask evaluation
    pub fn with_parallel_mask_search(mut self, parallel: bool) -> Self {
        self.parallel_mask_search = parallel;
        self
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_masking() {
        assert_eq!("auto".parse::<Masking>(), Ok(Masking::Auto));
        assert_eq!(" AUTO ".parse::<Masking>(), Ok(Masking::Auto));
        assert_eq!("0".parse::<Masking>(), Ok(Masking::Fixed(MaskPattern::Pattern0)));
        assert_eq!("7".parse::<Masking>(), Ok(Masking::Fixed(MaskPattern::Pattern7)));
        assert!("-1".parse::<Masking>().is_err());
        assert!("8".parse::<Masking>().is_err());
        assert!("best".parse::<Masking>().is_err());
    }

    #[test]
    fn test_masking_display_round_trip() {
        for masking in [Masking::Auto, Masking::Fixed(MaskPattern::Pattern4)] {
            assert_eq!(masking.to_string().parse::<Masking>(), Ok(masking));
        }
    }

    #[test]
    fn test_builder_overrides() {
        let settings = GeneratorSettings::new(ECLevel::L)
            .with_ec_level(ECLevel::H)
            .with_force_byte(true)
            .with_masking(Masking::Fixed(MaskPattern::Pattern2))
            .with_parallel_mask_search(true);
        assert_eq!(settings.ec_level, ECLevel::H);
        assert!(settings.force_byte);
        assert_eq!(settings.masking, Masking::Fixed(MaskPattern::Pattern2));
        assert!(settings.parallel_mask_search);
    }

    #[test]
    fn test_new_ignores_environment() {
        let settings = GeneratorSettings::new(ECLevel::Q);
        assert_eq!(settings.masking, Masking::Auto);
        assert!(!settings.force_byte);
    }

    #[test]
    fn test_env_defaults_are_stable() {
        // Read once per process, so repeated calls agree
        assert_eq!(GeneratorSettings::from_env(), GeneratorSettings::default());
    }
}
