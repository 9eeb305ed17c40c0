//! Configuration for the bounds procedures.

use robustat_core::constants::DEFAULT_MISRATE;
use robustat_core::Rng;

use crate::sample::Sample;

/// Environment variable overriding [`Config::misrate`].
pub const MISRATE_ENV: &str = "ROBUSTAT_MISRATE";

/// Environment variable overriding [`Config::seed`].
pub const SEED_ENV: &str = "ROBUSTAT_SEED";

/// Options shared by every bounds call.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Probability that a bound misses the true value.
    ///
    /// Smaller values give wider bounds. Each procedure has a floor below
    /// which it reports a domain violation instead. Default: 1e-3.
    pub misrate: f64,

    /// Seed string for the randomized spread-based bounds.
    ///
    /// When unset the generator is seeded from the sample content, so repeated
    /// calls on the same data still agree. Default: None.
    pub seed: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            misrate: DEFAULT_MISRATE,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `ROBUSTAT_MISRATE` and `ROBUSTAT_SEED` when set.
    ///
    /// A misrate that does not parse, or falls outside `(0, 1]`, is ignored
    /// with a warning.
    pub fn from_env() -> Self {
        Self::from_env_or(Self::default())
    }

    /// `base` overridden by `ROBUSTAT_MISRATE` and `ROBUSTAT_SEED` when set.
    pub fn from_env_or(base: Self) -> Self {
        Self::from_lookup(base, |name| std::env::var(name).ok())
    }

    fn from_lookup(mut base: Self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(MISRATE_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(misrate) if misrate > 0.0 && misrate <= 1.0 => base.misrate = misrate,
                _ => tracing::warn!(value = %raw, "ignoring invalid {}", MISRATE_ENV),
            }
        }
        if let Some(seed) = lookup(SEED_ENV) {
            if !seed.is_empty() {
                base.seed = Some(seed);
            }
        }
        base
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the misrate.
    pub fn misrate(mut self, misrate: f64) -> Self {
        assert!(misrate > 0.0 && misrate <= 1.0, "misrate must be in (0, 1]");
        self.misrate = misrate;
        self
    }

    /// Set a deterministic seed string.
    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Check if the configuration is valid.
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.misrate.is_nan() || self.misrate <= 0.0 || self.misrate > 1.0 {
            return Err("misrate must be in (0, 1]".to_string());
        }
        Ok(())
    }

    /// Generator for the randomized bounds of `sample`.
    ///
    /// Every sample gets a fresh generator: from the seed string when one is
    /// configured, from the sample's values otherwise.
    pub(crate) fn rng_for(&self, sample: &Sample) -> Rng {
        match &self.seed {
            Some(seed) => {
                tracing::trace!(seed = %seed, "seeding from string");
                Rng::from_string(seed)
            }
            None => {
                tracing::trace!(n = sample.len(), "seeding from sample content");
                Rng::from_values(sample.values())
            }
        }
    }
}
