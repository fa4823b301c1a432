//! Conversion settings shared by the CLI and the converter.
//!
//! A [`ConversionConfig`] is validated once, up front. The converter itself
//! assumes the values are in range.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SEGMENT_LENGTH, DIPLOID, MIN_SEGMENT_LENGTH};
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionConfig {
    /// Ploidy of the output samples. Must be 2.
    pub ploidy: u8,
    /// Length of the simulated segment in base pairs.
    pub segment_length: u64,
    /// Drop phase: random allele order and a `/` separator.
    pub unphased: bool,
    /// Per-allele probability of writing `.` instead of the allele.
    pub missing_probability: f64,
    /// Write `.vcf.gz` instead of `.vcf`.
    pub compress: bool,
    /// Seed for the random source. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            ploidy: DIPLOID,
            segment_length: DEFAULT_SEGMENT_LENGTH,
            unphased: false,
            missing_probability: 0.0,
            compress: false,
            seed: None,
        }
    }
}

impl ConversionConfig {
    ///
    /// Check every setting against its allowed range.
    ///
    /// Ploidy is checked first, then length, then the missing probability;
    /// the first failure is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ploidy != DIPLOID {
            return Err(ConfigError::UnsupportedPloidy(self.ploidy));
        }
        if self.segment_length < MIN_SEGMENT_LENGTH {
            return Err(ConfigError::LengthTooShort {
                length: self.segment_length,
                min: MIN_SEGMENT_LENGTH,
            });
        }
        // written this way so NaN is rejected too
        if !(self.missing_probability >= 0.0 && self.missing_probability < 1.0) {
            return Err(ConfigError::MissingProbabilityOutOfRange(
                self.missing_probability,
            ));
        }
        Ok(())
    }

    pub fn has_missing_data(&self) -> bool {
        self.missing_probability > 0.0
    }
}
