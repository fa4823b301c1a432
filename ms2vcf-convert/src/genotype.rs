//! Per-sample genotype text under the phasing and missing-data policy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ms2vcf_core::ConversionConfig;
use ms2vcf_io::GenotypeFormatter;

use crate::consts::{MISSING_ALLELE, PHASED_SEPARATOR, UNPHASED_SEPARATOR};

///
/// Build the random source for a run: seeded when a seed is given, from
/// operating system entropy otherwise.
///
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

///
/// Turns a pair of alleles into a diploid genotype such as `0|1`, `1/0` or
/// `./1`.
///
/// Random draws happen in a fixed order per call: the unphased coin flip
/// (only when unphased), then the left and right missing-data draws (only
/// when the missing probability is positive). With phasing kept and no
/// missing data the random source is never touched.
///
pub struct GenotypeEmitter<R: Rng> {
    rng: R,
    unphased: bool,
    missing_probability: f64,
}

impl<R: Rng> GenotypeEmitter<R> {
    pub fn new(rng: R, unphased: bool, missing_probability: f64) -> Self {
        Self {
            rng,
            unphased,
            missing_probability,
        }
    }

    pub fn from_config(config: &ConversionConfig, rng: R) -> Self {
        Self::new(rng, config.unphased, config.missing_probability)
    }

    pub fn emit(&mut self, left: u8, right: u8) -> [u8; 3] {
        let (mut left, mut right) = (left, right);

        if self.unphased && self.rng.random_bool(0.5) {
            std::mem::swap(&mut left, &mut right);
        }

        let separator = if self.unphased {
            UNPHASED_SEPARATOR
        } else {
            PHASED_SEPARATOR
        };

        if self.missing_probability > 0.0 {
            if self.rng.random::<f64>() < self.missing_probability {
                left = MISSING_ALLELE;
            }
            if self.rng.random::<f64>() < self.missing_probability {
                right = MISSING_ALLELE;
            }
        }

        [left, separator, right]
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: Rng> GenotypeFormatter for GenotypeEmitter<R> {
    fn format_genotype(&mut self, left: u8, right: u8) -> [u8; 3] {
        self.emit(left, right)
    }
}
