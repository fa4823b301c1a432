use thiserror::Error;

/// Input that does not follow the ms replicate block structure.
///
/// Every variant carries the 1-based line number of the input where the
/// problem was detected.
#[derive(Error, Debug, PartialEq)]
pub enum FormatError {
    #[error("No replicate found: reached end of input before any 'segsites:' line")]
    NoReplicates,

    #[error("Line {line}: could not parse segregating site count from {value:?}")]
    InvalidSegsites { line: usize, value: String },

    #[error("Line {line}: expected a 'positions:' line for a replicate with {segsites} segregating sites")]
    MissingPositions { line: usize, segsites: usize },

    #[error("Line {line}: could not parse position {value:?}")]
    InvalidPosition { line: usize, value: String },

    #[error("Line {line}: expected {expected} positions, found {found}")]
    TooFewPositions {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: haplotype has {found} sites, expected {expected}")]
    HaplotypeLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: replicate has an odd number of haplotypes ({count}), cannot pair into diploid samples")]
    OddHaplotypeCount { line: usize, count: usize },

    #[error("Line {line}: line is not valid UTF-8")]
    InvalidUtf8 { line: usize },
}

/// Out-of-range conversion settings, rejected before any input is read.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Ploidy must be 2, got {0}. Only diploid samples are supported")]
    UnsupportedPloidy(u8),

    #[error("Length must be {min} or greater to avoid multiple records at the same locus, got {length}")]
    LengthTooShort { length: u64, min: u64 },

    #[error("The probability of a missing genotype must be in [0, 1), got {0}")]
    MissingProbabilityOutOfRange(f64),
}

#[derive(Error, Debug)]
pub enum Ms2VcfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for ms2vcf operations.
pub type Result<T> = std::result::Result<T, Ms2VcfError>;
