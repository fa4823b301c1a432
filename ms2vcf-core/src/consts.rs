/// Default segment length in base pairs.
pub const DEFAULT_SEGMENT_LENGTH: u64 = 1_000_000;

/// Shortest segment accepted. Anything smaller makes position collisions common.
pub const MIN_SEGMENT_LENGTH: u64 = 1000;

/// The only supported ploidy: haplotypes `2k` and `2k+1` form sample `k`.
pub const DIPLOID: u8 = 2;

// ms block markers
pub const SEGSITES_MARKER: &str = "segsites:";
pub const POSITIONS_MARKER: &str = "positions:";

// recognised input suffixes, longest first
pub const MS_GZ_SUFFIX: &str = ".ms.gz";
pub const MS_SUFFIX: &str = ".ms";

pub const VCF_EXT: &str = "vcf";
pub const VCF_GZ_EXT: &str = "vcf.gz";

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";
