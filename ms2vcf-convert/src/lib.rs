//! # ms2vcf-convert
//!
//! Streaming conversion of ms coalescent simulation output into one VCF
//! file per replicate. The input is read line by line and each replicate is
//! written as soon as its haplotypes have been read, so memory use is bounded
//! by the largest replicate rather than the whole stream.
//!
pub mod consts;
pub mod driver;
pub mod genotype;
pub mod positions;
pub mod scanner;

// Re-exports
pub use driver::*;
pub use genotype::*;
pub use positions::*;
pub use scanner::*;
