//! # Input/Output utilities for ms2vcf.
//!
//! Line-oriented reading of ms output, and writing of per-replicate VCF
//! files to plain or gzipped files (or to memory).
//!
pub mod consts;
pub mod lines;
pub mod output;
pub mod vcf;
pub mod writer;

// re-expose core functions
pub use lines::*;
pub use output::*;
pub use vcf::*;
pub use writer::*;
