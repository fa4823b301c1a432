//! # Core library for ms2vcf
//!
//! Shared pieces used by every ms2vcf crate: the error taxonomy, conversion
//! settings and their validation, the reusable haplotype storage, and helpers
//! for opening plain, gzipped or stdin input.
//!
pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

pub use config::ConversionConfig;
pub use errors::{ConfigError, FormatError, Ms2VcfError, Result};
