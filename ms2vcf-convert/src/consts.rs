pub const UNPHASED_SEPARATOR: u8 = b'/';
pub const PHASED_SEPARATOR: u8 = b'|';
pub const MISSING_ALLELE: u8 = b'.';

/// Separator line ms prints before every replicate.
pub const REPLICATE_SEPARATOR: &[u8] = b"//";

pub const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed}] {msg} ({per_sec})";
