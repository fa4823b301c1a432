pub const VCF_FILEFORMAT_LINE: &str = "##fileformat=VCFv4.2";
pub const VCF_COLUMN_HEADER: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT";

/// Every replicate is written against a single synthetic contig.
pub const CONTIG_ID: &str = "chr1";

// ms only models a derived and an ancestral allele, so REF/ALT are placeholders
pub const REF_ALLELE: &str = "A";
pub const ALT_ALLELE: &str = "T";

pub const MISSING_FIELD: &str = ".";

pub const SAMPLE_NAME_PREFIX: &str = "s";
pub const REPLICATE_SUFFIX: &str = "_rep";
