pub mod haplotype_pool;
pub mod replicate;

// re-export for cleaner imports
pub use self::haplotype_pool::HaplotypePool;
pub use self::replicate::Replicate;
