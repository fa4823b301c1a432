///
/// A fully read replicate, borrowed from the driver's reusable buffers.
///
/// Haplotypes `2k` and `2k + 1` form diploid sample `k`.
///
#[derive(Debug, Clone, Copy)]
pub struct Replicate<'a> {
    pub index: usize,
    pub positions: &'a [u64],
    pub haplotypes: &'a [Vec<u8>],
}

impl<'a> Replicate<'a> {
    pub fn n_sites(&self) -> usize {
        self.positions.len()
    }

    pub fn n_samples(&self) -> usize {
        self.haplotypes.len() / 2
    }

    ///
    /// Left and right allele of diploid sample `sample` at site `site`.
    ///
    pub fn alleles(&self, sample: usize, site: usize) -> (u8, u8) {
        let left = &self.haplotypes[2 * sample];
        let right = &self.haplotypes[2 * sample + 1];
        (left[site], right[site])
    }
}
