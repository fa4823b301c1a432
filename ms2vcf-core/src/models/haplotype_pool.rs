///
/// Reusable storage for the haplotype lines of one replicate.
///
/// Slots are allocated once and overwritten by later replicates. The pool
/// tracks a logical length separate from the number of allocated slots, so
/// haplotypes left over from a larger, earlier replicate are never visible.
///
#[derive(Debug, Default)]
pub struct HaplotypePool {
    slots: Vec<Vec<u8>>,
    len: usize,
}

impl HaplotypePool {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Forget the current haplotypes, keeping their allocations.
    ///
    pub fn clear(&mut self) {
        self.len = 0;
    }

    ///
    /// Copy a haplotype into the next slot, overwriting whatever it held.
    ///
    pub fn push(&mut self, haplotype: &[u8]) {
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                slot.clear();
                slot.extend_from_slice(haplotype);
            }
            None => self.slots.push(haplotype.to_vec()),
        }
        self.len += 1;
    }

    /// Number of haplotypes in the current replicate.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, including ones not in use.
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    pub fn as_slice(&self) -> &[Vec<u8>] {
        &self.slots[..self.len]
    }
}
