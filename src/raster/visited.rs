use bitvec::prelude::*;

/// Flat per-pixel visitation flags for a single tracing pass
///
/// Allocated fresh by each caller and dropped on return, so tracing stays
/// re-entrant. Indices are row-major pixel indices.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    width: usize,
}

impl VisitedSet {
    /// Create a set with no pixels visited
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
        }
    }

    /// Row-major index of `(x, y)`
    pub const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Test whether a pixel was visited; out-of-range pixels count as visited
    pub fn contains(&self, x: usize, y: usize) -> bool {
        if x >= self.width {
            return true;
        }
        self.bits
            .get(self.index(x, y))
            .as_deref()
            .is_none_or(|&visited| visited)
    }

    /// Mark a pixel visited, returning false if it already was
    pub fn mark(&mut self, x: usize, y: usize) -> bool {
        if x >= self.width {
            return false;
        }
        let index = self.index(x, y);
        match self.bits.get_mut(index) {
            Some(mut bit) if !*bit => {
                *bit = true;
                true
            }
            _ => false,
        }
    }

    /// Number of visited pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}
