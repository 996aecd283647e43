use crate::error::{DesignError, Result};

/// Fast/slow partition of the ways of one set.
///
/// The first `fast` ways (the MSB ways) are the low-latency ones; the remaining
/// `assoc - fast` are slow. A split can only be built through [`WaySplit::new`],
/// so every allocator below is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaySplit {
    assoc: usize,
    fast: usize,
}

impl WaySplit {
    /// `fast_ways` defaults to half the associativity.
    pub fn new(assoc: usize, fast_ways: Option<usize>) -> Result<Self> {
        if assoc == 0 {
            return Err(DesignError::InvalidAssociativity { assoc });
        }
        let fast = fast_ways.unwrap_or(assoc / 2);
        if fast > assoc {
            return Err(DesignError::InvalidFastWays {
                fast_ways: fast,
                assoc,
            });
        }
        Ok(Self { assoc, fast })
    }

    pub fn assoc(&self) -> usize {
        self.assoc
    }

    pub fn fast(&self) -> usize {
        self.fast
    }

    pub fn slow(&self) -> usize {
        self.assoc - self.fast
    }

    /// `fast` ways at `fast_val`, then the slow ways at `slow_val`.
    pub fn two_bucket(&self, fast_val: usize, slow_val: usize) -> Vec<usize> {
        self.three_bucket(0, 0, fast_val, slow_val)
    }

    /// Like [`WaySplit::two_bucket`], but the first `priorities` fast ways
    /// only pay `difference`. Priority ways are read in parallel with the tag,
    /// so only the tag/data latency difference is left on the critical path.
    pub fn three_bucket(
        &self,
        priorities: usize,
        difference: usize,
        fast_val: usize,
        slow_val: usize,
    ) -> Vec<usize> {
        let p = priorities.min(self.fast);
        let mut latencies = Vec::with_capacity(self.assoc);
        latencies.extend(std::iter::repeat(difference).take(p));
        latencies.extend(std::iter::repeat(fast_val).take(self.fast - p));
        latencies.extend(std::iter::repeat(slow_val).take(self.slow()));
        latencies
    }

    /// Same latency on every way.
    pub fn uniform(&self, val: usize) -> Vec<usize> {
        vec![val; self.assoc]
    }
}
