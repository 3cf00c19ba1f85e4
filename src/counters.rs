//! Running count of unsieved positions, blocked at sqrt(segment) granularity.
//!
//! The special-leaves loop asks "how many positions <= k are still alive"
//! once per leaf while it crosses off multiples; a plain popcount per query
//! would dominate the runtime. One counter per block keeps `update` a single
//! decrement and bounds `query` at about 2*sqrt(segment) word reads.

use crate::bit_sieve::BitSieve;
use crate::math::isqrt;

pub struct Counters {
    counts: Vec<i32>,
    block_size: usize,
}

impl Counters {
    pub fn new(segment_size: usize) -> Self {
        let block_size = (isqrt(segment_size as i64) as usize).next_power_of_two();
        Self {
            counts: vec![0; segment_size.div_ceil(block_size)],
            block_size,
        }
    }

    /// Rebuild every block count from the current sieve contents.
    pub fn finit(&mut self, sieve: &BitSieve) {
        let size = sieve.size();
        for (j, count) in self.counts.iter_mut().enumerate() {
            let start = j * self.block_size;
            let stop = ((j + 1) * self.block_size).min(size) - 1;
            *count = sieve.count(start, stop) as i32;
        }
    }

    /// Number of 1 bits in sieve[0..=k]: whole blocks before k come from the
    /// counts, the block containing k is read live from the sieve.
    #[inline]
    pub fn query(&self, sieve: &BitSieve, k: usize) -> i64 {
        let block = k / self.block_size;
        let mut sum = sieve.count(block * self.block_size, k);
        for &count in &self.counts[..block] {
            sum += count as i64;
        }
        sum
    }

    /// Record that sieve bit k has been cleared. Must be called in lockstep
    /// with `BitSieve::unset`, once per bit actually cleared.
    #[inline]
    pub fn update(&mut self, k: usize) {
        self.counts[k / self.block_size] -= 1;
    }
}
