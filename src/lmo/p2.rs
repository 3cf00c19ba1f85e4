//! P2: numbers <= x with exactly two prime factors, both greater than y.

use rayon::prelude::*;

use crate::math::isqrt;
use crate::pi_table::PiTable;
use crate::primes::SegmentedIterator;
use crate::runtime;

/// P2(x, y) = sum over primes y < p <= sqrt(x) of (pi(x/p) - pi(p) + 1),
/// counting each p * q with p <= q and q prime once.
pub fn p2(x: i64, y: i64, threads: usize) -> i64 {
    debug_assert!(y >= 1);
    let sqrt_x = isqrt(x);
    if y >= sqrt_x {
        return 0;
    }

    let threads = runtime::validate_threads(threads);
    // x/p <= x/y, and p <= sqrt(x) < x/y as well, so one table covers both
    // lookups of every term
    let pi = PiTable::new((x / y) as u64, threads);
    let primes: Vec<u64> = SegmentedIterator::new(y as u64 + 1, sqrt_x as u64 + 1).collect();

    primes
        .par_iter()
        .map(|&p| pi.pi((x / p as i64) as u64) - pi.pi(p) + 1)
        .sum()
}
