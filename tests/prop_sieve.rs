//! Property tests for the sieve reset pattern and the running-count
//! invariant between BitSieve and Counters.

use primepi::{BitSieve, Counters};
use proptest::prelude::*;

proptest! {
    #[test]
    fn counters_track_any_unset_sequence(
        low in 0i64..10_000,
        size in 64usize..1024,
        unsets in prop::collection::vec(0usize..1024, 0..200),
        probes in prop::collection::vec(0usize..1024, 1..20),
    ) {
        let mut sieve = BitSieve::new(size);
        sieve.reset(low);
        let mut counters = Counters::new(size);
        counters.finit(&sieve);

        for &k in &unsets {
            let k = k % size;
            if sieve.test(k) {
                sieve.unset(k);
                counters.update(k);
            }
        }

        for &probe in &probes {
            let probe = probe % size;
            prop_assert_eq!(counters.query(&sieve, probe), sieve.count(0, probe));
        }
    }

    #[test]
    fn reset_sets_exactly_the_odd_positions(low in 0i64..1_000_000, size in 1usize..512) {
        let mut sieve = BitSieve::new(size);
        sieve.reset(low);
        for k in 0..size {
            let value = low + k as i64;
            let expect = (low <= 2 && value == 2) || (value > 2 && value % 2 == 1);
            prop_assert_eq!(sieve.test(k), expect, "low={} k={}", low, k);
        }
    }
}
