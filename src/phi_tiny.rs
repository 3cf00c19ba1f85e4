//! O(1) partial sieve function for the first few primes.
//!
//! phi(x, a) counts the integers in [1, x] coprime to the first `a` primes.
//! For a <= MAX_A it is periodic modulo the a-th primorial up to a linear
//! term, so a wheel cache answers any x with one multiply and one lookup.

use std::sync::OnceLock;

pub struct PhiTiny {
    cache: [Vec<u16>; 7],
}

impl PhiTiny {
    /// Largest `a` answered in O(1); primes 2, 3, 5, 7, 11, 13.
    pub const MAX_A: i64 = 6;

    const PRIMES: [i64; 7] = [0, 2, 3, 5, 7, 11, 13];
    const PRIME_PRODUCTS: [i64; 7] = [1, 2, 6, 30, 210, 2310, 30030];
    const TOTIENTS: [i64; 7] = [1, 1, 2, 8, 48, 480, 5760];

    fn new() -> Self {
        let mut cache: [Vec<u16>; 7] = Default::default();
        cache[0] = vec![0];
        for a in 1..=Self::MAX_A as usize {
            let pp = Self::PRIME_PRODUCTS[a];
            let mut wheel = Vec::with_capacity(pp as usize);
            for x in 0..pp {
                let phi_xa = Self::lookup(&cache, x, a - 1)
                    - Self::lookup(&cache, x / Self::PRIMES[a], a - 1);
                wheel.push(phi_xa as u16);
            }
            cache[a] = wheel;
        }
        Self { cache }
    }

    #[inline]
    fn lookup(cache: &[Vec<u16>; 7], x: i64, a: usize) -> i64 {
        let pp = Self::PRIME_PRODUCTS[a];
        (x / pp) * Self::TOTIENTS[a] + cache[a][(x % pp) as usize] as i64
    }

    #[inline]
    pub fn phi(&self, x: i64, a: i64) -> i64 {
        debug_assert!((0..=Self::MAX_A).contains(&a));
        debug_assert!(x >= 0);
        Self::lookup(&self.cache, x, a as usize)
    }
}

static PHI_TINY: OnceLock<PhiTiny> = OnceLock::new();

/// phi(x, a) for a <= PhiTiny::MAX_A, from a process-wide cache built on
/// first use.
#[inline]
pub fn phi_tiny(x: i64, a: i64) -> i64 {
    PHI_TINY.get_or_init(PhiTiny::new).phi(x, a)
}
