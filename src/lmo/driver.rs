//! Parameter selection and composition of the LMO identity.

use crate::generate::{make_least_prime_factor, make_moebius};
use crate::math::iroot;
use crate::phi_tiny::PhiTiny;
use crate::pi_table::PiTable;
use crate::primes::generate_primes;
use crate::runtime;

use super::p2::p2;
use super::s1::s1;
use super::s2::s2;

/// PrimePi(x) with the Lagarias-Miller-Odlyzko method,
/// O(x^(2/3) / log x) time and O(x^(1/3) * log log x) space.
/// `threads == 0` selects the worker count automatically.
pub fn pi_lmo(x: i64, threads: usize) -> i64 {
    if x < 2 {
        return 0;
    }

    let threads = runtime::validate_threads(threads);

    // y = alpha * x^(1/3) balances S2's sieving range x/y against the size
    // of the precomputed arrays
    let x13 = iroot::<3>(x);
    let x16 = iroot::<6>(x);
    let alpha = (x as f64).ln().ln().max(1.0).min(x16 as f64);
    let y = (x13 as f64 * alpha) as i64;

    let mu = make_moebius(y);
    let lpf = make_least_prime_factor(y);
    let primes = generate_primes(y);
    let pi_y = primes.len() as i64 - 1;
    let c = PhiTiny::MAX_A.min(pi_y);
    let pi = PiTable::new(y as u64, threads);

    let s1 = s1(x, y, c, &primes, &lpf, &mu);
    let s2 = s2(x, y, pi_y, c, &primes, &lpf, &mu, &pi, threads);
    let p2 = p2(x, y, threads);

    // phi(x, pi_y) = S1 + S2 and pi(x) = phi + pi_y - 1 - P2
    s1 + s2 + pi_y - 1 - p2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::make_pi;

    #[test]
    fn tiny_values() {
        assert_eq!(pi_lmo(-1, 1), 0);
        assert_eq!(pi_lmo(0, 1), 0);
        assert_eq!(pi_lmo(1, 1), 0);
        assert_eq!(pi_lmo(2, 1), 1);
        assert_eq!(pi_lmo(3, 1), 2);
        assert_eq!(pi_lmo(4, 1), 2);
        assert_eq!(pi_lmo(10, 1), 4);
    }

    #[test]
    fn matches_sieve_exhaustively_small() {
        let pi = make_pi(2_000);
        for x in 0..=2_000i64 {
            assert_eq!(pi_lmo(x, 1), pi[x as usize] as i64, "x={x}");
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(pi_lmo(100, 1), 25);
        assert_eq!(pi_lmo(1_000, 1), 168);
        assert_eq!(pi_lmo(10_000, 1), 1_229);
        assert_eq!(pi_lmo(1_000_000, 0), 78_498);
    }
}
