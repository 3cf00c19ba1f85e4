//! Ordinary leaves: the scalar part of the LMO sum.

use crate::phi_tiny::phi_tiny;

/// S1 = sum of mu(n) * phi(x / n, c) over the n <= y whose least prime
/// factor exceeds primes[c]. lpf[1] is i32::MAX, so n = 1 contributes
/// phi(x, c).
pub fn s1(x: i64, y: i64, c: i64, primes: &[i32], lpf: &[i32], mu: &[i32]) -> i64 {
    let pc = primes[c as usize] as i64;
    let mut sum = 0i64;
    for n in 1..=y {
        if lpf[n as usize] as i64 > pc {
            sum += mu[n as usize] as i64 * phi_tiny(x / n, c);
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{make_least_prime_factor, make_moebius};
    use crate::primes::generate_primes;

    #[test]
    fn single_leaf_case() {
        // x = 100, y = 6: every n in [2, 6] has a prime factor <= 5, so
        // only n = 1 contributes and S1 = phi(100, 3) = 26
        let y = 6i64;
        let mu = make_moebius(y);
        let lpf = make_least_prime_factor(y);
        let primes = generate_primes(y);
        assert_eq!(s1(100, y, 3, &primes, &lpf, &mu), 26);
    }

    #[test]
    fn matches_brute_force() {
        // brute force: count of [1, x] with no prime factor <= y equals
        // S1 + S2-style corrections only through the full identity, but
        // with c = pi_y the ordinary leaves alone give the truncated
        // Legendre sum, which we can evaluate directly
        let x = 10_000i64;
        let y = 25i64;
        let mu = make_moebius(y);
        let lpf = make_least_prime_factor(y);
        let primes = generate_primes(y);
        let c = 6i64; // primes[c] = 13

        let mut expect = 0i64;
        for n in 1..=y {
            let ok = n == 1 || (2..=13).filter(|d| is_prime(*d)).all(|p| n % p != 0);
            if ok {
                expect += mu[n as usize] as i64 * phi_brute(x / n, 13);
            }
        }
        assert_eq!(s1(x, y, c, &primes, &lpf, &mu), expect);
    }

    fn is_prime(n: i64) -> bool {
        n >= 2 && (2..n).all(|d| n % d != 0)
    }

    fn phi_brute(x: i64, pmax: i64) -> i64 {
        (1..=x)
            .filter(|n| (2..=pmax).filter(|d| is_prime(*d)).all(|p| n % p != 0))
            .count() as i64
    }
}
