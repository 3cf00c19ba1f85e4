//! Prime counting with the Lagarias-Miller-Odlyzko algorithm.
//!
//! [`pi_lmo`] evaluates PrimePi(x) as S1 + S2 + pi(y) - 1 - P2 over
//! y ~ alpha * x^(1/3) and computes the dominant S2 phase with parallel
//! segmented sieving. [`PiTable`] (a compressed mod-30 PrimePi lookup) and
//! [`riemann_r`] / [`riemann_r_inverse`] are exposed in their own right,
//! as are the array producers and phases the driver is composed from.

mod bit_sieve;
mod counters;
mod generate;
mod lmo;
mod math;
mod phi_tiny;
mod pi_table;
mod primes;
mod riemann;
mod runtime;

pub use bit_sieve::BitSieve;
pub use counters::Counters;
pub use generate::{make_least_prime_factor, make_moebius, make_pi};
pub use lmo::{p2, pi_lmo, s1, s2};
pub use phi_tiny::{phi_tiny, PhiTiny};
pub use pi_table::PiTable;
pub use primes::{generate_primes, SegmentedIterator};
pub use riemann::{riemann_r, riemann_r_inverse};
pub use runtime::validate_threads;
