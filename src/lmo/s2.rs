//! Special leaves: the parallel segmented phase of the LMO sum.
//!
//! The interval [1, x/y) is sieved in segments. Each worker owns a block of
//! consecutive segments; within a segment it enumerates the special leaves
//! n = primes[b] * m of every prime index b, reading "unsieved positions
//! <= x/n" from the counters before crossing off that prime's multiples.
//! A worker cannot know how many positions survived in the segments before
//! its sub-range, so it also records per-b totals (`phi`, `mu_sum`) from
//! which the driver reconstructs the missing contribution afterwards.

use std::cmp::{max, min};
use std::time::Instant;

use rayon::prelude::*;

use crate::bit_sieve::BitSieve;
use crate::counters::Counters;
use crate::math::{ceil_div, ilog, in_between, isqrt, next_power_of_2};
use crate::pi_table::PiTable;
use crate::runtime;

/// First multiple >= low of each prime, pushed up to an odd multiple so
/// that cross-off can step by 2 * prime.
fn init_next_multiples(primes: &[i32], size: i64, low: i64) -> Vec<i64> {
    let mut next = Vec::with_capacity(size as usize);
    next.push(0);
    for b in 1..size as usize {
        let prime = primes[b] as i64;
        let mut multiple = ((low + prime - 1) / prime) * prime;
        multiple += prime * (!multiple & 1);
        next.push(multiple);
    }
    next
}

/// Clear the odd multiples of `prime` in [next_multiple, high), keeping the
/// counters in lockstep with the sieve.
fn cross_off(
    prime: i64,
    low: i64,
    high: i64,
    next_multiple: &mut i64,
    sieve: &mut BitSieve,
    counters: &mut Counters,
) {
    let mut k = *next_multiple;
    while k < high {
        let idx = (k - low) as usize;
        if sieve.test(idx) {
            sieve.unset(idx);
            counters.update(idx);
        }
        k += prime * 2;
    }
    *next_multiple = k;
}

/// Special-leaf contributions of one worker's sub-range
/// [low + t * span, low + (t + 1) * span).
#[allow(clippy::too_many_arguments)]
fn s2_thread(
    x: i64,
    y: i64,
    c: i64,
    pi_sqrty: i64,
    pi_y: i64,
    segment_size: i64,
    segments_per_thread: i64,
    thread_num: i64,
    low: i64,
    limit: i64,
    pi: &PiTable,
    primes: &[i32],
    lpf: &[i32],
    mu: &[i32],
    phi: &mut Vec<i64>,
    mu_sum: &mut Vec<i64>,
) -> i64 {
    let span = segment_size * segments_per_thread;
    let mut low = low + span * thread_num;
    let limit = min(low + span, limit);
    let size = pi.pi(min(isqrt(x / low), y) as u64) + 1;
    let mut s2_result = 0i64;

    if c >= size - 1 {
        return 0;
    }

    let mut sieve = BitSieve::new(segment_size as usize);
    let mut counters = Counters::new(segment_size as usize);
    let mut next = init_next_multiples(primes, size, low);
    phi.resize(size as usize, 0);
    mu_sum.resize(size as usize, 0);

    while low < limit {
        // current segment = [low, high)
        let high = min(low + segment_size, limit);
        let mut b = 2usize;

        sieve.reset(low);

        // phi(y, b) nodes with b <= c contribute nothing to S2; just take
        // the first c primes out of the sieve
        while b as i64 <= c {
            let prime = primes[b] as i64;
            let mut k = next[b];
            while k < high {
                sieve.unset((k - low) as usize);
                k += prime * 2;
            }
            next[b] = k;
            b += 1;
        }

        counters.finit(&sieve);

        'segment: {
            // c < b < pi(sqrt(y)): leaves n = primes[b] * m with
            // mu[m] != 0, primes[b] < lpf[m] and low <= x/n < high
            while (b as i64) < min(pi_sqrty, size) {
                let prime = primes[b] as i64;
                let min_m = max(x / (prime * high), y / prime);
                let max_m = min(x / (prime * low), y);

                // max_m only shrinks as b and low grow, so neither the
                // remaining b nor later segments see leaves for them
                if prime >= max_m {
                    break 'segment;
                }

                let mut m = max_m;
                while m > min_m {
                    if mu[m as usize] != 0 && prime < lpf[m as usize] as i64 {
                        let n = prime * m;
                        let count = counters.query(&sieve, (x / n - low) as usize);
                        let phi_xn = phi[b] + count;
                        s2_result -= mu[m as usize] as i64 * phi_xn;
                        mu_sum[b] -= mu[m as usize] as i64;
                    }
                    m -= 1;
                }

                phi[b] += counters.query(&sieve, (high - 1 - low) as usize);
                cross_off(prime, low, high, &mut next[b], &mut sieve, &mut counters);
                b += 1;
            }

            // pi(sqrt(y)) <= b < pi_y: leaves n = primes[b] * primes[l]
            // with low <= x/n < high
            while (b as i64) < min(pi_y, size) {
                let prime = primes[b] as i64;
                let mut l = pi.pi(min(x / (prime * low), y) as u64);
                let min_m = in_between(prime, max(x / (prime * high), y / prime), y);
                let min_l = pi.pi(min_m as u64);

                if prime >= primes[l as usize] as i64 {
                    break 'segment;
                }

                while l > min_l {
                    let n = prime * primes[l as usize] as i64;
                    let count = counters.query(&sieve, (x / n - low) as usize);
                    let phi_xn = phi[b] + count;
                    s2_result += phi_xn;
                    mu_sum[b] += 1;
                    l -= 1;
                }

                phi[b] += counters.query(&sieve, (high - 1 - low) as usize);
                cross_off(prime, low, high, &mut next[b], &mut sieve, &mut counters);
                b += 1;
            }
        }

        low += segment_size;
    }

    s2_result
}

/// Sum of the special-leaf contributions.
///
/// Most special leaves sit in the first segments, so rounds start with a
/// small segment size and one segment per thread and coarsen whenever a
/// round finishes quickly. After each round the workers' per-b totals are
/// folded into `phi_total` sequentially in worker order; that stitch
/// reconstructs the leaf contributions each worker was missing and makes
/// the result identical to a serial run for any thread count.
#[allow(clippy::too_many_arguments)]
pub fn s2(
    x: i64,
    y: i64,
    pi_y: i64,
    c: i64,
    primes: &[i32],
    lpf: &[i32],
    mu: &[i32],
    pi: &PiTable,
    threads: usize,
) -> i64 {
    let mut threads = runtime::validate_threads(threads) as i64;

    let mut s2_total = 0i64;
    let mut low = 1i64;
    let limit = x / y + 1;
    let sqrt_limit = isqrt(limit);
    let logx = max(1, ilog(x));
    let mut segment_size = next_power_of_2(sqrt_limit / (logx * threads));
    let mut segments_per_thread = 1i64;
    let pi_sqrty = pi.pi(isqrt(y) as u64);

    let mut phi_total = vec![0i64; primes.len()];
    segment_size = max(segment_size, 1 << 6);

    while low < limit {
        let segments = ceil_div(limit - low, segment_size);
        threads = in_between(1, threads, segments);
        segments_per_thread = in_between(1, segments_per_thread, ceil_div(segments, threads));
        let timer = Instant::now();

        let workers: Vec<(i64, Vec<i64>, Vec<i64>)> = (0..threads)
            .into_par_iter()
            .map(|t| {
                let mut phi = Vec::new();
                let mut mu_sum = Vec::new();
                let result = s2_thread(
                    x,
                    y,
                    c,
                    pi_sqrty,
                    pi_y,
                    segment_size,
                    segments_per_thread,
                    t,
                    low,
                    limit,
                    pi,
                    primes,
                    lpf,
                    mu,
                    &mut phi,
                    &mut mu_sum,
                );
                (result, phi, mu_sum)
            })
            .collect();

        let seconds = timer.elapsed().as_secs_f64();
        low += segments_per_thread * threads * segment_size;

        if runtime::status_enabled() {
            eprintln!(
                "[s2] low={low} segment_size={segment_size} \
                 segments_per_thread={segments_per_thread} threads={threads} \
                 time={seconds:.3}s"
            );
        }

        // special leaves thin out with growing low; coarsen once past
        // sqrt(limit)
        if low > sqrt_limit && seconds < 10.0 {
            if segment_size < sqrt_limit {
                segment_size <<= 1;
            } else {
                segments_per_thread *= 2;
            }
        }

        // Worker t's phi[b] misses the surviving positions of every segment
        // before its sub-range; at this point of the iteration that count
        // is exactly phi_total[b]. Must run in worker order.
        for (result, phi, mu_sum) in &workers {
            s2_total += result;
            for b in 1..phi.len() {
                s2_total += phi_total[b] * mu_sum[b];
                phi_total[b] += phi[b];
            }
        }
    }

    s2_total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{make_least_prime_factor, make_moebius};
    use crate::phi_tiny::PhiTiny;
    use crate::primes::generate_primes;

    fn s2_with_threads(x: i64, y: i64, threads: usize) -> i64 {
        let mu = make_moebius(y);
        let lpf = make_least_prime_factor(y);
        let primes = generate_primes(y);
        let pi_y = primes.len() as i64 - 1;
        let c = PhiTiny::MAX_A.min(pi_y);
        let pi = PiTable::new(y as u64, 1);
        s2(x, y, pi_y, c, &primes, &lpf, &mu, &pi, threads)
    }

    #[test]
    fn result_is_thread_count_invariant() {
        for (x, y) in [(1_000_000i64, 150i64), (10_000_000, 600), (50_000_000, 1_200)] {
            let reference = s2_with_threads(x, y, 1);
            for threads in [2usize, 4, 8] {
                assert_eq!(s2_with_threads(x, y, threads), reference, "x={x} threads={threads}");
            }
        }
    }
}
