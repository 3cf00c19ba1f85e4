//! Integer helpers shared by the sieving and driver code.

/// Largest integer s with s * s <= n.
#[inline]
pub fn isqrt(n: i64) -> i64 {
    debug_assert!(n >= 0);
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as i64;
    // f64 seed can be off by one near the mantissa limit; correct it
    while x > 0 && x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) {
        x += 1;
    }
    x
}

/// Largest integer r with r^K <= x.
#[inline]
pub fn iroot<const K: u32>(x: i64) -> i64 {
    debug_assert!(x >= 0 && K >= 1);
    let mut r = (x as f64).powf(1.0 / K as f64) as i64;
    while (r + 1).checked_pow(K).map_or(false, |p| p <= x) {
        r += 1;
    }
    while r > 0 && r.checked_pow(K).map_or(true, |p| p > x) {
        r -= 1;
    }
    r
}

/// Truncated natural logarithm.
#[inline]
pub fn ilog(x: i64) -> i64 {
    (x as f64).ln() as i64
}

/// Clamp `val` into [low, high].
#[inline]
pub fn in_between<T: Ord>(low: T, val: T, high: T) -> T {
    val.max(low).min(high)
}

#[inline]
pub fn ceil_div(a: i64, b: i64) -> i64 {
    (a + b - 1) / b
}

/// Smallest power of two >= n (1 for n <= 1).
#[inline]
pub fn next_power_of_2(n: i64) -> i64 {
    (n.max(1) as u64).next_power_of_two() as i64
}
