//! Primality by 6k ± 1 trial division.

/// Whether `n` is prime.
///
/// Every prime above 3 has the form `6k ± 1`, so after ruling out
/// multiples of 2 and 3 only those candidates are tried, up to `√n`.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: u64 = 5;
    // i <= n / i avoids overflowing i * i near u64::MAX
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// All primes in `start..=end`, ascending. Empty when `start > end`.
pub fn primes_in_range(start: u64, end: u64) -> Vec<u64> {
    if start > end {
        return Vec::new();
    }
    (start..=end).filter(|&n| is_prime(n)).collect()
}
