//! Table sizing: the smallest 4k + 3 prime above an inflated capacity.
//!
//! Linear-quotient probing visits every slot when the table size is a prime
//! congruent to 3 mod 4, so primary storage is always sized this way.

/// Trial division from `⌊√n + 0.5⌋` down to 2.
///
/// Mirrors the textbook test, which also reports 1 as prime. Callers only feed
/// it odd candidates and then filter on `n % 4 == 3`, so the quirk never
/// produces a table of size 1.
pub(crate) fn passes_trial_division(n: usize) -> bool {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let high_divisor = ((n as f64).sqrt() + 0.5) as usize;
    (2..=high_divisor).rev().all(|d| n % d != 0)
}

/// Returns `true` if `n` is a prime congruent to 3 mod 4.
pub fn is_four_k_plus_3_prime(n: usize) -> bool {
    n >= 3 && n % 4 == 3 && passes_trial_division(n)
}

/// Finds the table size for `n` logical entries inflated by `pct` percent.
///
/// The candidate `⌊n × (1 + pct / 100)⌋` is forced odd, then advanced by 2
/// until it is both prime and ≡ 3 (mod 4).
///
/// ```rust
/// use classics::collections::hash::primes::four_k_plus_3;
///
/// // 10 × 1.33 = 13.3 → 13 (1 mod 4) → 15 → 17 (1 mod 4) → 19.
/// assert_eq!(four_k_plus_3(10, 33), 19);
/// ```
pub fn four_k_plus_3(n: usize, pct: usize) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let mut candidate = (n as f64 * (1.0 + pct as f64 / 100.0)) as usize;
    if candidate % 2 == 0 {
        candidate += 1;
    }

    loop {
        while !passes_trial_division(candidate) {
            candidate += 2;
        }
        if candidate % 4 == 3 {
            return candidate;
        }
        candidate += 2;
    }
}
