//! # Numeric Helpers
//!
//! Primality, Fibonacci numbers, phone formatting, a memoizing factorial and
//! a simple counter.
//!
//! Memoization lives in [`FactorialCache`], a value the caller owns and
//! passes around; nothing here keeps state between unrelated calls.

use std::collections::HashMap;

use tracing::trace;

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i: u64 = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// `n`-th Fibonacci number with `fib(0) = 0` and `fib(1) = fib(2) = 1`.
///
/// Returns `None` once the result no longer fits in a `u64` (`n > 93`).
pub fn fibonacci(n: u32) -> Option<u64> {
    let (mut prev, mut curr): (u64, u64) = (0, 1);
    if n == 0 {
        return Some(0);
    }
    for _ in 1..n {
        let next = prev.checked_add(curr)?;
        prev = curr;
        curr = next;
    }
    Some(curr)
}

/// Formats an 11 digit number as `+7(XXX)XXX-XX-XX`, dropping the leading
/// trunk digit.
pub fn format_phone(phone: &str) -> Option<String> {
    if phone.len() != 11 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!(
        "+7({}){}-{}-{}",
        &phone[1..4],
        &phone[4..7],
        &phone[7..9],
        &phone[9..11]
    ))
}

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL: u32 = 34;

/// Factorials remembered across calls on the same cache.
#[derive(Debug, Default, Clone)]
pub struct FactorialCache {
    known: HashMap<u32, u128>,
}

impl FactorialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `n!`, or `None` when it overflows a `u128` (`n > MAX_FACTORIAL`).
    ///
    /// Every intermediate factorial computed along the way is cached.
    pub fn factorial(&mut self, n: u32) -> Option<u128> {
        if n > MAX_FACTORIAL {
            trace!(n, "factorial out of range");
            return None;
        }
        if let Some(&hit) = self.known.get(&n) {
            trace!(n, "factorial cache hit");
            return Some(hit);
        }

        // resume from the largest cached value below n
        let (mut k, mut acc): (u32, u128) = (0..n)
            .rev()
            .find_map(|k| self.known.get(&k).map(|&v| (k, v)))
            .unwrap_or((0, 1));
        self.known.entry(0).or_insert(1);

        while k < n {
            k += 1;
            // n <= MAX_FACTORIAL, so this never overflows
            acc = acc.checked_mul(u128::from(k))?;
            self.known.insert(k, acc);
        }
        Some(acc)
    }

    pub fn contains(&self, n: u32) -> bool {
        self.known.contains_key(&n)
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

/// Yields 0, 1, 2, ... on successive calls.
#[derive(Debug, Default, Clone)]
pub struct Counter {
    next: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl Iterator for Counter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next;
        self.next = current.checked_add(1)?;
        Some(current)
    }
}
