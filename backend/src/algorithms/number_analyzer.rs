//! Integer classification: primality, perfectness, squares, Armstrong numbers,
//! parity and digit sums.
//!
//! # Domain policy
//!
//! Every predicate is total over `i64`. Non-positive inputs are handled as
//! follows:
//!
//! | predicate            | n < 0                 | n = 0 | n = 1 |
//! |----------------------|-----------------------|-------|-------|
//! | [`is_prime`]         | false                 | false | false |
//! | [`is_perfect_square`]| false                 | true  | true  |
//! | [`is_perfect_number`]| false                 | false | false |
//! | [`is_armstrong`]     | evaluated on `\|n\|`  | true  | true  |
//! | [`digit_sum`]        | evaluated on `\|n\|`  | 0     | 1     |
//!
//! Magnitudes are taken with [`i64::unsigned_abs`] so `i64::MIN` never overflows.

use serde::{Deserialize, Serialize};

/// Parity of an integer, decided solely by `n mod 2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(n: i64) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

/// Mathematical properties of a single integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub armstrong: bool,
    pub prime: bool,
    pub perfect: bool,
    pub perfect_square: bool,
    pub parity: Parity,
    pub digit_sum: u64,
}

/// Floor of the square root of `n`, computed without floating point.
///
/// Newton's iteration seeded with a power of two above the root; it decreases
/// monotonically and stops at the floor.
pub fn integer_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let bits = 64 - n.leading_zeros();
    let mut x = 1u64 << bits.div_ceil(2);
    let mut y = (x + n / x) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Trial division up to `integer_sqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let n = n as u64;
    let limit = integer_sqrt(n);
    (2..=limit).all(|d| n % d != 0)
}

pub fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let n = n as u64;
    let root = integer_sqrt(n);
    root * root == n
}

/// True when `n` equals the sum of its proper divisors.
///
/// This walks every candidate in `1..n`, so the cost is O(n). Inputs in the
/// billions take seconds; callers on an async runtime should run it on a
/// blocking thread.
pub fn is_perfect_number(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let n = n as u64;
    let mut sum: u64 = 0;
    for d in 1..n {
        if n % d == 0 {
            sum += d;
            if sum > n {
                return false;
            }
        }
    }
    sum == n
}

pub fn is_armstrong(n: i64) -> bool {
    let magnitude = n.unsigned_abs();
    let digits = decimal_digits(magnitude);
    let power = digits.len() as u32;
    let total: u128 = digits.iter().map(|&d| u128::from(d).pow(power)).sum();
    total == u128::from(magnitude)
}

pub fn digit_sum(n: i64) -> u64 {
    decimal_digits(n.unsigned_abs())
        .into_iter()
        .map(u64::from)
        .sum()
}

/// Classify `n`. Each field is computed on its own; no predicate short-circuits another.
pub fn classify(n: i64) -> ClassificationResult {
    ClassificationResult {
        armstrong: is_armstrong(n),
        prime: is_prime(n),
        perfect: is_perfect_number(n),
        perfect_square: is_perfect_square(n),
        parity: Parity::of(n),
        digit_sum: digit_sum(n),
    }
}

fn decimal_digits(mut magnitude: u64) -> Vec<u8> {
    if magnitude == 0 {
        return vec![0];
    }
    let mut digits = Vec::with_capacity(20);
    while magnitude > 0 {
        digits.push((magnitude % 10) as u8);
        magnitude /= 10;
    }
    digits.reverse();
    digits
}
