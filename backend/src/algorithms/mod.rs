//! Pure number-classification algorithms.
//!
//! Everything in this module is synchronous, allocation-light and free of I/O,
//! so it can be called from any thread or task without coordination.

pub mod number_analyzer;

pub use number_analyzer::{
    classify, digit_sum, integer_sqrt, is_armstrong, is_perfect_number, is_perfect_square,
    is_prime, ClassificationResult, Parity,
};

#[cfg(test)]
#[path = "number_analyzer_tests.rs"]
mod number_analyzer_tests;
