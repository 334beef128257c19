use super::number_analyzer::*;
use proptest::prelude::*;

#[test]
fn test_integer_sqrt_small_values() {
    let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
    for (n, root) in expected.iter().enumerate() {
        assert_eq!(integer_sqrt(n as u64), *root, "isqrt({})", n);
    }
}

#[test]
fn test_integer_sqrt_near_perfect_squares() {
    let r: u64 = 3_037_000_499;
    assert_eq!(integer_sqrt(r * r), r);
    assert_eq!(integer_sqrt(r * r - 1), r - 1);
    assert_eq!(integer_sqrt(r * r + 1), r);
}

#[test]
fn test_integer_sqrt_extremes() {
    assert_eq!(integer_sqrt(u64::MAX), u32::MAX as u64);
    assert_eq!(integer_sqrt(i64::MAX as u64), 3_037_000_499);
}

#[test]
fn test_is_prime_non_positive_and_one() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(!is_prime(-7));
    assert!(!is_prime(i64::MIN));
}

#[test]
fn test_is_prime_known_values() {
    let primes = [2, 3, 5, 7, 11, 13, 97, 7919, 1_000_000_007];
    for p in primes {
        assert!(is_prime(p), "{} should be prime", p);
    }
    let composites = [4, 9, 25, 49, 121, 371, 7917, 1_000_000_008];
    for c in composites {
        assert!(!is_prime(c), "{} should not be prime", c);
    }
}

#[test]
fn test_is_perfect_square() {
    assert!(is_perfect_square(16));
    assert!(!is_perfect_square(15));
    assert!(!is_perfect_square(-4));
    assert!(is_perfect_square(0));
    assert!(is_perfect_square(1));
    assert!(is_perfect_square(3_037_000_499 * 3_037_000_499));
    assert!(!is_perfect_square(i64::MAX));
}

#[test]
fn test_is_perfect_number() {
    assert!(is_perfect_number(6));
    assert!(is_perfect_number(28));
    assert!(is_perfect_number(496));
    assert!(is_perfect_number(8128));
    assert!(!is_perfect_number(12));
    assert!(!is_perfect_number(27));
}

#[test]
fn test_is_perfect_number_non_positive_and_one() {
    assert!(!is_perfect_number(0));
    assert!(!is_perfect_number(1));
    assert!(!is_perfect_number(-6));
    assert!(!is_perfect_number(-28));
}

#[test]
fn test_is_armstrong() {
    assert!(is_armstrong(371));
    assert!(is_armstrong(153));
    assert!(is_armstrong(9474));
    assert!(!is_armstrong(123));
    assert!(!is_armstrong(10));
}

#[test]
fn test_is_armstrong_single_digits_and_zero() {
    for n in 0..10 {
        assert!(is_armstrong(n), "{} should be Armstrong", n);
    }
}

#[test]
fn test_is_armstrong_negative_uses_magnitude() {
    assert!(is_armstrong(-371));
    assert!(is_armstrong(-9));
    assert!(!is_armstrong(-123));
}

#[test]
fn test_is_armstrong_extreme_magnitudes_do_not_overflow() {
    assert!(!is_armstrong(i64::MAX));
    assert!(!is_armstrong(i64::MIN));
}

#[test]
fn test_digit_sum() {
    assert_eq!(digit_sum(371), 11);
    assert_eq!(digit_sum(-58), 13);
    assert_eq!(digit_sum(0), 0);
    assert_eq!(digit_sum(1_000_000), 1);
    // 9223372036854775808
    assert_eq!(digit_sum(i64::MIN), 89);
}

#[test]
fn test_parity() {
    assert_eq!(Parity::of(0), Parity::Even);
    assert_eq!(Parity::of(371), Parity::Odd);
    assert_eq!(Parity::of(-3), Parity::Odd);
    assert_eq!(Parity::of(-4), Parity::Even);
    assert_eq!(Parity::Odd.as_str(), "odd");
}

#[test]
fn test_classify_371() {
    let result = classify(371);
    assert!(result.armstrong);
    assert!(!result.prime);
    assert!(!result.perfect);
    assert!(!result.perfect_square);
    assert_eq!(result.parity, Parity::Odd);
    assert_eq!(result.digit_sum, 11);
}

#[test]
fn test_classify_fields_are_independent() {
    // 2 is prime, even and Armstrong at the same time
    let result = classify(2);
    assert!(result.prime);
    assert!(result.armstrong);
    assert_eq!(result.parity, Parity::Even);

    // 28 is perfect but neither prime nor Armstrong
    let result = classify(28);
    assert!(result.perfect);
    assert!(!result.prime);
    assert!(!result.armstrong);
    assert_eq!(result.digit_sum, 10);
}

#[test]
fn test_classification_result_serializes_parity_lowercase() {
    let json = serde_json::to_value(classify(4)).unwrap();
    assert_eq!(json["parity"], "even");
    assert_eq!(json["perfect_square"], true);
    assert_eq!(json["digit_sum"], 4);
}

proptest! {
    #[test]
    fn prop_prime_iff_no_divisor_up_to_isqrt(n in 2i64..200_000) {
        let limit = integer_sqrt(n as u64) as i64;
        let has_divisor = (2..=limit).any(|d| n % d == 0);
        prop_assert_eq!(is_prime(n), !has_divisor);
    }

    #[test]
    fn prop_integer_sqrt_is_floor(n in any::<u64>()) {
        let r = integer_sqrt(n) as u128;
        let n = n as u128;
        prop_assert!(r * r <= n);
        prop_assert!((r + 1) * (r + 1) > n);
    }

    #[test]
    fn prop_squares_are_perfect_squares(r in 0i64..3_037_000_499) {
        prop_assert!(is_perfect_square(r * r));
    }

    #[test]
    fn prop_digit_sum_ignores_sign(n in (i64::MIN + 1)..i64::MAX) {
        prop_assert_eq!(digit_sum(n), digit_sum(-n));
    }

    #[test]
    fn prop_classify_is_idempotent(n in -100_000i64..100_000) {
        prop_assert_eq!(classify(n), classify(n));
    }

    #[test]
    fn prop_negatives_are_never_prime_perfect_or_square(n in i64::MIN..0) {
        prop_assert!(!is_prime(n));
        prop_assert!(!is_perfect_number(n));
        prop_assert!(!is_perfect_square(n));
    }
}
