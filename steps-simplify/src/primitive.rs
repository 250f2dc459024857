//! Functions to construct and inspect the exact [`Integer`]s and [`Rational`]s used as constants.

use rug::{ops::Pow, Integer, Rational};
use std::cmp::Ordering;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Returns the non-negative greatest common divisor of the two integers.
pub fn gcd(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a.gcd_ref(b))
}

/// Returns the non-negative least common multiple of the two integers.
pub fn lcm(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a.lcm_ref(b))
}

/// Returns the divisor used to reduce the fraction `numerator / denominator`.
///
/// This is the greatest common divisor of both parts, negated when the denominator is negative so
/// that dividing both parts by it leaves a positive denominator.
pub fn reducing_divisor(numerator: &Integer, denominator: &Integer) -> Integer {
    let divisor = gcd(numerator, denominator);
    if denominator.cmp0() == Ordering::Less {
        -divisor
    } else {
        divisor
    }
}

/// Returns the exact `n`th root of the integer, if there is one.
pub fn exact_root(value: &Integer, n: u32) -> Option<Integer> {
    if n == 0 {
        return None;
    }

    let negative = value.cmp0() == Ordering::Less;
    if negative && n % 2 == 0 {
        return None;
    }

    let magnitude = Integer::from(value.abs_ref());
    let root = magnitude.clone().root(n);
    if Integer::from((&root).pow(n)) != magnitude {
        return None;
    }

    Some(if negative { -root } else { root })
}

/// Returns the exact `n`th root of the rational, if there is one.
pub fn rational_root(value: &Rational, n: u32) -> Option<Rational> {
    let numer = exact_root(value.numer(), n)?;
    let denom = exact_root(value.denom(), n)?;
    Some(Rational::from((numer, denom)))
}

/// Renders the rational as a decimal, if its expansion terminates.
///
/// Integers render without a decimal point.
pub fn terminating_decimal(value: &Rational) -> Option<String> {
    if value.is_integer() {
        return Some(value.numer().to_string());
    }

    let mut rest = value.denom().clone();
    let mut twos = 0u32;
    while rest.is_even() {
        rest /= 2u32;
        twos += 1;
    }
    let mut fives = 0u32;
    while rest.is_divisible_u(5) {
        rest /= 5u32;
        fives += 1;
    }
    if rest != 1 {
        return None;
    }

    let places = twos.max(fives);
    let scale = Integer::from(Integer::u_pow_u(10, places));
    let scaled = Integer::from(value.numer() * &scale) / value.denom();

    let mut digits = Integer::from(scaled.abs_ref()).to_string();
    let width = places as usize + 1;
    if digits.len() < width {
        digits = format!("{}{}", "0".repeat(width - digits.len()), digits);
    }
    digits.insert(digits.len() - places as usize, '.');

    if scaled.cmp0() == Ordering::Less {
        digits.insert(0, '-');
    }
    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(&int(4), &int(6)), 2);
        assert_eq!(gcd(&int(-4), &int(6)), 2);
        assert_eq!(lcm(&int(4), &int(6)), 12);
    }

    #[test]
    fn reducing_divisor_flips_for_negative_denominator() {
        assert_eq!(reducing_divisor(&int(2), &int(-4)), -2);
        assert_eq!(reducing_divisor(&int(-2), &int(4)), 2);
    }

    #[test]
    fn exact_roots() {
        assert_eq!(exact_root(&int(16), 2), Some(int(4)));
        assert_eq!(exact_root(&int(-27), 3), Some(int(-3)));
        assert_eq!(exact_root(&int(-4), 2), None);
        assert_eq!(exact_root(&int(8), 2), None);
        assert_eq!(rational_root(&rational((4, 9)), 2), Some(rational((2, 3))));
    }

    #[test]
    fn decimals() {
        assert_eq!(terminating_decimal(&rational(7)).as_deref(), Some("7"));
        assert_eq!(terminating_decimal(&rational((1, 2))).as_deref(), Some("0.5"));
        assert_eq!(terminating_decimal(&rational((-3, 40))).as_deref(), Some("-0.075"));
        assert_eq!(terminating_decimal(&rational((1, 3))), None);
    }
}
