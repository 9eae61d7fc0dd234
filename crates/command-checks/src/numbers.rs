//! # Arbitrary-Precision Number Parsing
//!
//! Amounts, prices and factors travel as decimal strings. They are parsed
//! with `num::BigInt` / `bigdecimal::BigDecimal` and never pass through a
//! binary float, so range checks like "factor > 0" are exact.
//!
//! The `check_*` helpers encode the recurring field shapes: each records at
//! most one error and returns the parsed value only when the field passed,
//! so callers can run cross-field rules on the returned values.

use crate::errors::{Cause, ErrorSet, PropertyPath};
use bigdecimal::BigDecimal;
use num::{BigInt, Signed, Zero};
use std::str::FromStr;

/// Parse a base-10 integer. Leading sign allowed, no fraction or exponent.
pub fn parse_integer(value: &str) -> Option<BigInt> {
    BigInt::from_str(value).ok()
}

/// Parse a decimal number, e.g. `"0.1"`, `"-3"`, `"1e-2"`.
pub fn parse_decimal(value: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(value).ok()
}

/// `(0, 1]`
pub fn is_fraction(value: &BigDecimal) -> bool {
    value.is_positive() && *value <= BigDecimal::from(1)
}

/// Required integer strictly above zero.
///
/// Empty: `is required`. Unparseable: `not_integer`. Zero or negative:
/// `must be positive`.
pub fn check_positive_integer(
    errs: &mut ErrorSet,
    path: impl Into<PropertyPath>,
    value: &str,
    not_integer: Cause,
) -> Option<BigInt> {
    let path = path.into();
    if value.is_empty() {
        errs.add(path, Cause::IsRequired);
        return None;
    }
    match parse_integer(value) {
        None => {
            errs.add(path, not_integer);
            None
        }
        Some(n) if !n.is_positive() => {
            errs.add(path, Cause::MustBePositive);
            None
        }
        Some(n) => Some(n),
    }
}

/// Integer that may be zero; same error wording as [`check_positive_integer`].
pub fn check_non_negative_integer(
    errs: &mut ErrorSet,
    path: impl Into<PropertyPath>,
    value: &str,
    not_integer: Cause,
) -> Option<BigInt> {
    let path = path.into();
    match parse_integer(value) {
        None => {
            errs.add(path, not_integer);
            None
        }
        Some(n) if n.is_negative() => {
            errs.add(path, Cause::MustBePositiveOrZero);
            None
        }
        Some(n) => Some(n),
    }
}

/// Required decimal strictly above zero.
pub fn check_positive_decimal(
    errs: &mut ErrorSet,
    path: impl Into<PropertyPath>,
    value: &str,
) -> Option<BigDecimal> {
    let path = path.into();
    if value.is_empty() {
        errs.add(path, Cause::IsRequired);
        return None;
    }
    match parse_decimal(value) {
        None => {
            errs.add(path, Cause::IsNotValidNumber);
            None
        }
        Some(d) if !d.is_positive() => {
            errs.add(path, Cause::MustBePositive);
            None
        }
        Some(d) => Some(d),
    }
}

/// Required decimal at or above zero.
pub fn check_non_negative_decimal(
    errs: &mut ErrorSet,
    path: impl Into<PropertyPath>,
    value: &str,
) -> Option<BigDecimal> {
    let path = path.into();
    if value.is_empty() {
        errs.add(path, Cause::IsRequired);
        return None;
    }
    match parse_decimal(value) {
        None => {
            errs.add(path, Cause::IsNotValidNumber);
            None
        }
        Some(d) if d.is_negative() => {
            errs.add(path, Cause::MustBePositiveOrZero);
            None
        }
        Some(d) => Some(d),
    }
}

/// Required decimal in `(0, 1]`.
pub fn check_fraction(
    errs: &mut ErrorSet,
    path: impl Into<PropertyPath>,
    value: &str,
    not_number: Cause,
) -> Option<BigDecimal> {
    let path = path.into();
    if value.is_empty() {
        errs.add(path, Cause::IsRequired);
        return None;
    }
    match parse_decimal(value) {
        None => {
            errs.add(path, not_number);
            None
        }
        Some(d) if !is_fraction(&d) => {
            errs.add(path, Cause::MustBeBetween01);
            None
        }
        Some(d) => Some(d),
    }
}

/// True for the decimal zero, whatever its scale (`"0"`, `"0.000"`).
pub fn is_zero(value: &BigDecimal) -> bool {
    value.is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("-10"), Some(BigInt::from(-10)));
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer(""), None);
        assert!(parse_integer("115792089237316195423570985008687907853269984665640564039457584007913129639936").is_some());
    }

    #[test]
    fn test_parse_decimal_is_exact() {
        let a = parse_decimal("0.1").unwrap() + parse_decimal("0.2").unwrap();
        assert_eq!(a, parse_decimal("0.3").unwrap());
        assert!(parse_decimal("abc").is_none());
    }

    #[test]
    fn test_fraction_bounds() {
        assert!(is_fraction(&parse_decimal("1").unwrap()));
        assert!(is_fraction(&parse_decimal("0.0001").unwrap()));
        assert!(!is_fraction(&parse_decimal("0").unwrap()));
        assert!(!is_fraction(&parse_decimal("1.0000001").unwrap()));
    }

    #[test]
    fn test_check_positive_integer_causes() {
        let mut errs = ErrorSet::new();
        assert!(check_positive_integer(&mut errs, "a", "", Cause::NotAValidInteger).is_none());
        assert!(check_positive_integer(&mut errs, "b", "x", Cause::NotAValidInteger).is_none());
        assert!(check_positive_integer(&mut errs, "c", "-10", Cause::NotAValidInteger).is_none());
        assert!(check_positive_integer(&mut errs, "d", "10", Cause::NotAValidInteger).is_some());

        assert_eq!(
            errs.render(),
            "a (is required), b (not a valid integer), c (must be positive)"
        );
    }

    #[test]
    fn test_check_fraction_causes() {
        let mut errs = ErrorSet::new();
        check_fraction(&mut errs, "f", "bbbb", Cause::IsNotValid);
        check_fraction(&mut errs, "g", "-0.5", Cause::IsNotValid);
        check_fraction(&mut errs, "h", "0.5", Cause::IsNotValid);

        assert_eq!(
            errs.render(),
            "f (is not a valid value), g (must be between 0 (excluded) and 1 (included))"
        );
    }

    #[test]
    fn test_zero_with_scale() {
        assert!(is_zero(&parse_decimal("0.000").unwrap()));
    }
}
