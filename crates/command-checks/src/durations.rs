//! # Durations
//!
//! Duration strings such as `"10h"`, `"1h30m"` or `"1.5h"`: an optional sign
//! followed by one or more `<number><unit>` terms with no separators. Units
//! are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare `"0"` is the only
//! term allowed without a unit.

const NANOS_PER_UNIT: [(&str, u128); 8] = [
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60_000_000_000),
    ("h", 3_600_000_000_000),
];

/// Fraction digits past this many no longer change the result.
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a duration into signed nanoseconds. `None` when the string does not
/// follow the grammar or the value does not fit in an `i64`.
pub fn parse_duration(value: &str) -> Option<i64> {
    let (negative, mut rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    if rest == "0" {
        return Some(0);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (nanos, tail) = parse_term(rest)?;
        total = total.checked_add(nanos)?;
        rest = tail;
    }

    let total = i128::try_from(total).ok()?;
    i64::try_from(if negative { -total } else { total }).ok()
}

/// One `<number><unit>` term, returning its value and the unparsed tail.
fn parse_term(input: &str) -> Option<(u128, &str)> {
    let (whole, tail) = split_digits(input);
    let (fraction, tail) = match tail.strip_prefix('.') {
        Some(tail) => split_digits(tail),
        None => ("", tail),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let unit_len = tail
        .find(|c: char| c == '.' || c.is_ascii_digit())
        .unwrap_or(tail.len());
    let (unit, tail) = tail.split_at(unit_len);
    let scale = NANOS_PER_UNIT
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, scale)| *scale)?;

    let mut nanos = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().ok()?.checked_mul(scale)?
    };
    if !fraction.is_empty() {
        let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
        let numerator = digits.parse::<u128>().ok()?;
        let denominator = 10u128.pow(digits.len() as u32);
        nanos = nanos.checked_add(numerator * scale / denominator)?;
    }

    Some((nanos, tail))
}

fn split_digits(input: &str) -> (&str, &str) {
    let len = input.bytes().take_while(u8::is_ascii_digit).count();
    input.split_at(len)
}
