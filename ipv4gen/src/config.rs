//! This module controls configuration parsing from the end user, providing a
//! convenience mechanism for the rest of the program.

use std::num::IntErrorKind;

use tracing::warn;

/// Number of addresses generated when no count is given.
pub const DEFAULT_COUNT: u64 = 10_000_000;

/// Run configuration, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How many addresses to generate.
    pub count: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
        }
    }
}

impl Config {
    /// Build a `Config` from the raw `--count` argument.
    ///
    /// This never fails. A missing argument gives [`DEFAULT_COUNT`], negative
    /// values give zero and values past `u64::MAX` saturate. Base prefixes
    /// (`0x`, `0o`, `0b`, leading `0` for octal) and `_` digit separators are
    /// accepted. Anything else falls back to [`DEFAULT_COUNT`] with a warning.
    #[must_use]
    pub fn from_count_arg(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match parse_count(raw.trim()) {
            Some(count) => Self { count },
            None => {
                warn!("Ignoring malformed count {raw:?}, using default of {DEFAULT_COUNT}");
                Self::default()
            }
        }
    }
}

// Integer literal forms: optional sign, then decimal, `0x`, `0o`, `0b` or a
// bare leading `0` for octal. `_` may only sit between digits or right after
// a base prefix.
fn parse_count(raw: &str) -> Option<u64> {
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let (radix, digits, prefixed) = split_radix(unsigned);
    if digits.is_empty() || !underscores_ok(digits, prefixed) {
        return None;
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    let magnitude = match u64::from_str_radix(&digits, radix) {
        Ok(magnitude) => magnitude,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => return None,
    };
    Some(if negative { 0 } else { magnitude })
}

fn split_radix(unsigned: &str) -> (u32, &str, bool) {
    let bytes = unsigned.as_bytes();
    match bytes {
        [b'0', b'x' | b'X', ..] => (16, &unsigned[2..], true),
        [b'0', b'o' | b'O', ..] => (8, &unsigned[2..], true),
        [b'0', b'b' | b'B', ..] => (2, &unsigned[2..], true),
        [b'0', _, ..] => (8, &unsigned[1..], true),
        _ => (10, unsigned, false),
    }
}

fn underscores_ok(digits: &str, prefixed: bool) -> bool {
    let mut after_digit = prefixed;
    for b in digits.bytes() {
        if b == b'_' {
            if !after_digit {
                return false;
            }
            after_digit = false;
        } else {
            after_digit = true;
        }
    }
    after_digit
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{Config, DEFAULT_COUNT};

    #[test]
    fn missing_count_is_default() {
        assert_eq!(Config::from_count_arg(None).count, DEFAULT_COUNT);
        assert_eq!(Config::default().count, 10_000_000);
    }

    #[test]
    fn explicit_counts() {
        assert_eq!(Config::from_count_arg(Some("3")).count, 3);
        assert_eq!(Config::from_count_arg(Some("0")).count, 0);
        assert_eq!(Config::from_count_arg(Some(" 42 ")).count, 42);
        assert_eq!(Config::from_count_arg(Some("+7")).count, 7);
    }

    #[test]
    fn negative_counts_are_zero() {
        assert_eq!(Config::from_count_arg(Some("-1")).count, 0);
        assert_eq!(Config::from_count_arg(Some("-10000000")).count, 0);
        assert_eq!(
            Config::from_count_arg(Some("-99999999999999999999999")).count,
            0
        );
    }

    #[test]
    fn oversized_counts_saturate() {
        assert_eq!(
            Config::from_count_arg(Some("18446744073709551615")).count,
            u64::MAX
        );
        assert_eq!(
            Config::from_count_arg(Some("99999999999999999999999")).count,
            u64::MAX
        );
    }

    #[test]
    fn prefixed_and_grouped_counts() {
        assert_eq!(Config::from_count_arg(Some("0x10")).count, 16);
        assert_eq!(Config::from_count_arg(Some("0X1f")).count, 31);
        assert_eq!(Config::from_count_arg(Some("0o20")).count, 16);
        assert_eq!(Config::from_count_arg(Some("0b101")).count, 5);
        assert_eq!(Config::from_count_arg(Some("010")).count, 8);
        assert_eq!(Config::from_count_arg(Some("1_000")).count, 1_000);
        assert_eq!(Config::from_count_arg(Some("0x_ff")).count, 255);
        assert_eq!(Config::from_count_arg(Some("-0x10")).count, 0);
        assert_eq!(
            Config::from_count_arg(Some("0xffffffffffffffffff")).count,
            u64::MAX
        );
    }

    #[test]
    fn malformed_counts_fall_back_to_default() {
        for raw in [
            "", "abc", "1.5", "3x", "--", "-", "+-1", "0x", "0x+5", "08", "0b2", "1__0", "_1",
            "1_", "ount=5",
        ] {
            assert_eq!(
                Config::from_count_arg(Some(raw)).count,
                DEFAULT_COUNT,
                "raw count {raw:?}"
            );
        }
    }

    proptest! {
        #[test]
        fn signed_counts_clamp_at_zero(count: i64) {
            let config = Config::from_count_arg(Some(&count.to_string()));
            prop_assert_eq!(config.count, u64::try_from(count.max(0)).expect("non-negative"));
        }

        #[test]
        fn unsigned_counts_round_trip(count: u64) {
            let config = Config::from_count_arg(Some(&count.to_string()));
            prop_assert_eq!(config.count, count);
        }
    }
}
