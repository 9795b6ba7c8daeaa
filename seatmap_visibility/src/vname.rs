// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Natural ordering of seat display names.
//!
//! Seat names are an ASCII-alphabetic row prefix followed by a decimal seat
//! number (`A1`, `B12`, `AA3`). They sort by prefix first and then by number
//! as an integer, so `A2` comes before `A10`.

use core::cmp::Ordering;

/// Sort key of a seat display name.
///
/// Field order matters: the derived [`Ord`] compares the prefix first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VnameKey<'a> {
    /// Alphabetic prefix (possibly empty).
    pub prefix: &'a str,
    /// Numeric suffix; `0` when absent.
    pub number: u64,
}

/// Splits a seat name into its [`VnameKey`].
///
/// A name must be letters followed by digits, either part possibly empty.
/// Anything else (spaces, punctuation, letters after digits) yields the empty
/// key `("", 0)`. Numbers too large for `u64` saturate.
#[must_use]
pub fn parse_vname(name: &str) -> VnameKey<'_> {
    let split = name
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(name.len());
    let (prefix, digits) = name.split_at(split);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return VnameKey::default();
    }
    let number = digits.bytes().fold(0_u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });
    VnameKey { prefix, number }
}

/// Compares two seat names in natural order.
#[must_use]
pub fn compare_vnames(a: &str, b: &str) -> Ordering {
    parse_vname(a).cmp(&parse_vname(b))
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cmp::Ordering;

    use super::{VnameKey, compare_vnames, parse_vname};

    #[test]
    fn splits_prefix_and_number() {
        assert_eq!(
            parse_vname("AB12"),
            VnameKey {
                prefix: "AB",
                number: 12
            }
        );
        assert_eq!(parse_vname("C").number, 0);
        assert_eq!(parse_vname("42").prefix, "");
        assert_eq!(parse_vname("42").number, 42);
    }

    #[test]
    fn malformed_names_use_the_empty_key() {
        for name in ["A-1", "1A", "A 1", "좌석1", "A1b"] {
            assert_eq!(parse_vname(name), VnameKey::default(), "{name}");
        }
    }

    #[test]
    fn huge_numbers_saturate() {
        assert_eq!(parse_vname("A99999999999999999999999").number, u64::MAX);
    }

    #[test]
    fn natural_order() {
        let mut names: Vec<&str> = vec!["B1", "A10", "A2", "A1"];
        names.sort_by(|a, b| compare_vnames(a, b));
        assert_eq!(names, ["A1", "A2", "A10", "B1"]);
        assert_eq!(compare_vnames("A01", "A1"), Ordering::Equal);
    }
}
