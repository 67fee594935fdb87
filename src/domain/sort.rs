//! Canonical ordering of domains.
//!
//! Domains are ordered by their sort key (the name without a leading `www.`)
//! using case-insensitive natural order, so `host2.example` sorts before
//! `host10.example`. A `www.` variant always sorts directly after its apex.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use super::Domain;

/// Total order used for the final domain list.
///
/// 1. Sort keys in natural order (see [`natural_cmp_ignore_case`])
/// 2. On equal keys, the apex before its `www.` sibling
/// 3. Remaining ties (e.g. `a01.com` vs `a1.com`) by raw string
pub fn compare_domains(left: &Domain, right: &Domain) -> Ordering {
    natural_cmp_ignore_case(left.sort_key(), right.sort_key())
        .then_with(|| left.is_www_variant().cmp(&right.is_www_variant()))
        .then_with(|| left.as_str().cmp(right.as_str()))
}

/// A run of ASCII digits or a single other character.
enum Chunk {
    Digits(String),
    Char(char),
}

fn next_chunk(chars: &mut Peekable<Chars<'_>>) -> Option<Chunk> {
    let first = chars.next()?;
    if !first.is_ascii_digit() {
        return Some(Chunk::Char(first.to_ascii_lowercase()));
    }

    let mut digits = String::from(first);
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    Some(Chunk::Digits(digits))
}

/// Compares two digit runs by numeric value without parsing into an integer,
/// so arbitrarily long runs cannot overflow.
fn cmp_digit_runs(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

/// Case-insensitive natural-order comparison.
///
/// Digit runs compare by numeric value (`a2 < a10`); everything else compares
/// character by character after ASCII lowercasing. Digit runs that differ only
/// in leading zeros compare equal here.
pub fn natural_cmp_ignore_case(left: &str, right: &str) -> Ordering {
    let mut left_chars = left.chars().peekable();
    let mut right_chars = right.chars().peekable();

    loop {
        let ordering = match (next_chunk(&mut left_chars), next_chunk(&mut right_chars)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(l)), Some(Chunk::Digits(r))) => cmp_digit_runs(&l, &r),
            (Some(Chunk::Char(l)), Some(Chunk::Char(r))) => l.cmp(&r),
            // A digit against a non-digit: compare as characters. Non-digits
            // never fall inside '0'..='9', so this stays consistent.
            (Some(Chunk::Digits(l)), Some(Chunk::Char(r))) => leading_char(&l).cmp(&r),
            (Some(Chunk::Char(l)), Some(Chunk::Digits(r))) => l.cmp(&leading_char(&r)),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn leading_char(digits: &str) -> char {
    digits.chars().next().unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_cmp_numbers_by_value() {
        assert_eq!(natural_cmp_ignore_case("host2", "host10"), Ordering::Less);
        assert_eq!(natural_cmp_ignore_case("host10", "host2"), Ordering::Greater);
        assert_eq!(natural_cmp_ignore_case("a9b", "a10a"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_ignores_case() {
        assert_eq!(natural_cmp_ignore_case("Example", "example"), Ordering::Equal);
        assert_eq!(natural_cmp_ignore_case("ALPHA", "beta"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_leading_zeros() {
        assert_eq!(natural_cmp_ignore_case("a007", "a7"), Ordering::Equal);
        assert_eq!(natural_cmp_ignore_case("a007", "a8"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_prefix_is_smaller() {
        assert_eq!(natural_cmp_ignore_case("example", "example.com"), Ordering::Less);
        assert_eq!(natural_cmp_ignore_case("", "a"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_digits_against_punctuation() {
        // '-' (0x2d) < digits < letters
        assert_eq!(natural_cmp_ignore_case("a-b", "a1b"), Ordering::Less);
        assert_eq!(natural_cmp_ignore_case("a1b", "aab"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_long_digit_runs() {
        let big = "9".repeat(64);
        let bigger = format!("1{}", "0".repeat(64));
        assert_eq!(natural_cmp_ignore_case(&big, &bigger), Ordering::Less);
    }

    #[test]
    fn test_compare_domains_www_after_apex() {
        let apex = Domain::parse("example.com").unwrap();
        let www = Domain::parse("www.example.com").unwrap();
        assert_eq!(compare_domains(&apex, &www), Ordering::Less);
        assert_eq!(compare_domains(&www, &apex), Ordering::Greater);
    }

    #[test]
    fn test_compare_domains_uses_sort_key_across_groups() {
        let www_alpha = Domain::parse("www.alpha.com").unwrap();
        let beta = Domain::parse("beta.com").unwrap();
        assert_eq!(compare_domains(&www_alpha, &beta), Ordering::Less);
    }

    #[test]
    fn test_compare_domains_is_total_on_numeric_ties() {
        let padded = Domain::parse("a01.com").unwrap();
        let plain = Domain::parse("a1.com").unwrap();
        assert_ne!(compare_domains(&padded, &plain), Ordering::Equal);
        assert_eq!(
            compare_domains(&padded, &plain),
            compare_domains(&plain, &padded).reverse()
        );
    }
}
