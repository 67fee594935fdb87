//! Domain validation and domain set building.
//!
//! This module turns the raw lines of an input file into the ordered list of
//! domains that get queried:
//! - `Domain::parse()` - Validates and lowercases a single domain name
//! - `build_domain_set()` - Validates every line, expands `www.` variants,
//!   deduplicates and sorts

mod sort;

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub use sort::{compare_domains, natural_cmp_ignore_case};

use crate::config::DOMAIN_PATTERN;

static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOMAIN_PATTERN).expect("DOMAIN_PATTERN is a valid regex"));

const WWW_PREFIX: &str = "www.";

/// A line of the input file that is not a valid domain name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid domain name: {line}")]
pub struct ValidationError {
    /// The offending line, trimmed
    pub line: String,
}

/// A syntactically valid, lowercased domain name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Validates `input` (already trimmed) and lowercases it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `input` does not match `label(.label)+`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if !DOMAIN_RE.is_match(input) {
            return Err(ValidationError {
                line: input.to_string(),
            });
        }
        Ok(Domain(input.to_ascii_lowercase()))
    }

    /// The domain as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An apex domain has exactly two labels, e.g. `example.com`.
    pub fn is_apex(&self) -> bool {
        self.0.matches('.').count() == 1
    }

    /// Whether the domain starts with a literal `www.` label.
    pub fn has_www_prefix(&self) -> bool {
        self.0
            .get(..WWW_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(WWW_PREFIX))
    }

    /// The `www.` sibling of this domain.
    pub fn with_www(&self) -> Domain {
        Domain(format!("{WWW_PREFIX}{}", self.0))
    }

    /// Whether this is the `www.` sibling of another valid domain.
    ///
    /// `www.com` starts with `www.` but is itself an apex domain: stripping
    /// the prefix would leave a bare TLD.
    pub fn is_www_variant(&self) -> bool {
        self.has_www_prefix() && self.0[WWW_PREFIX.len()..].contains('.')
    }

    /// The domain with a leading `www.` stripped; used only for ordering.
    ///
    /// The prefix is kept when the rest is a single label, so `www.com` and
    /// its sibling `www.www.com` share the key `www.com`.
    pub fn sort_key(&self) -> &str {
        if self.is_www_variant() {
            &self.0[WWW_PREFIX.len()..]
        } else {
            &self.0
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds the ordered domain list from raw input lines.
///
/// Lines are trimmed and blank lines skipped. Every remaining line must be a
/// valid domain; the first one that is not aborts the build. With
/// `expand_www`, apex domains also get their `www.` variant. Duplicates
/// collapse, and the result is sorted with [`compare_domains`] so each
/// `www.` variant sits directly below its apex domain.
///
/// # Errors
///
/// Returns `ValidationError` for the first invalid line; no partial list is returned.
pub fn build_domain_set<I, S>(lines: I, expand_www: bool) -> Result<Vec<Domain>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut domains: HashSet<Domain> = HashSet::new();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        let domain = Domain::parse(line)?;
        if expand_www && domain.is_apex() {
            domains.insert(domain.with_www());
        }
        domains.insert(domain);
    }

    let mut ordered: Vec<Domain> = domains.into_iter().collect();
    ordered.sort_by(compare_domains);
    log::debug!("Built domain set with {} entries", ordered.len());
    Ok(ordered)
}
