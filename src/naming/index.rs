//! Parsing of the numeric index out of already-renamed file stems.

use crate::error::Result;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

/// Non-negative decimal index of any size, kept as canonical digits.
///
/// Existing names may carry numbers far beyond `u64`; numbering must still
/// continue above them, so the value is never narrowed to a machine integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceIndex(String);

impl SequenceIndex {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Parses an ASCII digit run. Leading zeros are dropped, so `007` is `7`.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Some(Self::zero())
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The index one above this one.
    pub fn next(&self) -> Self {
        let mut digits: Vec<char> = self.0.chars().collect();
        let mut pos = digits.len();

        loop {
            if pos == 0 {
                digits.insert(0, '1');
                break;
            }
            pos -= 1;
            match digits[pos] {
                '9' => digits[pos] = '0',
                d => {
                    digits[pos] = char::from(d as u8 + 1);
                    break;
                }
            }
        }

        Self(digits.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SequenceIndex {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for SequenceIndex {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Ord for SequenceIndex {
    // Canonical digits: a longer run is a larger number.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SequenceIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SequenceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compiled `^{prefix}_([0-9]+)` matcher for one prefix.
///
/// The prefix is escaped, so `.` or `+` in a prefix match literally. Only the
/// start of the stem is anchored: `img_12_edit` yields `12`.
#[derive(Debug, Clone)]
pub struct IndexPattern {
    regex: Regex,
}

impl IndexPattern {
    pub fn new(prefix: &str) -> Result<Self> {
        let regex = Regex::new(&format!(r"^{}_([0-9]+)", regex::escape(prefix)))?;
        Ok(Self { regex })
    }

    /// Returns the index encoded in `stem`, if any.
    pub fn parse(&self, stem: &str) -> Option<SequenceIndex> {
        self.regex
            .captures(stem)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| SequenceIndex::from_digits(digits.as_str()))
    }
}

/// One-shot form of [`IndexPattern::parse`].
pub fn parse_prefixed_index(stem: &str, prefix: &str) -> Option<SequenceIndex> {
    IndexPattern::new(prefix).ok()?.parse(stem)
}

/// First free index after the highest one already used by `stems`, or `0`.
pub fn next_index<'a, I>(pattern: &IndexPattern, stems: I) -> SequenceIndex
where
    I: IntoIterator<Item = &'a str>,
{
    stems
        .into_iter()
        .filter_map(|stem| pattern.parse(stem))
        .max()
        .map_or_else(SequenceIndex::zero, |max| max.next())
}
