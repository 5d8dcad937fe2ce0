//! Collation policies for the sorted word listing.
//!
//! The Ukrainian policy is a table-driven, multi-level comparison:
//!
//! 1. Primary: characters are compared case-insensitively by group, digits
//!    first, then Latin letters, then the Ukrainian alphabet in dictionary
//!    order, then everything else by code point. Apostrophes and hyphens are
//!    ignored at this level, so `п'ять` sorts next to `пять`.
//! 2. Tertiary: at the first position where case differs, lowercase wins.
//! 3. Code point order breaks any remaining tie, which keeps the ordering total.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ukrainian alphabet in collation order.
const UKRAINIAN_ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

/// Characters skipped at the primary level.
const IGNORABLE: &[char] = &['\'', '\u{2019}', '\u{02BC}', '-'];

/// Ordering policy for [`super::PrefixDictionary::all_words_sorted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collation {
    /// Ukrainian dictionary order with Latin letters and digits sorted ahead.
    #[default]
    Ukrainian,
    /// Plain Unicode scalar value order.
    Codepoint,
}

/// Primary weight of a single character: (group, position inside group).
fn primary_weight(c: char) -> (u8, u32) {
    let lower = c.to_lowercase().next().unwrap_or(c);
    if lower.is_ascii_digit() {
        return (0, lower as u32);
    }
    if lower.is_ascii_lowercase() {
        return (1, lower as u32);
    }
    match UKRAINIAN_ALPHABET.chars().position(|letter| letter == lower) {
        Some(index) => (2, index as u32),
        None => (3, lower as u32),
    }
}

fn primary_key(word: &str) -> impl Iterator<Item = (u8, u32)> + '_ {
    word.chars()
        .filter(|c| !IGNORABLE.contains(c))
        .map(primary_weight)
}

/// Case pattern of a word; `false` for lowercase-or-caseless, `true` for uppercase.
fn case_key(word: &str) -> impl Iterator<Item = bool> + '_ {
    word.chars()
        .filter(|c| !IGNORABLE.contains(c))
        .map(char::is_uppercase)
}

impl Collation {
    /// Compares two words under this policy.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Codepoint => a.cmp(b),
            Self::Ukrainian => primary_key(a)
                .cmp(primary_key(b))
                .then_with(|| case_key(a).cmp(case_key(b)))
                .then_with(|| a.cmp(b)),
        }
    }

    /// Sorts `words` in place under this policy.
    pub fn sort(&self, words: &mut [String]) {
        words.sort_by(|a, b| self.compare(a, b));
    }
}
