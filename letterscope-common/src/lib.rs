//! # Shared Letter Tally Types
//!
//! Defines the fixed alphabet partition and the frequency tally shared between
//! the `letterscope` client, its headless mode and the demo counting server.
//!
//! ## Key Types
//!
//! - [`Category`] - Which half of the Latin alphabet is counted
//! - [`FrequencyMap`] - Letter → count tally covering every key of a category
//! - [`analyze`] - Local tally of a text for one category
//!
//! Key order is the declaration order of [`VOWELS`] and [`CONSONANTS`]. Every
//! tally carries all keys of its category, zero counts included.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeMap, Serialize, Serializer};

// ============================================================================
// Key Sets
// ============================================================================

/// Vowel keys in display order
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Consonant keys in display order (Latin alphabet minus [`VOWELS`])
pub const CONSONANTS: [char; 21] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'X', 'Y', 'Z',
];

// ============================================================================
// Category
// ============================================================================

/// Letter category selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum Category {
    Vowels,
    Consonants,
}

impl Category {
    /// Fixed key set of this category, in display order
    #[must_use]
    pub const fn letters(self) -> &'static [char] {
        match self {
            Category::Vowels => &VOWELS,
            Category::Consonants => &CONSONANTS,
        }
    }

    /// Human-readable label ("Vowels" / "Consonants")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Vowels => "Vowels",
            Category::Consonants => "Consonants",
        }
    }

    /// The other category
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Category::Vowels => Category::Consonants,
            Category::Consonants => Category::Vowels,
        }
    }

    /// Position of `letter` in this category's key set
    #[must_use]
    pub fn index_of(self, letter: char) -> Option<usize> {
        self.letters().iter().position(|&k| k == letter)
    }

    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        self.index_of(letter).is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Frequency Map
// ============================================================================

/// Occurrence count per letter of one category.
///
/// Counts are stored parallel to [`Category::letters`], so the key set is
/// always complete and can never contain a letter outside the category.
/// With the `serde` feature it serializes as a letter → count object in key
/// order, the shape the counting service answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap {
    category: Category,
    counts: Vec<u64>,
}

impl FrequencyMap {
    /// All-zero tally over the category's key set
    #[must_use]
    pub fn zeroed(category: Category) -> Self {
        Self { category, counts: vec![0; category.letters().len()] }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Count for `letter`, or `None` if the letter is not a key of this category
    #[must_use]
    pub fn get(&self, letter: char) -> Option<u64> {
        self.category.index_of(letter).map(|i| self.counts[i])
    }

    /// Overwrite the count for `letter`. Returns `false` for non-keys.
    pub fn set(&mut self, letter: char, count: u64) -> bool {
        match self.category.index_of(letter) {
            Some(i) => {
                self.counts[i] = count;
                true
            }
            None => false,
        }
    }

    /// Add one to the count for `letter`. Returns `false` for non-keys.
    pub fn increment(&mut self, letter: char) -> bool {
        match self.category.index_of(letter) {
            Some(i) => {
                self.counts[i] += 1;
                true
            }
            None => false,
        }
    }

    /// `(letter, count)` pairs in key order, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.category.letters().iter().copied().zip(self.counts.iter().copied())
    }

    /// `(letter, count)` pairs in key order with zero counts skipped
    pub fn nonzero(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.iter().filter(|&(_, count)| count > 0)
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest single count (0 for an all-zero tally)
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Number of keys (5 for vowels, 21 for consonants)
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always `false`: every category has at least one key
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(feature = "serde")]
impl Serialize for FrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (letter, count) in self.iter() {
            map.serialize_entry(&letter, &count)?;
        }
        map.end()
    }
}

// ============================================================================
// Analyzer
// ============================================================================

/// Count every key of `category` in `text`.
///
/// Each character is upper-cased on its own. Characters whose upper case is
/// not a single key of the category (digits, punctuation, the other category,
/// `Ä`, `Ö`, `Ü`, and `ß` which upper-cases to two letters) are ignored.
#[must_use]
pub fn analyze(text: &str, category: Category) -> FrequencyMap {
    let mut counts = FrequencyMap::zeroed(category);
    for letter in text.chars().filter_map(fold_case) {
        counts.increment(letter);
    }
    counts
}

#[must_use]
pub fn analyze_vowels(text: &str) -> FrequencyMap {
    analyze(text, Category::Vowels)
}

#[must_use]
pub fn analyze_consonants(text: &str) -> FrequencyMap {
    analyze(text, Category::Consonants)
}

/// Upper case of `c` when it maps to exactly one character
fn fold_case(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}
