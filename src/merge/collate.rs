//! Locale-aware title ordering.
//!
//! Titles are compared with the Unicode Collation Algorithm using the CLDR root collation
//! (`feruca`), so accents and case are secondary and tertiary differences instead of byte
//! order: `"Amélie"` sorts with the other A titles, not after `"Zodiac"`. Spaces and
//! punctuation are non-ignorable and sort before letters (`"A Zoo"` before `"Aardvark"`).

use std::cmp::Ordering;

use feruca::{Collator, Tailoring};

use crate::merge::MergedEntry;

pub struct TitleCollator {
    collator: Collator,
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self {
            // non-ignorable variable weighting, byte tiebreak for equal collation keys
            collator: Collator::new(Tailoring::default(), false, true),
        }
    }
}

impl TitleCollator {
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.collator.collate(a, b)
    }

    /// Stable sort by title; entries that collate equal keep their current order.
    pub fn sort_entries(&mut self, entries: &mut [MergedEntry]) {
        entries.sort_by(|a, b| self.collator.collate(a.title.as_str(), b.title.as_str()));
    }

    pub fn is_sorted(&mut self, entries: &[MergedEntry]) -> bool {
        entries
            .windows(2)
            .all(|pair| self.compare(&pair[0].title, &pair[1].title) != Ordering::Greater)
    }
}
