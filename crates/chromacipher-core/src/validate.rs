use std::collections::{HashMap, HashSet};

use crate::color::hsv::Hsv;
use crate::error::{ChromaError, Result};
use crate::table::{CharColorTable, TABLE_SATURATION};

/// The three HSV collisions the table carries on purpose.
const ALIASED_PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// Structural invariants of the canonical table.
///
/// - every entry saturates at exactly 84
/// - hue stays below 360
/// - each character appears once
/// - HSV keys are pairwise-distinct except the three bracket pairs
pub fn validate_table(table: &CharColorTable) -> Result<()> {
    let mut seen_chars: HashSet<char> = HashSet::new();
    let mut by_hsv: HashMap<Hsv, Vec<char>> = HashMap::new();

    for &(ch, hsv) in table.entries() {
        if hsv.s != TABLE_SATURATION {
            return Err(ChromaError::Validation(format!(
                "entry {ch:?}: saturation {} != {TABLE_SATURATION}",
                hsv.s
            )));
        }
        if hsv.h >= 360 {
            return Err(ChromaError::Validation(format!(
                "entry {ch:?}: hue {} out of range",
                hsv.h
            )));
        }
        if !seen_chars.insert(ch) {
            return Err(ChromaError::Validation(format!(
                "duplicate character {ch:?}"
            )));
        }
        by_hsv.entry(hsv).or_default().push(ch);
    }

    for (hsv, chars) in &by_hsv {
        if chars.len() == 1 {
            continue;
        }
        let is_aliased_pair = chars.len() == 2
            && ALIASED_PAIRS
                .iter()
                .any(|&(a, b)| chars[0] == a && chars[1] == b);
        if !is_aliased_pair {
            return Err(ChromaError::Validation(format!(
                "unexpected HSV collision at {hsv:?}: {chars:?}"
            )));
        }
    }

    Ok(())
}
