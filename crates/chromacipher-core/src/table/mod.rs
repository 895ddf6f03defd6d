// crates/chromacipher-core/src/table/mod.rs
//
// Canonical character -> HSV table and its exact inverse.
// Built once from fixed generation rules; immutable afterwards. The table
// must stay bit-identical to the published color assignment, so the rules
// below are wire format, not implementation detail.

pub mod checksum;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::color::hsv::Hsv;
use crate::table::checksum::{blake3_16, hex16};

/// Saturation shared by every mapped entry (the sentinel alone uses 0).
pub const TABLE_SATURATION: u8 = 84;

/// Gray sentinel assigned to characters outside the table. Not reversible:
/// decoding it yields [`UNKNOWN_CHAR`] unless the caller carried the original
/// character out-of-band.
pub const UNMAPPED_HSV: Hsv = Hsv { h: 0, s: 0, v: 128 };

/// Placeholder emitted when decode cannot resolve a color.
pub const UNKNOWN_CHAR: char = '?';

/// Punctuation assignment, explicit literals: (char, hue, value).
/// The three bracket pairs deliberately share an HSV triple, which makes the
/// inverse lossy for those six characters. Kept for compatibility with the
/// published table; reverse lookup resolves each pair to its closing bracket
/// (last writer in this order).
const PUNCT: [(char, u16, u8); 19] = [
    (' ', 0, 50),
    ('.', 300, 60),
    (',', 60, 65),
    ('?', 180, 70),
    ('!', 15, 75),
    (':', 45, 80),
    (';', 75, 85),
    ('\'', 105, 90),
    ('"', 135, 95),
    ('-', 165, 100),
    ('_', 195, 105),
    ('/', 225, 110),
    ('\\', 255, 115),
    ('(', 285, 120),
    (')', 285, 120),
    ('[', 315, 125),
    (']', 315, 125),
    ('{', 345, 130),
    ('}', 345, 130),
];

pub struct CharColorTable {
    entries: Vec<(char, Hsv)>,
    forward: HashMap<char, Hsv>,
    inverse: HashMap<Hsv, char>,
}

impl CharColorTable {
    /// Build the canonical table. Entry order: uppercase, lowercase, digits,
    /// punctuation. Order matters only where HSV keys collide (the bracket
    /// pairs): inverse construction is last-writer-wins.
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(26 + 26 + 10 + PUNCT.len());

        for i in 0..26u8 {
            let v = 30 + 5 * i;
            entries.push(((b'A' + i) as char, Hsv::new(234, TABLE_SATURATION, v)));
        }
        for i in 0..26u8 {
            let v = 30 + 5 * i;
            entries.push(((b'a' + i) as char, Hsv::new(90, TABLE_SATURATION, v)));
        }
        for i in 0..10u8 {
            let v = 30 + 15 * i;
            entries.push(((b'0' + i) as char, Hsv::new(1, TABLE_SATURATION, v)));
        }
        for (ch, h, v) in PUNCT {
            entries.push((ch, Hsv::new(h, TABLE_SATURATION, v)));
        }

        let mut forward = HashMap::with_capacity(entries.len());
        let mut inverse = HashMap::with_capacity(entries.len());
        for &(ch, hsv) in &entries {
            forward.insert(ch, hsv);
            inverse.insert(hsv, ch);
        }

        Self {
            entries,
            forward,
            inverse,
        }
    }

    /// Process-wide shared instance. The table is read-only after
    /// construction, so it is safe to hand out from any thread.
    pub fn shared() -> &'static CharColorTable {
        static TABLE: OnceLock<CharColorTable> = OnceLock::new();
        TABLE.get_or_init(CharColorTable::new)
    }

    #[inline]
    pub fn lookup(&self, ch: char) -> Option<Hsv> {
        self.forward.get(&ch).copied()
    }

    /// Inverse lookup on the exact integer triple. No tolerance: rendered
    /// colors must carry their source HSV rather than re-derive it from hex.
    #[inline]
    pub fn reverse_lookup(&self, hsv: Hsv) -> Option<char> {
        self.inverse.get(&hsv).copied()
    }

    /// Entries in canonical order.
    pub fn entries(&self) -> &[(char, Hsv)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stable fingerprint of the canonical entry list (blake3, 128 bits,
    /// lowercase hex). Same table contents -> same id, on every build.
    pub fn table_id_hex(&self) -> String {
        let mut b = Vec::with_capacity(self.entries.len() * 8);
        for &(ch, hsv) in &self.entries {
            b.extend_from_slice(&(ch as u32).to_le_bytes());
            b.extend_from_slice(&hsv.h.to_le_bytes());
            b.push(hsv.s);
            b.push(hsv.v);
        }
        hex16(blake3_16(&b))
    }
}

impl Default for CharColorTable {
    fn default() -> Self {
        Self::new()
    }
}
