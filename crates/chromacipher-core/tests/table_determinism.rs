// crates/chromacipher-core/tests/table_determinism.rs

use chromacipher_core::table::{CharColorTable, TABLE_SATURATION, UNMAPPED_HSV};
use chromacipher_core::validate::validate_table;
use chromacipher_core::Hsv;

#[test]
fn two_builds_are_identical() {
    let t1 = CharColorTable::new();
    let t2 = CharColorTable::new();

    assert_eq!(t1.entries(), t2.entries());
    assert_eq!(t1.table_id_hex(), t2.table_id_hex());
    for &(ch, hsv) in t1.entries() {
        assert_eq!(t2.lookup(ch), Some(hsv));
    }
}

#[test]
fn shared_instance_matches_fresh_build() {
    let fresh = CharColorTable::new();
    let shared = CharColorTable::shared();
    assert_eq!(shared.entries(), fresh.entries());
    assert_eq!(shared.table_id_hex(), fresh.table_id_hex());
}

#[test]
fn table_passes_structural_validation() {
    validate_table(&CharColorTable::new()).expect("canonical table must validate");
}

#[test]
fn entry_count_and_saturation() {
    let t = CharColorTable::new();
    // 26 upper + 26 lower + 10 digits + 19 punctuation entries
    assert_eq!(t.len(), 81);
    for &(_, hsv) in t.entries() {
        assert_eq!(hsv.s, TABLE_SATURATION);
    }
}

#[test]
fn generation_rules_spot_checks() {
    let t = CharColorTable::new();

    // letters: hue 234 / 90, value 30 + 5*i
    assert_eq!(t.lookup('A'), Some(Hsv::new(234, 84, 30)));
    assert_eq!(t.lookup('H'), Some(Hsv::new(234, 84, 65)));
    assert_eq!(t.lookup('Z'), Some(Hsv::new(234, 84, 155)));
    assert_eq!(t.lookup('a'), Some(Hsv::new(90, 84, 30)));
    assert_eq!(t.lookup('i'), Some(Hsv::new(90, 84, 70)));
    assert_eq!(t.lookup('z'), Some(Hsv::new(90, 84, 155)));

    // digits: hue 1, value 30 + 15*i
    assert_eq!(t.lookup('0'), Some(Hsv::new(1, 84, 30)));
    assert_eq!(t.lookup('9'), Some(Hsv::new(1, 84, 165)));

    // punctuation literals
    assert_eq!(t.lookup(' '), Some(Hsv::new(0, 84, 50)));
    assert_eq!(t.lookup('.'), Some(Hsv::new(300, 84, 60)));
    assert_eq!(t.lookup('\\'), Some(Hsv::new(255, 84, 115)));
    assert_eq!(t.lookup('}'), Some(Hsv::new(345, 84, 130)));

    // outside the alphabet
    assert_eq!(t.lookup('€'), None);
    assert_eq!(t.lookup('\n'), None);
}

#[test]
fn reverse_lookup_is_exact_integer_match() {
    let t = CharColorTable::new();
    assert_eq!(t.reverse_lookup(Hsv::new(234, 84, 65)), Some('H'));
    // off by one in any component is a miss, never a fuzzy hit
    assert_eq!(t.reverse_lookup(Hsv::new(234, 84, 66)), None);
    assert_eq!(t.reverse_lookup(Hsv::new(235, 84, 65)), None);
    assert_eq!(t.reverse_lookup(Hsv::new(234, 83, 65)), None);
}

#[test]
fn bracket_pairs_alias_and_resolve_to_closing() {
    let t = CharColorTable::new();
    for (open, close) in [('(', ')'), ('[', ']'), ('{', '}')] {
        let hsv = t.lookup(open).unwrap();
        assert_eq!(t.lookup(close), Some(hsv), "pair {open}{close} must alias");
        // last writer in table order wins
        assert_eq!(t.reverse_lookup(hsv), Some(close));
    }
}

#[test]
fn sentinel_is_outside_the_table() {
    let t = CharColorTable::new();
    assert_eq!(UNMAPPED_HSV, Hsv { h: 0, s: 0, v: 128 });
    assert_eq!(t.reverse_lookup(UNMAPPED_HSV), None);
}
