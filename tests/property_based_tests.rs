//! Property-based tests over the core invariants of spec.md §8.

use lipyantara::aksara::{aksara_type, split_aksara};
use lipyantara::compile::compile;
use lipyantara::scheme::SchemeRegistry;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn max_token_length_bounds_every_recognized_token(seed: u8) -> bool {
    let pairs = [
        ("hk", "devanagari"),
        ("iast", "devanagari"),
        ("slp1", "devanagari"),
        ("itrans", "devanagari"),
        ("velthuis", "devanagari"),
    ];
    let (from, to) = pairs[seed as usize % pairs.len()];
    let registry = SchemeRegistry::new();
    let map = compile(&registry, from, to).unwrap();
    map.letters
        .keys()
        .chain(map.marks.keys())
        .all(|token| token.chars().count() <= map.max_token_length)
}

#[quickcheck]
fn aksara_type_length_matches_split_length(seed: u32) -> bool {
    const WORDS: &[&str] = &["rāma", "kṛṣṇa", "dharmakṣetre", "yoga", "rāmaḥ", "saṃskṛta"];
    let word = WORDS[seed as usize % WORDS.len()];
    let syllables = split_aksara(word);
    let types: String = syllables.iter().map(|s| aksara_type(s)).collect();
    types.chars().count() == syllables.len()
}

#[test]
fn virama_placement_matches_consonant_boundary() {
    use lipyantara::{Options, Transliterator};

    let t = Transliterator::new();
    let options = Options::default();

    // A bare trailing consonant gets a virama...
    let with_virama = t.transliterate("k", "hk", "devanagari", &options).unwrap();
    assert!(with_virama.ends_with('्'));

    // ...but not when followed by a vowel.
    let without_virama = t.transliterate("ka", "hk", "devanagari", &options).unwrap();
    assert!(!without_virama.ends_with('्'));

    // ...and not under syncope.
    let syncope_options = Options {
        syncope: true,
        ..Default::default()
    };
    let syncoped = t.transliterate("k", "hk", "devanagari", &syncope_options).unwrap();
    assert!(!syncoped.ends_with('्'));
}

#[test]
fn no_token_longer_than_max_token_length_is_ever_matched() {
    let registry = SchemeRegistry::new();
    let map = compile(&registry, "itrans", "devanagari").unwrap();
    assert!(map.letters.keys().chain(map.marks.keys()).all(|t| t.chars().count() <= map.max_token_length));
}
