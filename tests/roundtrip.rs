//! Bijective round-trip properties (spec.md §8 "Round-trips").

use lipyantara::{Options, Transliterator};
use quickcheck_macros::quickcheck;

const HK_CONSONANTS: &[&str] = &[
    "k", "kh", "g", "gh", "G", "c", "ch", "j", "jh", "J", "T", "Th", "D", "Dh", "N", "t", "th", "d",
    "dh", "n", "p", "ph", "b", "bh", "m", "y", "r", "l", "v", "z", "S", "s", "h",
];
const HK_VOWELS: &[&str] = &["a", "A", "i", "I", "u", "U", "R", "e", "ai", "o", "au"];

fn arbitrary_hk_word(seed: u32) -> String {
    let mut word = String::new();
    let mut n = seed;
    let syllables = 2 + (n % 4);
    for _ in 0..syllables {
        word.push_str(HK_CONSONANTS[(n as usize) % HK_CONSONANTS.len()]);
        n = n.wrapping_mul(1103515245).wrapping_add(12345);
        word.push_str(HK_VOWELS[(n as usize) % HK_VOWELS.len()]);
        n = n.wrapping_mul(1103515245).wrapping_add(12345);
    }
    word
}

#[test]
fn hk_devanagari_hk_ascii_words_are_identity() {
    let t = Transliterator::new();
    let options = Options::default();
    for word in ["rAma", "kRSNa", "yoga", "dharma", "zAnti", "guru"] {
        let deva = t.transliterate(word, "hk", "devanagari", &options).unwrap();
        let back = t.transliterate(&deva, "devanagari", "hk", &options).unwrap();
        assert_eq!(back, word, "round trip failed for {word}");
    }
}

#[quickcheck]
fn hk_devanagari_roundtrip_is_identity_qc(seed: u32) -> bool {
    let t = Transliterator::new();
    let options = Options::default();
    let word = arbitrary_hk_word(seed);
    let deva = t.transliterate(&word, "hk", "devanagari", &options).unwrap();
    let back = t.transliterate(&deva, "devanagari", "hk", &options).unwrap();
    back == word
}

#[test]
fn slp1_devanagari_roundtrip_is_identity() {
    let t = Transliterator::new();
    let options = Options::default();
    for word in ["rAma", "kfzRa", "Sloka", "maMgala"] {
        let deva = t.transliterate(word, "slp1", "devanagari", &options).unwrap();
        let back = t.transliterate(&deva, "devanagari", "slp1", &options).unwrap();
        assert_eq!(back, word);
    }
}

#[test]
fn iast_devanagari_roundtrip_up_to_canonical_alternate() {
    let t = Transliterator::new();
    let options = Options::default();
    for word in ["rāma", "kṛṣṇa", "yoga", "dharmakṣetre", "śānti"] {
        let deva = t.transliterate(word, "iast", "devanagari", &options).unwrap();
        let back = t.transliterate(&deva, "devanagari", "iast", &options).unwrap();
        assert_eq!(back, word);
    }
}

#[test]
fn identity_scheme_pair_acts_as_identity() {
    let t = Transliterator::new();
    let options = Options::default();
    for (scheme, word) in [("hk", "rAma"), ("devanagari", "राम"), ("iast", "rāma")] {
        let out = t.transliterate(word, scheme, scheme, &options).unwrap();
        assert_eq!(out, word);
    }
}

#[test]
fn empty_input_is_empty_for_any_pair() {
    let t = Transliterator::new();
    let options = Options::default();
    for (from, to) in [("hk", "devanagari"), ("devanagari", "iast"), ("iast", "slp1")] {
        assert_eq!(t.transliterate("", from, to, &options).unwrap(), "");
    }
}
