//! The concrete scenarios of spec.md §8.

use lipyantara::{detect, transliterate, transliterate_wordwise, Options};

#[test]
fn scenario_1_namah() {
    assert_eq!(transliterate("namaH", "hk", "devanagari", &Options::default()).unwrap(), "नमः");
}

#[test]
fn scenario_2_rama() {
    assert_eq!(transliterate("rAma", "hk", "devanagari", &Options::default()).unwrap(), "राम");
}

#[test]
fn scenario_3_namah_devanagari_to_iast() {
    assert_eq!(transliterate("नमः", "devanagari", "iast", &Options::default()).unwrap(), "namaḥ");
}

#[test]
fn scenario_4_double_hash_region() {
    assert_eq!(
        transliterate("dharma##iti##", "hk", "devanagari", &Options::default()).unwrap(),
        "धर्मiti"
    );
}

#[test]
fn scenario_5_syncope() {
    let options = Options {
        syncope: true,
        ..Default::default()
    };
    assert_eq!(transliterate("k", "hk", "devanagari", &options).unwrap(), "क");
}

#[test]
fn scenario_6_detect() {
    assert_eq!(detect("धर्म"), "Devanagari");
    assert_eq!(detect("dharma"), "HK");
    assert_eq!(detect("dharmaḥ"), "IAST");
    assert_eq!(detect(r"\.a"), "ITRANS");
}

#[test]
fn scenario_7_wordwise_split_aksara() {
    let options = Options {
        split_aksara: true,
        ..Default::default()
    };
    let pairs = transliterate_wordwise("rāmo rājā", "iast", "devanagari", &options).unwrap();
    assert_eq!(pairs.len(), 2);
    for (original, _result) in &pairs {
        assert!(original.contains('\t'), "expected syllable-TAB-joined original, got {original}");
    }
}
