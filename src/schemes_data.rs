//! Built-in scheme tables (spec.md §1 "out of scope... literal scheme
//! tables", but the registry they populate is squarely in scope, spec.md
//! §4.2 / §9 "Supplemented features"). Non-Devanagari Brahmic schemes are
//! derived from Devanagari by the Unicode block offsets spec.md §4.1 lists,
//! per DESIGN.md.

use rustc_hash::FxHashMap;

use crate::scheme::{
    Scheme, SchemeRegistry, GROUP_ACCENTS, GROUP_CONSONANTS, GROUP_EXTRA_CONSONANTS,
    GROUP_SYMBOLS, GROUP_VIRAMA, GROUP_VOWELS, GROUP_VOWEL_MARKS, GROUP_YOGAVAAHAS, GROUP_ZWJ,
};

const VOWEL_KEYS: [&str; 14] = [
    "अ", "आ", "इ", "ई", "उ", "ऊ", "ऋ", "ॠ", "ऌ", "ॡ", "ए", "ऐ", "ओ", "औ",
];
const CONSONANT_KEYS: [&str; 33] = [
    "क", "ख", "ग", "घ", "ङ", "च", "छ", "ज", "झ", "ञ", "ट", "ठ", "ड", "ढ", "ण", "त", "थ", "द", "ध",
    "न", "प", "फ", "ब", "भ", "म", "य", "र", "ल", "व", "श", "ष", "स", "ह",
];
const YOGAVAAHA_KEYS: [&str; 3] = ["ं", "ः", "ँ"];
const ACCENT_KEYS: [&str; 2] = ["॑", "॒"];
const SYMBOL_KEYS: [&str; 14] = [
    "ॐ", "ऽ", "।", "॥", "०", "१", "२", "३", "४", "५", "६", "७", "८", "९",
];

fn table(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn identity_table(keys: &[&str]) -> FxHashMap<String, String> {
    keys.iter().map(|k| (k.to_string(), k.to_string())).collect()
}

fn alt_table(pairs: &[(&str, &[&str])]) -> FxHashMap<String, Vec<String>> {
    pairs
        .iter()
        .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
        .collect()
}

fn devanagari_scheme() -> Scheme {
    Scheme::new("devanagari", false)
        .with_group(GROUP_VOWELS, identity_table(&VOWEL_KEYS))
        .with_group(
            GROUP_VOWEL_MARKS,
            table(&[
                ("आ", "ा"),
                ("इ", "ि"),
                ("ई", "ी"),
                ("उ", "ु"),
                ("ऊ", "ू"),
                ("ऋ", "ृ"),
                ("ॠ", "ॄ"),
                ("ऌ", "ॢ"),
                ("ॡ", "ॣ"),
                ("ए", "े"),
                ("ऐ", "ै"),
                ("ओ", "ो"),
                ("औ", "ौ"),
            ]),
        )
        .with_group(GROUP_CONSONANTS, identity_table(&CONSONANT_KEYS))
        .with_group(GROUP_EXTRA_CONSONANTS, identity_table(&["ळ"]))
        .with_group(GROUP_VIRAMA, table(&[("्", "्")]))
        .with_group(GROUP_YOGAVAAHAS, identity_table(&YOGAVAAHA_KEYS))
        .with_group(GROUP_ACCENTS, identity_table(&ACCENT_KEYS))
        .with_group(GROUP_SYMBOLS, identity_table(&SYMBOL_KEYS))
        .with_group(GROUP_ZWJ, table(&[("\u{200D}", "\u{200D}")]))
}

fn offset_char(c: char, offset: i32) -> char {
    char::from_u32((c as i32 + offset) as u32).unwrap_or(c)
}

fn offset_string(s: &str, offset: i32) -> String {
    s.chars().map(|c| offset_char(c, offset)).collect()
}

/// Derive a Brahmic scheme from Devanagari by shifting every rendering's
/// codepoints by `offset` (spec.md §4.1's block bases are exactly these
/// offsets relative to Devanagari's 0x0900). `consonant_override`, when
/// given, replaces the offset-derived consonants/extra_consonants groups
/// (needed for Tamil, whose script merges several Devanagari consonants
/// onto one letter rather than having a parallel codepoint run).
fn derive_brahmic_scheme(
    name: &str,
    devanagari: &Scheme,
    offset: i32,
    consonant_override: Option<(FxHashMap<String, String>, FxHashMap<String, String>)>,
) -> Scheme {
    let mut groups = FxHashMap::default();
    for (group_name, entries) in &devanagari.groups {
        let shifted: FxHashMap<String, String> = entries
            .iter()
            .map(|(k, v)| (k.clone(), offset_string(v, offset)))
            .collect();
        groups.insert(group_name.clone(), shifted);
    }
    if let Some((consonants, extra)) = consonant_override {
        groups.insert(GROUP_CONSONANTS.to_string(), consonants);
        groups.insert(GROUP_EXTRA_CONSONANTS.to_string(), extra);
    }
    Scheme {
        name: name.to_string(),
        is_roman: false,
        groups,
        ..Default::default()
    }
}

/// Tamil merges each stop-consonant varga onto one letter. `superscripted`
/// selects whether the aspirated/voiced/voiced-aspirated members of a varga
/// get a disambiguating superscript digit appended (spec.md §9's
/// "tamil_superscripted" open question; see DESIGN.md for the decision).
fn tamil_consonant_table(superscripted: bool) -> FxHashMap<String, String> {
    let varga = |base: &str, keys: [&str; 4]| -> Vec<(String, String)> {
        let suffixes = if superscripted {
            ["", "²", "³", "⁴"]
        } else {
            ["", "", "", ""]
        };
        keys.iter()
            .zip(suffixes.iter())
            .map(|(k, suf)| (k.to_string(), format!("{base}{suf}")))
            .collect()
    };
    let mut entries = Vec::new();
    entries.extend(varga("க", ["क", "ख", "ग", "घ"]));
    entries.extend(varga("ச", ["च", "छ", "ज", "झ"]));
    entries.extend(varga("ட", ["ट", "ठ", "ड", "ढ"]));
    entries.extend(varga("த", ["त", "थ", "द", "ध"]));
    entries.extend(varga("ப", ["प", "फ", "ब", "भ"]));
    for (deva, tam) in [
        ("ङ", "ங"),
        ("ञ", "ஞ"),
        ("ण", "ண"),
        ("न", "ந"),
        ("म", "ம"),
        ("य", "ய"),
        ("र", "ர"),
        ("ल", "ல"),
        ("व", "வ"),
        ("श", "ஶ"),
        ("ष", "ஷ"),
        ("स", "ஸ"),
        ("ह", "ஹ"),
    ] {
        entries.push((deva.to_string(), tam.to_string()));
    }
    entries.into_iter().collect()
}

fn tamil_extra_table() -> FxHashMap<String, String> {
    table(&[("ळ", "ள")])
}

fn hk_scheme() -> Scheme {
    Scheme::new("hk", true)
        .with_group(
            GROUP_VOWELS,
            table(&[
                ("अ", "a"), ("आ", "A"), ("इ", "i"), ("ई", "I"), ("उ", "u"), ("ऊ", "U"),
                ("ऋ", "R"), ("ॠ", "RR"), ("ऌ", "lR"), ("ॡ", "lRR"),
                ("ए", "e"), ("ऐ", "ai"), ("ओ", "o"), ("औ", "au"),
            ]),
        )
        .with_group(
            GROUP_CONSONANTS,
            table(&[
                ("क", "k"), ("ख", "kh"), ("ग", "g"), ("घ", "gh"), ("ङ", "G"),
                ("च", "c"), ("छ", "ch"), ("ज", "j"), ("झ", "jh"), ("ञ", "J"),
                ("ट", "T"), ("ठ", "Th"), ("ड", "D"), ("ढ", "Dh"), ("ण", "N"),
                ("त", "t"), ("थ", "th"), ("द", "d"), ("ध", "dh"), ("न", "n"),
                ("प", "p"), ("फ", "ph"), ("ब", "b"), ("भ", "bh"), ("म", "m"),
                ("य", "y"), ("र", "r"), ("ल", "l"), ("व", "v"),
                ("श", "z"), ("ष", "S"), ("स", "s"), ("ह", "h"),
            ]),
        )
        .with_group(GROUP_EXTRA_CONSONANTS, table(&[("ळ", "L")]))
        .with_group(GROUP_VIRAMA, table(&[("्", "")]))
        .with_group(
            GROUP_YOGAVAAHAS,
            table(&[("ं", "M"), ("ः", "H"), ("ँ", "~")]),
        )
        .with_group(
            GROUP_ACCENTS,
            table(&[("॑", "\u{0301}"), ("॒", "\u{0300}")]),
        )
        .with_group(
            GROUP_SYMBOLS,
            table(&[
                ("ॐ", "OM"), ("ऽ", "'"), ("।", "."), ("॥", ".."),
                ("०", "0"), ("१", "1"), ("२", "2"), ("३", "3"), ("४", "4"),
                ("५", "5"), ("६", "6"), ("७", "7"), ("८", "8"), ("९", "9"),
            ]),
        )
        .with_group(GROUP_ZWJ, table(&[("\u{200D}", "")]))
}

fn iast_scheme() -> Scheme {
    Scheme::new("iast", true)
        .with_group(
            GROUP_VOWELS,
            table(&[
                ("अ", "a"), ("आ", "ā"), ("इ", "i"), ("ई", "ī"), ("उ", "u"), ("ऊ", "ū"),
                ("ऋ", "ṛ"), ("ॠ", "ṝ"), ("ऌ", "ḷ"), ("ॡ", "ḹ"),
                ("ए", "e"), ("ऐ", "ai"), ("ओ", "o"), ("औ", "au"),
            ]),
        )
        .with_group(
            GROUP_CONSONANTS,
            table(&[
                ("क", "k"), ("ख", "kh"), ("ग", "g"), ("घ", "gh"), ("ङ", "ṅ"),
                ("च", "c"), ("छ", "ch"), ("ज", "j"), ("झ", "jh"), ("ञ", "ñ"),
                ("ट", "ṭ"), ("ठ", "ṭh"), ("ड", "ḍ"), ("ढ", "ḍh"), ("ण", "ṇ"),
                ("त", "t"), ("थ", "th"), ("द", "d"), ("ध", "dh"), ("न", "n"),
                ("प", "p"), ("फ", "ph"), ("ब", "b"), ("भ", "bh"), ("म", "m"),
                ("य", "y"), ("र", "r"), ("ल", "l"), ("व", "v"),
                ("श", "ś"), ("ष", "ṣ"), ("स", "s"), ("ह", "h"),
            ]),
        )
        .with_group(GROUP_EXTRA_CONSONANTS, table(&[("ळ", "ḻ")]))
        .with_group(GROUP_VIRAMA, table(&[("्", "")]))
        .with_group(
            GROUP_YOGAVAAHAS,
            table(&[("ं", "ṃ"), ("ः", "ḥ"), ("ँ", "m̐")]),
        )
        .with_group(
            GROUP_ACCENTS,
            table(&[("॑", "\u{0301}"), ("॒", "\u{0300}")]),
        )
        .with_group(
            GROUP_SYMBOLS,
            table(&[
                ("ॐ", "oṃ"), ("ऽ", "'"), ("।", "."), ("॥", ".."),
                ("०", "0"), ("१", "1"), ("२", "2"), ("३", "3"), ("४", "4"),
                ("५", "5"), ("६", "6"), ("७", "7"), ("८", "8"), ("९", "9"),
            ]),
        )
        .with_group(GROUP_ZWJ, table(&[("\u{200D}", "")]))
}

fn kolkata_scheme() -> Scheme {
    let mut scheme = iast_scheme();
    scheme.name = "kolkata".to_string();
    if let Some(vowels) = scheme.groups.get_mut(GROUP_VOWELS) {
        vowels.insert("ए".to_string(), "ē".to_string());
        vowels.insert("ओ".to_string(), "ō".to_string());
    }
    scheme
}

fn iso15919_scheme() -> Scheme {
    let mut scheme = iast_scheme();
    scheme.name = "iso".to_string();
    if let Some(yogavaahas) = scheme.groups.get_mut(GROUP_YOGAVAAHAS) {
        yogavaahas.insert("ं".to_string(), "ṁ".to_string());
    }
    scheme
}

fn slp1_scheme() -> Scheme {
    Scheme::new("slp1", true)
        .with_group(
            GROUP_VOWELS,
            table(&[
                ("अ", "a"), ("आ", "A"), ("इ", "i"), ("ई", "I"), ("उ", "u"), ("ऊ", "U"),
                ("ऋ", "f"), ("ॠ", "F"), ("ऌ", "x"), ("ॡ", "X"),
                ("ए", "e"), ("ऐ", "E"), ("ओ", "o"), ("औ", "O"),
            ]),
        )
        .with_group(
            GROUP_CONSONANTS,
            table(&[
                ("क", "k"), ("ख", "K"), ("ग", "g"), ("घ", "G"), ("ङ", "N"),
                ("च", "c"), ("छ", "C"), ("ज", "j"), ("झ", "J"), ("ञ", "Y"),
                ("ट", "w"), ("ठ", "W"), ("ड", "q"), ("ढ", "Q"), ("ण", "R"),
                ("त", "t"), ("थ", "T"), ("द", "d"), ("ध", "D"), ("न", "n"),
                ("प", "p"), ("फ", "P"), ("ब", "b"), ("भ", "B"), ("म", "m"),
                ("य", "y"), ("र", "r"), ("ल", "l"), ("व", "v"),
                ("श", "S"), ("ष", "z"), ("स", "s"), ("ह", "h"),
            ]),
        )
        .with_group(GROUP_EXTRA_CONSONANTS, table(&[("ळ", "L")]))
        .with_group(GROUP_VIRAMA, table(&[("्", "")]))
        .with_group(
            GROUP_YOGAVAAHAS,
            table(&[("ं", "M"), ("ः", "H"), ("ँ", "~")]),
        )
        .with_group(
            GROUP_ACCENTS,
            table(&[("॑", "\u{0301}"), ("॒", "\u{0300}")]),
        )
        .with_group(
            GROUP_SYMBOLS,
            table(&[
                ("ॐ", "oM"), ("ऽ", "'"), ("।", "."), ("॥", ".."),
                ("०", "0"), ("१", "1"), ("२", "2"), ("३", "3"), ("४", "4"),
                ("५", "5"), ("६", "6"), ("७", "7"), ("८", "8"), ("९", "9"),
            ]),
        )
        .with_group(GROUP_ZWJ, table(&[("\u{200D}", "")]))
}

fn itrans_scheme() -> Scheme {
    Scheme::new("itrans", true)
        .with_group(
            GROUP_VOWELS,
            table(&[
                ("अ", "a"), ("आ", "A"), ("इ", "i"), ("ई", "I"), ("उ", "u"), ("ऊ", "U"),
                ("ऋ", "RRi"), ("ॠ", "RRI"), ("ऌ", "LLi"), ("ॡ", "LLI"),
                ("ए", "e"), ("ऐ", "ai"), ("ओ", "o"), ("औ", "au"),
            ]),
        )
        .with_group(
            GROUP_CONSONANTS,
            table(&[
                ("क", "k"), ("ख", "kh"), ("ग", "g"), ("घ", "gh"), ("ङ", "~N"),
                ("च", "ch"), ("छ", "Ch"), ("ज", "j"), ("झ", "jh"), ("ञ", "~n"),
                ("ट", "T"), ("ठ", "Th"), ("ड", "D"), ("ढ", "Dh"), ("ण", "N"),
                ("त", "t"), ("थ", "th"), ("द", "d"), ("ध", "dh"), ("न", "n"),
                ("प", "p"), ("फ", "ph"), ("ब", "b"), ("भ", "bh"), ("म", "m"),
                ("य", "y"), ("र", "r"), ("ल", "l"), ("व", "v"),
                ("श", "sh"), ("ष", "Sh"), ("स", "s"), ("ह", "h"),
            ]),
        )
        .with_group(GROUP_EXTRA_CONSONANTS, table(&[("ळ", "L")]))
        .with_group(GROUP_VIRAMA, table(&[("्", "")]))
        .with_group(
            GROUP_YOGAVAAHAS,
            table(&[("ं", "M"), ("ः", "H"), ("ँ", ".N")]),
        )
        .with_group(
            GROUP_ACCENTS,
            table(&[("॑", "\u{0301}"), ("॒", "\u{0300}")]),
        )
        .with_group(
            GROUP_SYMBOLS,
            table(&[
                ("ॐ", "OM"), ("ऽ", "'"), ("।", "."), ("॥", ".."),
                ("०", "0"), ("१", "1"), ("२", "2"), ("३", "3"), ("४", "4"),
                ("५", "5"), ("६", "6"), ("७", "7"), ("८", "8"), ("९", "9"),
            ]),
        )
        .with_group(GROUP_ZWJ, table(&[("\u{200D}", "")]))
        .with_alternates(alt_table(&[
            ("A", &["aa"]),
            ("I", &["ii", "ee"]),
            ("U", &["uu", "oo"]),
            ("~N", &["N^"]),
            ("Ch", &["chh"]),
            ("M", &[".m", ".n"]),
        ]))
        .with_shortcuts(vec![("'".to_string(), ".a".to_string())])
}

fn velthuis_scheme() -> Scheme {
    Scheme::new("velthuis", true)
        .with_group(
            GROUP_VOWELS,
            table(&[
                ("अ", "a"), ("आ", "aa"), ("इ", "i"), ("ई", "ii"), ("उ", "u"), ("ऊ", "uu"),
                ("ऋ", ".r"), ("ॠ", ".rr"), ("ऌ", ".l"), ("ॡ", ".ll"),
                ("ए", "e"), ("ऐ", "ai"), ("ओ", "o"), ("औ", "au"),
            ]),
        )
        .with_group(
            GROUP_CONSONANTS,
            table(&[
                ("क", "k"), ("ख", "kh"), ("ग", "g"), ("घ", "gh"), ("ङ", "\"n"),
                ("च", "c"), ("छ", "ch"), ("ज", "j"), ("झ", "jh"), ("ञ", "~n"),
                ("ट", ".t"), ("ठ", ".th"), ("ड", ".d"), ("ढ", ".dh"), ("ण", ".n"),
                ("त", "t"), ("थ", "th"), ("द", "d"), ("ध", "dh"), ("न", "n"),
                ("प", "p"), ("फ", "ph"), ("ब", "b"), ("भ", "bh"), ("म", "m"),
                ("य", "y"), ("र", "r"), ("ल", "l"), ("व", "v"),
                ("श", "\"s"), ("ष", ".s"), ("स", "s"), ("ह", "h"),
            ]),
        )
        .with_group(GROUP_EXTRA_CONSONANTS, table(&[("ळ", ".l")]))
        .with_group(GROUP_VIRAMA, table(&[("्", "")]))
        .with_group(
            GROUP_YOGAVAAHAS,
            table(&[("ं", ".m"), ("ः", ".h"), ("ँ", "/")]),
        )
        .with_group(
            GROUP_ACCENTS,
            table(&[("॑", "\u{0301}"), ("॒", "\u{0300}")]),
        )
        .with_group(
            GROUP_SYMBOLS,
            table(&[
                ("ॐ", "O"), ("ऽ", "'"), ("।", "."), ("॥", ".."),
                ("०", "0"), ("१", "1"), ("२", "2"), ("३", "3"), ("४", "4"),
                ("५", "5"), ("६", "6"), ("७", "7"), ("८", "8"), ("९", "9"),
            ]),
        )
        .with_group(GROUP_ZWJ, table(&[("\u{200D}", "")]))
}

pub fn register_builtins(registry: &mut SchemeRegistry) {
    let devanagari = devanagari_scheme();
    let deva_vowel_marks = devanagari.group(GROUP_VOWEL_MARKS).cloned().unwrap_or_default();

    registry.add_brahmic_scheme("devanagari", devanagari.clone());
    registry.add_brahmic_scheme(
        "bengali",
        derive_brahmic_scheme("bengali", &devanagari, 0x80, None),
    );
    registry.add_brahmic_scheme(
        "gurmukhi",
        derive_brahmic_scheme("gurmukhi", &devanagari, 0x100, None),
    );
    registry.add_brahmic_scheme(
        "gujarati",
        derive_brahmic_scheme("gujarati", &devanagari, 0x180, None),
    );
    registry.add_brahmic_scheme(
        "oriya",
        derive_brahmic_scheme("oriya", &devanagari, 0x200, None),
    );
    registry.add_brahmic_scheme(
        "tamil",
        derive_brahmic_scheme(
            "tamil",
            &devanagari,
            0x280,
            Some((tamil_consonant_table(false), tamil_extra_table())),
        ),
    );
    registry.add_brahmic_scheme(
        "tamil_superscripted",
        derive_brahmic_scheme(
            "tamil_superscripted",
            &devanagari,
            0x280,
            Some((tamil_consonant_table(true), tamil_extra_table())),
        ),
    );
    registry.add_brahmic_scheme(
        "telugu",
        derive_brahmic_scheme("telugu", &devanagari, 0x300, None),
    );
    registry.add_brahmic_scheme(
        "kannada",
        derive_brahmic_scheme("kannada", &devanagari, 0x380, None),
    );
    registry.add_brahmic_scheme(
        "malayalam",
        derive_brahmic_scheme("malayalam", &devanagari, 0x400, None),
    );

    for (name, scheme) in [
        ("hk", hk_scheme()),
        ("iast", iast_scheme()),
        ("kolkata", kolkata_scheme()),
        ("iso", iso15919_scheme()),
        ("slp1", slp1_scheme()),
        ("itrans", itrans_scheme()),
        ("velthuis", velthuis_scheme()),
    ] {
        registry
            .add_roman_scheme(name, scheme, &deva_vowel_marks)
            .expect("built-in Roman scheme is well-formed");
    }
}
