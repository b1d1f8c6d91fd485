//! Scheme Detector (spec.md §4.1): code-point range tests, then a cascade
//! of regex discriminators over Roman text. Always returns a name; never
//! fails (defaults to "HK").

use once_cell::sync::Lazy;
use regex::Regex;

const BRAHMIC_BLOCKS: &[(u32, &str)] = &[
    (0x0900, "Devanagari"),
    (0x0980, "Bengali"),
    (0x0A00, "Gurmukhi"),
    (0x0A80, "Gujarati"),
    (0x0B00, "Oriya"),
    (0x0B80, "Tamil"),
    (0x0C00, "Telugu"),
    (0x0C80, "Kannada"),
    (0x0D00, "Malayalam"),
];

static IAST_OR_KOLKATA: Lazy<Regex> =
    Lazy::new(|| Regex::new("[āīūṛṝḷḹēōṃḥṅñṭḍṇśṣḻ]").unwrap());
static KOLKATA_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new("[ēō]").unwrap());
static ITRANS_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"ee|oo|\^[iI]|RR[iI]|L[iI]|~N|N\^|Ch|chh|JN|sh|Sh|\.a").unwrap()
});
static SLP1_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[fFxXEOCYwWqQPB]|kz|Nk|Ng|tT|dD|Sc|Sn|[aAiIuUfFxXeEoO]R|G[yr]|(?:^|\W)G"#)
        .unwrap()
});
static VELTHUIS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\.[mhnrltds]|"n|~s"#).unwrap());
static ITRANS_FALLBACK: Lazy<Regex> = Lazy::new(|| Regex::new("aa|ii|uu|~n").unwrap());

/// Return the highest-named Brahmic block whose start is `<= codepoint`.
fn brahmic_block_for(codepoint: u32) -> Option<&'static str> {
    BRAHMIC_BLOCKS
        .iter()
        .rev()
        .find(|(start, _)| *start <= codepoint)
        .map(|(_, name)| *name)
}

/// Detect the scheme of `text`. Defaults to "HK" when nothing else matches
/// (spec.md §4.1).
pub fn detect(text: &str) -> String {
    for ch in text.chars() {
        let cp = ch as u32;
        if (0x0900..=0x0D7F).contains(&cp) {
            if let Some(name) = brahmic_block_for(cp) {
                return name.to_string();
            }
        }
    }

    if IAST_OR_KOLKATA.is_match(text) {
        return if KOLKATA_ONLY.is_match(text) {
            "Kolkata".to_string()
        } else {
            "IAST".to_string()
        };
    }
    if ITRANS_ONLY.is_match(text) {
        return "ITRANS".to_string();
    }
    if SLP1_ONLY.is_match(text) {
        return "SLP1".to_string();
    }
    if VELTHUIS_ONLY.is_match(text) {
        return "Velthuis".to_string();
    }
    if ITRANS_FALLBACK.is_match(text) {
        return "ITRANS".to_string();
    }
    "HK".to_string()
}
