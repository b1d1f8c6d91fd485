//! Top-Level Dispatcher (spec.md §4.5): the public `t()` entry point.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::compile::MapCache;
use crate::error::LipiError;
use crate::scheme::{Scheme, SchemeRegistry, GROUP_YOGAVAAHAS};
use crate::{aksara, brahmic, detect, roman, Options};

static ITRANS_M_PLUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\\m\+\}").unwrap());
static ITRANS_DOT_H: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.h").unwrap());
static ITRANS_BACKSLASH_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\([^'`_])").unwrap());
static TAMIL_SUPERSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[²³⁴]").unwrap());
static TAMIL_VOWEL_MARK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{0BBE}-\u{0BCD}\u{0B92}-\u{0B95}\u{0BD7}]+").unwrap());
static IAST_QUOTE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"['\u{2018}\u{2019}]+").unwrap());
static IAST_DIGIT_DOT_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)\.(\d)").unwrap());
static IAST_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|[^#\\])([,?!:])").unwrap());

/// `t(data, from, to, options)` (spec.md §6 "Primary call").
pub fn t(
    data: &str,
    from: &str,
    to: &str,
    options: &Options,
    registry: &SchemeRegistry,
    cache: &MapCache,
) -> Result<String, LipiError> {
    let from = if from.is_empty() {
        detect::detect(data).to_lowercase()
    } else {
        from.to_string()
    };

    let map = cache.get_or_compile(registry, &from, to, options)?;
    let source = registry.get(&from)?;
    let target = registry.get(to)?;

    let mut text = preprocess_pair(data, &from, to);
    text = apply_shortcuts_forward(&text, source);

    let target_yogavaahas = group_renderings(target, GROUP_YOGAVAAHAS);
    let source_yogavaahas = group_renderings(source, GROUP_YOGAVAAHAS);

    let mut out = if map.from_roman {
        roman::transliterate(&text, &map, &target_yogavaahas, options)
    } else {
        brahmic::transliterate(&text, &map, &source_yogavaahas)
    };

    out = apply_shortcuts_backward(&out, source);

    if to == "tamil_superscripted" {
        out = move_tamil_superscript_after_mark_run(&out);
    }

    if let Some(replacements) = options.preferred_alternates.get(to) {
        for (literal, replacement) in replacements {
            out = out.replace(literal, replacement);
        }
    }

    Ok(out)
}

/// `transliterateWordwise` (spec.md §4.6 / §6).
pub fn transliterate_wordwise(
    data: &str,
    from: &str,
    to: &str,
    options: &Options,
    registry: &SchemeRegistry,
    cache: &MapCache,
) -> Result<Vec<(String, String)>, LipiError> {
    Ok(aksara::transliterate_wordwise(
        data,
        options.split_aksara,
        options.move_consonant,
        |word| t(word, from, to, options, registry, cache).unwrap_or_else(|_| word.to_string()),
    ))
}

fn group_renderings(scheme: &Scheme, group: &str) -> Vec<String> {
    scheme
        .group(group)
        .map(|g| g.values().cloned().collect())
        .unwrap_or_default()
}

/// Per-pair preprocessing (spec.md §4.5 step 4).
fn preprocess_pair(data: &str, from: &str, to: &str) -> String {
    let mut text = data.to_string();

    if from == "itrans" {
        text = ITRANS_M_PLUS.replace_all(&text, ".h.N").into_owned();
        text = ITRANS_DOT_H.replace_all(&text, "").into_owned();
        text = ITRANS_BACKSLASH_ESCAPE
            .replace_all(&text, |caps: &regex::Captures| format!("##{}##", &caps[1]))
            .into_owned();
    }

    if from == "tamil_superscripted" {
        text = move_tamil_superscript_before_mark_run(&text);
    }

    if from == "iast" && to == "devanagari" {
        text = IAST_QUOTE_RUN.replace_all(&text, "'").into_owned();
        text = IAST_DIGIT_DOT_DIGIT.replace_all(&text, "$1##.##$2").into_owned();
        text = text.replace('-', "");
        text = IAST_PUNCT.replace_all(&text, "$1|").into_owned();
    }

    text
}

fn move_tamil_superscript_before_mark_run(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(mat) = TAMIL_VOWEL_MARK_RUN.find(rest) {
        let after = &rest[mat.end()..];
        if let Some(sup) = after.chars().next().filter(|c| TAMIL_SUPERSCRIPT.is_match(&c.to_string())) {
            result.push_str(&rest[..mat.start()]);
            result.push(sup);
            result.push_str(mat.as_str());
            rest = &after[sup.len_utf8()..];
        } else {
            result.push_str(&rest[..mat.end()]);
            rest = after;
        }
    }
    result.push_str(rest);
    result
}

fn move_tamil_superscript_after_mark_run(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if TAMIL_SUPERSCRIPT.is_match(&ch.to_string()) {
            let rest: String = chars.clone().collect();
            if let Some(mat) = TAMIL_VOWEL_MARK_RUN.find(&rest) {
                if mat.start() == 0 {
                    result.push_str(&rest[mat.start()..mat.end()]);
                    result.push(ch);
                    for _ in 0..mat.end() {
                        chars.next();
                    }
                    continue;
                }
            }
        }
        result.push(ch);
    }
    result
}

/// For each `(key, shortcut)` in `source.shortcuts`: canonicalize any literal
/// occurrence of the shortcut's own key first, then fold the shortcut into
/// its long form (spec.md §4.5 step 5).
fn apply_shortcuts_forward(text: &str, source: &Scheme) -> String {
    let mut text = text.to_string();
    for (key, shortcut) in &source.shortcuts {
        if key.contains(shortcut.as_str()) {
            text = text.replace(key.as_str(), shortcut.as_str());
        }
        text = text.replace(shortcut.as_str(), key.as_str());
    }
    text
}

/// Symmetric postprocessing (spec.md §4.5 step 7).
fn apply_shortcuts_backward(text: &str, source: &Scheme) -> String {
    let mut text = text.to_string();
    for (key, shortcut) in &source.shortcuts {
        if key.contains(shortcut.as_str()) {
            text = text.replace(shortcut.as_str(), key.as_str());
        }
        text = text.replace(key.as_str(), shortcut.as_str());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> (SchemeRegistry, MapCache) {
        (SchemeRegistry::new(), MapCache::new())
    }

    #[test]
    fn namah_to_devanagari() {
        let (registry, cache) = env();
        let out = t("namaH", "hk", "devanagari", &Options::default(), &registry, &cache).unwrap();
        assert_eq!(out, "नमः");
    }

    #[test]
    fn rama_to_devanagari() {
        let (registry, cache) = env();
        let out = t("rAma", "hk", "devanagari", &Options::default(), &registry, &cache).unwrap();
        assert_eq!(out, "राम");
    }

    #[test]
    fn iast_to_devanagari_punctuation_preserves_preceding_char() {
        let (registry, cache) = env();
        let out = t("rāma,", "iast", "devanagari", &Options::default(), &registry, &cache).unwrap();
        assert_eq!(out, "राम|");
    }

    #[test]
    fn devanagari_to_iast() {
        let (registry, cache) = env();
        let out = t("नमः", "devanagari", "iast", &Options::default(), &registry, &cache).unwrap();
        assert_eq!(out, "namaḥ");
    }

    #[test]
    fn double_hash_region_passes_through() {
        let (registry, cache) = env();
        let out = t(
            "dharma##iti##",
            "hk",
            "devanagari",
            &Options::default(),
            &registry,
            &cache,
        )
        .unwrap();
        assert_eq!(out, "धर्मiti");
    }

    #[test]
    fn syncope_suppresses_trailing_virama() {
        let (registry, cache) = env();
        let options = Options {
            syncope: true,
            ..Default::default()
        };
        let out = t("k", "hk", "devanagari", &options, &registry, &cache).unwrap();
        assert_eq!(out, "क");
    }

    #[test]
    fn empty_from_autodetects() {
        let (registry, cache) = env();
        let out = t("धर्म", "", "iast", &Options::default(), &registry, &cache).unwrap();
        assert_eq!(out, "dharma");
    }

    #[test]
    fn unknown_scheme_errors() {
        let (registry, cache) = env();
        let err = t("x", "nope", "devanagari", &Options::default(), &registry, &cache).unwrap_err();
        assert!(matches!(err, LipiError::UnknownScheme(_)));
    }

    #[test]
    fn wordwise_joins_syllables_with_tab() {
        let (registry, cache) = env();
        let options = Options {
            split_aksara: true,
            ..Default::default()
        };
        let pairs =
            transliterate_wordwise("rāmo rājā", "iast", "devanagari", &options, &registry, &cache)
                .unwrap();
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].0.contains('\t'));
    }
}
