//! Roman Engine (spec.md §4.3): a longest-match tokenizer with an
//! implicit-vowel state machine and two toggled escape modes.

use crate::compile::{CompiledMap, TokenMatcher};
use crate::Options;

/// Transliterate Roman-sourced `text` using `map`. `target_yogavaahas` are
/// the target scheme's own yogavaaha spellings, needed for the accent
/// reordering pass (spec.md §4.3 "Accent reordering").
pub fn transliterate(
    text: &str,
    map: &CompiledMap,
    target_yogavaahas: &[String],
    options: &Options,
) -> String {
    let matcher = TokenMatcher::build(map);
    let mut output = String::with_capacity(text.len() * 2);

    let mut had_consonant = false;
    let mut skipping_sgml = false;
    let mut toggled_trans = false;

    let mut i = 0usize;
    while i < text.len() {
        let rest = &text[i..];

        if skipping_sgml {
            let ch = rest.chars().next().unwrap();
            output.push(ch);
            if ch == '>' {
                skipping_sgml = false;
            }
            i += ch.len_utf8();
            continue;
        }

        if rest.starts_with('<') && options.skip_sgml {
            skipping_sgml = true;
            output.push('<');
            i += 1;
            continue;
        }

        if rest.starts_with("##") {
            toggled_trans = !toggled_trans;
            i += 2;
            continue;
        }

        let skipping_trans = skipping_sgml || toggled_trans;
        if skipping_trans {
            let ch = rest.chars().next().unwrap();
            output.push(ch);
            i += ch.len_utf8();
            continue;
        }

        match matcher.longest_prefix_match(rest) {
            Some(token) => {
                if map.to_roman {
                    output.push_str(map.letters.get(token).map(String::as_str).unwrap_or(token));
                } else if had_consonant {
                    if let Some(mark) = map.marks.get(token) {
                        output.push_str(mark);
                    } else if token != map.from_scheme_a {
                        output.push_str(&map.virama);
                        output.push_str(map.letters.get(token).map(String::as_str).unwrap_or(token));
                    }
                    had_consonant = map.consonants.contains(token);
                } else {
                    output.push_str(map.letters.get(token).map(String::as_str).unwrap_or(token));
                    had_consonant = map.consonants.contains(token);
                }
                i += token.len();
            }
            None => {
                if had_consonant && !options.syncope {
                    output.push_str(&map.virama);
                }
                had_consonant = false;
                let ch = rest.chars().next().unwrap();
                output.push(ch);
                i += ch.len_utf8();
            }
        }
    }

    if had_consonant && !options.syncope {
        output.push_str(&map.virama);
    }

    if !map.accents.is_empty() {
        output = reorder(&output, map.accents.values(), target_yogavaahas);
    }

    output
}

/// Rewrite every `(accent)(yogavaaha)` occurrence to `(yogavaaha)(accent)`
/// (spec.md §4.3).
fn reorder<'a>(text: &str, accents: impl Iterator<Item = &'a String>, yogavaahas: &[String]) -> String {
    let mut text = text.to_string();
    for accent in accents {
        for yogavaaha in yogavaahas {
            let before = format!("{accent}{yogavaaha}");
            let after = format!("{yogavaaha}{accent}");
            if text.contains(&before) {
                text = text.replace(&before, &after);
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;
    use crate::scheme::SchemeRegistry;

    fn map_for(from: &str, to: &str) -> CompiledMap {
        let registry = SchemeRegistry::new();
        compile(&registry, from, to).unwrap()
    }

    #[test]
    fn namah_to_devanagari() {
        let map = map_for("hk", "devanagari");
        let out = transliterate("namaH", &map, &[], &Options::default());
        assert_eq!(out, "नमः");
    }

    #[test]
    fn rama_to_devanagari() {
        let map = map_for("hk", "devanagari");
        let out = transliterate("rAma", &map, &[], &Options::default());
        assert_eq!(out, "राम");
    }

    #[test]
    fn syncope_suppresses_trailing_virama() {
        let map = map_for("hk", "devanagari");
        let out = transliterate(
            "k",
            &map,
            &[],
            &Options {
                syncope: true,
                ..Default::default()
            },
        );
        assert_eq!(out, "क");
    }

    #[test]
    fn no_syncope_emits_trailing_virama() {
        let map = map_for("hk", "devanagari");
        let out = transliterate("k", &map, &[], &Options::default());
        assert_eq!(out, "क्");
    }

    #[test]
    fn double_hash_region_passes_through() {
        let map = map_for("hk", "devanagari");
        let out = transliterate("dharma##iti##", &map, &[], &Options::default());
        assert_eq!(out, "धर्मiti");
    }

    #[test]
    fn sgml_region_passes_through_when_enabled() {
        let map = map_for("hk", "devanagari");
        let options = Options {
            skip_sgml: true,
            ..Default::default()
        };
        let out = transliterate("a<b>c", &map, &[], &options);
        assert_eq!(out, "अ<b>च्");
    }
}
