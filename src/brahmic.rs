//! Brahmic Engine (spec.md §4.4): a single-codepoint stream translator.

use crate::compile::CompiledMap;

/// Transliterate Brahmic-sourced `text` using `map`. `source_yogavaahas` are
/// the source scheme's own yogavaaha spellings, needed for the pre-reordering
/// pass ahead of the main loop.
pub fn transliterate(text: &str, map: &CompiledMap, source_yogavaahas: &[String]) -> String {
    let text = if !map.accents.is_empty() {
        pre_reorder(text, map.accents.keys(), source_yogavaahas)
    } else {
        text.to_string()
    };

    let mut output = String::with_capacity(text.len() * 2);

    let mut dangling_hash = false;
    let mut skipping_trans = false;
    let mut had_roman_consonant = false;

    for ch in text.chars() {
        let l = ch.to_string();

        if l == "#" {
            if dangling_hash {
                skipping_trans = !skipping_trans;
                dangling_hash = false;
            } else {
                dangling_hash = true;
            }
            if had_roman_consonant {
                output.push_str(&map.to_scheme_a);
                had_roman_consonant = false;
            }
            continue;
        }

        if skipping_trans {
            output.push(ch);
            continue;
        }

        if let Some(mark) = map.marks.get(&l) {
            output.push_str(mark);
            had_roman_consonant = false;
            continue;
        }

        if dangling_hash {
            output.push('#');
            dangling_hash = false;
        }
        if had_roman_consonant {
            output.push_str(&map.to_scheme_a);
            had_roman_consonant = false;
        }

        if let Some(rendering) = map.letters.get(&l) {
            output.push_str(rendering);
            had_roman_consonant = map.to_roman && map.consonants.contains(&l);
        } else {
            output.push(ch);
        }
    }

    if had_roman_consonant {
        output.push_str(&map.to_scheme_a);
    }

    output
}

/// Rewrite every `(yogavaaha)(accent)` occurrence to `(accent)(yogavaaha)`
/// (spec.md §4.4 "Pre-reordering").
fn pre_reorder<'a>(
    text: &str,
    accents: impl Iterator<Item = &'a String>,
    yogavaahas: &[String],
) -> String {
    let mut text = text.to_string();
    for accent in accents {
        for yogavaaha in yogavaahas {
            let before = format!("{yogavaaha}{accent}");
            let after = format!("{accent}{yogavaaha}");
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
    fn devanagari_namah_to_iast() {
        let map = map_for("devanagari", "iast");
        let out = transliterate("नमः", &map, &[]);
        assert_eq!(out, "namaḥ");
    }

    #[test]
    fn dangling_hash_emitted_verbatim() {
        let map = map_for("devanagari", "iast");
        let out = transliterate("न#म", &map, &[]);
        assert_eq!(out, "na#ma");
    }

    #[test]
    fn double_hash_region_passes_through() {
        let map = map_for("devanagari", "iast");
        let out = transliterate("न##अ##म", &map, &[]);
        assert_eq!(out, "naअma");
    }

    #[test]
    fn bare_consonant_gets_trailing_short_a() {
        let map = map_for("devanagari", "iast");
        let out = transliterate("क", &map, &[]);
        assert_eq!(out, "ka");
    }
}
