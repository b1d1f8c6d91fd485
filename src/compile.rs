//! Map Compiler (spec.md §4.2) and the one-slot compiled-map cache
//! (spec.md §3 "Cache", §5).

use std::sync::Mutex;

use aho_corasick::{AhoCorasick, MatchKind};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::LipiError;
use crate::scheme::{
    accent_of, base_vowel_of, SchemeRegistry, GROUP_ACCENTS, GROUP_CONSONANTS,
    GROUP_EXTRA_CONSONANTS, GROUP_VIRAMA, GROUP_VOWELS, GROUP_VOWEL_MARKS, GROUP_ZWJ,
};
use crate::Options;

/// The product of compiling (from-scheme, to-scheme, options) (spec.md §3
/// "Compiled Map").
#[derive(Debug, Clone)]
pub struct CompiledMap {
    pub letters: FxHashMap<String, String>,
    pub marks: FxHashMap<String, String>,
    pub consonants: FxHashSet<String>,
    pub accents: FxHashMap<String, String>,
    pub max_token_length: usize,
    pub from_roman: bool,
    pub to_roman: bool,
    pub virama: String,
    pub to_scheme_a: String,
    pub from_scheme_a: String,
}

/// A leftmost-longest automaton over every recognized source token (spec.md
/// §9 "Longest-match lexer": "a trie or hash-of-prefixes for O(1) per-length
/// lookup" — here an Aho-Corasick automaton in `LeftmostLongest` mode plays
/// that role, matching the teacher's declared-but-unused `aho-corasick`
/// dependency to its intended job).
pub struct TokenMatcher {
    automaton: AhoCorasick,
    patterns: Vec<String>,
}

impl TokenMatcher {
    pub fn build(map: &CompiledMap) -> Self {
        let mut patterns: FxHashSet<String> = FxHashSet::default();
        patterns.extend(map.letters.keys().cloned());
        patterns.extend(map.marks.keys().cloned());
        // A source scheme's own virama/zwj rendering can be empty (no
        // explicit character to type); an empty pattern would match
        // everywhere, so it never belongs in the lexer's search universe.
        patterns.retain(|p| !p.is_empty());
        let mut patterns: Vec<String> = patterns.into_iter().collect();
        // Longest-first also makes ties during automaton construction
        // deterministic and cheap to reason about.
        patterns.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .expect("token patterns are valid for Aho-Corasick");
        Self { automaton, patterns }
    }

    /// Longest match starting exactly at `text[0..]`, if any.
    pub fn longest_prefix_match<'a>(&self, text: &'a str) -> Option<&'a str> {
        for mat in self.automaton.find_iter(text) {
            if mat.start() == 0 {
                let pat = &self.patterns[mat.pattern().as_usize()];
                return Some(&text[..pat.len()]);
            }
            if mat.start() > 0 {
                break;
            }
        }
        None
    }
}

fn record_token_length(current_max: &mut usize, token: &str) {
    *current_max = (*current_max).max(token.chars().count());
}

/// Compile (from, to) into a `CompiledMap`. The only failure mode is an
/// unregistered scheme name (spec.md §4.2).
pub fn compile(
    registry: &SchemeRegistry,
    from: &str,
    to: &str,
) -> Result<CompiledMap, LipiError> {
    let source = registry.get(from)?;
    let target = registry.get(to)?;

    let mut letters: FxHashMap<String, String> = FxHashMap::default();
    let mut marks: FxHashMap<String, String> = FxHashMap::default();
    let mut consonants: FxHashSet<String> = FxHashSet::default();
    let mut accents: FxHashMap<String, String> = FxHashMap::default();
    let mut max_token_length: usize = 1;

    for (group_name, source_entries) in &source.groups {
        let Some(target_group) = target.group(group_name) else {
            continue;
        };
        for (key, source_rendering) in source_entries {
            let f = if source_rendering.is_empty() && !is_empty_exempt(group_name) {
                key.clone()
            } else {
                source_rendering.clone()
            };
            let target_rendering = target_group.get(key).cloned().unwrap_or_default();
            let t = if target_rendering.is_empty() && !is_empty_exempt(group_name) {
                f.clone()
            } else {
                target_rendering
            };

            let mut spellings = vec![f.clone()];
            if let Some(alts) = source.alternates.get(&f) {
                spellings.extend(alts.iter().cloned());
            }

            for spelling in &spellings {
                record_token_length(&mut max_token_length, spelling);
                match group_name.as_str() {
                    GROUP_VOWEL_MARKS | GROUP_VIRAMA => {
                        marks.insert(spelling.clone(), t.clone());
                    }
                    GROUP_ACCENTS => {
                        accents.insert(spelling.clone(), t.clone());
                        letters.insert(spelling.clone(), t.clone());
                    }
                    GROUP_CONSONANTS | GROUP_EXTRA_CONSONANTS => {
                        letters.insert(spelling.clone(), t.clone());
                        consonants.insert(spelling.clone());
                    }
                    _ => {
                        letters.insert(spelling.clone(), t.clone());
                    }
                }
            }
        }
    }

    for (base_key, synonyms) in &source.accented_vowel_alternates {
        let base_vowel = base_vowel_of(base_key);
        let source_accent = accent_of(base_key);
        let Some(base_letters) = letters.get(base_vowel).cloned() else {
            log::warn!(
                "accented_vowel_alternates base '{base_vowel}' missing from compiled letters for {from} -> {to}; skipping '{base_key}'"
            );
            continue;
        };
        let base_marks = marks.get(base_vowel).cloned().unwrap_or_default();
        let target_accent = accents
            .get(source_accent)
            .cloned()
            .unwrap_or_else(|| source_accent.to_string());

        for synonym in synonyms {
            record_token_length(&mut max_token_length, synonym);
            letters.insert(synonym.clone(), format!("{base_letters}{target_accent}"));
            marks.insert(synonym.clone(), format!("{base_marks}{target_accent}"));
        }
    }

    let virama = target
        .render(GROUP_VIRAMA, "्")
        .or_else(|| target.group(GROUP_VIRAMA).and_then(|g| g.values().next().cloned()))
        .unwrap_or_default();
    let to_scheme_a = target.render(GROUP_VOWELS, "अ").unwrap_or_else(|| "a".to_string());
    let from_scheme_a = source.render(GROUP_VOWELS, "अ").unwrap_or_else(|| "a".to_string());

    log::debug!("compiled map {from} -> {to}: {} letters, {} marks", letters.len(), marks.len());

    Ok(CompiledMap {
        letters,
        marks,
        consonants,
        accents,
        max_token_length,
        from_roman: source.is_roman,
        to_roman: target.is_roman,
        virama,
        to_scheme_a,
        from_scheme_a,
    })
}

fn is_empty_exempt(group: &str) -> bool {
    matches!(group, GROUP_VIRAMA | GROUP_ZWJ | "skip")
}

/// Cache key: (from, to, options) compared by value (spec.md §3 "Cache").
#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    from: String,
    to: String,
    options: Options,
}

/// A process-wide single-slot memo of the last compiled map. Removing it
/// must not change any result (spec.md §5); it only avoids recompiling the
/// same (from, to, options) triple repeatedly. Guarded by a mutex so it's
/// safe to share across threads (spec.md §5's "guarded by a mutex with
/// copy-on-read semantics").
pub struct MapCache {
    slot: Mutex<Option<(CacheKey, CompiledMap)>>,
}

impl MapCache {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return a freshly-compiled or cached `CompiledMap` for (from, to,
    /// options), rebuilding (and replacing the single slot) on a miss.
    pub fn get_or_compile(
        &self,
        registry: &SchemeRegistry,
        from: &str,
        to: &str,
        options: &Options,
    ) -> Result<CompiledMap, LipiError> {
        let key = CacheKey {
            from: from.to_string(),
            to: to.to_string(),
            options: options.clone(),
        };

        {
            let guard = self.slot.lock().expect("map cache mutex poisoned");
            if let Some((cached_key, cached_map)) = guard.as_ref() {
                if *cached_key == key {
                    return Ok(cached_map.clone());
                }
            }
        }

        let compiled = compile(registry, from, to)?;
        let mut guard = self.slot.lock().expect("map cache mutex poisoned");
        *guard = Some((key, compiled.clone()));
        Ok(compiled)
    }

    /// Drop the cached entry. Called after any mutation of a scheme
    /// definition (spec.md §5: "the cache must be invalidated after any
    /// mutation of the source or target scheme's definition").
    pub fn invalidate(&self) {
        let mut guard = self.slot.lock().expect("map cache mutex poisoned");
        *guard = None;
    }
}

impl Default for MapCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::SchemeRegistry;

    #[test]
    fn compiling_unknown_scheme_errors() {
        let registry = SchemeRegistry::new();
        let err = compile(&registry, "nope", "devanagari").unwrap_err();
        assert!(matches!(err, LipiError::UnknownScheme(s) if s == "nope"));
    }

    #[test]
    fn max_token_length_matches_longest_token() {
        let registry = SchemeRegistry::new();
        let map = compile(&registry, "itrans", "devanagari").unwrap();
        let longest = map
            .letters
            .keys()
            .chain(map.marks.keys())
            .map(|s| s.chars().count())
            .max()
            .unwrap();
        assert_eq!(map.max_token_length, longest);
    }

    #[test]
    fn roman_to_roman_virama_is_empty() {
        let registry = SchemeRegistry::new();
        let map = compile(&registry, "hk", "iast").unwrap();
        assert_eq!(map.virama, "");
    }

    #[test]
    fn cache_reuses_identical_triple() {
        let registry = SchemeRegistry::new();
        let cache = MapCache::new();
        let options = Options::default();
        let first = cache.get_or_compile(&registry, "hk", "devanagari", &options).unwrap();
        let second = cache.get_or_compile(&registry, "hk", "devanagari", &options).unwrap();
        assert_eq!(first.max_token_length, second.max_token_length);
        let third = cache.get_or_compile(&registry, "iast", "devanagari", &options).unwrap();
        assert_ne!(third.letters.get("ā"), None);
    }
}
