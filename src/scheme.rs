//! Scheme data model and the process-wide Scheme Registry (spec.md §3, §4.2).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::LipiError;
use crate::schemes_data;

/// Groups that carry meaning beyond "insert into letters": vowel marks and
/// the virama are looked up *after* a consonant rather than standalone.
pub const GROUP_VOWELS: &str = "vowels";
pub const GROUP_VOWEL_MARKS: &str = "vowel_marks";
pub const GROUP_CONSONANTS: &str = "consonants";
pub const GROUP_EXTRA_CONSONANTS: &str = "extra_consonants";
pub const GROUP_VIRAMA: &str = "virama";
pub const GROUP_YOGAVAAHAS: &str = "yogavaahas";
pub const GROUP_ACCENTS: &str = "accents";
pub const GROUP_SYMBOLS: &str = "symbols";
pub const GROUP_ZWJ: &str = "zwj";
pub const GROUP_SKIP: &str = "skip";

/// Groups whose empty rendering is meaningful (preserved verbatim) rather
/// than falling back to the source key (spec.md §3 Invariants).
fn empty_is_meaningful(group: &str) -> bool {
    matches!(group, GROUP_VIRAMA | GROUP_ZWJ | GROUP_SKIP)
}

/// A named scheme: a mapping group-name → (canonical Devanagari key →
/// rendering string), plus the side attributes spec.md §3 describes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    pub is_roman: bool,
    pub groups: FxHashMap<String, FxHashMap<String, String>>,
    /// rendering → ordered list of alternate spellings, e.g. "ā" → ["A"].
    pub alternates: FxHashMap<String, Vec<String>>,
    /// accented-form key (ends in one accent char) → alternate spellings.
    pub accented_vowel_alternates: FxHashMap<String, Vec<String>>,
    /// ordered (long-form, short-form) rewrite pairs.
    pub shortcuts: Vec<(String, String)>,
}

impl Scheme {
    pub fn new(name: impl Into<String>, is_roman: bool) -> Self {
        Self {
            name: name.into(),
            is_roman,
            ..Default::default()
        }
    }

    pub fn with_group(mut self, group: &str, entries: FxHashMap<String, String>) -> Self {
        self.groups.insert(group.to_string(), entries);
        self
    }

    pub fn with_alternates(mut self, alternates: FxHashMap<String, Vec<String>>) -> Self {
        self.alternates = alternates;
        self
    }

    pub fn with_accented_vowel_alternates(
        mut self,
        accented_vowel_alternates: FxHashMap<String, Vec<String>>,
    ) -> Self {
        self.accented_vowel_alternates = accented_vowel_alternates;
        self
    }

    pub fn with_shortcuts(mut self, shortcuts: Vec<(String, String)>) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    pub fn group(&self, name: &str) -> Option<&FxHashMap<String, String>> {
        self.groups.get(name)
    }

    /// Rendering of `key` within `group`, with the empty→fallback rule of
    /// spec.md §3 applied (empty is only meaningful for virama/zwj/skip).
    pub fn render(&self, group: &str, key: &str) -> Option<String> {
        let rendering = self.group(group)?.get(key)?;
        if rendering.is_empty() && !empty_is_meaningful(group) {
            Some(key.to_string())
        } else {
            Some(rendering.clone())
        }
    }
}

/// Process-wide mapping from scheme name to scheme definition (spec.md §2.1).
pub struct SchemeRegistry {
    schemes: FxHashMap<String, Scheme>,
}

impl SchemeRegistry {
    /// A registry pre-populated with the built-in schemes (spec.md §9
    /// "Process-wide singleton": expressed here as an owned registry rather
    /// than module-scoped globals, so callers can run several independently
    /// and concurrent registration has no shared-mutable-state hazard).
    pub fn new() -> Self {
        let mut registry = Self {
            schemes: FxHashMap::default(),
        };
        schemes_data::register_builtins(&mut registry);
        registry
    }

    pub fn get(&self, name: &str) -> Result<&Scheme, LipiError> {
        self.schemes
            .get(name)
            .ok_or_else(|| LipiError::UnknownScheme(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemes.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemes.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// `addBrahmicScheme` (spec.md §6): registers a Brahmic scheme verbatim,
    /// no derivation performed.
    pub fn add_brahmic_scheme(&mut self, name: &str, scheme: Scheme) {
        self.schemes.insert(name.to_string(), scheme);
    }

    /// `addRomanScheme` (spec.md §6): registers a Roman scheme, auto-deriving
    /// `vowel_marks` from `vowels` (skipping the अ key) when the scheme
    /// doesn't already carry one, using `deva_vowel_to_mark` to know which
    /// keys are vowels at all.
    ///
    /// Errors with `MalformedScheme` if `vowels` lacks the अ key, or if an
    /// `accented_vowel_alternates` key decomposes to a base vowel absent
    /// from the scheme's own `vowels` group (spec.md §7).
    pub fn add_roman_scheme(
        &mut self,
        name: &str,
        mut scheme: Scheme,
        deva_vowel_to_mark: &FxHashMap<String, String>,
    ) -> Result<(), LipiError> {
        let vowels = scheme.groups.get(GROUP_VOWELS).cloned().unwrap_or_default();
        if !vowels.contains_key("अ") {
            return Err(LipiError::MalformedScheme {
                scheme: name.to_string(),
                reason: "vowels group lacks the अ (short-a) key".to_string(),
            });
        }

        if !scheme.groups.contains_key(GROUP_VOWEL_MARKS) {
            let mut marks = FxHashMap::default();
            for key in deva_vowel_to_mark.keys() {
                if key == "अ" {
                    continue;
                }
                if let Some(rendering) = vowels.get(key) {
                    marks.insert(key.clone(), rendering.clone());
                }
            }
            scheme.groups.insert(GROUP_VOWEL_MARKS.to_string(), marks);
        }

        for base in scheme.accented_vowel_alternates.keys() {
            let base_vowel = base_vowel_of(base);
            if !vowels.contains_key(base_vowel) {
                return Err(LipiError::MalformedScheme {
                    scheme: name.to_string(),
                    reason: format!(
                        "accented_vowel_alternates key '{base}' has no base vowel '{base_vowel}' in vowels"
                    ),
                });
            }
        }

        self.schemes.insert(name.to_string(), scheme);
        Ok(())
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Decompose an accented-form key into its base vowel: everything but the
/// final character, which is the accent (spec.md §3).
pub fn base_vowel_of(accented_key: &str) -> &str {
    match accented_key.char_indices().last() {
        Some((idx, _)) => &accented_key[..idx],
        None => accented_key,
    }
}

/// The single accent character of an accented-form key (spec.md §3).
pub fn accent_of(accented_key: &str) -> &str {
    match accented_key.char_indices().last() {
        Some((idx, _)) => &accented_key[idx..],
        None => accented_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_vowel_and_accent_split_last_char() {
        assert_eq!(base_vowel_of("अ॑"), "अ");
        assert_eq!(accent_of("अ॑"), "॑");
    }

    #[test]
    fn render_falls_back_to_key_when_empty_and_not_exempt() {
        let mut group = FxHashMap::default();
        group.insert("क".to_string(), String::new());
        let scheme = Scheme::new("x", true).with_group(GROUP_CONSONANTS, group);
        assert_eq!(scheme.render(GROUP_CONSONANTS, "क").as_deref(), Some("क"));
    }

    #[test]
    fn render_preserves_empty_for_virama() {
        let mut group = FxHashMap::default();
        group.insert("्".to_string(), String::new());
        let scheme = Scheme::new("x", true).with_group(GROUP_VIRAMA, group);
        assert_eq!(scheme.render(GROUP_VIRAMA, "्").as_deref(), Some(""));
    }

    #[test]
    fn add_roman_scheme_rejects_missing_short_a() {
        let mut registry = SchemeRegistry::new();
        let scheme = Scheme::new("broken", true);
        let err = registry
            .add_roman_scheme("broken", scheme, &FxHashMap::default())
            .unwrap_err();
        assert!(matches!(err, LipiError::MalformedScheme { .. }));
    }
}
