//! `lipyantara`: a transliteration library for Sanskrit between Brahmic
//! abugidas (Devanagari, Bengali, Tamil, ...) and Roman encodings (IAST, HK,
//! SLP1, ITRANS, ...).
//!
//! The library is a process-wide [`Transliterator`] wrapping a
//! [`scheme::SchemeRegistry`] and a single-slot [`compile::MapCache`]
//! (spec.md §9 "Process-wide singleton"); [`transliterate`] and
//! [`detect`] wrap a lazily-initialized default instance for callers who
//! don't need custom schemes.

pub mod aksara;
pub mod brahmic;
pub mod compile;
pub mod detect;
pub mod dispatch;
pub mod error;
pub mod roman;
pub mod scheme;
pub mod schemes_data;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use unicode_normalization::UnicodeNormalization;

pub use error::LipiError;
pub use scheme::{Scheme, SchemeRegistry};

/// Options accepted by [`Transliterator::transliterate`] / [`transliterate`]
/// (spec.md §6 "options recognized keys").
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    pub skip_sgml: bool,
    pub syncope: bool,
    pub preferred_alternates: FxHashMap<String, FxHashMap<String, String>>,
    pub split_aksara: bool,
    pub move_consonant: bool,
}

/// Owns the Scheme Registry and the compiled-map cache (spec.md §9).
pub struct Transliterator {
    registry: SchemeRegistry,
    cache: compile::MapCache,
}

impl Transliterator {
    pub fn new() -> Self {
        Self {
            registry: SchemeRegistry::new(),
            cache: compile::MapCache::new(),
        }
    }

    /// `t(data, from, to, options)` (spec.md §6). NFC-normalizes `data`
    /// first so precomposed and decomposed Unicode input behave alike.
    pub fn transliterate(
        &self,
        data: &str,
        from: &str,
        to: &str,
        options: &Options,
    ) -> Result<String, LipiError> {
        let normalized: String = data.nfc().collect();
        dispatch::t(&normalized, from, to, options, &self.registry, &self.cache)
    }

    pub fn transliterate_wordwise(
        &self,
        data: &str,
        from: &str,
        to: &str,
        options: &Options,
    ) -> Result<Vec<(String, String)>, LipiError> {
        let normalized: String = data.nfc().collect();
        dispatch::transliterate_wordwise(&normalized, from, to, options, &self.registry, &self.cache)
    }

    pub fn detect(&self, data: &str) -> String {
        detect::detect(data)
    }

    /// `addBrahmicScheme` (spec.md §6). Invalidates the compiled-map cache.
    pub fn add_brahmic_scheme(&mut self, name: &str, scheme: Scheme) {
        self.registry.add_brahmic_scheme(name, scheme);
        self.cache.invalidate();
    }

    /// `addRomanScheme` (spec.md §6). Invalidates the compiled-map cache.
    pub fn add_roman_scheme(
        &mut self,
        name: &str,
        scheme: Scheme,
        deva_vowel_to_mark: &FxHashMap<String, String>,
    ) -> Result<(), LipiError> {
        self.registry.add_roman_scheme(name, scheme, deva_vowel_to_mark)?;
        self.cache.invalidate();
        Ok(())
    }

    pub fn scheme_names(&self) -> Vec<&str> {
        self.registry.names()
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT: Lazy<Transliterator> = Lazy::new(Transliterator::new);

/// Free-function wrapper over a lazily-initialized default
/// [`Transliterator`] (spec.md §9 "a free-function API may wrap a
/// lazily-initialized default instance").
pub fn transliterate(data: &str, from: &str, to: &str, options: &Options) -> Result<String, LipiError> {
    DEFAULT.transliterate(data, from, to, options)
}

pub fn transliterate_wordwise(
    data: &str,
    from: &str,
    to: &str,
    options: &Options,
) -> Result<Vec<(String, String)>, LipiError> {
    DEFAULT.transliterate_wordwise(data, from, to, options)
}

pub fn detect(data: &str) -> String {
    DEFAULT.detect(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_function_matches_scenario_one() {
        assert_eq!(transliterate("namaH", "hk", "devanagari", &Options::default()).unwrap(), "नमः");
    }

    #[test]
    fn default_transliterator_is_independent_of_custom_instances() {
        let custom = Transliterator::new();
        assert_eq!(
            custom.transliterate("namaH", "hk", "devanagari", &Options::default()).unwrap(),
            "नमः"
        );
    }

    #[test]
    fn nfc_normalizes_decomposed_input() {
        let decomposed = "a\u{0304}"; // combining macron over a == ā
        let out = transliterate(decomposed, "iast", "devanagari", &Options::default()).unwrap();
        assert_eq!(out, "आ");
    }
}
