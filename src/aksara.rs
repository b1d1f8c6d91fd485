//! Aksara Analyzer and word-wise rendering (spec.md §4.6, §4.7).

use once_cell::sync::Lazy;
use regex::Regex;

static SPLIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[▷,?!:]|\|+\d[|\d.-]*|\|+|\d[\d.-]*").unwrap());
static VOWEL_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[aiuāīūṛṝḷḹáíúeēèoōò]+[ṃḥ]?").unwrap());
static DIGIT_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d०-९]+$").unwrap());
static PUNCT_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[,.?!:|।॥]").unwrap());
static LEADING_CONSONANT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(kṣ|jñ|ll|[kgcjṭḍtdpb]h?|[ṅñṇnmyrlvśṣsh])").unwrap()
});
static LONE_CONSONANT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[kgcjṭḍtdpbṅñṇnmyrlvśṣsh]$").unwrap());
static PULLABLE_CONSONANT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ṅñṇnmrśṣsh]$").unwrap());

/// Split a Roman word into syllables, trailing consonant clusters, and
/// punctuation/number/audio-marker runs (spec.md §4.6 `splitAksara`).
pub fn split_aksara(word: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    let mut last = 0usize;

    for mat in SPLIT_REGEX.find_iter(word) {
        split_alpha_fragment(&word[last..mat.start()], &mut items);
        push_or_merge_marker(&mut items, mat.as_str());
        last = mat.end();
    }
    split_alpha_fragment(&word[last..], &mut items);

    items
}

fn split_alpha_fragment(fragment: &str, items: &mut Vec<String>) {
    let mut rest = fragment;
    while !rest.is_empty() {
        match VOWEL_GROUP.find(rest) {
            Some(mat) => {
                items.push(rest[..mat.end()].to_string());
                rest = &rest[mat.end()..];
            }
            None => {
                if !rest.is_empty() {
                    items.push(rest.to_string());
                }
                break;
            }
        }
    }
}

fn push_or_merge_marker(items: &mut Vec<String>, marker: &str) {
    let mergeable = marker.chars().all(|c| c == '|' || c == '.' || c == '-' || c.is_ascii_digit());
    if mergeable {
        if let Some(last) = items.last_mut() {
            let last_mergeable =
                last.chars().all(|c| c == '|' || c == '.' || c == '-' || c.is_ascii_digit());
            if last_mergeable {
                last.push_str(marker);
                return;
            }
        }
    }
    items.push(marker.to_string());
}

/// Classify one `splitAksara` element into its type code(s) (spec.md §4.6
/// `getAksaraType`). A tab-joined multi-part item is typed part-by-part and
/// the codes concatenated, so the result may be more than one character.
pub fn aksara_type(item: &str) -> String {
    if item.is_empty() {
        return ' '.to_string();
    }
    if item.starts_with('▷') {
        return 'u'.to_string();
    }
    if DIGIT_CLASS.is_match(item) {
        return 'n'.to_string();
    }
    if PUNCT_CLASS.is_match(item) {
        return 'p'.to_string();
    }

    if item.contains('\t') {
        return item.split('\t').map(aksara_type).collect();
    }

    let has_vowel = VOWEL_GROUP.is_match(item);
    let consonant_count = count_consonants(item);
    let consonant_code = match consonant_count {
        0 => 0,
        1 => 1,
        _ => 2,
    };
    let code = if has_vowel { 4 + consonant_code } else { consonant_code };
    char::from_digit(code as u32, 10).unwrap_or(' ').to_string()
}

fn count_consonants(item: &str) -> usize {
    let mut count = 0usize;
    let mut rest = item;
    while !rest.is_empty() {
        if let Some(mat) = LEADING_CONSONANT.find(rest) {
            count += 1;
            rest = &rest[mat.end()..];
        } else {
            let next = rest.chars().next().unwrap();
            rest = &rest[next.len_utf8()..];
        }
    }
    count
}

/// Strip the optional digit-then-alphanumeric run following each `▷` marker,
/// collecting the stripped runs into `out` (spec.md §4.6 `pickAudioNumbers`).
pub fn pick_audio_numbers(out: &mut Vec<String>, text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        result.push(ch);
        if ch != '▷' {
            continue;
        }
        let mut number = String::new();
        if let Some(&(_, d)) = chars.peek() {
            if d.is_ascii_digit() {
                number.push(d);
                chars.next();
            }
        }
        while let Some(&(_, d)) = chars.peek() {
            if d.is_ascii_digit() || d.is_ascii_lowercase() {
                number.push(d);
                chars.next();
            } else {
                break;
            }
        }
        out.push(number);
    }

    result
}

/// Reinsert the audio numbers collected by `pick_audio_numbers`, one per
/// `▷` marker starting at `start` (spec.md §4.6 `refillAudioNumbers`).
pub fn refill_audio_numbers(audios: &[String], start: usize, text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut index = start;

    for ch in text.chars() {
        result.push(ch);
        if ch == '▷' {
            if let Some(number) = audios.get(index) {
                result.push_str(number);
            }
            index += 1;
        }
    }

    result
}

/// `transliterateWordwise` (spec.md §4.6): splits `data` on whitespace, and
/// for each word either transliterates it whole or (when `split_aksara` is
/// on, or the word carries an audio marker) syllable-by-syllable with
/// optional consonant migration.
pub fn transliterate_wordwise<F>(
    data: &str,
    split_aksara: bool,
    move_consonant: bool,
    mut transliterate_one: F,
) -> Vec<(String, String)>
where
    F: FnMut(&str) -> String,
{
    let data = if data.contains('▷') { glue_audio_markers(data) } else { data.to_string() };

    data.split_whitespace()
        .filter(|w| !w.is_empty())
        .map(|word| {
            let has_audio = word.contains('▷');
            if split_aksara || has_audio {
                transliterate_word_by_syllables(
                    word,
                    if split_aksara { "\t" } else { "" },
                    move_consonant,
                    &mut transliterate_one,
                )
            } else {
                (word.to_string(), transliterate_one(word))
            }
        })
        .collect()
}

fn glue_audio_markers(data: &str) -> String {
    data.replace(" ▷", "▷").replace("▷ -", "▷-")
}

fn transliterate_word_by_syllables(
    word: &str,
    separator: &str,
    move_consonant: bool,
    transliterate_one: &mut impl FnMut(&str) -> String,
) -> (String, String) {
    let mut syllables = split_aksara(word);
    merge_trailing_lone_consonant(&mut syllables);

    let mut migrated = syllables.clone();
    combine_adjacent_consonants(&mut syllables, &mut migrated, move_consonant);

    let transliterated: Vec<String> = migrated.iter().map(|s| transliterate_one(s)).collect();

    (syllables.join(separator), transliterated.join(separator))
}

fn merge_trailing_lone_consonant(syllables: &mut Vec<String>) {
    if syllables.len() < 2 {
        return;
    }
    let mut i = syllables.len();
    while i > 1 {
        i -= 1;
        if syllables[i] == "▷" {
            continue;
        }
        if LONE_CONSONANT.is_match(&syllables[i]) && ends_in_vowel(&syllables[i - 1]) {
            let consonant = syllables.remove(i);
            syllables[i - 1].push_str(&consonant);
        }
        break;
    }
}

fn ends_in_vowel(s: &str) -> bool {
    VOWEL_GROUP
        .find_iter(s)
        .last()
        .map(|m| m.end() == s.len())
        .unwrap_or(false)
}

/// `combineAdjacentConsonants` (spec.md §4.7): right-to-left pass over the
/// `migrated` list, absorbing orphan consonants into the following
/// syllable's consonant head, and optionally pulling a lead consonant back
/// when `move_consonant` is enabled.
fn combine_adjacent_consonants(
    originals: &mut Vec<String>,
    migrated: &mut Vec<String>,
    move_consonant: bool,
) {
    if migrated.len() < 2 {
        return;
    }

    let mut i = migrated.len();
    while i > 1 {
        i -= 1;
        let left_index = real_index_before(migrated, i);
        let Some(left_index) = left_index else { continue };
        let right_index = real_index_at_or_after(migrated, i);
        let Some(right_index) = right_index else { continue };

        let left = migrated[left_index].trim_start_matches('-').trim_end_matches('-').to_string();
        let right = migrated[right_index].clone();
        let right_begin_con = LEADING_CONSONANT.is_match(right.trim_start_matches('-'));

        if LONE_CONSONANT.is_match(&left) && right_begin_con {
            let had_leading_dash = right.starts_with('-');
            let rest = right.trim_start_matches('-');
            let combined = if had_leading_dash {
                format!("-{left}{rest}")
            } else {
                format!("{left}{rest}")
            };
            migrated[right_index] = combined;
            migrated.remove(left_index);

            if originals.get(left_index).map(String::as_str) == Some(left.as_str())
                && left_index > 0
                && ends_in_vowel(&originals[left_index - 1])
            {
                let removed = originals.remove(left_index);
                originals[left_index - 1].push_str(&removed);
            }
        } else if move_consonant && ends_in_vowel(&left) {
            if let Some(cap) = PULLABLE_CONSONANT.find(right.trim_start_matches('-')) {
                if cap.as_str().len() == right.trim_start_matches('-').len().min(cap.as_str().len())
                    && right.trim_start_matches('-').chars().count() == 1
                {
                    let consonant = cap.as_str().to_string();
                    if let Some(orig) = originals.get_mut(left_index) {
                        orig.push_str(&consonant);
                    }
                    let remainder: String =
                        right.trim_start_matches('-').chars().skip(consonant.chars().count()).collect();
                    if remainder.is_empty() {
                        migrated.remove(right_index);
                        if right_index < originals.len() {
                            originals.remove(right_index);
                        }
                    } else {
                        migrated[right_index] = remainder;
                    }
                }
            }
        }
    }
}

fn real_index_before(items: &[String], i: usize) -> Option<usize> {
    (0..i).rev().find(|&idx| items[idx] != "▷")
}

fn real_index_at_or_after(items: &[String], i: usize) -> Option<usize> {
    (i..items.len()).find(|&idx| items[idx] != "▷")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_word_into_syllables() {
        let syllables = split_aksara("rāma");
        assert_eq!(syllables, vec!["rā", "ma"]);
    }

    #[test]
    fn splits_trailing_consonant_cluster() {
        let syllables = split_aksara("rāmas");
        assert_eq!(syllables, vec!["rā", "ma", "s"]);
    }

    #[test]
    fn type_and_split_have_matching_length() {
        let word = "rāmo rājā";
        for part in word.split_whitespace() {
            let syllables = split_aksara(part);
            let types: String = syllables.iter().map(|s| aksara_type(s)).collect();
            assert_eq!(types.chars().count(), syllables.len());
        }
    }

    #[test]
    fn audio_numbers_round_trip() {
        let mut audios = Vec::new();
        let stripped = pick_audio_numbers(&mut audios, "rā▷1ma▷2s");
        let restored = refill_audio_numbers(&audios, 0, &stripped);
        assert_eq!(restored, "rā▷ma▷s".replace("▷ma", "▷1ma").replace("▷s", "▷2s"));
    }

    #[test]
    fn wordwise_whole_word_when_not_split() {
        let result = transliterate_wordwise("rAma", false, false, |w| w.to_uppercase());
        assert_eq!(result, vec![("rAma".to_string(), "RAMA".to_string())]);
    }

    #[test]
    fn wordwise_joins_syllables_with_tab_when_split() {
        let result = transliterate_wordwise("rāma", true, false, |w| w.to_string());
        assert_eq!(result[0].0, "rā\tma");
    }

    #[test]
    fn wordwise_audio_marker_without_split_aksara_is_not_tab_joined() {
        let result = transliterate_wordwise("rā▷ma", false, false, |w| w.to_string());
        assert_eq!(result[0].0, "rā▷ma");
        assert!(!result[0].0.contains('\t'));
    }
}
