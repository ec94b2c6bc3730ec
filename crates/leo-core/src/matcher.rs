//! Translation matching
//!
//! Picks which translation candidate a user's hint refers to, and answers
//! whether a word already carries a given translation.

use std::collections::{HashMap, HashSet};

use unicode_normalization::UnicodeNormalization;

use crate::types::{TranslationCandidate, WordRecord};

/// Minimum similarity for a candidate to count as the hinted translation
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Comparison key: NFC, trimmed, lowercased
fn fold(text: &str) -> String {
    text.trim().nfc().collect::<String>().to_lowercase()
}

/// Similarity ratio in `[0, 1]`, case-insensitive and symmetric.
///
/// `2 * M / T` where `M` is the total size of the matching blocks found by
/// recursively taking the longest common substring, and `T` is the combined
/// length of both inputs in chars.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = fold(a);
    let b = fold(b);

    // Block matching prefers earlier positions in `a`, so fix the argument
    // order to keep the score independent of it.
    let (a, b) = if a <= b { (a, b) } else { (b, a) };

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        b2j.entry(*ch).or_default().push(j);
    }

    let mut matched = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, size) = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }

        matched += size;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            queue.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`, earliest on ties
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    let mut run_ending_at: HashMap<usize, usize> = HashMap::new();

    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next: HashMap<usize, usize> = HashMap::new();

        if let Some(positions) = b2j.get(ch) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }

                let size = j
                    .checked_sub(1)
                    .and_then(|prev| run_ending_at.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, size);

                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }

        run_ending_at = next;
    }

    (best_i, best_j, best_size)
}

/// Best candidate for `desired`, or `None` when nothing reaches `threshold`.
///
/// Candidates with empty text are never considered. On equal scores the
/// earlier candidate wins.
pub fn select_best<'a>(
    candidates: &'a [TranslationCandidate],
    desired: &str,
    threshold: f64,
) -> Option<&'a TranslationCandidate> {
    if desired.trim().is_empty() {
        return None;
    }

    let mut best: Option<(&TranslationCandidate, f64)> = None;

    for candidate in candidates.iter().filter(|c| c.is_usable()) {
        let score = similarity(&candidate.text, desired);
        tracing::trace!("candidate {} '{}' scored {:.3}", candidate.id, candidate.text, score);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    best.filter(|(_, score)| *score >= threshold)
        .map(|(candidate, _)| candidate)
}

/// Translations a word already has, from the combined field and then the
/// structured list, deduplicated case-insensitively.
///
/// Order and casing of the first occurrence are kept.
pub fn extract_existing_translations(record: &WordRecord) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    let combined = record.combined_translation.split(';');
    let structured = record.translations.iter().map(String::as_str);

    for text in combined.chain(structured) {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        if seen.insert(fold(text)) {
            result.push(text.to_string());
        }
    }

    result
}

/// Exact membership test, ignoring case and surrounding whitespace
pub fn translation_already_present(existing: &[String], hint: &str) -> bool {
    let hint = fold(hint);
    existing.iter().any(|t| fold(t) == hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(texts: &[(i64, &str)]) -> Vec<TranslationCandidate> {
        texts
            .iter()
            .map(|(id, text)| TranslationCandidate::new(*id, *text))
            .collect()
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("перевод", "перевод"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("abcd", "bcde"), 0.75);
    }

    #[test]
    fn test_similarity_ignores_case() {
        assert_eq!(similarity("Перевод", "пЕРЕВОД"), 1.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let pairs = [
            ("перевод", "переводчик"),
            ("abcab", "bcaba"),
            ("tide", "diet"),
            ("толкование", "значение"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn test_exact_match() {
        let list = candidates(&[(1, "перевод"), (2, "толкование")]);
        let best = select_best(&list, "перевод", DEFAULT_THRESHOLD).unwrap();
        assert_eq!(best.id, 1);
    }

    #[test]
    fn test_partial_match_highest_score() {
        let list = candidates(&[(1, "перевод"), (2, "переводчик"), (3, "толкование")]);
        let best = select_best(&list, "переводчик", DEFAULT_THRESHOLD).unwrap();
        assert_eq!(best.id, 2);
    }

    #[test]
    fn test_below_threshold_is_none() {
        let list = candidates(&[(1, "перевод"), (2, "толкование")]);
        assert!(select_best(&list, "xyzabc123", DEFAULT_THRESHOLD).is_none());
    }

    #[test]
    fn test_near_miss_above_threshold() {
        // 2 * 7 / 17 ≈ 0.82
        let list = candidates(&[(1, "переводчик")]);
        assert_eq!(select_best(&list, "перевод", DEFAULT_THRESHOLD).unwrap().id, 1);
        assert!(select_best(&list, "перевод", 0.9).is_none());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(select_best(&[], "перевод", DEFAULT_THRESHOLD).is_none());

        let list = candidates(&[(1, "перевод")]);
        assert!(select_best(&list, "   ", DEFAULT_THRESHOLD).is_none());
    }

    #[test]
    fn test_skips_empty_candidates() {
        let list = candidates(&[(1, ""), (2, "перевод")]);
        assert_eq!(select_best(&list, "перевод", DEFAULT_THRESHOLD).unwrap().id, 2);

        let only_empty = candidates(&[(1, ""), (2, "  ")]);
        assert!(select_best(&only_empty, "x", 0.0).is_none());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let list = candidates(&[(1, "Перевод"), (2, "ТОЛКОВАНИЕ")]);
        assert_eq!(select_best(&list, "перевод", DEFAULT_THRESHOLD).unwrap().id, 1);
    }

    #[test]
    fn test_tie_keeps_first() {
        let list = candidates(&[(7, "слово"), (8, "СЛОВО"), (9, "слово")]);
        assert_eq!(select_best(&list, "слово", DEFAULT_THRESHOLD).unwrap().id, 7);
    }

    #[test]
    fn test_select_best_is_idempotent() {
        let list = candidates(&[(1, "перевод"), (2, "переводчик"), (3, "толкование")]);
        let first = select_best(&list, "переводы", DEFAULT_THRESHOLD).cloned();
        let second = select_best(&list, "переводы", DEFAULT_THRESHOLD).cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_from_combined() {
        let record = WordRecord {
            combined_translation: " доктор ; врач ; медик ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            extract_existing_translations(&record),
            vec!["доктор", "врач", "медик"]
        );
    }

    #[test]
    fn test_extract_dedupes_keeping_first_casing() {
        let record = WordRecord {
            combined_translation: "доктор; врач; Доктор".to_string(),
            ..Default::default()
        };
        assert_eq!(extract_existing_translations(&record), vec!["доктор", "врач"]);
    }

    #[test]
    fn test_extract_unions_both_sources() {
        let record = WordRecord {
            combined_translation: "доктор; врач".to_string(),
            translations: vec!["Врач".to_string(), "медик".to_string()],
            ..Default::default()
        };
        assert_eq!(
            extract_existing_translations(&record),
            vec!["доктор", "врач", "медик"]
        );
    }

    #[test]
    fn test_extract_empty_record() {
        assert!(extract_existing_translations(&WordRecord::default()).is_empty());
    }

    #[test]
    fn test_translation_already_present() {
        let existing = vec!["Доктор".to_string(), "врач".to_string()];

        assert!(translation_already_present(&existing, "  доктор "));
        assert!(translation_already_present(&existing, "ВРАЧ"));
        assert!(!translation_already_present(&existing, "доктора"));
        assert!(!translation_already_present(&[], "доктор"));
    }
}
