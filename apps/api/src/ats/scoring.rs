//! Keyword-coverage scorer — measures how many distinct job-description
//! keywords also appear in the résumé text.
//!
//! Pure, deterministic, infallible. Identical inputs always yield
//! identical output, so callers may invoke this concurrently without
//! coordination.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Function words excluded from keyword analysis. Must stay sorted:
/// membership checks binary-search this slice.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "in", "is", "of", "on", "or", "the",
    "to", "with",
];

/// Matched/missing lists are capped at this many keywords each.
const KEYWORD_LIST_LIMIT: usize = 10;

/// Coverage report returned to callers.
///
/// The camelCase field names are part of the wire response to HTTP
/// clients — do not rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Percentage (0–100) of unique JD keywords present in the résumé.
    pub coverage: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl ScoreResult {
    fn empty() -> Self {
        ScoreResult {
            coverage: 0,
            matched_keywords: vec![],
            missing_keywords: vec![],
        }
    }
}

/// Scores `resume` against `jd`.
///
/// An empty or whitespace-only JD short-circuits to a zero result without
/// tokenizing the résumé at all.
pub fn score_resume(jd: &str, resume: &str) -> ScoreResult {
    if jd.trim().is_empty() {
        return ScoreResult::empty();
    }

    let jd_tokens = tokenize(jd);
    let resume_tokens: HashSet<String> = tokenize(resume).into_iter().collect();

    // Frequency over all JD tokens, plus the unique keywords in first-seen
    // order so that equal-frequency keywords rank in encounter order.
    let mut frequency: HashMap<&str, u32> = HashMap::new();
    let mut unique: Vec<&str> = Vec::new();
    for token in &jd_tokens {
        let count = frequency.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            unique.push(token.as_str());
        }
        *count += 1;
    }

    let unique_count = unique.len();
    let (matched, missing): (Vec<&str>, Vec<&str>) = unique
        .into_iter()
        .partition(|token| resume_tokens.contains(*token));

    // Coverage counts distinct keywords before the display lists are
    // truncated, and is not weighted by frequency.
    let coverage = if unique_count == 0 {
        0
    } else {
        ((matched.len() as f64 / unique_count as f64) * 100.0).round() as u32
    };

    ScoreResult {
        coverage,
        matched_keywords: rank_keywords(matched, &frequency),
        missing_keywords: rank_keywords(missing, &frequency),
    }
}

/// Lowercases, strips everything that is not `[a-z0-9+]` or whitespace
/// (keeping tokens like "c++" intact), splits on whitespace, and drops
/// stop words.
fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Sorts keywords by descending JD frequency (stable — ties keep encounter
/// order) and truncates to the display cap.
fn rank_keywords(mut keywords: Vec<&str>, frequency: &HashMap<&str, u32>) -> Vec<String> {
    keywords.sort_by(|a, b| frequency[b].cmp(&frequency[a]));
    keywords
        .into_iter()
        .take(KEYWORD_LIST_LIMIT)
        .map(str::to_string)
        .collect()
}
