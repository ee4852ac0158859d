/// Heuristic score extraction from free-form pitch text.
///
/// Each field is resolved by keyword proximity: the first occurrence of a keyword
/// opens a window of characters around it, and the first number inside that window
/// becomes the field value. Keywords are tried in a fixed priority order. Fields no
/// keyword resolves take a positional pick from all numbers in the document, or 5.0
/// when the document has none. Every field is clamped into [0, 10].
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{round2, ScoreVector};

/// 1 to 3 digits with an optional decimal fraction, on word boundaries.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{1,3}(?:\.[0-9]+)?)\b").expect("valid regex"));

/// Characters taken on each side of a keyword occurrence.
pub const WINDOW_CHARS: usize = 100;

/// Value used for a field when the document contains no numbers at all.
pub const DEFAULT_SCORE: f64 = 5.0;

/// Keyword priority per field, in `ScoreVector` field order.
pub const FIELD_KEYWORDS: [(&str, &[&str]); 5] = [
    ("market", &["market", "addressable"]),
    ("business", &["business", "model"]),
    ("team", &["team", "founder"]),
    ("traction", &["traction", "users", "growth"]),
    ("risk", &["risk", "challenge"]),
];

/// Extract a clamped `ScoreVector` from document text. Never fails.
pub fn extract(text: &str) -> ScoreVector {
    let text = text.to_lowercase();
    let fallback = fallback_value(&parse_numbers(&text));

    let mut values = [DEFAULT_SCORE; 5];
    for (slot, (field, keywords)) in values.iter_mut().zip(FIELD_KEYWORDS) {
        let resolved = keywords
            .iter()
            .find_map(|kw| find_near(&text, kw).map(|v| (*kw, v)));
        *slot = match resolved {
            Some((keyword, value)) => {
                debug!(field, keyword, value, "field resolved by keyword");
                value
            }
            None => {
                debug!(field, value = fallback, "field resolved by fallback");
                fallback
            }
        };
    }

    let [market, business, team, traction, risk] = values;
    ScoreVector::new(market, business, team, traction, risk).clamped()
}

/// Map a raw number onto the 0-10 scale: values in (10, 100] are read as
/// percentages and divided by 10. Everything else is only rounded.
pub fn normalize(v: f64) -> f64 {
    if v > 10.0 && v <= 100.0 {
        round2(v / 10.0)
    } else {
        round2(v)
    }
}

/// Every number-like token in document order, unnormalized.
fn parse_numbers(text: &str) -> Vec<f64> {
    NUMBER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// First number in the window around the keyword's first occurrence, normalized.
fn find_near(text: &str, keyword: &str) -> Option<f64> {
    let idx = text.find(keyword)?;
    let window = &text[window_start(text, idx)..window_end(text, idx)];
    parse_numbers(window).first().copied().map(normalize)
}

/// Byte offset `WINDOW_CHARS` characters before `idx`, or 0.
fn window_start(text: &str, idx: usize) -> usize {
    text[..idx]
        .char_indices()
        .rev()
        .nth(WINDOW_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset `WINDOW_CHARS` characters after `idx`, or the end of the text.
fn window_end(text: &str, idx: usize) -> usize {
    text[idx..]
        .char_indices()
        .nth(WINDOW_CHARS)
        .map(|(i, _)| idx + i)
        .unwrap_or(text.len())
}

/// Element at index `len / 2` of the normalized pool, in document order.
///
/// This is a positional pick, not a median: the pool is never sorted.
fn fallback_value(raw: &[f64]) -> f64 {
    let pool: Vec<f64> = raw.iter().copied().map(normalize).collect();
    match pool.get(pool.len() / 2) {
        Some(&m) if m <= 10.0 => m,
        Some(&m) => round2(m / 10.0),
        None => DEFAULT_SCORE,
    }
}
