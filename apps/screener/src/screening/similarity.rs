//! Text similarity: bag-of-words cosine over term frequencies.
//!
//! Term counts are integers, so the dot product and squared norms are exact and
//! the score does not depend on argument order or hash iteration order.

use std::collections::{BTreeMap, HashSet};

use crate::screening::errors::ScreeningError;

/// English stop words dropped before vectorizing.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "us", "very", "via", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "within", "would", "you",
    "your", "yours", "yourself", "yourselves",
];

/// Cosine similarity between free-text documents, scaled to 0–100.
#[derive(Debug, Clone, Default)]
pub struct TextSimilarity {
    stop_words: HashSet<String>,
}

impl TextSimilarity {
    pub fn new<'a, I>(stop_words: I) -> Result<Self, ScreeningError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = HashSet::new();
        for word in stop_words {
            let folded = word.trim().to_lowercase();
            if folded.is_empty() || !folded.chars().all(is_token_char) {
                return Err(ScreeningError::InvalidConfig(format!(
                    "stop word '{word}' is not a single token"
                )));
            }
            set.insert(folded);
        }
        Ok(Self { stop_words: set })
    }

    #[cfg(test)]
    pub fn with_default_stop_words() -> Result<Self, ScreeningError> {
        Self::new(DEFAULT_STOP_WORDS.iter().copied())
    }

    /// Lowercase word tokens with stop words removed, in document order.
    pub fn tokenize<'t>(&'t self, text: &'t str) -> impl Iterator<Item = String> + 't {
        text.split(|c: char| !is_token_char(c))
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .filter(|t| !self.stop_words.contains(t))
    }

    pub fn term_frequencies(&self, text: &str) -> BTreeMap<String, u64> {
        let mut tf = BTreeMap::new();
        for token in self.tokenize(text) {
            *tf.entry(token).or_insert(0) += 1;
        }
        tf
    }

    /// Returns 0 when either side has no content tokens.
    pub fn similarity(&self, text_a: &str, text_b: &str) -> f64 {
        let a = self.term_frequencies(text_a);
        let b = self.term_frequencies(text_b);
        cosine(&a, &b) * 100.0
    }
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#'
}

fn cosine(a: &BTreeMap<String, u64>, b: &BTreeMap<String, u64>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: u128 = small
        .iter()
        .filter_map(|(term, &n)| large.get(term).map(|&m| n as u128 * m as u128))
        .sum();
    if dot == 0 {
        return 0.0;
    }

    let norm_a: u128 = a.values().map(|&n| n as u128 * n as u128).sum();
    let norm_b: u128 = b.values().map(|&n| n as u128 * n as u128).sum();

    // sqrt of a product keeps identical vectors at exactly 1.0
    let denom = ((norm_a * norm_b) as f64).sqrt();
    (dot as f64 / denom).clamp(0.0, 1.0)
}
