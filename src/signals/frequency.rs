// Word frequency and keyword importance.
//
// Tokenization is deliberately crude: lowercase, strip anything that is not an
// ASCII word character or whitespace, split on whitespace. Contractions and
// possessives collapse ("team's" -> "teams"), which is fine for counting.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use stop_words::{get, LANGUAGE};

/// Fixed English stop list: articles, prepositions, auxiliaries, modals, pronouns.
const COMPACT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "so", "than", "as", "of", "in", "on",
    "at", "to", "for", "from", "by", "with", "about", "into", "over", "after", "before",
    "under", "between", "through", "is", "are", "was", "were", "be", "been", "being", "am",
    "have", "has", "had", "do", "does", "did", "will", "would", "shall", "should", "can",
    "could", "may", "might", "must", "i", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them", "this", "that", "these", "those", "his", "its", "our", "their", "your",
    "my", "not", "also", "just", "very",
];

/// Which stop list to filter tokens against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopWords {
    /// The fixed compact list (default)
    #[default]
    Compact,
    /// Compact list plus the full English list from the `stop-words` crate
    Extended,
}

impl FromStr for StopWords {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "extended" => Ok(Self::Extended),
            other => anyhow::bail!("Unknown stop word list '{other}' (expected compact or extended)"),
        }
    }
}

/// A materialized stop list.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn new(kind: StopWords) -> Self {
        let mut words: HashSet<String> =
            COMPACT_STOP_WORDS.iter().map(|w| w.to_string()).collect();
        if kind == StopWords::Extended {
            let extended: Vec<String> = get(LANGUAGE::English);
            words.extend(extended.into_iter().map(|w| w.to_lowercase()));
        }
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::new(StopWords::Compact)
    }
}

/// Occurrence counts for the normalized words of one text.
///
/// Entries keep first-occurrence order so downstream ranking is stable.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    entries: Vec<(String, usize)>,
}

impl WordFrequency {
    /// Count for a word (0 if it never appeared).
    pub fn get(&self, word: &str) -> usize {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// (word, count) pairs in first-occurrence order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize text into a lowercase, punctuation-free string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Count tokens longer than two characters that are not stop words.
pub fn word_frequency(text: &str, stop_words: &StopWordSet) -> WordFrequency {
    let normalized = normalize(text);
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for token in normalized.split_whitespace() {
        if token.chars().count() <= 2 || stop_words.contains(token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => entries[i].1 += 1,
            None => {
                index.insert(token, entries.len());
                entries.push((token.to_string(), 1));
            }
        }
    }

    WordFrequency { entries }
}

/// Rank words by count, then by length (longer words are usually more
/// topic-specific). Remaining ties keep first-occurrence order.
pub fn important_keywords(frequency: &WordFrequency) -> Vec<String> {
    let mut ranked: Vec<&(String, usize)> = frequency.entries.iter().collect();
    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.0.chars().count().cmp(&a.0.chars().count()))
    });
    ranked.into_iter().map(|(word, _)| word.clone()).collect()
}
