// Sub-category picker — the best-matching sub-category for a selected category.
//
// Sub-category names double as their own keyword lists: "Pro Ice Hockey"
// matches on "pro", "ice" and "hockey". A text that names the sub-category
// outright ("cricket") gets a large bonus so it beats incidental term hits.

use anyhow::{Context, Result};
use regex_lite::Regex;
use serde::Serialize;

use crate::signals::StopWordSet;
use crate::taxonomy::Subcategory;

/// Bonus for a whole-phrase mention of the sub-category name.
pub const PHRASE_BONUS: f64 = 10.0;

const MIN_TERM_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubcategoryScore {
    pub code: String,
    pub name: String,
    pub score: f64,
}

#[derive(Debug)]
struct CompiledSubcategory {
    code: String,
    name: String,
    terms: Vec<Regex>,
    phrase: Option<Regex>,
}

/// Compiled sub-category patterns for one category.
#[derive(Debug)]
pub struct SubcategoryMatcher {
    subcategories: Vec<CompiledSubcategory>,
}

impl SubcategoryMatcher {
    pub fn compile(subcategories: &[Subcategory], stop_words: &StopWordSet) -> Result<Self> {
        let subcategories = subcategories
            .iter()
            .map(|sub| compile_one(sub, stop_words))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { subcategories })
    }

    /// Score every sub-category against already-lowercased text.
    pub fn scores(&self, lower_text: &str) -> Vec<SubcategoryScore> {
        self.subcategories
            .iter()
            .map(|sub| {
                let mut score: f64 = sub
                    .terms
                    .iter()
                    .map(|re| re.find_iter(lower_text).count() as f64)
                    .sum();
                if sub.phrase.as_ref().is_some_and(|re| re.is_match(lower_text)) {
                    score += PHRASE_BONUS;
                }
                SubcategoryScore {
                    code: sub.code.clone(),
                    name: sub.name.clone(),
                    score,
                }
            })
            .collect()
    }

    /// The highest-scoring sub-category with a non-zero score. Ties go to
    /// the one listed first.
    pub fn best(&self, lower_text: &str) -> Option<SubcategoryScore> {
        let mut best: Option<SubcategoryScore> = None;
        for candidate in self.scores(lower_text) {
            if candidate.score <= 0.0 {
                continue;
            }
            if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        best
    }
}

fn compile_one(sub: &Subcategory, stop_words: &StopWordSet) -> Result<CompiledSubcategory> {
    let lower = sub.name.to_lowercase();

    let mut seen: Vec<&str> = Vec::new();
    for term in lower.split(|c: char| !c.is_ascii_alphanumeric()) {
        if term.chars().count() < MIN_TERM_LEN || stop_words.contains(term) || seen.contains(&term)
        {
            continue;
        }
        seen.push(term);
    }

    let terms = seen
        .iter()
        .map(|term| word_regex(term))
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("Failed to compile patterns for sub-category {}", sub.code))?;

    // Only names that start and end on a word character can be matched as a
    // whole phrase ("A.D.D." cannot).
    let phrase_ok = lower.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && lower.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
    let phrase = if phrase_ok {
        Some(word_regex(lower.trim())?)
    } else {
        None
    };

    Ok(CompiledSubcategory {
        code: sub.code.clone(),
        name: sub.name.clone(),
        terms,
        phrase,
    })
}

/// Case-insensitive whole-word pattern for a literal term or phrase.
pub(crate) fn word_regex(term: &str) -> Result<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex_lite::escape(term)))
        .with_context(|| format!("Failed to compile pattern for {term:?}"))
}
