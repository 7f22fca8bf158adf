// Per-category scoring: literal keyword hits, context multiplier, semantic overlap.
//
//   literal  = sum over matched keywords of count * importance * position
//   weighted = literal * context multiplier
//   total    = weighted + semantic overlap
//
// importance is 2 for keywords that are also among the text's top-ranked
// words, 1 otherwise.

use anyhow::{Context, Result};
use regex_lite::Regex;
use serde::Serialize;

use crate::signals::{AuxiliarySignals, ContextualSignals, PositionWeights, StopWordSet};
use crate::taxonomy::Category;

use super::multiplier::context_multiplier;
use super::semantic::semantic_score;
use super::subcategory::{word_regex, SubcategoryMatcher};

/// Importance factor for a keyword that is one of the text's top words.
pub const IMPORTANT_KEYWORD_FACTOR: f64 = 2.0;

/// One keyword's contribution to a category's literal score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub count: usize,
    pub importance: f64,
    pub position_weight: f64,
    pub contribution: f64,
}

/// Working record for a category that scored. `confidence` is filled in by
/// the ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub code: String,
    pub name: String,
    pub score: f64,
    pub confidence: f64,
    pub literal_score: f64,
    pub context_multiplier: f64,
    pub semantic_score: f64,
    pub hits: Vec<KeywordHit>,
}

/// Everything the scorer needs to know about one input text.
pub struct TextContext<'a> {
    /// Lowercased input
    pub lower_text: &'a str,
    /// Full importance ranking
    pub important: &'a [String],
    pub signals: ContextualSignals,
    pub auxiliary: AuxiliarySignals,
    /// How many top-ranked words count as important for the literal score
    pub importance_window: usize,
    /// How many top-ranked words take part in semantic overlap
    pub semantic_window: usize,
    pub position: PositionWeights,
}

#[derive(Debug)]
struct KeywordPattern {
    keyword: String,
    regex: Regex,
}

/// A taxonomy category with its keyword patterns compiled.
#[derive(Debug)]
pub struct CompiledCategory {
    pub code: String,
    pub name: String,
    keywords: Vec<KeywordPattern>,
    keyword_list: Vec<String>,
    subcategories: SubcategoryMatcher,
}

impl CompiledCategory {
    pub fn compile(category: &Category, stop_words: &StopWordSet) -> Result<Self> {
        let keywords = category
            .keywords
            .iter()
            .map(|keyword| {
                Ok(KeywordPattern {
                    keyword: keyword.clone(),
                    regex: word_regex(keyword)?,
                })
            })
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Failed to compile keywords for {}", category.code))?;

        Ok(Self {
            code: category.code.clone(),
            name: category.name.clone(),
            keywords,
            keyword_list: category.keywords.clone(),
            subcategories: SubcategoryMatcher::compile(&category.subcategories, stop_words)?,
        })
    }

    pub fn subcategories(&self) -> &SubcategoryMatcher {
        &self.subcategories
    }

    /// Score this category against one text. Always returns a record; the
    /// caller decides whether the total clears the retention threshold.
    pub fn score(&self, ctx: &TextContext<'_>) -> CategoryScore {
        let top_important = &ctx.important[..ctx.importance_window.min(ctx.important.len())];

        let mut hits = Vec::new();
        let mut literal_score = 0.0;

        for pattern in &self.keywords {
            let count = pattern.regex.find_iter(ctx.lower_text).count();
            if count == 0 {
                continue;
            }

            let importance = if top_important.iter().any(|w| *w == pattern.keyword) {
                IMPORTANT_KEYWORD_FACTOR
            } else {
                1.0
            };
            let position_weight = ctx.position.weight(ctx.lower_text, &pattern.keyword);
            let contribution = count as f64 * importance * position_weight;

            literal_score += contribution;
            hits.push(KeywordHit {
                keyword: pattern.keyword.clone(),
                count,
                importance,
                position_weight,
                contribution,
            });
        }

        let multiplier = context_multiplier(&self.code, &ctx.signals, &ctx.auxiliary);
        let semantic_window = ctx.semantic_window.min(ctx.important.len());
        let semantic = semantic_score(&ctx.important[..semantic_window], &self.keyword_list);

        CategoryScore {
            code: self.code.clone(),
            name: self.name.clone(),
            score: literal_score * multiplier + semantic,
            confidence: 0.0,
            literal_score,
            context_multiplier: multiplier,
            semantic_score: semantic,
            hits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Taxonomy;

    fn ctx<'a>(lower_text: &'a str, important: &'a [String]) -> TextContext<'a> {
        TextContext {
            lower_text,
            important,
            signals: ContextualSignals::default(),
            auxiliary: AuxiliarySignals::default(),
            importance_window: 10,
            semantic_window: 20,
            position: PositionWeights::default(),
        }
    }

    fn compiled(code: &str) -> CompiledCategory {
        let taxonomy = Taxonomy::builtin();
        CompiledCategory::compile(taxonomy.get(code).unwrap(), &StopWordSet::default()).unwrap()
    }

    #[test]
    fn test_literal_hits_counted_whole_word() {
        let autos = compiled("IAB2");
        // "cars" is not "car", "carpet" is not "car"
        let text = "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz car cars carpet car";
        let score = autos.score(&ctx(text, &[]));
        assert_eq!(score.hits.len(), 1);
        assert_eq!(score.hits[0].count, 2);
        // first "car" sits past the halfway point
        assert_eq!(score.hits[0].position_weight, 1.0);
        assert!((score.literal_score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_important_keyword_doubles_contribution() {
        let autos = compiled("IAB2");
        let text = "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz truck";
        let plain = autos.score(&ctx(text, &[]));
        let important = vec!["truck".to_string()];
        let boosted = autos.score(&ctx(text, &important));
        assert!((boosted.literal_score - 2.0 * plain.literal_score).abs() < 1e-9);
    }

    #[test]
    fn test_multiplier_applies_to_literal_only() {
        let sports = compiled("IAB17");
        let text = "golf";
        let mut context = ctx(text, &[]);
        context.signals.sports = true;
        let score = sports.score(&context);
        assert_eq!(score.context_multiplier, 1.5);
        // "golf" at index 0 -> position 1.5, count 1, importance 1
        assert!((score.literal_score - 1.5).abs() < 1e-9);
        assert!((score.score - (1.5 * 1.5 + score.semantic_score)).abs() < 1e-9);
    }

    #[test]
    fn test_no_hits_scores_zero() {
        let pets = compiled("IAB16");
        let score = pets.score(&ctx("quarterly earnings beat expectations", &[]));
        assert!(score.hits.is_empty());
        assert_eq!(score.score, 0.0);
    }
}
