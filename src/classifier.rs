// Classifier — the one entry point for turning text into IAB categories.
//
// Construction compiles every pattern (topic flags, category keywords,
// sub-category names) and validates the taxonomy, so a bad table fails at
// startup. After that, classification is a pure function of the input text:
// no I/O, no shared mutable state, safe to call from any number of tasks.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::models::{CategoryAssignment, ClassificationResult, Confidence, SubcategoryAssignment};
use crate::scoring::select::{rank, select};
use crate::scoring::{CategoryScore, CompiledCategory, SelectionRule, TextContext};
use crate::signals::{
    important_keywords, word_frequency, AuxiliarySignals, ContextualSignals, PositionWeights,
    StopWordSet, StopWords, TopicPatterns,
};
use crate::taxonomy::{Taxonomy, NEWS_CODE, TECHNOLOGY_CODE};

/// A category returned when scoring cannot supply enough matches.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackCategory {
    pub code: String,
    pub name: String,
    /// Score reported when used as a default
    pub score: f64,
    /// Confidence reported when used as a default
    pub confidence: f64,
}

/// Tunable thresholds for scoring and selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierSettings {
    /// A category must score strictly above this to be kept (default 1.0)
    pub min_score: f64,
    /// Confidence a match needs to count as significant (default 0.3)
    pub significance_threshold: f64,
    /// Upper bound on every confidence except the leader's (default 0.99)
    pub leader_cap: f64,
    /// Most categories to return (default 3, never below 2)
    pub max_results: usize,
    /// Top-ranked words that double a keyword's contribution (default 10)
    pub importance_window: usize,
    /// Top-ranked words compared for semantic overlap (default 20)
    pub semantic_window: usize,
    pub position: PositionWeights,
    pub stop_words: StopWords,
    /// Multiplier for a fallback paired with a single match (default 0.7)
    pub fallback_decay: f64,
    pub primary_fallback: FallbackCategory,
    pub secondary_fallback: FallbackCategory,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            min_score: 1.0,
            significance_threshold: 0.3,
            leader_cap: 0.99,
            max_results: 3,
            importance_window: 10,
            semantic_window: 20,
            position: PositionWeights::default(),
            stop_words: StopWords::Compact,
            fallback_decay: 0.7,
            primary_fallback: FallbackCategory {
                code: NEWS_CODE.to_string(),
                name: "News".to_string(),
                score: 5.0,
                confidence: 0.7,
            },
            secondary_fallback: FallbackCategory {
                code: TECHNOLOGY_CODE.to_string(),
                name: "Technology & Computing".to_string(),
                score: 4.0,
                confidence: 0.6,
            },
        }
    }
}

impl ClassifierSettings {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("min_score", self.min_score),
            ("significance_threshold", self.significance_threshold),
            ("leader_cap", self.leader_cap),
            ("fallback_decay", self.fallback_decay),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("Classifier setting {name} must be a non-negative number, got {value}");
            }
        }
        if self.max_results < 2 {
            anyhow::bail!(
                "Classifier setting max_results must be at least 2, got {}",
                self.max_results
            );
        }
        if self.primary_fallback.code == self.secondary_fallback.code {
            anyhow::bail!(
                "Primary and secondary fallback categories must differ (both {})",
                self.primary_fallback.code
            );
        }
        let p = &self.position;
        if !(0.0..=1.0).contains(&p.lede_cutoff) || p.body_cutoff < p.lede_cutoff {
            anyhow::bail!(
                "Position cutoffs must satisfy 0 <= lede ({}) <= body ({})",
                p.lede_cutoff,
                p.body_cutoff
            );
        }
        Ok(())
    }
}

/// Full diagnostics for one classification call.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub signals: ContextualSignals,
    pub auxiliary: AuxiliarySignals,
    pub important_keywords: Vec<String>,
    /// Retained categories, ranked, with confidences
    pub scores: Vec<CategoryScore>,
    pub rule: SelectionRule,
    pub result: ClassificationResult,
}

pub struct Classifier {
    taxonomy: Taxonomy,
    settings: ClassifierSettings,
    patterns: TopicPatterns,
    categories: Vec<CompiledCategory>,
    stop_words: StopWordSet,
}

impl Classifier {
    pub fn new(taxonomy: Taxonomy, settings: ClassifierSettings) -> Result<Self> {
        taxonomy.validate().context("Invalid taxonomy")?;
        settings.validate()?;

        let stop_words = StopWordSet::new(settings.stop_words);
        let patterns = TopicPatterns::compile()?;
        let categories = taxonomy
            .categories()
            .iter()
            .map(|c| CompiledCategory::compile(c, &stop_words))
            .collect::<Result<Vec<_>>>()?;

        debug!(categories = categories.len(), "Classifier ready");

        Ok(Self {
            taxonomy,
            settings,
            patterns,
            categories,
            stop_words,
        })
    }

    /// Built-in taxonomy with default settings.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Taxonomy::builtin(), ClassifierSettings::default())
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Classify text into 2-3 ranked categories. Never fails: empty or
    /// signal-free text yields the configured defaults.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.analyze(text).result
    }

    /// Classify and keep every intermediate signal and score.
    pub fn analyze(&self, text: &str) -> Analysis {
        let lower_text = text.to_lowercase();
        let frequency = word_frequency(text, &self.stop_words);
        let important = important_keywords(&frequency);
        let signals = self.patterns.contextual_signals(&lower_text);
        let auxiliary = self.patterns.auxiliary_signals(&lower_text);

        let ctx = TextContext {
            lower_text: &lower_text,
            important: &important,
            signals,
            auxiliary,
            importance_window: self.settings.importance_window,
            semantic_window: self.settings.semantic_window,
            position: self.settings.position,
        };

        let mut scores: Vec<CategoryScore> = self
            .categories
            .iter()
            .map(|c| c.score(&ctx))
            .filter(|s| s.score > self.settings.min_score)
            .collect();

        rank(&mut scores, &self.settings);
        let selection = select(&scores, &self.settings);

        debug!(
            words = frequency.len(),
            active_signals = ?signals.active(),
            retained = scores.len(),
            rule = ?selection.rule,
            "Classified text"
        );

        let categories = selection
            .picks
            .iter()
            .map(|pick| {
                let subcategory = if pick.synthesized {
                    None
                } else {
                    self.categories
                        .iter()
                        .find(|c| c.code == pick.code)
                        .and_then(|c| c.subcategories().best(&lower_text))
                        .map(|sub| SubcategoryAssignment {
                            category_id: sub.code,
                            category_name: sub.name,
                        })
                };
                CategoryAssignment {
                    category_id: pick.code.clone(),
                    category_name: pick.name.clone(),
                    confidence: Confidence::new(pick.confidence),
                    subcategory,
                }
            })
            .collect();

        Analysis {
            signals,
            auxiliary,
            important_keywords: important,
            scores,
            rule: selection.rule,
            result: ClassificationResult { categories },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(ClassifierSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_single_result_cap() {
        let settings = ClassifierSettings {
            max_results: 1,
            ..Default::default()
        };
        assert!(Classifier::new(Taxonomy::builtin(), settings).is_err());
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let settings = ClassifierSettings {
            significance_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_empty_text_gives_defaults() {
        let classifier = Classifier::with_defaults().unwrap();
        let analysis = classifier.analyze("");
        assert_eq!(analysis.rule, SelectionRule::Defaults);
        assert!(analysis.scores.is_empty());
        assert_eq!(analysis.result.ids(), vec!["IAB12", "IAB19"]);
    }

    #[test]
    fn test_subcategory_attached() {
        let classifier = Classifier::with_defaults().unwrap();
        let result = classifier.classify(
            "Cricket fans packed the stadium as the cricket team won the match by six wickets.",
        );
        let sports = result
            .iter()
            .find(|c| c.category_id == "IAB17")
            .expect("sports should be selected");
        assert_eq!(
            sports.subcategory.as_ref().map(|s| s.category_id.as_str()),
            Some("IAB17-9")
        );
    }
}
