// Rank & select — turn raw category scores into a 2-3 entry result.
//
// Confidences are relative: the leader is 1.0 and everyone else is scaled
// against it (capped just below 1.0 so a tie never looks like a second
// leader). The fallback ladder guarantees at least two entries even when the
// text carries almost no signal.

use serde::Serialize;
use tracing::debug;

use crate::classifier::{ClassifierSettings, FallbackCategory};

use super::category::CategoryScore;

/// Which rung of the selection ladder produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionRule {
    /// Nothing scored: the two configured defaults
    Defaults,
    /// Two or more significant matches: the top significant ones
    SignificantLeaders,
    /// One significant match plus the next best overall
    SingleSignificant,
    /// Fewer than two significant matches: top matches overall
    TopMatches,
    /// Exactly one match plus a synthesized fallback entry
    SingleMatch,
}

/// One entry of the final selection, before output formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pick {
    pub code: String,
    pub name: String,
    pub score: f64,
    pub confidence: f64,
    /// True for entries that did not come from scoring (defaults, fallbacks)
    pub synthesized: bool,
}

impl Pick {
    fn from_score(score: &CategoryScore) -> Self {
        Self {
            code: score.code.clone(),
            name: score.name.clone(),
            score: score.score,
            confidence: score.confidence,
            synthesized: false,
        }
    }

    fn fallback(fallback: &FallbackCategory, score: f64, confidence: f64) -> Self {
        Self {
            code: fallback.code.clone(),
            name: fallback.name.clone(),
            score,
            confidence,
            synthesized: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub rule: SelectionRule,
    pub picks: Vec<Pick>,
}

/// Sort matches by score (descending, stable) and fill in confidences.
pub fn rank(matches: &mut [CategoryScore], settings: &ClassifierSettings) {
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let Some(top_score) = matches.first().map(|m| m.score) else {
        return;
    };

    for (i, m) in matches.iter_mut().enumerate() {
        m.confidence = if i == 0 {
            1.0
        } else if top_score > 0.0 {
            (m.score / top_score).min(settings.leader_cap)
        } else {
            0.0
        };
    }
}

/// Apply the selection ladder to ranked matches.
pub fn select(ranked: &[CategoryScore], settings: &ClassifierSettings) -> Selection {
    let max = settings.max_results;

    if ranked.is_empty() {
        let primary = &settings.primary_fallback;
        let secondary = &settings.secondary_fallback;
        return Selection {
            rule: SelectionRule::Defaults,
            picks: vec![
                Pick::fallback(primary, primary.score, primary.confidence),
                Pick::fallback(secondary, secondary.score, secondary.confidence),
            ],
        };
    }

    let significant: Vec<&CategoryScore> = ranked
        .iter()
        .filter(|m| m.confidence > settings.significance_threshold)
        .collect();

    debug!(
        matches = ranked.len(),
        significant = significant.len(),
        "Selecting categories"
    );

    if significant.len() >= 2 {
        return Selection {
            rule: SelectionRule::SignificantLeaders,
            picks: significant.iter().take(max).map(|m| Pick::from_score(m)).collect(),
        };
    }

    if significant.len() == 1 && ranked.len() >= 2 {
        let leader = significant[0];
        let mut picks = vec![Pick::from_score(leader)];
        picks.extend(
            ranked
                .iter()
                .filter(|m| m.code != leader.code)
                .take(max.saturating_sub(1))
                .map(Pick::from_score),
        );
        return Selection {
            rule: SelectionRule::SingleSignificant,
            picks,
        };
    }

    if ranked.len() >= 2 {
        return Selection {
            rule: SelectionRule::TopMatches,
            picks: ranked.iter().take(max).map(Pick::from_score).collect(),
        };
    }

    // Exactly one match: pair it with a synthesized primary fallback so the
    // result never has a single entry.
    let only = &ranked[0];
    let mut fallback = Pick::fallback(
        &settings.primary_fallback,
        only.score * settings.fallback_decay,
        only.confidence * settings.fallback_decay,
    );
    // Codes stay unique when the match is the primary fallback category.
    if fallback.code == only.code {
        fallback.code = fallback.name.clone();
    }
    Selection {
        rule: SelectionRule::SingleMatch,
        picks: vec![Pick::from_score(only), fallback],
    }
}
