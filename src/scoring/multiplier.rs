// Context multipliers — per-category boosts driven by topic flags.
//
// Each category has at most one rule. The rules are evaluated independently,
// so one text can boost several categories at once. News is the exception: it
// is pushed down whenever a more specific topic (violence, politics, finance)
// is present, and nudged up otherwise.

use crate::signals::{AuxiliarySignals, ContextualSignals};

/// Standard boost for a category whose topic flag fired.
pub const TOPIC_BOOST: f64 = 1.5;
/// Hobby terms are weaker evidence than a full topic flag.
pub const HOBBY_BOOST: f64 = 1.3;
/// News when a more specific topic co-occurs.
pub const NEWS_DEBOOST: f64 = 0.8;
/// News when nothing more specific is going on.
pub const NEWS_BOOST: f64 = 1.2;
pub const NEUTRAL: f64 = 1.0;

/// The multiplier applied to a category's literal keyword score.
pub fn context_multiplier(
    code: &str,
    signals: &ContextualSignals,
    auxiliary: &AuxiliarySignals,
) -> f64 {
    match code {
        // Arts & Entertainment
        "IAB1" if signals.entertainment => TOPIC_BOOST,
        // Business
        "IAB3" if signals.finance => TOPIC_BOOST,
        // Education
        "IAB5" if auxiliary.education => TOPIC_BOOST,
        // Health & Fitness
        "IAB7" if signals.health => TOPIC_BOOST,
        // Hobbies & Interests
        "IAB9" if auxiliary.hobby => HOBBY_BOOST,
        // Law, Gov't & Politics
        "IAB11" if signals.politics => TOPIC_BOOST,
        // News
        "IAB12" => {
            if signals.violence || signals.politics || signals.finance {
                NEWS_DEBOOST
            } else {
                NEWS_BOOST
            }
        }
        // Personal Finance
        "IAB13" if signals.finance && auxiliary.household => TOPIC_BOOST,
        // Sports
        "IAB17" if signals.sports => TOPIC_BOOST,
        // Technology & Computing
        "IAB19" if signals.tech => TOPIC_BOOST,
        // Travel
        "IAB20" if signals.travel => TOPIC_BOOST,
        _ => NEUTRAL,
    }
}
