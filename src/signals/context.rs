// Coarse topic flags from broad regex matching.
//
// These are deliberately wide nets: one hit anywhere in the text is enough to
// flag the topic. The category scorer uses them to boost the category that
// owns the topic and to de-boost the catch-all News category.

use anyhow::{Context, Result};
use regex_lite::Regex;
use serde::Serialize;

const VIOLENCE_TERMS: &[&str] = &[
    "war", "attack", "attacks", "killed", "murder", "shooting", "bomb", "bombing", "terror",
    "terrorist", "violence", "violent", "assault", "weapon", "gun",
];
const SPORTS_TERMS: &[&str] = &[
    "sport", "sports", "game", "match", "team", "player", "players", "tournament", "league",
    "championship", "football", "soccer", "cricket", "basketball", "olympics", "stadium",
];
const FINANCE_TERMS: &[&str] = &[
    "stock", "stocks", "market", "markets", "investor", "investors", "economy", "economic",
    "finance", "financial", "bank", "inflation", "earnings",
];
const TECH_TERMS: &[&str] = &[
    "technology", "tech", "software", "hardware", "computer", "internet", "digital", "app",
    "smartphone", "ai", "artificial intelligence", "startup", "cyber",
];
const HEALTH_TERMS: &[&str] = &[
    "health", "medical", "doctor", "doctors", "hospital", "disease", "patient", "patients",
    "medicine", "vaccine", "fitness", "nutrition", "wellness",
];
const ENTERTAINMENT_TERMS: &[&str] = &[
    "movie", "movies", "film", "music", "celebrity", "actor", "actress", "concert", "album",
    "television", "hollywood", "streaming", "box office",
];
const TRAVEL_TERMS: &[&str] = &[
    "travel", "vacation", "hotel", "hotels", "flight", "flights", "airline", "tourism",
    "tourist", "destination", "cruise", "resort", "passport",
];
const POLITICS_TERMS: &[&str] = &[
    "politics", "political", "election", "government", "president", "congress", "senate",
    "parliament", "minister", "policy", "vote", "campaign", "legislation",
];

const EDUCATION_TERMS: &[&str] = &[
    "school", "schools", "university", "college", "student", "students", "teacher", "education",
    "academic", "curriculum", "classroom", "degree",
];
const HOBBY_TERMS: &[&str] = &[
    "hobby", "hobbies", "craft", "crafts", "diy", "collecting", "gardening", "photography",
    "knitting", "sewing", "woodworking",
];
const HOUSEHOLD_TERMS: &[&str] = &[
    "personal", "family", "families", "household", "retirement", "savings", "mortgage", "budget",
    "loan", "loans", "your money",
];

/// The eight coarse topic flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContextualSignals {
    pub violence: bool,
    pub sports: bool,
    pub finance: bool,
    pub tech: bool,
    pub health: bool,
    pub entertainment: bool,
    pub travel: bool,
    pub politics: bool,
}

impl ContextualSignals {
    /// Names of the flags that are set, for logging and display.
    pub fn active(&self) -> Vec<&'static str> {
        [
            ("violence", self.violence),
            ("sports", self.sports),
            ("finance", self.finance),
            ("tech", self.tech),
            ("health", self.health),
            ("entertainment", self.entertainment),
            ("travel", self.travel),
            ("politics", self.politics),
        ]
        .into_iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Secondary term tests consulted by a few category multipliers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuxiliarySignals {
    pub education: bool,
    pub hobby: bool,
    /// Personal or family money terms (mortgage, savings, household...)
    pub household: bool,
}

/// Compiled topic regexes. Build once and share.
#[derive(Debug)]
pub struct TopicPatterns {
    violence: Regex,
    sports: Regex,
    finance: Regex,
    tech: Regex,
    health: Regex,
    entertainment: Regex,
    travel: Regex,
    politics: Regex,
    education: Regex,
    hobby: Regex,
    household: Regex,
}

impl TopicPatterns {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            violence: term_regex("violence", VIOLENCE_TERMS)?,
            sports: term_regex("sports", SPORTS_TERMS)?,
            finance: term_regex("finance", FINANCE_TERMS)?,
            tech: term_regex("tech", TECH_TERMS)?,
            health: term_regex("health", HEALTH_TERMS)?,
            entertainment: term_regex("entertainment", ENTERTAINMENT_TERMS)?,
            travel: term_regex("travel", TRAVEL_TERMS)?,
            politics: term_regex("politics", POLITICS_TERMS)?,
            education: term_regex("education", EDUCATION_TERMS)?,
            hobby: term_regex("hobby", HOBBY_TERMS)?,
            household: term_regex("household", HOUSEHOLD_TERMS)?,
        })
    }

    pub fn contextual_signals(&self, text: &str) -> ContextualSignals {
        ContextualSignals {
            violence: self.violence.is_match(text),
            sports: self.sports.is_match(text),
            finance: self.finance.is_match(text),
            tech: self.tech.is_match(text),
            health: self.health.is_match(text),
            entertainment: self.entertainment.is_match(text),
            travel: self.travel.is_match(text),
            politics: self.politics.is_match(text),
        }
    }

    pub fn auxiliary_signals(&self, text: &str) -> AuxiliarySignals {
        AuxiliarySignals {
            education: self.education.is_match(text),
            hobby: self.hobby.is_match(text),
            household: self.household.is_match(text),
        }
    }
}

/// Case-insensitive whole-word alternation over a fixed term list.
fn term_regex(topic: &str, terms: &[&str]) -> Result<Regex> {
    let alternation = terms
        .iter()
        .map(|t| regex_lite::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
        .with_context(|| format!("Failed to compile {topic} topic pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sports_flag() {
        let patterns = TopicPatterns::compile().unwrap();
        let signals = patterns.contextual_signals("The Football team won the LEAGUE.");
        assert!(signals.sports);
        assert!(!signals.finance);
        assert_eq!(signals.active(), vec!["sports"]);
    }

    #[test]
    fn test_whole_word_only() {
        let patterns = TopicPatterns::compile().unwrap();
        // "warm" must not trip the violence flag, "gamer" must not trip sports
        let signals = patterns.contextual_signals("a warm afternoon for the gamers");
        assert!(!signals.violence);
        assert!(!signals.sports);
    }

    #[test]
    fn test_multi_word_term() {
        let patterns = TopicPatterns::compile().unwrap();
        assert!(patterns.contextual_signals("Advances in Artificial Intelligence").tech);
        assert!(patterns.auxiliary_signals("protect your money today").household);
    }

    #[test]
    fn test_empty_text_sets_nothing() {
        let patterns = TopicPatterns::compile().unwrap();
        assert_eq!(patterns.contextual_signals(""), ContextualSignals::default());
        assert_eq!(patterns.auxiliary_signals(""), AuxiliarySignals::default());
    }
}
