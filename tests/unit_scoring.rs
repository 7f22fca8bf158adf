// Unit tests for category scoring, selection, and output formatting.
//
// Tests isolated pure functions: context multiplier rules, semantic overlap
// bonuses, sub-category matching, per-category scoring, the selection
// ladder, and truncate_chars UTF-8 safety.

use iabtag::classifier::ClassifierSettings;
use iabtag::output::truncate_chars;
use iabtag::scoring::multiplier::{context_multiplier, HOBBY_BOOST, NEWS_BOOST, NEWS_DEBOOST};
use iabtag::scoring::select::{rank, select};
use iabtag::scoring::semantic::{semantic_score, stem};
use iabtag::scoring::subcategory::SubcategoryMatcher;
use iabtag::scoring::{CategoryScore, CompiledCategory, SelectionRule, TextContext};
use iabtag::signals::{
    important_keywords, word_frequency, AuxiliarySignals, ContextualSignals, PositionWeights,
    StopWordSet,
};
use iabtag::taxonomy::{Category, Subcategory, Taxonomy};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

// ============================================================
// context_multiplier — rule table
// ============================================================

#[test]
fn sports_flag_boosts_sports() {
    let signals = ContextualSignals {
        sports: true,
        ..Default::default()
    };
    let aux = AuxiliarySignals::default();
    assert_eq!(context_multiplier("IAB17", &signals, &aux), 1.5);
    assert_eq!(context_multiplier("IAB3", &signals, &aux), 1.0);
}

#[test]
fn news_deboosted_by_specific_topics() {
    let aux = AuxiliarySignals::default();
    for signals in [
        ContextualSignals {
            violence: true,
            ..Default::default()
        },
        ContextualSignals {
            politics: true,
            ..Default::default()
        },
        ContextualSignals {
            finance: true,
            ..Default::default()
        },
    ] {
        assert_eq!(context_multiplier("IAB12", &signals, &aux), NEWS_DEBOOST);
    }
}

#[test]
fn news_boosted_without_specific_topics() {
    let signals = ContextualSignals {
        sports: true,
        tech: true,
        ..Default::default()
    };
    assert_eq!(
        context_multiplier("IAB12", &signals, &AuxiliarySignals::default()),
        NEWS_BOOST
    );
}

#[test]
fn personal_finance_needs_household_terms() {
    let signals = ContextualSignals {
        finance: true,
        ..Default::default()
    };
    let none = AuxiliarySignals::default();
    let household = AuxiliarySignals {
        household: true,
        ..Default::default()
    };
    assert_eq!(context_multiplier("IAB13", &signals, &none), 1.0);
    assert_eq!(context_multiplier("IAB13", &signals, &household), 1.5);
}

#[test]
fn hobby_terms_give_smaller_boost() {
    let aux = AuxiliarySignals {
        hobby: true,
        ..Default::default()
    };
    assert_eq!(
        context_multiplier("IAB9", &ContextualSignals::default(), &aux),
        HOBBY_BOOST
    );
}

#[test]
fn unlisted_categories_are_neutral() {
    let everything = ContextualSignals {
        violence: true,
        sports: true,
        finance: true,
        tech: true,
        health: true,
        entertainment: true,
        travel: true,
        politics: true,
    };
    let aux = AuxiliarySignals {
        education: true,
        hobby: true,
        household: true,
    };
    assert_eq!(context_multiplier("IAB2", &everything, &aux), 1.0);
    assert_eq!(context_multiplier("IAB23", &everything, &aux), 1.0);
}

// ============================================================
// semantic_score / stem
// ============================================================

#[test]
fn stem_drops_two_chars_from_long_words() {
    assert_eq!(stem("running"), "runni");
    assert_eq!(stem("played"), "play");
    assert_eq!(stem("golf"), "golf");
}

#[test]
fn containment_bonus_only() {
    let score = semantic_score(&words(&["markets"]), &words(&["market"]));
    assert!((score - 0.5).abs() < 1e-9);
}

#[test]
fn stem_bonus_only() {
    let score = semantic_score(&words(&["played"]), &words(&["player"]));
    assert!((score - 0.7).abs() < 1e-9);
}

#[test]
fn identical_words_get_both_bonuses() {
    let score = semantic_score(&words(&["market"]), &words(&["market"]));
    assert!((score - 1.2).abs() < 1e-9);
}

#[test]
fn short_words_skip_containment() {
    // "bat" is inside "batting" but is too short for containment
    let score = semantic_score(&words(&["batting"]), &words(&["bat"]));
    assert_eq!(score, 0.0);
}

#[test]
fn semantic_score_sums_all_pairs() {
    let score = semantic_score(&words(&["market", "markets"]), &words(&["market"]));
    assert!((score - 1.7).abs() < 1e-9);
}

// ============================================================
// SubcategoryMatcher
// ============================================================

fn subs(names: &[&str]) -> Vec<Subcategory> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Subcategory {
            code: format!("X-{}", i + 1),
            name: name.to_string(),
        })
        .collect()
}

#[test]
fn full_phrase_beats_partial_terms() {
    let matcher = SubcategoryMatcher::compile(
        &subs(&["Horse Racing", "Auto Racing", "Horses"]),
        &StopWordSet::default(),
    )
    .unwrap();
    let best = matcher
        .best("auto racing fans watched the racing all day")
        .unwrap();
    assert_eq!(best.code, "X-2");
    assert_eq!(best.name, "Auto Racing");
}

#[test]
fn no_subcategory_without_matches() {
    let matcher =
        SubcategoryMatcher::compile(&subs(&["Golf", "Tennis"]), &StopWordSet::default()).unwrap();
    assert!(matcher.best("nothing relevant here").is_none());
}

#[test]
fn subcategory_ties_go_to_first_listed() {
    let matcher =
        SubcategoryMatcher::compile(&subs(&["Golf", "Tennis"]), &StopWordSet::default()).unwrap();
    assert_eq!(matcher.best("golf and tennis").unwrap().code, "X-1");
}

// ============================================================
// CompiledCategory::score
// ============================================================

#[test]
fn category_score_combines_literal_multiplier_and_semantic() {
    let category = Category {
        code: "IAB17".to_string(),
        name: "Sports".to_string(),
        subcategories: Vec::new(),
        keywords: words(&["golf"]),
    };
    let stop_words = StopWordSet::default();
    let compiled = CompiledCategory::compile(&category, &stop_words).unwrap();

    let text = "golf today";
    let important = important_keywords(&word_frequency(text, &stop_words));
    let ctx = TextContext {
        lower_text: text,
        important: &important,
        signals: ContextualSignals {
            sports: true,
            ..Default::default()
        },
        auxiliary: AuxiliarySignals::default(),
        importance_window: 10,
        semantic_window: 20,
        position: PositionWeights::default(),
    };

    let score = compiled.score(&ctx);
    // 1 hit x importance 2 x lede 1.5 = 3.0, boosted 1.5 = 4.5, + golf/golf 1.2
    assert!((score.literal_score - 3.0).abs() < 1e-9);
    assert_eq!(score.context_multiplier, 1.5);
    assert!((score.semantic_score - 1.2).abs() < 1e-9);
    assert!((score.score - 5.7).abs() < 1e-9);
    assert_eq!(score.hits.len(), 1);
    assert_eq!(score.hits[0].keyword, "golf");
}

#[test]
fn keywords_match_whole_words_only() {
    let category = Category {
        code: "IAB1".to_string(),
        name: "Arts & Entertainment".to_string(),
        subcategories: Vec::new(),
        keywords: words(&["art"]),
    };
    let stop_words = StopWordSet::default();
    let compiled = CompiledCategory::compile(&category, &stop_words).unwrap();

    let text = "start the party";
    let important = important_keywords(&word_frequency(text, &stop_words));
    let ctx = TextContext {
        lower_text: text,
        important: &important,
        signals: ContextualSignals::default(),
        auxiliary: AuxiliarySignals::default(),
        importance_window: 10,
        semantic_window: 20,
        position: PositionWeights::default(),
    };
    let score = compiled.score(&ctx);
    assert_eq!(score.literal_score, 0.0);
    assert!(score.hits.is_empty());
}

// ============================================================
// rank / select — ladder through the public API
// ============================================================

fn score(code: &str, value: f64) -> CategoryScore {
    CategoryScore {
        code: code.to_string(),
        name: code.to_string(),
        score: value,
        confidence: 0.0,
        literal_score: value,
        context_multiplier: 1.0,
        semantic_score: 0.0,
        hits: Vec::new(),
    }
}

#[test]
fn rank_is_stable_for_equal_scores() {
    let settings = ClassifierSettings::default();
    let mut matches = vec![score("B", 3.0), score("A", 3.0), score("C", 1.5)];
    rank(&mut matches, &settings);
    let codes: Vec<&str> = matches.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, vec!["B", "A", "C"]);
    assert_eq!(matches[1].confidence, 0.99);
}

#[test]
fn selection_always_has_two_or_three_entries() {
    let settings = ClassifierSettings::default();
    let cases: Vec<Vec<CategoryScore>> = vec![
        vec![],
        vec![score("A", 5.0)],
        vec![score("A", 5.0), score("B", 1.2)],
        vec![score("A", 9.0), score("B", 8.0), score("C", 7.0), score("D", 6.0)],
    ];
    for mut matches in cases {
        rank(&mut matches, &settings);
        let selection = select(&matches, &settings);
        assert!(
            (2..=3).contains(&selection.picks.len()),
            "{:?} produced {} picks",
            selection.rule,
            selection.picks.len()
        );
    }
}

#[test]
fn single_match_uses_configured_decay() {
    let settings = ClassifierSettings {
        fallback_decay: 0.5,
        ..Default::default()
    };
    let mut matches = vec![score("IAB1", 4.0)];
    rank(&mut matches, &settings);
    let selection = select(&matches, &settings);
    assert_eq!(selection.rule, SelectionRule::SingleMatch);
    assert!((selection.picks[1].score - 2.0).abs() < 1e-9);
    assert!((selection.picks[1].confidence - 0.5).abs() < 1e-9);
}

// ============================================================
// Taxonomy-backed compile
// ============================================================

#[test]
fn every_builtin_category_compiles() {
    let stop_words = StopWordSet::default();
    for category in Taxonomy::builtin().categories() {
        assert!(
            CompiledCategory::compile(category, &stop_words).is_ok(),
            "{} failed to compile",
            category.code
        );
    }
}

// ============================================================
// truncate_chars — UTF-8 safety
// ============================================================

#[test]
fn truncate_ascii_exact_length_unchanged() {
    assert_eq!(truncate_chars("Technology", 10), "Technology");
}

#[test]
fn truncate_adds_ellipsis() {
    assert_eq!(truncate_chars("Technology & Computing", 10), "Technology...");
}

#[test]
fn truncate_emoji_safe() {
    assert_eq!(truncate_chars("⚽⚽⚽⚽", 2), "⚽⚽...");
}
