// Colored terminal output for classifications, diagnostics, and the taxonomy.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use crate::cache::CachedClassification;
use crate::classifier::Analysis;
use crate::models::ClassificationResult;
use crate::pipeline::PageOutcome;
use crate::scoring::SelectionRule;
use crate::taxonomy::Taxonomy;

const BAR_WIDTH: usize = 20;

/// Display a ranked classification with confidence bars.
pub fn display_result(result: &ClassificationResult) {
    println!("\n{}", "=== Categories ===".bold());
    println!();

    for (i, category) in result.iter().enumerate() {
        let confidence = category.confidence.value();
        println!(
            "  {:>2}. {:<7} {:<32} {} {}",
            i + 1,
            category.category_id.bold(),
            category.category_name,
            confidence_bar(confidence),
            category.confidence
        );
        if let Some(sub) = &category.subcategory {
            println!(
                "      {} {} {}",
                "└".dimmed(),
                sub.category_id.dimmed(),
                sub.category_name
            );
        }
    }
    println!();
}

/// Display what the page pipeline did before (or instead of) classifying.
pub fn display_outcome(outcome: &PageOutcome) {
    match outcome {
        PageOutcome::Cached { key, result } => {
            println!("  {} {}", "Cached:".dimmed(), key);
            display_result(result);
        }
        PageOutcome::Classified {
            key,
            result,
            language,
            translated,
            sentiment,
            ..
        } => {
            println!("  {} {}", "Key:".dimmed(), key);
            if let Some(language) = language {
                let note = if *translated { " (translated)" } else { "" };
                println!("  {} {}{}", "Language:".dimmed(), language, note);
            }
            if let Some(sentiment) = sentiment {
                println!(
                    "  {} {:?} ({:.2}, {:?} intensity)",
                    "Sentiment:".dimmed(),
                    sentiment.sentiment,
                    sentiment.confidence,
                    sentiment.intensity
                );
            }
            display_result(result);
        }
        PageOutcome::NoSummary { key } => {
            println!(
                "  {} no summary for {}, nothing classified",
                "!".yellow(),
                key
            );
        }
    }
}

/// Display full scoring diagnostics (`classify --explain`).
pub fn display_analysis(analysis: &Analysis) {
    println!("\n{}", "=== Signals ===".bold());
    let active = analysis.signals.active();
    if active.is_empty() {
        println!("  {}", "no topic signals".dimmed());
    } else {
        println!("  Topics: {}", active.join(", ").bright_cyan());
    }
    let aux = &analysis.auxiliary;
    println!(
        "  Education: {}  Hobby: {}  Household: {}",
        yes_no(aux.education),
        yes_no(aux.hobby),
        yes_no(aux.household)
    );

    if !analysis.important_keywords.is_empty() {
        let top: Vec<&str> = analysis
            .important_keywords
            .iter()
            .take(10)
            .map(String::as_str)
            .collect();
        println!("  Top words: {}", top.join(", ").dimmed());
    }

    println!(
        "\n{}",
        format!("=== Scores ({} categories retained) ===", analysis.scores.len()).bold()
    );
    println!();
    println!(
        "  {:<7} {:<32} {:>7} {:>6} {:>6} {:>7} {:>6}",
        "Code".dimmed(),
        "Name".dimmed(),
        "Literal".dimmed(),
        "Mult".dimmed(),
        "Sem".dimmed(),
        "Total".dimmed(),
        "Conf".dimmed(),
    );
    println!("  {}", "-".repeat(80).dimmed());

    for score in &analysis.scores {
        let mult = format!("{:.1}x", score.context_multiplier);
        let mult = if score.context_multiplier > 1.0 {
            mult.green()
        } else if score.context_multiplier < 1.0 {
            mult.red()
        } else {
            mult.normal()
        };
        println!(
            "  {:<7} {:<32} {:>7.2} {:>6} {:>6.2} {:>7.2} {:>6.2}",
            score.code,
            super::truncate_chars(&score.name, 29),
            score.literal_score,
            mult,
            score.semantic_score,
            score.score,
            score.confidence,
        );
        for hit in &score.hits {
            println!(
                "          {} {:<20} x{} imp {:.0} pos {:.1} = {:.2}",
                "·".dimmed(),
                hit.keyword,
                hit.count,
                hit.importance,
                hit.position_weight,
                hit.contribution
            );
        }
    }

    println!("\n  Selection: {}", describe_rule(analysis.rule).bold());
    display_result(&analysis.result);
}

/// Display the active taxonomy.
pub fn display_taxonomy(taxonomy: &Taxonomy) {
    println!(
        "\n{}",
        format!("=== Taxonomy ({} categories) ===", taxonomy.len()).bold()
    );
    println!();

    for category in taxonomy.categories() {
        println!(
            "  {:<7} {:<32} {}",
            category.code.bold(),
            category.name,
            format!(
                "{} keywords, {} sub-categories",
                category.keywords.len(),
                category.subcategories.len()
            )
            .dimmed()
        );
        let preview = super::truncate_chars(&category.keywords.join(", "), 90);
        println!("          {}", preview.dimmed());
    }
    println!();
}

/// Display recently cached classifications.
pub fn display_recent(entries: &[CachedClassification]) {
    if entries.is_empty() {
        println!("  {}", "No cached classifications yet.".dimmed());
        return;
    }

    for entry in entries {
        let categories: Vec<String> = entry
            .result
            .iter()
            .map(|c| format!("{} {}", c.category_id, c.confidence))
            .collect();
        println!(
            "  {}  {:<60} {}",
            entry.stored_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            super::truncate_chars(&entry.key, 57),
            categories.join(" | ")
        );
    }
}

fn confidence_bar(confidence: f64) -> colored::ColoredString {
    let filled = (confidence * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    if confidence >= 0.75 {
        bar.bright_green()
    } else if confidence >= 0.4 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}

fn yes_no(flag: bool) -> colored::ColoredString {
    if flag {
        "yes".green()
    } else {
        "no".dimmed()
    }
}

fn describe_rule(rule: SelectionRule) -> &'static str {
    match rule {
        SelectionRule::Defaults => "no matches, default categories",
        SelectionRule::SignificantLeaders => "significant matches",
        SelectionRule::SingleSignificant => "one significant match plus runners-up",
        SelectionRule::TopMatches => "top matches (none significant)",
        SelectionRule::SingleMatch => "single match plus fallback",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bar_width() {
        colored::control::set_override(false);
        assert_eq!(confidence_bar(1.0).to_string(), format!("[{}]", "=".repeat(20)));
        assert_eq!(
            confidence_bar(0.5).to_string(),
            format!("[{}{}]", "=".repeat(10), " ".repeat(10))
        );
        assert_eq!(confidence_bar(0.0).to_string(), format!("[{}]", " ".repeat(20)));
    }
}
