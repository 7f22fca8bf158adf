// Position weighting — terms near the top of a text count for more.
//
// Summaries and news copy front-load the subject, so a keyword in the first
// fifth of the text is a stronger signal than the same keyword in the tail.

use serde::Serialize;

/// Breakpoints (as a fraction of text length) and the weights they select.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionWeights {
    /// Occurrences before this fraction get `lede_weight` (default 0.2)
    pub lede_cutoff: f64,
    pub lede_weight: f64,
    /// Occurrences before this fraction get `body_weight` (default 0.5)
    pub body_cutoff: f64,
    pub body_weight: f64,
    /// Everything else, and keywords that never appear
    pub tail_weight: f64,
}

impl Default for PositionWeights {
    fn default() -> Self {
        Self {
            lede_cutoff: 0.2,
            lede_weight: 1.5,
            body_cutoff: 0.5,
            body_weight: 1.2,
            tail_weight: 1.0,
        }
    }
}

impl PositionWeights {
    /// Weight for the first occurrence of `keyword` in `lower_text`.
    ///
    /// This is a plain substring search on already-lowercased text, so
    /// "art" is found inside "start". Offsets are measured in characters.
    pub fn weight(&self, lower_text: &str, keyword: &str) -> f64 {
        let Some(byte_index) = lower_text.find(keyword) else {
            return self.tail_weight;
        };
        let length = lower_text.chars().count();
        if length == 0 {
            return self.tail_weight;
        }

        let index = lower_text[..byte_index].chars().count();
        let relative = index as f64 / length as f64;

        if relative < self.lede_cutoff {
            self.lede_weight
        } else if relative < self.body_cutoff {
            self.body_weight
        } else {
            self.tail_weight
        }
    }
}

/// Position weight with the default breakpoints.
pub fn position_weight(lower_text: &str, keyword: &str) -> f64 {
    PositionWeights::default().weight(lower_text, keyword)
}
