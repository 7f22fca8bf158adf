// Semantic overlap between a text's important words and a category's keywords.
//
// This catches inflected forms the whole-word keyword regex misses:
// "investors" vs "invest", "players" vs "player", "tournaments" vs "tournament".

/// Added when one string contains the other (both at least 4 characters).
pub const CONTAINMENT_BONUS: f64 = 0.5;
/// Added when the crude stems are equal.
pub const STEM_BONUS: f64 = 0.7;

const MIN_CONTAINMENT_LEN: usize = 4;
const MIN_STEM_LEN: usize = 4;

/// Sum the containment and stem bonuses over every (word, keyword) pair.
///
/// Callers pass only the top of the importance ranking; every pair is
/// checked, and both bonuses can apply to the same pair.
pub fn semantic_score(important: &[String], keywords: &[String]) -> f64 {
    let mut score = 0.0;

    for word in important {
        let word_len = word.chars().count();
        let word_stem = stem(word);

        for keyword in keywords {
            let keyword_len = keyword.chars().count();

            if word_len >= MIN_CONTAINMENT_LEN
                && keyword_len >= MIN_CONTAINMENT_LEN
                && (word.contains(keyword.as_str()) || keyword.contains(word.as_str()))
            {
                score += CONTAINMENT_BONUS;
            }

            if word_stem == stem(keyword) {
                score += STEM_BONUS;
            }
        }
    }

    score
}

/// Drop the last two characters of words longer than four characters.
pub fn stem(word: &str) -> &str {
    let len = word.chars().count();
    if len <= MIN_STEM_LEN {
        return word;
    }
    match word.char_indices().nth(len - 2) {
        Some((cut, _)) => &word[..cut],
        None => word,
    }
}
