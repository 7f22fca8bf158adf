// Output formatting — terminal display of results and diagnostics.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so it never panics on multi-byte
/// characters the way byte slicing would.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_chars("Sports", 10), "Sports");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("Économie française", 7), "Économi...");
    }
}
