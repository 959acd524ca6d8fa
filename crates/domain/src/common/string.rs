//! String utilities shared by the story views and exporters.

/// Converts an empty or whitespace-only string to `None`.
///
/// Server error bodies often carry `"detail": ""`, which reads the same as
/// a missing field.
///
/// # Examples
///
/// ```
/// use mythweaver_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("hello"), Some("hello"));
/// assert_eq!(none_if_blank("  "), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Keeps the first `max_chars` characters and appends `...` when the text
/// was longer.
///
/// # Examples
///
/// ```
/// use mythweaver_domain::common::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("abcdef", 3), "abc...");
/// assert_eq!(truncate_with_ellipsis("abc", 3), "abc");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits story text into display paragraphs, dropping blank lines.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split('\n').filter(|p| !p.trim().is_empty()).collect()
}

/// Filename stem for exports: the title with every non-alphanumeric
/// character removed. Falls back to `myth` when nothing remains.
pub fn filename_stem(title: &str) -> String {
    let stem: String = title.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if stem.is_empty() {
        "myth".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_if_blank() {
        assert_eq!(none_if_blank("detail"), Some("detail"));
        assert_eq!(none_if_blank(""), None);
        assert_eq!(none_if_blank(" \t\n"), None);
    }

    #[test]
    fn test_truncate_exact_length_has_no_ellipsis() {
        let text = "x".repeat(100);
        assert_eq!(truncate_with_ellipsis(&text, 100), text);
    }

    #[test]
    fn test_truncate_longer_text() {
        let text = "y".repeat(101);
        let out = truncate_with_ellipsis(&text, 100);
        assert_eq!(out.chars().count(), 103);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_with_ellipsis("ééé", 2), "éé...");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("greek"), "Greek");
        assert_eq!(capitalize_first("native_american"), "Native_american");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_paragraphs_drop_blank_lines() {
        let text = "First.\n\n  \nSecond.\nThird.";
        assert_eq!(paragraphs(text), vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn test_filename_stem_strips_non_alphanumerics() {
        assert_eq!(filename_stem("The Baker's Last Loaf"), "TheBakersLastLoaf");
        assert_eq!(filename_stem("Ödin & Loki!"), "dinLoki");
        assert_eq!(filename_stem("!!!"), "myth");
    }
}
