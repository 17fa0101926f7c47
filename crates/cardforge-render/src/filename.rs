//! Export filename derivation.

/// Derive the download filename from the card text.
///
/// Trims the text, replaces every maximal whitespace run with a single
/// underscore, and appends `.png`. Returns `None` when the trimmed text is
/// empty; callers must treat that as "export unavailable".
///
/// ```
/// use cardforge_render::export_file_name;
///
/// assert_eq!(export_file_name("  hello   world  "), Some("hello_world.png".into()));
/// assert_eq!(export_file_name("   "), None);
/// ```
pub fn export_file_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let stem: Vec<&str> = trimmed.split_whitespace().collect();
    Some(format!("{}.png", stem.join("_")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(export_file_name("Innovate"), Some("Innovate.png".to_string()));
    }

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(
            export_file_name("Hello World"),
            Some("Hello_World.png".to_string())
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(
            export_file_name("  hello   world  "),
            Some("hello_world.png".to_string())
        );
    }

    #[test]
    fn test_tabs_and_newlines_collapse() {
        assert_eq!(
            export_file_name("a\t b\n\nc"),
            Some("a_b_c.png".to_string())
        );
    }

    #[test]
    fn test_empty_and_blank_yield_none() {
        assert_eq!(export_file_name(""), None);
        assert_eq!(export_file_name("   \t\n "), None);
    }
}
