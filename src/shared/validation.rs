use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex requiring at least one non-whitespace character.
    /// Location names are trimmed and lowercased before storage, so a
    /// whitespace-only name would normalize to the empty string.
    /// - Valid: "madison", "  state capitol  "
    /// - Invalid: "", " ", "\t"
    pub static ref NON_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_regex_valid() {
        assert!(NON_BLANK_REGEX.is_match("madison"));
        assert!(NON_BLANK_REGEX.is_match("  state capitol  "));
        assert!(NON_BLANK_REGEX.is_match("a"));
    }

    #[test]
    fn test_non_blank_regex_invalid() {
        assert!(!NON_BLANK_REGEX.is_match("")); // empty
        assert!(!NON_BLANK_REGEX.is_match(" ")); // space only
        assert!(!NON_BLANK_REGEX.is_match("\t\n")); // other whitespace
    }
}
