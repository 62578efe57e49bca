// WHY: standalone token extraction so every rule group sees the same subject
// Only the first whitespace-delimited unit of a phrase drives article choice

/// Return the first whitespace-delimited token of `phrase`, or `None` when the
/// phrase is empty or whitespace-only
pub fn first_token(phrase: &str) -> Option<&str> {
    phrase.split(is_token_separator).find(|part| !part.is_empty())
}

/// Whitespace, plus the byte-order mark that editors prepend to UTF-8 files
pub fn is_token_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == BYTE_ORDER_MARK
}

pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// First character of the token, lowercased for set lookups
/// WHY: letter-name lookups are case-insensitive ("F" and "f" both say "ef")
pub fn leading_char_lowercase(token: &str) -> Option<char> {
    token.chars().next().map(|ch| ch.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token_basic() {
        assert_eq!(first_token("elephant seal"), Some("elephant"));
        assert_eq!(first_token("hour"), Some("hour"));
    }

    #[test]
    fn test_first_token_surrounding_whitespace() {
        assert_eq!(first_token("   honest  mistake  "), Some("honest"));
        assert_eq!(first_token("\tFBI\nagent"), Some("FBI"));
        assert_eq!(first_token("\r\nMBA\r\nprogram"), Some("MBA"));
    }

    #[test]
    fn test_first_token_empty() {
        assert_eq!(first_token(""), None);
        assert_eq!(first_token("   "), None);
        assert_eq!(first_token("\t\n\r"), None);
    }

    #[test]
    fn test_first_token_keeps_punctuation() {
        assert_eq!(first_token("M.B.A. graduate"), Some("M.B.A."));
        assert_eq!(first_token("\"quoted\" word"), Some("\"quoted\""));
    }

    #[test]
    fn test_first_token_unicode_whitespace() {
        // WHY: non-breaking and ideographic spaces are whitespace too
        assert_eq!(first_token("\u{00A0}owl\u{3000}hunt"), Some("owl"));
    }

    #[test]
    fn test_first_token_ignores_byte_order_mark() {
        assert_eq!(first_token("\u{feff}apple"), Some("apple"));
        assert_eq!(first_token("\u{feff} hour glass"), Some("hour"));
        assert_eq!(first_token("\u{feff}"), None);
        assert!(is_token_separator('\u{feff}'));
        assert!(!is_token_separator('a'));
    }

    #[test]
    fn test_leading_char_lowercase() {
        assert_eq!(leading_char_lowercase("FBI"), Some('f'));
        assert_eq!(leading_char_lowercase("m.b.a."), Some('m'));
        assert_eq!(leading_char_lowercase("Émile"), Some('É'));
        assert_eq!(leading_char_lowercase(""), None);
    }
}
