use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw feed text before parsing.
///
/// Steps, in order:
/// 1. Unicode canonical composition (NFC).
/// 2. `\r\n` and lone `\r` become `\n`.
/// 3. Control characters are stripped (`\t` and `\n` survive).
/// 4. Trailing spaces and tabs are removed from every line.
/// 5. Leading and trailing blank lines are removed; interior blank lines stay.
///
/// Never fails, and running it on its own output is a no-op.
pub fn normalize(input: &str) -> String {
    let composed: String = input.nfc().collect();
    let unified = composed.replace("\r\n", "\n").replace('\r', "\n");
    let printable: String = unified.chars().filter(|&c| !is_stripped_control(c)).collect();

    let right_trimmed: Vec<&str> = printable
        .split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect();

    right_trimmed.join("\n").trim_matches('\n').to_string()
}

/// Control characters in U+0000-U+0008, U+000B-U+001F and U+007F-U+009F
/// are dropped; tab and newline fall outside these ranges.
fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}'..='\u{1F}' | '\u{7F}'..='\u{9F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = "\r\n22.08.2026 #163\r\nEMU|euro|1|EUR|24,755  \r\n\r\n";
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_line_endings_are_unified() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_control_characters_are_stripped() {
        assert_eq!(normalize("a\u{00}b\u{08}c\u{1B}d\u{7F}e\u{9F}f"), "abcdef");
    }

    #[test]
    fn test_tab_survives_stripping() {
        assert_eq!(normalize("a\tb"), "a\tb");
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed_per_line() {
        assert_eq!(normalize("a  \nb\t\nc \t "), "a\nb\nc");
    }

    #[test]
    fn test_edge_blank_lines_are_trimmed_interior_kept() {
        assert_eq!(normalize("\n\nfirst\n\nsecond\n\n"), "first\n\nsecond");
    }

    #[test]
    fn test_unicode_is_composed() {
        // "měna" with the háček as a combining mark composes to the single code point
        let decomposed = "me\u{30C}na";
        assert_eq!(normalize(decomposed), "měna");
    }

    #[test]
    fn test_whitespace_only_input_normalizes_to_empty() {
        assert_eq!(normalize("  \r\n \t \r\n"), "");
    }
}
