//! ASCII sanitizer — canonicalizes Unicode punctuation and transliterates
//! Latin diacritics so conservative ATS text parsers never see multi-byte
//! characters they would mangle.
//!
//! Applied by every document encoder to every human-authored string before
//! emission. Structured values (URLs, raw JSON) are exempt. The function is
//! idempotent: all replacement output is plain ASCII, which maps to itself.

/// Transliteration table for Latin diacritics and common Central-European
/// letters. Characters not listed here (and not handled by the punctuation
/// pass) pass through unchanged.
const TRANSLITERATIONS: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('é', "e"),
    ('è', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('á', "a"),
    ('à', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('í', "i"),
    ('ì', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ó', "o"),
    ('ò', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ú', "u"),
    ('ù', "u"),
    ('û', "u"),
    ('ñ', "n"),
    ('ć', "c"),
    ('č', "c"),
    ('ş', "s"),
    ('ž', "z"),
    ('đ', "d"),
    // Uppercase forms: encoders uppercase names and section headings
    // before sanitizing, so both cases must map.
    ('É', "E"),
    ('È', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Á', "A"),
    ('À', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Í', "I"),
    ('Ì', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ó', "O"),
    ('Ò', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ú', "U"),
    ('Ù', "U"),
    ('Û', "U"),
    ('Ñ', "N"),
    ('Ć', "C"),
    ('Č', "C"),
    ('Ş', "S"),
    ('Ž', "Z"),
    ('Đ', "D"),
];

/// Returns an ASCII-safe rendition of `text` for ATS-facing output.
///
/// Pass order: curly quotes → straight quotes, en/em dashes → hyphen,
/// ellipsis glyph → `...`, Euro sign → `EUR`, then the per-character
/// transliteration table for anything still non-ASCII.
pub fn ascii_sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{20AC}' => out.push_str("EUR"),
            c if c.is_ascii() => out.push(c),
            c => match TRANSLITERATIONS.iter().find(|(from, _)| *from == c) {
                Some((_, to)) => out.push_str(to),
                None => out.push(c),
            },
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diacritics_transliterated() {
        assert_eq!(ascii_sanitize("Ivan Kokalović"), "Ivan Kokalovic");
        assert_eq!(ascii_sanitize("Müller-Lüdenscheidt"), "Mueller-Luedenscheidt");
        assert_eq!(ascii_sanitize("Straße"), "Strasse");
    }

    #[test]
    fn test_punctuation_and_currency() {
        assert_eq!(ascii_sanitize("café – €5"), "cafe - EUR5");
        assert_eq!(ascii_sanitize("\u{201C}quoted\u{201D}"), "\"quoted\"");
        assert_eq!(ascii_sanitize("it\u{2019}s"), "it's");
        assert_eq!(ascii_sanitize("wait\u{2026}"), "wait...");
    }

    #[test]
    fn test_uppercase_diacritics_transliterated() {
        // Encoders uppercase before sanitizing, so uppercase forms must map
        // the same way their lowercase counterparts do.
        assert_eq!(ascii_sanitize(&"Ivan Kokalović".to_uppercase()), "IVAN KOKALOVIC");
        assert_eq!(ascii_sanitize("ÉCOLE ÀÒÑ"), "ECOLE AON");
        assert_eq!(ascii_sanitize("ŽĐČŞ ÍÛ"), "ZDCS IU");
        assert!(ascii_sanitize(&"Müller à l'Épée".to_uppercase()).is_ascii());
    }

    #[test]
    fn test_plain_ascii_unchanged() {
        let s = "Backend Developer & Infrastructure Engineer (2017-2024)";
        assert_eq!(ascii_sanitize(s), s);
    }

    #[test]
    fn test_unmapped_chars_pass_through() {
        // Not in the table — survives untouched rather than being dropped.
        assert_eq!(ascii_sanitize("日本"), "日本");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Ivan Kokalović",
            "café – €5",
            "\u{201C}Straße\u{201D} … ñ ć ž đ",
            "plain ascii",
        ];
        for s in inputs {
            let once = ascii_sanitize(s);
            assert_eq!(ascii_sanitize(&once), once, "not idempotent for {s:?}");
        }
    }
}
