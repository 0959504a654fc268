//! Text normalization shared by answer validation and search.
//!
//! Every comparison in the crate goes through the single [`normalize`]
//! routine, so "café" and "cafe" are equal in every code path or in none.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a string for comparison.
///
/// Applies, in order:
/// 1. Lowercase
/// 2. Unicode NFD decomposition, separating base letters from combining marks
/// 3. Strip combining marks (covers every Portuguese accented letter:
///    á à â ã é è ê í ó ô õ ú ü ç)
/// 4. Replace any remaining non-alphanumeric character with a space
/// 5. Collapse whitespace runs and trim
///
/// The function is idempotent, so already-normalized text passes through
/// unchanged. `"Não!"` becomes `"nao"`, `"café"` and `"cafe"` compare equal,
/// and `"chamo-me"` becomes `"chamo me"` (punctuation splits words rather
/// than deleting them, so hyphenated clitics still match word-by-word).
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace-token count of an already-normalized string.
pub fn word_count(normalized: &str) -> usize {
    normalized.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_on_plain_ascii() {
        assert_eq!(normalize("bom dia"), "bom dia");
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize("Bom Dia"), "bom dia");
    }

    #[test]
    fn strips_portuguese_accents() {
        assert_eq!(normalize("café"), "cafe");
        assert_eq!(normalize("não"), "nao");
        assert_eq!(normalize("és"), "es");
        assert_eq!(normalize("avô"), "avo");
        assert_eq!(normalize("irmã"), "irma");
        assert_eq!(normalize("coração"), "coracao");
        assert_eq!(normalize("português"), "portugues");
    }

    #[test]
    fn cedilla_matches_plain_c() {
        assert_eq!(normalize("almoço"), normalize("almoco"));
    }

    #[test]
    fn punctuation_becomes_a_space() {
        assert_eq!(normalize("Não!"), "nao");
        assert_eq!(normalize("Estou bem, obrigado!"), "estou bem obrigado");
        assert_eq!(normalize("chamo-me"), "chamo me");
        assert_eq!(normalize("Como estás?"), "como estas");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  estou   bem  "), "estou bem");
        assert_eq!(normalize("estou\tbem"), "estou bem");
    }

    #[test]
    fn idempotent() {
        for input in ["Não!", "Estou bem, obrigado!", "café com leite", "  a  b  "] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!..."), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(normalize("Tenho 2 irmãs"), "tenho 2 irmas");
    }

    #[test]
    fn word_count_counts_tokens() {
        assert_eq!(word_count("estou bem"), 2);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("a"), 1);
    }
}
