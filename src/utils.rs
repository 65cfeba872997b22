// src/utils.rs
use deunicode::deunicode;

/// Turn free text into a lowercase, hyphen-separated ASCII name.
/// Returns an empty string when nothing alphanumeric survives.
pub fn slugify(input: &str) -> String {
    let ascii = deunicode(input).to_lowercase();
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for c in ascii.chars() {
        match c {
            'a'..='z' | '0'..='9' => {
                if pending_separator && !slug.is_empty() {
                    slug.push('-');
                }
                pending_separator = false;
                slug.push(c);
            }
            _ => pending_separator = true,
        }
    }

    slug
}

pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_and_case() {
        assert_eq!(slugify("My Part 01"), "my-part-01");
        assert_eq!(slugify("Alpha Test"), "alpha-test");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("  --Gear__box!!  v2.. "), "gear-box-v2");
        assert_eq!(slugify("a / b \\ c"), "a-b-c");
    }

    #[test]
    fn test_quotes_separate_words() {
        assert_eq!(slugify("Bob's bracket"), "bob-s-bracket");
        assert_eq!(slugify("C'est déjà l'été."), "c-est-deja-l-ete");
        assert_eq!(slugify("a`b"), "a-b");
        assert_eq!(slugify("\"quoted\" name"), "quoted-name");
    }

    #[test]
    fn test_transliteration() {
        assert_eq!(slugify("Café Übergröße"), "cafe-ubergrosse");
        assert_eq!(slugify("Çelik"), "celik");
    }

    #[test]
    fn test_symbols_only_is_empty() {
        assert_eq!(slugify("!!! ??? ---"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_output_is_always_a_slug() {
        let inputs = [
            "Hello World",
            "  leading and trailing  ",
            "MiXeD-CaSe_and.dots",
            "tabs\tand\nnewlines",
            "100% done",
            "Ärger & Öl",
        ];
        for input in inputs {
            let slug = slugify(input);
            assert!(is_slug(&slug), "{input:?} -> {slug:?}");
        }
    }

    #[test]
    fn test_is_slug_rejects_bad_shapes() {
        assert!(is_slug("a-b-1"));
        assert!(!is_slug(""));
        assert!(!is_slug("-a"));
        assert!(!is_slug("a-"));
        assert!(!is_slug("a--b"));
        assert!(!is_slug("A"));
    }
}
