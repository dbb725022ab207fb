//! # Text Helpers
//!
//! Small string transforms. All of them operate on Unicode scalar values, so
//! Cyrillic and accented input behaves the same as ASCII.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").expect("email pattern is valid")
});

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

pub const NUMBER_MASK: &str = "...";
pub const MIN_PASSWORD_LEN: usize = 8;

/// Compares two strings after full Unicode lower-casing.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// First and last character of `s`, or `None` for an empty string.
pub fn first_and_last_char(s: &str) -> Option<(char, char)> {
    let first = s.chars().next()?;
    let last = s.chars().next_back()?;
    Some((first, last))
}

/// Joins trimmed name parts with one space; a missing part leaves no stray
/// whitespace behind.
pub fn full_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim()).trim().to_string()
}

/// Upper-cases the first letter of every word and collapses runs of
/// whitespace into single spaces.
pub fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Everything after the last `/`, or the whole path when it has none.
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

pub fn tags_to_csv<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|tag| tag.as_ref().trim())
        .collect::<Vec<&str>>()
        .join(", ")
}

/// Splits on commas and trims each tag. Empty input yields no tags, while
/// empty segments between commas are kept as empty tags.
pub fn csv_to_tags(csv: &str) -> Vec<String> {
    if csv.is_empty() {
        return Vec::new();
    }
    csv.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Percent-encodes a search query for use inside a URL.
pub fn search_query(query: &str) -> String {
    urlencoding::encode(query).into_owned()
}

/// At least eight characters, one ASCII capital and one ASCII digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Every email address found in `text`, in order of appearance.
pub fn extract_emails(text: &str) -> Vec<&str> {
    EMAIL_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Replaces each run of digits with [`NUMBER_MASK`].
pub fn mask_numbers(text: &str) -> String {
    DIGITS_RE.replace_all(text, NUMBER_MASK).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_ignore_case_handles_cyrillic() {
        assert!(eq_ignore_case("Оруэлл", "оруэлл"));
        assert!(eq_ignore_case("ДОСТОЕВСКИЙ", "достоевский"));
        assert!(eq_ignore_case("Rand", "RAND"));
        assert!(!eq_ignore_case("Рэнд", "Рэндд"));
    }

    #[test]
    fn first_and_last_of_cyrillic() {
        assert_eq!(first_and_last_char("Барашек говорит же"), Some(('Б', 'е')));
        assert_eq!(first_and_last_char("x"), Some(('x', 'x')));
        assert_eq!(first_and_last_char(""), None);
    }

    #[test]
    fn full_name_trims_parts() {
        assert_eq!(full_name("  Ник   ", " Суд  "), "Ник Суд");
        assert_eq!(full_name("", " Суд"), "Суд");
        assert_eq!(full_name("  ", ""), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("привет мир"), "Привет Мир");
        assert_eq!(title_case("hello   world"), "Hello World");
        assert_eq!(title_case("ééé éé"), "Ééé Éé");
        assert_eq!(title_case("  "), "");
        // only the first letter changes
        assert_eq!(title_case("mcDonald"), "McDonald");
    }

    #[test]
    fn file_name_after_last_slash() {
        assert_eq!(file_name("/var/www/index.php"), "index.php");
        assert_eq!(file_name("index.php"), "index.php");
        assert_eq!(file_name("dir/"), "");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn tags_csv_conversions() {
        assert_eq!(tags_to_csv(&["php", " regex ", "web"]), "php, regex, web");
        assert_eq!(csv_to_tags("php, regex ,web"), vec!["php", "regex", "web"]);
        assert_eq!(csv_to_tags("a,,b"), vec!["a", "", "b"]);
        assert!(csv_to_tags("").is_empty());
    }

    #[test]
    fn search_query_is_percent_encoded() {
        assert_eq!(search_query("rust & php"), "rust%20%26%20php");
        assert_eq!(search_query("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn password_strength() {
        assert!(is_strong_password("Secret123"));
        assert!(!is_strong_password("secret123"));
        assert!(!is_strong_password("SecretPass"));
        assert!(!is_strong_password("Sh0rt"));
    }

    #[test]
    fn emails_are_extracted_in_order() {
        let text = "Write to Info@Example.com or sales@shop.co.uk, not to foo@bar";
        assert_eq!(extract_emails(text), vec!["Info@Example.com", "sales@shop.co.uk"]);
        assert!(extract_emails("nothing here").is_empty());
    }

    #[test]
    fn numbers_are_masked() {
        assert_eq!(mask_numbers("Order 42 shipped in 3 boxes"), "Order ... shipped in ... boxes");
        assert_eq!(mask_numbers("no digits"), "no digits");
    }
}
