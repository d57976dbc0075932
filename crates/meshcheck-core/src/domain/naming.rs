//! Naming rules for catalog entities.
//!
//! Pure, stateless string predicates and conversions:
//!
//! | Function                         | Used for                         |
//! |----------------------------------|----------------------------------|
//! | [`is_valid_domain_product_name`] | domain and data product names    |
//! | [`is_snake_case`]                | dataset names                    |
//! | [`to_snake_case`]                | expected schema location suffix  |

use std::sync::LazyLock;

use regex::Regex;

/// Longest all-uppercase word accepted as an acronym (`SALES`, `HR`, `API`).
pub const MAX_ACRONYM_LEN: usize = 5;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-.,]+").expect("separator pattern is valid"));

static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(_[a-z0-9]+)*$").expect("snake_case pattern is valid"));

/// `true` if the first character is uppercase and every following character
/// is lowercase.
///
/// A single uppercase letter passes: its remainder is empty.
pub fn is_upper_camel_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && chars.all(char::is_lowercase),
        None => false,
    }
}

/// Split `name` on `sep` and require every piece to be an upper-camel word.
pub fn is_upper_camel_case(name: &str, sep: char) -> bool {
    name.split(sep).all(is_upper_camel_word)
}

/// Validate a domain or data product name.
///
/// Words are separated by single spaces. Every word must be purely
/// alphabetic, and each of its camel humps must either be an upper-camel
/// word or an uppercase acronym of at most [`MAX_ACRONYM_LEN`] letters.
///
/// ```
/// use meshcheck_core::domain::naming::is_valid_domain_product_name;
///
/// assert!(is_valid_domain_product_name("ValidName"));
/// assert!(is_valid_domain_product_name("ShortNAME"));
/// assert!(!is_valid_domain_product_name("invalid name"));
/// assert!(!is_valid_domain_product_name("ShortNAME withInvalid"));
/// ```
pub fn is_valid_domain_product_name(name: &str) -> bool {
    name.split(' ').all(|word| {
        !word.is_empty()
            && word.chars().all(char::is_alphabetic)
            && camel_humps(word)
                .into_iter()
                .all(|hump| is_upper_camel_word(hump) || is_acronym(hump))
    })
}

/// Convert a display name to snake_case.
///
/// Runs of whitespace, `-`, `.` and `,` collapse to one `_`; every ASCII
/// uppercase letter past the first character gets a `_` in front of it; the
/// result is lowercased and stripped of outer underscores.
///
/// A separator followed by a capital therefore yields a double underscore
/// (`"Sales Orders"` → `"sales__orders"`).
pub fn to_snake_case(name: &str) -> String {
    let collapsed = SEPARATOR_RUN.replace_all(name, "_");

    let mut out = String::with_capacity(collapsed.len() + 4);
    for (idx, ch) in collapsed.char_indices() {
        if idx > 0 && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch);
    }

    out.to_lowercase().trim_matches('_').to_string()
}

/// `true` if `s` matches `^[a-z]+(_[a-z0-9]+)*$`.
///
/// A digit may open a group after an underscore, never the string itself.
pub fn is_snake_case(s: &str) -> bool {
    SNAKE_CASE.is_match(s)
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() <= MAX_ACRONYM_LEN && word.chars().all(char::is_uppercase)
}

/// Split a word at its camel-case boundaries.
///
/// A hump starts at an uppercase letter that follows a lowercase one, or at
/// the last capital of an uppercase run that is followed by a lowercase
/// letter: `ShortNAME` → `Short`, `NAME`; `HTTPServer` → `HTTP`, `Server`.
fn camel_humps(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut humps = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, ch) = chars[i];
        if !ch.is_uppercase() {
            continue;
        }
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|&(_, c)| c.is_lowercase());
        if prev.is_lowercase() || (prev.is_uppercase() && next_is_lower) {
            humps.push(&word[start..offset]);
            start = offset;
        }
    }
    humps.push(&word[start..]);
    humps
}
