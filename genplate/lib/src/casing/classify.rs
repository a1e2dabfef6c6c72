//! Convention predicates.
//!
//! "Letter", "uppercase" and "lowercase" mean the Unicode general categories
//! `L`, `Lu` and `Ll`. Letter-like code points outside those categories
//! (Roman numerals, circled letters, combining vowel signs, ordinal
//! indicators) are not letters here, even though `char::is_alphabetic` or
//! `char::is_lowercase` accept some of them.
//!
//! The predicates are total: every string, including `""`, gets an answer.

use std::sync::LazyLock;

use regex::Regex;

static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[\p{L}--\p{Lu}]\p{L}*)?$").expect("valid camelCase regex"));

static PASCAL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[\p{L}--\p{Ll}]\p{L}*)?$").expect("valid PascalCase regex"));

static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Ll}_]*$").expect("valid snake_case regex"));

/// A single uppercase letter (`Lu`), the word boundary of camelCase and
/// PascalCase.
pub(super) static UPPERCASE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Lu}").expect("valid uppercase regex"));

/// Returns `true` if `s` is made of letters only and does not start with an
/// uppercase letter.
///
/// The empty string qualifies.
pub fn is_camel_case(s: &str) -> bool {
    CAMEL_CASE.is_match(s)
}

/// Returns `true` if `s` is made of letters only and does not start with a
/// lowercase letter.
///
/// The empty string qualifies.
pub fn is_pascal_case(s: &str) -> bool {
    PASCAL_CASE.is_match(s)
}

/// Returns `true` if every code point of `s` is a lowercase letter or `_`.
pub fn is_snake_case(s: &str) -> bool {
    SNAKE_CASE.is_match(s)
}
