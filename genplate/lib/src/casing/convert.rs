//! Conversions between conventions.
//!
//! Word boundaries are rebuilt from whatever the source convention encodes:
//! an uppercase letter in camelCase and PascalCase, an underscore in
//! snake_case.

use super::Convention;
use super::classify::UPPERCASE_LETTER;
use crate::errors::CaseError;

/// Converts `s` to `target`.
///
/// The source convention is picked with [`Convention::classify`]. An input
/// already in `target` is returned unchanged.
///
/// ## Errors
///
/// Returns [`CaseError::UnrecognizedConvention`] if `s` matches no convention.
pub fn convert(s: &str, target: Convention) -> Result<String, CaseError> {
    let source = Convention::classify(s).ok_or_else(|| CaseError::UnrecognizedConvention {
        input: s.to_string(),
        target,
    })?;

    let converted = match (source, target) {
        (Convention::Pascal, Convention::Camel) => lower_first(s),
        (Convention::Snake, Convention::Camel) => join_words(s, false),
        (Convention::Camel, Convention::Pascal) => upper_first(s),
        (Convention::Snake, Convention::Pascal) => join_words(s, true),
        (Convention::Camel, Convention::Snake) => split_words(s, false),
        (Convention::Pascal, Convention::Snake) => split_words(s, true),
        (Convention::Camel, Convention::Camel)
        | (Convention::Pascal, Convention::Pascal)
        | (Convention::Snake, Convention::Snake) => s.to_string(),
    };

    Ok(converted)
}

/// Converts `s` to camelCase.
///
/// ```
/// use genplate::casing::to_camel_case;
///
/// assert_eq!(to_camel_case("UserProfile").unwrap(), "userProfile");
/// assert_eq!(to_camel_case("user_profile").unwrap(), "userProfile");
/// ```
pub fn to_camel_case(s: &str) -> Result<String, CaseError> {
    convert(s, Convention::Camel)
}

/// Converts `s` to PascalCase.
///
/// ```
/// use genplate::casing::to_pascal_case;
///
/// assert_eq!(to_pascal_case("userProfile").unwrap(), "UserProfile");
/// assert_eq!(to_pascal_case("user_profile").unwrap(), "UserProfile");
/// ```
pub fn to_pascal_case(s: &str) -> Result<String, CaseError> {
    convert(s, Convention::Pascal)
}

/// Converts `s` to snake_case.
///
/// Every uppercase letter starts a new word, so acronyms come apart one letter
/// at a time: `HTTPServer` becomes `h_t_t_p_server`.
///
/// ```
/// use genplate::casing::to_snake_case;
///
/// assert_eq!(to_snake_case("UserProfile").unwrap(), "user_profile");
/// assert_eq!(to_snake_case("userProfile").unwrap(), "user_profile");
/// ```
pub fn to_snake_case(s: &str) -> Result<String, CaseError> {
    convert(s, Convention::Snake)
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Drops underscores and uppercases the letter after each one.
///
/// The first letter written is only uppercased when `capitalize_first` is set,
/// so a leading underscore never produces an uppercase initial in camelCase.
fn join_words(s: &str, capitalize_first: bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = capitalize_first;

    for c in s.chars() {
        if c == '_' {
            at_boundary = capitalize_first || !out.is_empty();
            continue;
        }
        if at_boundary {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = false;
    }

    out
}

/// Writes `_` plus the lowercase form for every uppercase letter.
///
/// With `lower_first` set the first code point is lowercased without a
/// separator, which is how PascalCase input loses its leading capital.
fn split_words(s: &str, lower_first: bool) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 2);
    let mut rest = s;

    if lower_first && let Some(first) = s.chars().next() {
        out.extend(first.to_lowercase());
        rest = &s[first.len_utf8()..];
    }

    let mut last = 0;
    for m in UPPERCASE_LETTER.find_iter(rest) {
        out.push_str(&rest[last..m.start()]);
        out.push('_');
        out.push_str(&m.as_str().to_lowercase());
        last = m.end();
    }
    out.push_str(&rest[last..]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // === to_camel_case ===

    #[test]
    fn camel_from_pascal_lowers_first_letter() {
        assert_eq!(to_camel_case("HelloWorld").unwrap(), "helloWorld");
        assert_eq!(to_camel_case("H").unwrap(), "h");
    }

    #[test]
    fn camel_from_snake_joins_words() {
        assert_eq!(to_camel_case("hello_world").unwrap(), "helloWorld");
        assert_eq!(to_camel_case("a_b_c").unwrap(), "aBC");
    }

    #[test]
    fn camel_from_snake_drops_stray_underscores() {
        assert_eq!(to_camel_case("_hello_world").unwrap(), "helloWorld");
        assert_eq!(to_camel_case("hello_world_").unwrap(), "helloWorld");
        assert_eq!(to_camel_case("hello__world").unwrap(), "helloWorld");
        assert_eq!(to_camel_case("_").unwrap(), "");
    }

    #[test]
    fn camel_input_is_returned_unchanged() {
        assert_eq!(to_camel_case("helloWorld").unwrap(), "helloWorld");
        assert_eq!(to_camel_case("hello").unwrap(), "hello");
        assert_eq!(to_camel_case("").unwrap(), "");
    }

    // === to_pascal_case ===

    #[test]
    fn pascal_from_camel_raises_first_letter() {
        assert_eq!(to_pascal_case("helloWorld").unwrap(), "HelloWorld");
        assert_eq!(to_pascal_case("hello").unwrap(), "Hello");
        assert_eq!(to_pascal_case("h").unwrap(), "H");
    }

    #[test]
    fn pascal_from_snake_joins_and_capitalizes() {
        assert_eq!(to_pascal_case("hello_world").unwrap(), "HelloWorld");
        assert_eq!(to_pascal_case("_hello").unwrap(), "Hello");
        assert_eq!(to_pascal_case("hello_").unwrap(), "Hello");
        assert_eq!(to_pascal_case("__").unwrap(), "");
    }

    #[test]
    fn pascal_input_is_returned_unchanged() {
        assert_eq!(to_pascal_case("HelloWorld").unwrap(), "HelloWorld");
        assert_eq!(to_pascal_case("HTTP").unwrap(), "HTTP");
    }

    #[test]
    fn pascal_of_empty_is_empty() {
        // "" classifies as camelCase, and raising its first letter is a no-op.
        assert_eq!(to_pascal_case("").unwrap(), "");
    }

    // === to_snake_case ===

    #[test]
    fn snake_from_camel_splits_on_uppercase() {
        assert_eq!(to_snake_case("helloWorld").unwrap(), "hello_world");
        assert_eq!(to_snake_case("aB").unwrap(), "a_b");
    }

    #[test]
    fn snake_from_pascal_lowers_first_without_separator() {
        assert_eq!(to_snake_case("HelloWorld").unwrap(), "hello_world");
        assert_eq!(to_snake_case("H").unwrap(), "h");
    }

    #[test]
    fn snake_splits_acronyms_per_letter() {
        assert_eq!(to_snake_case("HTTPServer").unwrap(), "h_t_t_p_server");
        assert_eq!(to_snake_case("userID").unwrap(), "user_i_d");
    }

    #[test]
    fn snake_of_single_word_adds_no_separator() {
        assert_eq!(to_snake_case("hello").unwrap(), "hello");
        assert_eq!(to_snake_case("").unwrap(), "");
    }

    #[test]
    fn snake_input_is_returned_unchanged() {
        assert_eq!(to_snake_case("hello_world").unwrap(), "hello_world");
        assert_eq!(to_snake_case("_private_").unwrap(), "_private_");
    }

    // === failures ===

    #[test]
    fn unrecognized_input_fails_for_every_target() {
        for input in ["foo2bar", "foo-bar", "Foo_Bar", "foo bar", "fooBar_baz"] {
            for target in Convention::ALL {
                assert_eq!(
                    convert(input, target),
                    Err(CaseError::UnrecognizedConvention {
                        input: input.to_string(),
                        target,
                    }),
                    "{input} -> {target}"
                );
            }
        }
    }

    #[test]
    fn error_message_names_input_and_target() {
        let err = to_pascal_case("foo-bar").unwrap_err();
        assert_eq!(err.to_string(), "cannot convert `foo-bar` to PascalCase");
    }

    // === non-ASCII ===

    #[test]
    fn converts_non_ascii_letters() {
        assert_eq!(to_snake_case("GrößeÄnderung").unwrap(), "größe_änderung");
        assert_eq!(to_pascal_case("été_chaud").unwrap(), "ÉtéChaud");
    }

    #[test]
    fn letter_like_symbols_fail_for_every_target() {
        for input in ["fooⅫ", "xⅢ", "Ⓐb", "aा", "foo_ª"] {
            assert_eq!(Convention::classify(input), None, "{input}");
            for target in Convention::ALL {
                assert!(convert(input, target).is_err(), "{input} -> {target}");
            }
        }
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pascal_after_camel_matches_pascal(s in "[a-zA-Z]{0,16}") {
            prop_assume!(is_camel_or_pascal(&s));
            prop_assert_eq!(
                to_pascal_case(&to_camel_case(&s).unwrap()).unwrap(),
                to_pascal_case(&s).unwrap()
            );
        }

        #[test]
        fn lowercase_words_survive_camel_and_pascal(s in "[a-z]{1,16}") {
            let pascal = to_pascal_case(&s).unwrap();
            prop_assert_eq!(to_camel_case(&pascal).unwrap(), s.clone());
            prop_assert_eq!(to_snake_case(&pascal).unwrap(), s);
        }

        #[test]
        fn snake_output_is_snake_case(s in "[a-zA-Z]{1,16}") {
            let snake = to_snake_case(&s).unwrap();
            prop_assert!(crate::casing::is_snake_case(&snake));
            prop_assert!(!snake.starts_with('_'));
        }

        #[test]
        fn digits_are_never_recognized(prefix in "[a-z]{0,8}", digit in "[0-9]", suffix in "[a-z]{0,8}") {
            let input = format!("{prefix}{digit}{suffix}");
            for target in Convention::ALL {
                prop_assert!(convert(&input, target).is_err());
            }
        }
    }

    fn is_camel_or_pascal(s: &str) -> bool {
        matches!(Convention::classify(s), Some(Convention::Camel | Convention::Pascal))
    }
}
