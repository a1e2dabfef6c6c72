//! Identifier case conventions.
//!
//! Three conventions are recognized:
//!
//! | Convention | Rule |
//! |---|---|
//! | camelCase | letters only, first letter not uppercase |
//! | PascalCase | letters only, first letter not lowercase |
//! | snake_case | lowercase letters and `_` only |
//!
//! The rules overlap. A single lowercase word such as `user` is both camelCase
//! and snake_case, and the empty string satisfies both letter-only rules.
//! [`Convention::classify`] resolves the overlap with a fixed precedence:
//! camelCase, then PascalCase, then snake_case. The converters rely on that
//! same order, so `""` converts to `""` for every target and `user` is treated
//! as a one-word camelCase identifier.
//!
//! Conversions are lossy. Digits, hyphens and other symbols are never part of
//! a recognized convention, so `foo2bar` fails for every target.
//!
//! ## Examples
//!
//! ```
//! use genplate::casing::{Convention, to_camel_case, to_pascal_case, to_snake_case};
//!
//! assert_eq!(Convention::classify("userId"), Some(Convention::Camel));
//! assert_eq!(to_snake_case("UserProfile").unwrap(), "user_profile");
//! assert_eq!(to_camel_case("user_profile").unwrap(), "userProfile");
//! assert_eq!(to_pascal_case("user_profile").unwrap(), "UserProfile");
//! assert!(to_snake_case("user-profile").is_err());
//! ```

mod classify;
mod convert;

use std::fmt;

pub use classify::{is_camel_case, is_pascal_case, is_snake_case};
pub use convert::{convert, to_camel_case, to_pascal_case, to_snake_case};

/// A naming convention for identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `snake_case`
    Snake,
}

impl Convention {
    /// All conventions, in classification precedence order.
    pub const ALL: [Convention; 3] = [Convention::Camel, Convention::Pascal, Convention::Snake];

    /// Returns the first convention, in precedence order, that `s` satisfies.
    ///
    /// Returns `None` when `s` satisfies none of them.
    pub fn classify(s: &str) -> Option<Convention> {
        Self::ALL.into_iter().find(|convention| convention.matches(s))
    }

    /// Whether `s` satisfies this convention's rule, ignoring precedence.
    pub fn matches(self, s: &str) -> bool {
        match self {
            Convention::Camel => is_camel_case(s),
            Convention::Pascal => is_pascal_case(s),
            Convention::Snake => is_snake_case(s),
        }
    }

    /// The name of the convention, written in that convention.
    pub fn as_str(self) -> &'static str {
        match self {
            Convention::Camel => "camelCase",
            Convention::Pascal => "PascalCase",
            Convention::Snake => "snake_case",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
