//! A suffix-based English pluralizer.
//!
//! Only the last letter is consulted: `s` becomes `ses`, `y` becomes `ies` and
//! anything else gets an `s`. Irregular nouns (`child`), uncountable nouns
//! (`sheep`) and the `x`/`z`/`ch`/`sh` endings are not handled, so `box`
//! pluralizes to `boxs`. Templates that need those forms should spell them
//! out.

use crate::errors::CaseError;

/// Returns the plural form of `s`.
///
/// ```
/// use genplate::pluralize;
///
/// assert_eq!(pluralize("bus").unwrap(), "buses");
/// assert_eq!(pluralize("category").unwrap(), "categories");
/// assert_eq!(pluralize("cat").unwrap(), "cats");
/// ```
///
/// ## Errors
///
/// Returns [`CaseError::EmptyInput`] if `s` is empty.
pub fn pluralize(s: &str) -> Result<String, CaseError> {
    let mut chars = s.chars();
    let last = chars.next_back().ok_or(CaseError::EmptyInput)?;
    let stem = chars.as_str();

    let plural = match last {
        's' => format!("{stem}ses"),
        'y' => format!("{stem}ies"),
        _ => format!("{s}s"),
    };

    Ok(plural)
}
