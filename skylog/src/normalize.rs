//! String normalization.
//!
//! Every string field is stored in its cleaned form: surrounding
//! whitespace removed and internal runs of whitespace collapsed to
//! a single space. Natural keys are compared on the lowercase of the
//! cleaned form, so `"  Main   Street"` and `"main street"` denote
//! the same key.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Returns the cleaned form of a string.
pub fn clean(s: &str) -> String {
    WHITESPACE_REGEX.replace_all(s.trim(), " ").into_owned()
}

/// Returns the comparison key of a string.
pub fn key(s: &str) -> String {
    clean(s).to_lowercase()
}

/// Compares two strings on their comparison keys.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    key(a) == key(b)
}

/// Tests whether `haystack` contains `needle`, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    key(haystack).contains(&key(needle))
}

/// Joins the comparison keys of several fields into a single key.
///
/// The separator cannot appear in a cleaned string.
pub fn compound_key<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts.into_iter().map(key).collect::<Vec<_>>().join("\n")
}
