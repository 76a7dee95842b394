// crates/geogrant-core/src/text.rs

//! Canonical text forms used when comparing location and distributor names.

/// Uppercases `s` and strips every space character.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
///
/// ```rust
/// use geogrant_core::text::normalize;
///
/// assert_eq!(normalize("test string"), "TESTSTRING");
/// assert_eq!(normalize("UPPERCASE"), "UPPERCASE");
/// ```
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|&c| c != ' ')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Convert a string into a folded key suitable for lookup and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// ```rust
/// use geogrant_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("MÜNCHEN"), "munchen");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
