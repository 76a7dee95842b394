// crates/geogrant-core/src/location.rs

//! # Location Parser
//!
//! Location strings are hyphen-delimited and most-specific-first:
//! `"City-State-Country"`, `"State-Country"` or `"Country"`. The number of
//! components alone decides the [`Granularity`].

use crate::error::{GrantError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const LOCATION_SEPARATOR: char = '-';

/// Geographic specificity of a location string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Granularity {
    Country,
    State,
    City,
}

impl Granularity {
    /// Classifies a component count; only 1, 2 and 3 are meaningful.
    pub fn from_component_count(n: usize) -> Option<Self> {
        match n {
            1 => Some(Granularity::Country),
            2 => Some(Granularity::State),
            3 => Some(Granularity::City),
            _ => None,
        }
    }

    pub fn component_count(self) -> usize {
        match self {
            Granularity::Country => 1,
            Granularity::State => 2,
            Granularity::City => 3,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Granularity::Country => "country",
            Granularity::State => "state",
            Granularity::City => "city",
        })
    }
}

/// A location split into its components, most-specific-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocation<'a> {
    components: Vec<&'a str>,
    granularity: Granularity,
}

impl<'a> ParsedLocation<'a> {
    pub fn components(&self) -> &[&'a str] {
        &self.components
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// The top-level (last) component.
    pub fn country(&self) -> &'a str {
        self.components[self.components.len() - 1]
    }

    pub fn state(&self) -> Option<&'a str> {
        match self.granularity {
            Granularity::Country => None,
            Granularity::State => Some(self.components[0]),
            Granularity::City => Some(self.components[1]),
        }
    }

    pub fn city(&self) -> Option<&'a str> {
        match self.granularity {
            Granularity::City => Some(self.components[0]),
            _ => None,
        }
    }
}

/// Splits `location` on `-` and classifies it.
///
/// Inputs with more than three components, or with an empty component
/// (`""`, `"-India"`, `"Gujarat--India"`), are rejected as
/// [`GrantError::MalformedLocation`].
///
/// ```rust
/// use geogrant_core::location::{parse, Granularity};
///
/// let loc = parse("Vyara-Gujarat-India").unwrap();
/// assert_eq!(loc.components(), ["Vyara", "Gujarat", "India"]);
/// assert_eq!(loc.granularity(), Granularity::City);
/// assert_eq!(loc.country(), "India");
/// ```
pub fn parse(location: &str) -> Result<ParsedLocation<'_>> {
    let components: Vec<&str> = location.split(LOCATION_SEPARATOR).collect();
    let malformed = || GrantError::MalformedLocation {
        location: location.to_string(),
        components: components.len(),
    };

    if components.iter().any(|c| c.is_empty()) {
        return Err(malformed());
    }
    let granularity = Granularity::from_component_count(components.len()).ok_or_else(malformed)?;

    Ok(ParsedLocation {
        components,
        granularity,
    })
}

/// Shortcut for callers that only need the level.
pub fn granularity_of(location: &str) -> Result<Granularity> {
    parse(location).map(|p| p.granularity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn classifies_by_component_count() {
        let country = parse("India").unwrap();
        assert_eq!(country.components(), ["India"]);
        assert_eq!(country.granularity(), Granularity::Country);

        let state = parse("Gujarat-India").unwrap();
        assert_eq!(state.components(), ["Gujarat", "India"]);
        assert_eq!(state.granularity(), Granularity::State);
        assert_eq!(state.state(), Some("Gujarat"));
        assert_eq!(state.city(), None);

        let city = parse("Vyara-Gujarat-India").unwrap();
        assert_eq!(city.components(), ["Vyara", "Gujarat", "India"]);
        assert_eq!(city.granularity(), Granularity::City);
        assert_eq!(city.city(), Some("Vyara"));
        assert_eq!(city.country(), "India");
    }

    #[test]
    fn rejects_too_many_components() {
        let err = parse("A-B-C-D").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedLocation);
        assert!(matches!(
            err,
            GrantError::MalformedLocation { components: 4, .. }
        ));
    }

    #[test]
    fn rejects_empty_components() {
        for bad in ["", "-India", "Gujarat--India", "India-"] {
            assert_eq!(
                parse(bad).unwrap_err().kind(),
                ErrorKind::MalformedLocation,
                "{bad:?} should be malformed"
            );
        }
    }

    proptest! {
        #[test]
        fn granularity_tracks_component_count(parts in prop::collection::vec("[A-Za-z ]{1,8}", 1..=3)) {
            let joined = parts.join("-");
            let parsed = parse(&joined).unwrap();
            prop_assert_eq!(parsed.components().len(), parts.len());
            prop_assert_eq!(parsed.granularity().component_count(), parts.len());
        }
    }
}
