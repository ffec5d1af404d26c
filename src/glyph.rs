//! Selection of the character drawn on an icon.

use std::fmt;

use crate::error::{IconError, Result};

/// The text drawn on an icon: the uppercase form of the name's first
/// character.
///
/// Usually a single character, but full Unicode case mapping can expand one
/// code point into several (`ß` becomes `SS`), and all of them are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph(String);

impl Glyph {
    /// Picks the glyph for `name`.
    ///
    /// Fails with [`IconError::EmptyName`] when the name has no characters.
    pub fn from_name(name: &str) -> Result<Self> {
        let first = name.chars().next().ok_or(IconError::EmptyName)?;
        Ok(Self(first.to_uppercase().collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_first_character() {
        assert_eq!(Glyph::from_name("alice").unwrap().as_str(), "A");
        assert_eq!(Glyph::from_name("Bob").unwrap().as_str(), "B");
        assert_eq!(Glyph::from_name("7up").unwrap().as_str(), "7");
    }

    #[test]
    fn uses_code_points_not_bytes() {
        assert_eq!(Glyph::from_name("émile").unwrap().as_str(), "É");
        assert_eq!(Glyph::from_name("ñame").unwrap().as_str(), "Ñ");
        assert_eq!(Glyph::from_name("🦆 duck").unwrap().as_str(), "🦆");
    }

    #[test]
    fn multi_character_uppercase() {
        assert_eq!(Glyph::from_name("ßtraße").unwrap().as_str(), "SS");
    }

    #[test]
    fn same_letter_same_glyph() {
        assert_eq!(
            Glyph::from_name("alice").unwrap(),
            Glyph::from_name("Albert").unwrap()
        );
    }

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(Glyph::from_name(""), Err(IconError::EmptyName)));
    }
}
