use std::{fmt, ops::Deref};

use crate::error::ParseError;

/// GenBank accession of the aligned mRNA
///
/// Holds at most [`Accession::MAX_LEN`] bytes. Construction rejects longer
/// input instead of truncating it, and rejects commas and control characters
/// so that every output format can be parsed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Accession(String);
impl Accession {
    /// Maximum accession length in bytes
    pub const MAX_LEN: usize = 12;

    pub fn new(value: &str) -> Result<Self, ParseError> {
        if value.len() > Self::MAX_LEN {
            return Err(ParseError::AccessionTooLong(value.len()));
        }
        if value.chars().any(|c| c == ',' || c.is_control()) {
            return Err(ParseError::InvalidAccession(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Accession {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Accession {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Accession {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Accession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Accession::new("").is_ok());
        assert_eq!(Accession::new("AB123456").unwrap().as_str(), "AB123456");

        let twelve = "ABCDEFGHIJKL";
        assert_eq!(Accession::new(twelve).unwrap().len(), Accession::MAX_LEN);

        let thirteen = "ABCDEFGHIJKLM";
        assert_eq!(
            Accession::new(thirteen),
            Err(ParseError::AccessionTooLong(13))
        );
    }

    #[test]
    fn test_rejects_separators() {
        assert!(matches!(
            Accession::new("AB,12"),
            Err(ParseError::InvalidAccession(_))
        ));
        assert!(matches!(
            Accession::new("AB\t12"),
            Err(ParseError::InvalidAccession(_))
        ));
    }
}
