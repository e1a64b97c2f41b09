use std::fmt;

/// Direction of an alignment relative to a reference
///
/// Used for both the read direction of the mRNA and its orientation
/// relative to the first BAC. Rendered as `1` and `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}
impl Strand {
    /// Signed representation as stored in the database (+1 / -1)
    #[must_use]
    pub fn as_i8(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }

    /// Parses `1`, `+1` or `-1`
    ///
    /// Anything else (including `0`) yields `None`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" | "+1" => Some(Self::Forward),
            "-1" => Some(Self::Reverse),
            _ => None,
        }
    }
}

impl TryFrom<i8> for Strand {
    type Error = i8;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Forward),
            -1 => Ok(Self::Reverse),
            other => Err(other),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(Strand::parse("1"), Some(Strand::Forward));
        assert_eq!(Strand::parse("+1"), Some(Strand::Forward));
        assert_eq!(Strand::parse("-1"), Some(Strand::Reverse));
        assert_eq!(Strand::parse("0"), None);
        assert_eq!(Strand::parse("+"), None);
        assert_eq!(Strand::parse(""), None);
    }

    #[test]
    fn test_signed_conversion() {
        assert_eq!(Strand::try_from(-1), Ok(Strand::Reverse));
        assert_eq!(Strand::try_from(2), Err(2));
        assert_eq!(Strand::Reverse.to_string(), "-1");
        assert_eq!(Strand::Forward.to_string(), "1");
    }
}
