//! Stance value object

use crate::core::error::SetupError;
use serde::{Deserialize, Serialize};

/// Which side of the motion the user argues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stance {
    For,
    Against,
}

impl Stance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::For => "For",
            Stance::Against => "Against",
        }
    }

    /// The side the Contender takes
    pub fn opposite(&self) -> Stance {
        match self {
            Stance::For => Stance::Against,
            Stance::Against => Stance::For,
        }
    }

    /// Parse a stance selection, treating the placeholder as "nothing chosen".
    ///
    /// Blank input and `select` map to `Ok(None)`; anything else that is not
    /// a stance is an error.
    pub fn parse_choice(input: &str) -> Result<Option<Stance>, SetupError> {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" | "select" => Ok(None),
            "for" | "f" => Ok(Some(Stance::For)),
            "against" | "a" => Ok(Some(Stance::Against)),
            _ => Err(SetupError::UnknownStance(input.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Stance {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stance::parse_choice(s)?.ok_or(SetupError::MissingStance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Stance::For.opposite(), Stance::Against);
        assert_eq!(Stance::Against.opposite(), Stance::For);
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(Stance::parse_choice("For"), Ok(Some(Stance::For)));
        assert_eq!(Stance::parse_choice(" against "), Ok(Some(Stance::Against)));
        assert_eq!(Stance::parse_choice("A"), Ok(Some(Stance::Against)));
        assert_eq!(Stance::parse_choice("Select"), Ok(None));
        assert_eq!(Stance::parse_choice("   "), Ok(None));
        assert_eq!(
            Stance::parse_choice("neutral"),
            Err(SetupError::UnknownStance("neutral".to_string()))
        );
    }

    #[test]
    fn test_from_str_requires_choice() {
        assert_eq!("for".parse::<Stance>(), Ok(Stance::For));
        assert_eq!("select".parse::<Stance>(), Err(SetupError::MissingStance));
    }
}
