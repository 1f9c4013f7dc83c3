//! Feedback entity

use serde::{Deserialize, Serialize};

/// Highest rating the analyzer may give
pub const MAX_RATING: f64 = 10.0;

/// Structured feedback on one argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Persuasiveness in `0..=10`; `None` when the analyzer left it out
    pub rating: Option<f64>,
    pub strength: String,
    pub suggestion: String,
}

impl Feedback {
    pub fn new(
        rating: Option<f64>,
        strength: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            rating,
            strength: strength.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Rating as shown to the user: `7`, `7.5`, or `N/A`
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(r) if r.fract() == 0.0 => format!("{}", r as i64),
            Some(r) => format!("{:.1}", r),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_label() {
        assert_eq!(Feedback::new(Some(7.0), "s", "t").rating_label(), "7");
        assert_eq!(Feedback::new(Some(7.5), "s", "t").rating_label(), "7.5");
        assert_eq!(Feedback::new(Some(0.0), "s", "t").rating_label(), "0");
        assert_eq!(Feedback::new(None, "s", "t").rating_label(), "N/A");
    }
}
