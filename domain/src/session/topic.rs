//! Topic value object

use crate::core::error::SetupError;
use serde::{Deserialize, Serialize};

/// The motion being debated (Value Object)
///
/// Always stored trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Try to create a topic from raw user input
    pub fn try_new(content: impl AsRef<str>) -> Result<Self, SetupError> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SetupError::EmptyTopic);
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the topic text
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_is_trimmed() {
        let topic = Topic::try_new("  Should AI replace human jobs?  ").unwrap();
        assert_eq!(topic.as_str(), "Should AI replace human jobs?");
    }

    #[test]
    fn test_empty_topic_rejected() {
        assert_eq!(Topic::try_new(""), Err(SetupError::EmptyTopic));
        assert_eq!(Topic::try_new(" \t\n "), Err(SetupError::EmptyTopic));
    }
}
