//! Application-level configuration.
//!
//! Which model backs each persona. Provider settings (endpoint, timeout)
//! belong to the infrastructure adapter.

use arena_domain::Model;
use serde::{Deserialize, Serialize};

/// Models used by the two personas of a turn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaModels {
    /// Model that plays the Contender
    pub debater: Model,
    /// Model that scores the user's argument
    pub analyzer: Model,
}

impl PersonaModels {
    pub fn new(debater: Model, analyzer: Model) -> Self {
        Self { debater, analyzer }
    }

    /// Use one model for both personas
    pub fn single(model: Model) -> Self {
        Self {
            debater: model.clone(),
            analyzer: model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_flash_for_both() {
        let models = PersonaModels::default();
        assert_eq!(models.debater, Model::Gemini15Flash);
        assert_eq!(models.analyzer, Model::Gemini15Flash);
    }

    #[test]
    fn test_single() {
        let models = PersonaModels::single(Model::Gemini25Pro);
        assert_eq!(models.debater, models.analyzer);
    }
}
