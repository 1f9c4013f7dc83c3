//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Models the arena can talk to (Value Object)
///
/// The same provider hosts both personas; each persona may use a different
/// model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini15Flash,
    Gemini15Pro,
    Gemini20Flash,
    Gemini25Flash,
    Gemini25Pro,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Custom(s) => s,
        }
    }

    /// Models with a known identifier
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::Gemini15Flash,
            Model::Gemini15Pro,
            Model::Gemini20Flash,
            Model::Gemini25Flash,
            Model::Gemini25Pro,
        ]
    }
}

impl Default for Model {
    /// Returns the default model (gemini-1.5-flash)
    fn default() -> Self {
        Model::Gemini15Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_else(|never| match never {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::known_models() {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-exp-1206".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-exp-1206".to_string()));
        assert_eq!(model.to_string(), "gemini-exp-1206");
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gemini15Flash);
    }

    #[test]
    fn test_model_serde_as_string() {
        let json = serde_json::to_string(&Model::Gemini20Flash).unwrap();
        assert_eq!(json, "\"gemini-2.0-flash\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::Gemini20Flash);
    }
}
