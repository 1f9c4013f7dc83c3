//! Analyzer response decoding.
//!
//! The analyzer is asked for bare JSON but frequently wraps it in a markdown
//! code fence. Fence markers are removed verbatim (every ` ```json ` and
//! ` ``` ` substring), then the remainder must decode into the feedback
//! schema. Anything else is a [`FeedbackError`]; nothing is guessed.

use super::entities::{Feedback, MAX_RATING};
use serde::Deserialize;
use thiserror::Error;

/// Reasons the analyzer output could not become [`Feedback`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedbackError {
    #[error("Analyzer returned no content")]
    Empty,

    #[error("Analyzer output is not valid feedback JSON: {error}\nRaw output: {raw}")]
    InvalidJson { error: String, raw: String },

    #[error("Rating {0} is outside 0-10")]
    RatingOutOfRange(f64),

    #[error("Rating '{0}' is not a number")]
    InvalidRating(String),
}

/// Wire shape of the analyzer's JSON
#[derive(Debug, Deserialize)]
struct RawFeedback {
    #[serde(default)]
    rating: Option<RawRating>,
    strength: String,
    suggestion: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRating {
    Number(f64),
    Text(String),
}

/// Remove markdown code-fence markers from analyzer output
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

impl Feedback {
    /// Decode the analyzer's raw text into feedback.
    pub fn parse_analysis(raw: &str) -> Result<Feedback, FeedbackError> {
        let body = strip_code_fences(raw);
        if body.is_empty() {
            return Err(FeedbackError::Empty);
        }

        let parsed: RawFeedback =
            serde_json::from_str(&body).map_err(|e| FeedbackError::InvalidJson {
                error: e.to_string(),
                raw: raw.to_string(),
            })?;

        let rating = match parsed.rating {
            None => None,
            Some(RawRating::Number(n)) => Some(n),
            Some(RawRating::Text(text)) => parse_rating_text(&text)?,
        };

        if let Some(r) = rating
            && !(0.0..=MAX_RATING).contains(&r)
        {
            return Err(FeedbackError::RatingOutOfRange(r));
        }

        Ok(Feedback {
            rating,
            strength: parsed.strength,
            suggestion: parsed.suggestion,
        })
    }
}

/// Ratings sometimes arrive quoted ("7") or as "N/A"
fn parse_rating_text(text: &str) -> Result<Option<f64>, FeedbackError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("n/a") {
        return Ok(None);
    }
    let number = trimmed.strip_suffix("/10").unwrap_or(trimmed).trim();
    number
        .parse::<f64>()
        .map(Some)
        .map_err(|_| FeedbackError::InvalidRating(text.to_string()))
}
