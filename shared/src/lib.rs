use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod endpoint;
pub mod error;
pub mod normalize;

pub use error::PredictError;
pub use normalize::normalize;

/// Normalized view of one prediction response, ready for rendering.
///
/// Every field except `raw` is optional: a response that is valid JSON but
/// carries none of the recognized fields normalizes to a record with all
/// options `None`, never to an error.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub label: Option<String>,
    pub is_food: Option<bool>,
    /// Dish name, surfaced only when `is_food` is `Some(true)`.
    pub food_guess: Option<String>,
    /// Confidence as a whole percentage in 0..=100.
    pub confidence_percent: Option<u8>,
    /// The untouched response body, for the diagnostic raw panel.
    pub raw: Value,
}

/// How a response body is mapped onto a [`Prediction`].
///
/// The two deployed backend contracts are mutually exclusive; the frontend
/// exposes the choice as a radio pair and defaults to the server verdict.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum NormalizePolicy {
    /// Trust the backend's `is_food` boolean and `guess` field.
    #[strum(serialize = "server verdict")]
    ServerAuthoritative,
    /// Probe fallback field names and infer food/non-food from the label.
    #[strum(serialize = "label heuristic")]
    ClientInferred,
}

impl Default for NormalizePolicy {
    fn default() -> Self {
        NormalizePolicy::ServerAuthoritative
    }
}
