use serde::{Deserialize, Serialize};

use crate::domain::Verdict;

/// Response body of `POST /predict`.
///
/// `feedback` may be absent on the wire. The rubric scores are optional
/// extras some service builds include; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub verdict: Verdict,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback: Vec<String>,
    #[serde(flatten)]
    pub scores: RubricScores,
}

/// Per-criterion scores on the service's 0-5 scale, when reported.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RubricScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub novelty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<f64>,
}

impl RubricScores {
    pub fn is_empty(&self) -> bool {
        self.novelty.is_none()
            && self.quality.is_none()
            && self.relevance.is_none()
            && self.sentiment.is_none()
            && self.composite.is_none()
    }
}
