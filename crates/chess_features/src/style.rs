//! Pluggable playing-style scores
//!
//! Style labels and risk, tactical and endgame scores come from learned
//! models outside this crate. [`StyleScorer`] is the seam they plug into.
//! The default [`NotComputed`] scorer leaves every score empty, so analysis
//! output stays deterministic.

use serde::{Deserialize, Serialize};

use crate::bundle::FeatureBundle;
use crate::position::Position;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_taking_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactical_awareness_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endgame_skill_score: Option<f64>,
}

impl StyleScores {
    pub fn is_empty(&self) -> bool {
        self.style_cluster.is_none()
            && self.risk_taking_score.is_none()
            && self.tactical_awareness_score.is_none()
            && self.endgame_skill_score.is_none()
    }
}

pub trait StyleScorer: Send + Sync {
    fn score(&self, position: &Position, features: &FeatureBundle) -> StyleScores;
}

/// Scorer that computes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NotComputed;

impl StyleScorer for NotComputed {
    fn score(&self, _position: &Position, _features: &FeatureBundle) -> StyleScores {
        StyleScores::default()
    }
}
