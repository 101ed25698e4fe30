//! Analysis settings
//!
//! ```json
//! { "engine_time_ms": 100, "move_history_len": 10, "mate_score": 10000 }
//! ```
//!
//! Missing keys fall back to [`AnalysisConfig::default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENGINE_TIME: Duration = Duration::from_millis(100);
pub const DEFAULT_MOVE_HISTORY_LEN: usize = 10;
pub const DEFAULT_MATE_SCORE: i32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Time the external evaluator may spend per position
    #[serde(rename = "engine_time_ms", with = "duration_ms")]
    pub engine_time_budget: Duration,
    /// Number of trailing moves encoded in a feature vector
    pub move_history_len: usize,
    /// Centipawn value standing in for a forced mate
    pub mate_score: i32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            engine_time_budget: DEFAULT_ENGINE_TIME,
            move_history_len: DEFAULT_MOVE_HISTORY_LEN,
            mate_score: DEFAULT_MATE_SCORE,
        }
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
