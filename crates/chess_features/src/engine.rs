//! External position evaluator interface
//!
//! The analysis pipeline can ask an outside engine (typically a UCI engine
//! process) for a numeric evaluation of a position within a time budget. The
//! engine itself lives outside this crate; callers plug one in by
//! implementing [`PositionEvaluator`]. Without one, [`NoEngine`] reports
//! [`EngineError::Unavailable`] and the evaluation is simply omitted.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Evaluation from white's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    /// Advantage in centipawns
    Centipawns(i32),
    /// Forced mate in this many moves, negative when black mates
    Mate(i32),
}

impl Score {
    /// Collapse to centipawns, mapping a mate to `±mate_score`
    pub fn as_centipawns(self, mate_score: i32) -> i32 {
        match self {
            Score::Centipawns(cp) => cp,
            Score::Mate(n) if n >= 0 => mate_score,
            Score::Mate(_) => -mate_score,
        }
    }

    /// Score in pawns
    pub fn as_pawns(self, mate_score: i32) -> f64 {
        f64::from(self.as_centipawns(mate_score)) / 100.0
    }
}

pub trait PositionEvaluator: Send + Sync {
    /// Evaluate the position given as a board-state string, spending at most
    /// `time_budget`
    fn evaluate(&self, fen: &str, time_budget: Duration) -> Result<Score, EngineError>;
}

/// Evaluator used when no engine is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEngine;

impl PositionEvaluator for NoEngine {
    fn evaluate(&self, _fen: &str, _time_budget: Duration) -> Result<Score, EngineError> {
        Err(EngineError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_mate_scores_collapse_to_bound() {
        assert_eq!(Score::Centipawns(-35).as_centipawns(10_000), -35);
        assert_eq!(Score::Mate(3).as_centipawns(10_000), 10_000);
        assert_eq!(Score::Mate(-2).as_centipawns(10_000), -10_000);
        assert_eq!(Score::Centipawns(150).as_pawns(10_000), 1.5);
    }

    #[test]
    fn test_no_engine_is_unavailable() {
        assert_matches!(
            NoEngine.evaluate(crate::constants::START_FEN, Duration::from_millis(100)),
            Err(EngineError::Unavailable)
        );
    }
}
