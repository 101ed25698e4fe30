use std::path::PathBuf;
use std::time::Duration;

use chess_features::AnalysisConfig;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "chess-insight",
    version,
    about = "Positional feature extraction and comparison for chess positions"
)]
pub struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log filter directive, e.g. `debug` or `chess_features=trace`
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Evaluator time budget per position, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub engine_time_ms: Option<u64>,

    /// Number of trailing moves encoded in a feature vector
    #[arg(long, global = true, value_name = "N")]
    pub history_len: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Overwrite `config` with whatever analysis settings were given as flags
    pub fn apply_overrides(&self, config: &mut AnalysisConfig) {
        if let Some(millis) = self.engine_time_ms {
            config.engine_time_budget = Duration::from_millis(millis);
        }
        if let Some(len) = self.history_len {
            config.move_history_len = len;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Analyse a position, optionally after playing a move on it
    Features {
        fen: String,
        /// Move to play first, in UCI notation
        #[arg(long = "move", value_name = "UCI")]
        uci_move: Option<String>,
        /// Print the change from this earlier position instead of the full analysis
        #[arg(long, value_name = "FEN")]
        prev: Option<String>,
    },
    /// Print the features that differ between two positions
    Diff { before: String, after: String },
    /// List legal moves and the game state
    Moves { fen: String },
    /// Print the fixed-length feature vector of a position
    Vector {
        fen: String,
        /// Moves played from FEN, in order
        #[arg(long, num_args = 1.., value_name = "UCI")]
        moves: Vec<String>,
    },
    /// Extract features for every FEN in a file, one per line
    Batch { file: PathBuf },
}
