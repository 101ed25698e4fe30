//! Subcommand implementations
//!
//! Every command writes to the given sink instead of stdout directly, so the
//! same code runs from `main` and from tests.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chess_features::api::game_state;
use chess_features::move_gen::legal_moves;
use chess_features::fen::decode;
use chess_features::{diff, extract, Analyzer, FeatureBundle, PositionEvaluator, StyleScorer};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::Command;

pub fn run<E, S, W>(command: &Command, analyzer: &Analyzer<E, S>, pretty: bool, out: &mut W) -> Result<()>
where
    E: PositionEvaluator,
    S: StyleScorer,
    W: Write,
{
    match command {
        Command::Features { fen, uci_move, prev } => {
            features(analyzer, fen, uci_move.as_deref(), prev.as_deref(), pretty, out)
        }
        Command::Diff { before, after } => compare(analyzer, before, after, pretty, out),
        Command::Moves { fen } => moves(fen, out),
        Command::Vector { fen, moves } => vector(analyzer, fen, moves, pretty, out),
        Command::Batch { file } => batch(file, out),
    }
}

/// Analysis of `fen` after `uci_move`, or its diff against `prev` when given
pub fn features<E, S, W>(
    analyzer: &Analyzer<E, S>,
    fen: &str,
    uci_move: Option<&str>,
    prev: Option<&str>,
    pretty: bool,
    out: &mut W,
) -> Result<()>
where
    E: PositionEvaluator,
    S: StyleScorer,
    W: Write,
{
    let analysis = analyzer
        .analyze(fen, uci_move)
        .with_context(|| format!("cannot analyse {fen:?}"))?;

    match prev {
        Some(prev) => {
            let before = decode(prev).with_context(|| format!("cannot decode --prev {prev:?}"))?;
            let changes = diff(&extract(&before), &analysis.features);
            write_json(out, &changes, pretty)
        }
        None => write_json(out, &analysis, pretty),
    }
}

pub fn compare<E, S, W>(analyzer: &Analyzer<E, S>, before: &str, after: &str, pretty: bool, out: &mut W) -> Result<()>
where
    E: PositionEvaluator,
    S: StyleScorer,
    W: Write,
{
    let changes = analyzer
        .compare(before, after)
        .context("cannot compare positions")?;
    write_json(out, &changes, pretty)
}

/// Legal moves in UCI notation, one per line, then the game state
pub fn moves<W: Write>(fen: &str, out: &mut W) -> Result<()> {
    let position = decode(fen).with_context(|| format!("cannot decode {fen:?}"))?;
    for mv in legal_moves(&position) {
        writeln!(out, "{mv}")?;
    }
    let state = game_state(&position);
    writeln!(out, "state: {state}")?;
    Ok(())
}

pub fn vector<E, S, W>(analyzer: &Analyzer<E, S>, fen: &str, moves: &[String], pretty: bool, out: &mut W) -> Result<()>
where
    E: PositionEvaluator,
    S: StyleScorer,
    W: Write,
{
    let moves: Vec<&str> = moves.iter().map(String::as_str).collect();
    let vector = analyzer
        .feature_vector(fen, &moves)
        .with_context(|| format!("cannot encode {fen:?}"))?;
    write_json(out, &vector, pretty)
}

/// One output line of `batch`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchRecord {
    Features {
        line: usize,
        fen: String,
        features: FeatureBundle,
    },
    Error {
        line: usize,
        error: String,
    },
}

/// Features for every non-blank line of `text`, in input order
///
/// Line numbers are 1-based. A line that fails to decode becomes an
/// [`BatchRecord::Error`] and does not stop the others.
pub fn batch_records(text: &str) -> Vec<BatchRecord> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    lines
        .par_iter()
        .map(|&(line, fen)| match decode(fen) {
            Ok(position) => BatchRecord::Features {
                line,
                fen: fen.to_string(),
                features: extract(&position),
            },
            Err(err) => {
                debug!(line, %err, "skipping malformed line");
                BatchRecord::Error {
                    line,
                    error: err.to_string(),
                }
            }
        })
        .collect()
}

pub fn batch<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let records = batch_records(&text);
    let failed = records
        .iter()
        .filter(|record| matches!(record, BatchRecord::Error { .. }))
        .count();
    info!(total = records.len(), failed, "batch extraction finished");

    for record in &records {
        write_json(out, record, false)?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
