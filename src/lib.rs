//! # chess-insight
//!
//! Command-line front end for [`chess_features`]: argument parsing,
//! environment configuration, log setup and the subcommands themselves.
//! Everything here is thin glue; the analysis lives in the library crate.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
