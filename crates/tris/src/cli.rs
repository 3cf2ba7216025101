//! Command-line interface for tris.

use clap::Parser;

/// Tris - two-player tic-tac-toe in the terminal
///
/// Players take turns typing a row and a column (both starting at 0).
/// Type q, quit, esci or exit to leave. Set RUST_LOG for diagnostics on
/// stderr.
#[derive(Parser, Debug)]
#[command(name = "tris")]
#[command(about = "Two-player tic-tac-toe in the terminal")]
#[command(version)]
pub struct Cli {}
