use std::io;

use thiserror::Error;

/// Rejected game configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: u16, cols: u16 },

    #[error("grid {rows}x{cols} cannot fit the spawn snake with a free cell to spare")]
    GridTooSmall { rows: u16, cols: u16 },

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Top-level failure surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
