use std::io;

use thiserror::Error;

/// Errors surfaced by the terminal backend.
///
/// The widgets themselves are total over their state; only driving a real
/// terminal can fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
