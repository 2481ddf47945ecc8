use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed interval: start {start} > end {end}")]
    MalformedInterval { start: i64, end: i64 },

    #[error("unexpected line format: {0}")]
    UnexpectedLine(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
