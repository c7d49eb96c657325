//! Reading the corridor length from text input.

use std::io::BufRead;
use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("corridor length must be non-negative, got {0}")]
    Negative(i64),
    #[error("invalid corridor length {token:?}: {source}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("no corridor length provided")]
    MissingInput,
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a corridor length, rejecting negative values.
///
/// # Example
/// ```
/// use corridor_tiling::input::{parse_corridor_length, InputError};
/// assert_eq!(parse_corridor_length(" 42 ").unwrap(), 42);
/// assert!(matches!(parse_corridor_length("-1"), Err(InputError::Negative(-1))));
/// ```
pub fn parse_corridor_length(token: &str) -> Result<u64, InputError> {
    let token = token.trim();
    let value: i64 = token.parse().map_err(|source| InputError::Parse {
        token: token.to_string(),
        source,
    })?;
    u64::try_from(value).map_err(|_| InputError::Negative(value))
}

/// Reads the first whitespace-separated token and parses it as a corridor
/// length. Blank lines before the token are skipped.
pub fn read_corridor_length<R: BufRead>(reader: R) -> Result<u64, InputError> {
    for line in reader.lines() {
        let line = line?;
        if let Some(token) = line.split_whitespace().next() {
            return parse_corridor_length(token);
        }
    }
    Err(InputError::MissingInput)
}
