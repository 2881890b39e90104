//! Loading integer key datasets from text.
//!
//! The format is one integer per line. Surrounding whitespace is trimmed and
//! blank lines are skipped; any other line that is not a valid `i32` aborts
//! the whole load.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{Error, Result};
use crate::index::btree::Key;

/// Parse keys from `input`, one per line.
///
/// # Errors
/// Returns `Error::InvalidKey` (with a 1-based line number) for the first
/// non-blank line that does not parse.
///
/// # Example
/// ```
/// use bplus_index::loader::parse_keys;
///
/// let keys = parse_keys("2\n\n  3 \n-5\n").unwrap();
/// assert_eq!(keys, vec![2, 3, -5]);
///
/// assert!(parse_keys("1\nten\n").is_err());
/// ```
pub fn parse_keys(input: &str) -> Result<Vec<Key>> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, content)| {
            content.parse::<Key>().map_err(|_| Error::InvalidKey {
                line,
                content: content.to_string(),
            })
        })
        .collect()
}

/// Read and parse a key file.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::InvalidKey` if a line is not an integer
pub fn load_keys<P: AsRef<Path>>(path: P) -> Result<Vec<Key>> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)?;
    let keys = parse_keys(&input)?;

    debug!(path = %path.display(), count = keys.len(), "loaded keys");
    Ok(keys)
}
