//! Word list loading utilities
//!
//! Reads custom word lists from disk. Lines are returned raw; the bank
//! normalizes and filters them.

use std::fs;
use std::io;
use std::path::Path;

/// Read the non-empty, trimmed lines of a word list file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use palabra::wordbank::loader::read_word_lines;
///
/// let lines = read_word_lines("data/targets.txt").unwrap();
/// println!("Read {} entries", lines.len());
/// ```
pub fn read_word_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    Ok(lines)
}
