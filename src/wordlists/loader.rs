//! Dictionary loading utilities
//!
//! Builds the game's dictionary from a word file or from the embedded list.
//! Entries are lowercased and validated; anything that is not a plain ASCII
//! word is skipped; duplicates are removed. The resulting order is the
//! source order of first appearance.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a whitespace-delimited word file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened. A missing or
/// unreadable dictionary is fatal to game start, so callers surface this
/// before any round begins.
///
/// # Examples
/// ```no_run
/// use countdown_letters::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("words_alpha.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(dictionary_from_tokens(content.split_whitespace()))
}

/// Build a dictionary from string entries
///
/// # Examples
/// ```
/// use countdown_letters::wordlists::loader::dictionary_from_slice;
/// use countdown_letters::wordlists::BUILTIN;
///
/// let dictionary = dictionary_from_slice(BUILTIN);
/// assert_eq!(dictionary.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(entries: &[&str]) -> Vec<Word> {
    dictionary_from_tokens(entries.iter().copied())
}

fn dictionary_from_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    tokens
        .filter_map(|token| Word::new(token.trim()).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}
