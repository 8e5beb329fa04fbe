//! Dictionary module - the immutable set of playable words.
//!
//! Loaded once at startup from a flat whitespace-separated word list and
//! never mutated afterwards. Only words that can physically fit in a row
//! (3..=6 letters) are kept.

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::types::{GRID_WIDTH, MIN_WORD_LEN};

/// Word list shipped with the game.
const BUILTIN_WORDS: &str = include_str!("../../assets/words.txt");

/// Immutable set of valid words, queried during row scans.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Parse a flat word list: one word per whitespace-separated token,
    /// case-normalized, length-filtered to what fits in a row.
    ///
    /// An empty resulting set is a configuration error: the game would be
    /// unwinnable, so initialization aborts.
    pub fn from_text(text: &str) -> Result<Self> {
        let max_len = GRID_WIDTH as usize;
        let words: HashSet<String> = text
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .filter(|w| (MIN_WORD_LEN..=max_len).contains(&w.len()))
            .filter(|w| w.chars().all(|c| c.is_ascii_lowercase()))
            .collect();

        if words.is_empty() {
            bail!("word list contains no playable words ({}..={} letters)", MIN_WORD_LEN, max_len);
        }

        Ok(Self { words })
    }

    /// The dictionary shipped in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_text(BUILTIN_WORDS)
    }

    /// Exact membership test. The candidate is lowercased before lookup so
    /// the scan never misses on case.
    pub fn contains(&self, candidate: &str) -> bool {
        if candidate.chars().all(|c| c.is_ascii_lowercase()) {
            self.words.contains(candidate)
        } else {
            self.words.contains(&candidate.to_lowercase())
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
