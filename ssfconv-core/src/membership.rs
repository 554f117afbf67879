//! Symbol and punctuation membership lists

use crate::error::Result;
use crate::input::read_lines;
use std::collections::HashSet;
use std::path::Path;

/// Default file name of the symbol list
pub const DEFAULT_SYMBOLS_FILE: &str = "RD_SYM.txt";

/// Default file name of the punctuation list
pub const DEFAULT_PUNCTUATIONS_FILE: &str = "RD_PUNC.txt";

/// Literal tokens whose tags are overridden during reclassification
///
/// Loaded once per run and shared by reference with every conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipSets {
    symbols: HashSet<String>,
    punctuations: HashSet<String>,
}

impl MembershipSets {
    /// Create sets from in-memory token lists
    pub fn new<S, P>(symbols: S, punctuations: P) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            punctuations: punctuations.into_iter().map(Into::into).collect(),
        }
    }

    /// Load both lists, one token per non-blank line
    pub fn from_files(symbols: &Path, punctuations: &Path) -> Result<Self> {
        let symbols = read_lines(symbols)?;
        let punctuations = read_lines(punctuations)?;
        let sets = Self::new(symbols, punctuations);
        log::debug!(
            "Loaded {} symbols and {} punctuations",
            sets.symbols.len(),
            sets.punctuations.len()
        );
        Ok(sets)
    }

    /// Whether `token` is listed as a symbol
    pub fn is_symbol(&self, token: &str) -> bool {
        self.symbols.contains(token)
    }

    /// Whether `token` is listed as punctuation
    pub fn is_punctuation(&self, token: &str) -> bool {
        self.punctuations.contains(token)
    }

    /// Whether `token` is in either list
    pub fn contains(&self, token: &str) -> bool {
        self.is_symbol(token) || self.is_punctuation(token)
    }

    /// Number of listed symbols
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of listed punctuation tokens
    pub fn punctuation_count(&self) -> usize {
        self.punctuations.len()
    }
}
