//! Sentence collection conversion

use crate::error::{ConvertError, Result};
use crate::input::nonblank_lines;
use crate::membership::MembershipSets;
use crate::sentence::format_sentence;

/// Default separator between a token and its tag
pub const DEFAULT_SEPARATOR: &str = "_";

/// Converts collections of tagged lines into SSF blocks
///
/// Holds the membership sets by reference so one loaded pair of lists
/// serves every file of a run.
#[derive(Debug, Clone)]
pub struct Converter<'a> {
    sets: &'a MembershipSets,
    separator: String,
}

impl<'a> Converter<'a> {
    /// Create a converter, rejecting an empty separator
    pub fn new(sets: &'a MembershipSets, separator: impl Into<String>) -> Result<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(ConvertError::EmptySeparator);
        }
        Ok(Self { sets, separator })
    }

    /// Token/tag separator in use
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Membership sets in use
    pub fn sets(&self) -> &MembershipSets {
        self.sets
    }

    /// Convert lines into SSF blocks, numbering sentences from 1
    ///
    /// Blank lines are skipped and never consume an id.
    pub fn convert_sentences<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<String>> {
        convert_sentences(lines, self.sets, &self.separator)
    }

    /// Convert text into the complete contents of an SSF file
    pub fn convert_text(&self, text: &str) -> Result<String> {
        Ok(join_blocks(&self.convert_sentences(&nonblank_lines(text))?))
    }
}

/// Convert lines into SSF blocks, numbering sentences from 1
pub fn convert_sentences<S: AsRef<str>>(
    lines: &[S],
    sets: &MembershipSets,
    separator: &str,
) -> Result<Vec<String>> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| format_sentence(i + 1, line, separator, sets).map(|s| s.to_string()))
        .collect()
}

/// Join SSF blocks into file contents
///
/// Blocks already end in a newline, so joining with one more leaves a
/// blank line between sentences and none after the last.
pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join("\n")
}
