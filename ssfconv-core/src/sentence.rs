//! Tagged tokens and SSF sentence blocks

use crate::error::{ConvertError, Result};
use crate::membership::MembershipSets;
use crate::tag::reclassify;
use std::fmt;

/// Opening marker prefix of an SSF sentence
const SENTENCE_OPEN: &str = "<Sentence id='";

/// Closing marker of an SSF sentence
const SENTENCE_CLOSE: &str = "</Sentence>";

/// A token paired with its tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Surface form
    pub token: String,
    /// Part-of-speech tag
    pub tag: String,
}

impl TaggedToken {
    /// Split a `token<sep>tag` unit on the first occurrence of `separator`
    ///
    /// Returns `None` when the unit does not contain the separator.
    pub fn parse(unit: &str, separator: &str) -> Option<Self> {
        let (token, tag) = unit.split_once(separator)?;
        Some(Self {
            token: token.to_string(),
            tag: tag.to_string(),
        })
    }
}

/// One row of an SSF sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsfToken {
    /// 1-based position within the sentence
    pub index: usize,
    /// Surface form
    pub token: String,
    /// Tag after reclassification
    pub tag: String,
}

/// A sentence ready for SSF serialization
///
/// The `Display` impl writes the full block, terminated by one newline:
///
/// ```text
/// <Sentence id='1'>
/// 1	Hello	NNP
/// </Sentence>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSentence {
    id: usize,
    tokens: Vec<SsfToken>,
}

impl FormattedSentence {
    /// 1-based sentence id
    pub fn id(&self) -> usize {
        self.id
    }

    /// Rows in encounter order
    pub fn tokens(&self) -> &[SsfToken] {
        &self.tokens
    }
}

impl fmt::Display for FormattedSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SENTENCE_OPEN}{}'>", self.id)?;
        for row in &self.tokens {
            writeln!(f, "{}\t{}\t{}", row.index, row.token, row.tag)?;
        }
        writeln!(f, "{SENTENCE_CLOSE}")
    }
}

/// Parse one tagged line into a formatted sentence with the given id
///
/// Units are whitespace-separated. A unit without the separator is an
/// error unless the whole unit is a listed symbol or punctuation token,
/// whose tag would be overridden regardless.
pub fn format_sentence(
    id: usize,
    raw_line: &str,
    separator: &str,
    sets: &MembershipSets,
) -> Result<FormattedSentence> {
    if separator.is_empty() {
        return Err(ConvertError::EmptySeparator);
    }

    let mut tokens = Vec::new();
    for (position, unit) in raw_line.split_whitespace().enumerate() {
        let tagged = match TaggedToken::parse(unit, separator) {
            Some(tagged) => tagged,
            None if sets.contains(unit) => TaggedToken {
                token: unit.to_string(),
                tag: String::new(),
            },
            None => {
                return Err(ConvertError::MalformedUnit {
                    unit: unit.to_string(),
                    separator: separator.to_string(),
                    sentence: id,
                })
            }
        };

        let tag = reclassify(&tagged.token, &tagged.tag, sets).to_string();
        tokens.push(SsfToken {
            index: position + 1,
            token: tagged.token,
            tag,
        });
    }

    Ok(FormattedSentence { id, tokens })
}
