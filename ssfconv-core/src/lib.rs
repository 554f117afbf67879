//! Conversion of POS-tagged sentences into Shakti Standard Format (SSF)
//!
//! Input is one sentence per line, written as whitespace-separated
//! `token<sep>tag` units. Each sentence becomes an SSF block:
//!
//! ```text
//! <Sentence id='1'>
//! 1	Hello	NNP
//! 2	world	RD_UNK
//! 3	.	RD_PUNC
//! </Sentence>
//! ```
//!
//! Tags are reclassified against two membership lists: tokens in the
//! symbol list become `RD_SYM`, tokens in the punctuation list become
//! `RD_PUNC`, and the `unk` marker becomes `RD_UNK`.
//!
//! # Example
//!
//! ```rust
//! use ssfconv_core::{Converter, MembershipSets};
//!
//! let sets = MembershipSets::new(["$"], ["."]);
//! let converter = Converter::new(&sets, "_").unwrap();
//!
//! let blocks = converter.convert_sentences(&["Hello_NNP world_unk ._."]).unwrap();
//! assert_eq!(
//!     blocks[0],
//!     "<Sentence id='1'>\n1\tHello\tNNP\n2\tworld\tRD_UNK\n3\t.\tRD_PUNC\n</Sentence>\n"
//! );
//! ```

#![warn(missing_docs)]

pub mod converter;
pub mod corpus;
pub mod error;
pub mod input;
pub mod membership;
pub mod sentence;
pub mod tag;

// Re-export key types
pub use converter::{convert_sentences, join_blocks, Converter, DEFAULT_SEPARATOR};
pub use corpus::{
    collect_input_files, convert_directory, convert_files, convert_single, Collision, DirectoryReport,
    FailurePolicy,
};
pub use error::{ConvertError, Result};
pub use membership::{MembershipSets, DEFAULT_PUNCTUATIONS_FILE, DEFAULT_SYMBOLS_FILE};
pub use sentence::{format_sentence, FormattedSentence, SsfToken, TaggedToken};
pub use tag::{reclassify, PUNCTUATION_TAG, SYMBOL_TAG, UNKNOWN_MARKER, UNKNOWN_TAG};
