//! retime-align: transcript re-alignment library.
//!
//! Aligns a machine-generated transcript (word-level timestamps, imperfect
//! wording) with a human-corrected plain text (correct wording, no
//! timestamps) and produces a corrected transcript with timing transferred
//! word by word.
//!
//! # Architecture
//!
//! The pipeline runs four stages over its inputs:
//!
//! - [`extract`]: machine JSON → word/timing arrays; corrected text → flat
//!   word sequence with speaker labels removed
//! - [`align`]: minimum-edit-distance alignment between the two sequences
//! - [`paragraph`]: paragraph boundaries and speaker labels recovered from
//!   the corrected text
//! - [`reconstruct`]: timing transfer and final document assembly
//!
//! Speaker/word disambiguation is pluggable via [`SpeakerPolicy`].
//!
//! # Quick Start
//!
//! ```
//! use retime_align::{TranscriptDocument, align_transcripts};
//!
//! # fn main() -> retime_align::Result<()> {
//! let machine = TranscriptDocument::from_json_str(
//!     r#"{"words": [{"start": 0.0, "end": 0.5, "text": "hello"},
//!                   {"start": 0.5, "end": 1.0, "text": "word"}]}"#,
//! )?;
//!
//! let aligned = align_transcripts(&machine, "hello world");
//!
//! assert_eq!(aligned.words[1].text, "world");
//! assert_eq!(aligned.words[1].start, 0.5);
//! # Ok(())
//! # }
//! ```

pub mod align;
pub mod error;
pub mod extract;
mod lines;
pub mod normalize;
pub mod paragraph;
pub mod pipeline;
pub mod reconstruct;
pub mod speaker;
pub mod types;

pub use align::AlignmentOp;
pub use error::{Error, MalformedInputError, Result};
pub use paragraph::ParagraphSpan;
pub use pipeline::{Realigner, align_transcripts};
pub use speaker::{BracketSpeakerPolicy, SpeakerPolicy, Vocabulary, VocabularySpeakerPolicy};
pub use types::{Paragraph, TimedWord, Timing, TranscriptDocument};
