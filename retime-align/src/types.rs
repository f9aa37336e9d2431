//! Core transcript data model.

use serde::{Deserialize, Serialize};

use crate::error::{MalformedInputError, Result};

/// Single transcribed word with timestamps.
///
/// Times are seconds, floating point, as produced by the upstream
/// transcription source. Immutable once produced; the aligner only ever
/// builds new words.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedWord {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Word text, original case and punctuation
    pub text: String,
}

impl TimedWord {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Contiguous span of words attributed to at most one speaker.
///
/// `start`/`end` equal the start of the first and the end of the last word
/// in the span.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    pub start: f64,
    pub end: f64,
}

/// Word-timed transcript with optional paragraph structure.
///
/// This is both the machine-transcript input shape and the aligned output
/// shape. Missing fields deserialize as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptDocument {
    #[serde(default)]
    pub words: Vec<TimedWord>,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

/// Start/end pair in seconds, detached from word text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub start: f64,
    pub end: f64,
}

impl TranscriptDocument {
    /// Parse and validate a machine transcript from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Validate structural invariants of the word list.
    ///
    /// Every word must carry finite timestamps with `start <= end`. Past
    /// this check the alignment pipeline never fails.
    pub fn validate(&self) -> Result<()> {
        for (index, word) in self.words.iter().enumerate() {
            if !word.start.is_finite() || !word.end.is_finite() {
                return Err(MalformedInputError::NonFiniteTiming {
                    index,
                    text: word.text.clone(),
                }
                .into());
            }
            if word.start > word.end {
                return Err(MalformedInputError::ReversedTiming {
                    index,
                    text: word.text.clone(),
                    start: word.start,
                    end: word.end,
                }
                .into());
            }
        }
        Ok(())
    }
}
