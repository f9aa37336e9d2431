//! High-level re-alignment pipeline.

use crate::align;
use crate::extract::{extract_corrected_words, extract_timed_words};
use crate::paragraph::detect_paragraphs;
use crate::reconstruct::reconstruct;
use crate::speaker::{SpeakerPolicy, Vocabulary, VocabularySpeakerPolicy};
use crate::types::TranscriptDocument;

/// Transcript re-alignment pipeline.
///
/// Holds the speaker policy; everything else is computed per call, so a
/// single instance can serve any number of independent alignments.
pub struct Realigner {
    policy: Box<dyn SpeakerPolicy>,
}

impl Default for Realigner {
    fn default() -> Self {
        Self::new()
    }
}

impl Realigner {
    /// Pipeline with the default vocabulary-membership speaker policy.
    pub fn new() -> Self {
        Self::with_policy(Box::new(VocabularySpeakerPolicy))
    }

    /// Pipeline with a custom speaker policy.
    pub fn with_policy(policy: Box<dyn SpeakerPolicy>) -> Self {
        Self { policy }
    }

    /// Re-time corrected text against a machine transcript.
    ///
    /// Never fails: degenerate inputs produce degenerate alignments (empty
    /// machine transcript → all inserts, empty corrected text → all
    /// deletes) rather than errors.
    pub fn realign(&self, machine: &TranscriptDocument, corrected: &str) -> TranscriptDocument {
        let (source_words, timings) = extract_timed_words(machine);
        let vocabulary = Vocabulary::from_words(&source_words);

        let target_words = extract_corrected_words(corrected, &vocabulary, self.policy.as_ref());
        let spans = detect_paragraphs(corrected, &vocabulary, self.policy.as_ref());

        tracing::debug!(
            source_words = source_words.len(),
            target_words = target_words.len(),
            paragraphs = spans.len(),
            "aligning transcripts"
        );

        let alignment = align::align(&source_words, &target_words);

        reconstruct(&alignment, &target_words, &timings, &spans)
    }
}

/// Re-time corrected text against a machine transcript with the default
/// speaker policy.
pub fn align_transcripts(machine: &TranscriptDocument, corrected: &str) -> TranscriptDocument {
    Realigner::new().realign(machine, corrected)
}
