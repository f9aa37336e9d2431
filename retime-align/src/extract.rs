//! Word extraction from the two transcript inputs.

use crate::lines;
use crate::speaker::{SpeakerPolicy, Vocabulary};
use crate::types::{Timing, TranscriptDocument};

/// Extract spoken words and their timings from a machine transcript.
///
/// Iterates the document's words in order, skipping entries whose trimmed
/// text is empty. The two output arrays stay positionally aligned: index `i`
/// of the word array corresponds to index `i` of the timing array.
pub fn extract_timed_words(doc: &TranscriptDocument) -> (Vec<String>, Vec<Timing>) {
    let mut words = Vec::with_capacity(doc.words.len());
    let mut timings = Vec::with_capacity(doc.words.len());

    for word in &doc.words {
        let text = word.text.trim();
        if text.is_empty() {
            continue;
        }
        words.push(text.to_string());
        timings.push(Timing {
            start: word.start,
            end: word.end,
        });
    }

    (words, timings)
}

/// Extract the flat spoken-word sequence from corrected text.
///
/// Speaker labels identified by the policy are excluded; all other tokens
/// are kept verbatim, in order, flattened across lines.
pub fn extract_corrected_words(
    text: &str,
    vocabulary: &Vocabulary,
    policy: &dyn SpeakerPolicy,
) -> Vec<String> {
    lines::scan(text, vocabulary, policy)
        .into_iter()
        .flat_map(|line| line.words)
        .map(str::to_string)
        .collect()
}
