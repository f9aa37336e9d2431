//! Timing transfer from alignment operations to the output document.

use crate::align::AlignmentOp;
use crate::paragraph::ParagraphSpan;
use crate::types::{Paragraph, TimedWord, Timing, TranscriptDocument};

/// Placeholder for inserted words when the alignment carries no timing
/// context at all (all-insert alignments).
const PLACEHOLDER_TIMING: Timing = Timing {
    start: 0.0,
    end: 0.1,
};

/// Walk the alignment and assign a timing to every corrected word.
///
/// Match and substitute ops emit the target word with the source word's
/// timing. Inserts borrow the timing of the next match/substitute, falling
/// back to the previous one, then to the placeholder. Deletes emit nothing.
/// Paragraphs come from the given spans; with no spans, a single paragraph
/// covers all emitted words (none if there are no words).
pub fn reconstruct(
    alignment: &[AlignmentOp],
    target_words: &[String],
    timings: &[Timing],
    spans: &[ParagraphSpan],
) -> TranscriptDocument {
    // Timing of the nearest match/substitute at or after each op, so inserts
    // can borrow forward in one pass.
    let mut next_timing = vec![None; alignment.len()];
    let mut upcoming = None;
    for (idx, op) in alignment.iter().enumerate().rev() {
        if let AlignmentOp::Match { source, .. } | AlignmentOp::Substitute { source, .. } = op {
            upcoming = Some(timings[*source]);
        }
        next_timing[idx] = upcoming;
    }

    // Emitted words keep their target index for paragraph lookup.
    let mut emitted: Vec<(usize, Timing)> = Vec::with_capacity(target_words.len());
    let mut last_timing = None;

    for (idx, op) in alignment.iter().enumerate() {
        match *op {
            AlignmentOp::Match { source, target } | AlignmentOp::Substitute { source, target } => {
                let timing = timings[source];
                emitted.push((target, timing));
                last_timing = Some(timing);
            }
            AlignmentOp::Insert { target } => {
                let timing = next_timing[idx].or(last_timing).unwrap_or(PLACEHOLDER_TIMING);
                emitted.push((target, timing));
            }
            AlignmentOp::Delete { .. } => {}
        }
    }

    let words = emitted
        .iter()
        .map(|&(target, timing)| TimedWord {
            start: timing.start,
            end: timing.end,
            text: target_words[target].clone(),
        })
        .collect();

    let mut paragraphs = Vec::with_capacity(spans.len().max(1));

    if spans.is_empty() {
        if let (Some(&(_, first)), Some(&(_, last))) = (emitted.first(), emitted.last()) {
            paragraphs.push(Paragraph {
                speaker: None,
                start: first.start,
                end: last.end,
            });
        }
    } else {
        for span in spans {
            let mut in_span = emitted
                .iter()
                .filter(|&&(target, _)| span.start_word <= target && target <= span.end_word);

            if let Some(&(_, first)) = in_span.next() {
                let last = in_span.last().map_or(first, |&(_, timing)| timing);
                paragraphs.push(Paragraph {
                    speaker: span.speaker.clone(),
                    start: first.start,
                    end: last.end,
                });
            }
        }
    }

    TranscriptDocument { words, paragraphs }
}
