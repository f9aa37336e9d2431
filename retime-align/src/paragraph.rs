//! Paragraph and speaker recovery from corrected text.

use crate::lines;
use crate::speaker::{SpeakerPolicy, Vocabulary};

/// Word-index range of one output paragraph.
///
/// Indices refer to the flat corrected-word array produced by
/// [`crate::extract::extract_corrected_words`]; both ends are inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParagraphSpan {
    pub start_word: usize,
    pub end_word: usize,
    pub word_count: usize,
    pub speaker: Option<String>,
}

/// Re-scan corrected text for paragraph boundaries and speaker labels.
///
/// One paragraph per non-blank line with at least one spoken word. Shares
/// its line scanner with the corrected-word extractor, so span indices
/// always agree with the extracted word array.
pub fn detect_paragraphs(
    text: &str,
    vocabulary: &Vocabulary,
    policy: &dyn SpeakerPolicy,
) -> Vec<ParagraphSpan> {
    let mut spans = Vec::new();
    let mut word_index = 0;

    for line in lines::scan(text, vocabulary, policy) {
        let count = line.words.len();
        spans.push(ParagraphSpan {
            start_word: word_index,
            end_word: word_index + count - 1,
            word_count: count,
            speaker: line.speaker,
        });
        word_index += count;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speaker::VocabularySpeakerPolicy;

    fn detect(text: &str, source: &[&str]) -> Vec<ParagraphSpan> {
        detect_paragraphs(
            text,
            &Vocabulary::from_words(source),
            &VocabularySpeakerPolicy,
        )
    }

    #[test]
    fn one_span_per_line_with_running_indices() {
        let spans = detect(
            "hello there\nhow are you",
            &["hello", "there", "how", "are", "you"],
        );

        match &spans[..] {
            [first, second] => {
                assert_eq!((first.start_word, first.end_word), (0, 1));
                assert_eq!((second.start_word, second.end_word), (2, 4));
                assert_eq!(second.word_count, 3);
            }
            _ => panic!("expected 2 spans, got {}", spans.len()),
        }
    }

    #[test]
    fn speaker_label_is_excluded_from_the_range() {
        let spans = detect("Alice: hello there", &["hello", "there"]);

        match &spans[..] {
            [span] => {
                assert_eq!(span.speaker.as_deref(), Some("Alice"));
                assert_eq!((span.start_word, span.end_word), (0, 1));
                assert_eq!(span.word_count, 2);
            }
            _ => panic!("expected 1 span, got {}", spans.len()),
        }
    }

    #[test]
    fn speaker_colon_is_stripped() {
        let spans = detect("Bob: hello", &["hello"]);

        assert_eq!(spans[0].speaker.as_deref(), Some("Bob"));
    }

    #[test]
    fn lone_speaker_lines_produce_no_span() {
        let spans = detect("Alice:\nhello there", &["hello", "there"]);

        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start_word, spans[0].end_word), (0, 1));
    }

    #[test]
    fn empty_text_detects_nothing() {
        assert!(detect("", &["hello"]).is_empty());
    }
}
