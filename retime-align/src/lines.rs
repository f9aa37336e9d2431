//! Shared line scanner for corrected-text parsing.
//!
//! Target-word extraction and paragraph detection both index into the flat
//! corrected-word array; running both over this one scanner keeps their
//! indices in lockstep.

use crate::speaker::{SpeakerPolicy, Vocabulary};

/// One non-blank line of corrected text with its speaker label split off.
#[derive(Debug)]
pub(crate) struct Line<'a> {
    pub speaker: Option<String>,
    pub words: Vec<&'a str>,
}

/// Scan corrected text into lines of spoken words.
///
/// Splits on single newlines. The first whitespace-delimited token of each
/// line goes through the speaker policy; a classified label is removed from
/// the word list, and a label that strips down to an empty name is still
/// consumed. Lines left with no words are dropped.
pub(crate) fn scan<'a>(
    text: &'a str,
    vocabulary: &Vocabulary,
    policy: &dyn SpeakerPolicy,
) -> Vec<Line<'a>> {
    text.lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let first = tokens.next()?;

            match policy.classify_first_token(first, vocabulary) {
                Some(name) => {
                    let words: Vec<&str> = tokens.collect();
                    if words.is_empty() {
                        return None;
                    }
                    let speaker = (!name.is_empty()).then_some(name);
                    Some(Line { speaker, words })
                }
                None => {
                    let mut words = vec![first];
                    words.extend(tokens);
                    Some(Line { speaker: None, words })
                }
            }
        })
        .collect()
}
