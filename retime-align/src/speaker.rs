//! Speaker label classification policies.

use std::collections::HashSet;

use crate::normalize::normalize;

/// Normalized word set built from the machine transcript.
///
/// Membership drives the default speaker heuristic: a line-leading token
/// that was never spoken is assumed to name a speaker.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// Build from machine-transcript words, normalizing each entry.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| normalize(w.as_ref())).collect(),
        }
    }

    /// Whether the normalized form of `token` was spoken in the machine
    /// transcript.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&normalize(token))
    }
}

/// Decides whether a line's first token names a speaker.
///
/// Speaker/word disambiguation is undecidable in general; implementations
/// are heuristics, and swapping one changes which tokens become labels
/// without touching the aligner.
pub trait SpeakerPolicy {
    /// Classify the first token of a line.
    ///
    /// Returns the speaker name (label syntax removed) when the token is a
    /// label, `None` when it is a spoken word.
    fn classify_first_token(&self, token: &str, vocabulary: &Vocabulary) -> Option<String>;
}

/// Default policy: a first token absent from the machine-transcript
/// vocabulary is a speaker label, with any trailing colon stripped.
///
/// Breaks when a speaker's name is also a spoken word, or when a
/// mistranscription left the line's first word out of the vocabulary.
#[derive(Clone, Copy, Debug, Default)]
pub struct VocabularySpeakerPolicy;

impl SpeakerPolicy for VocabularySpeakerPolicy {
    fn classify_first_token(&self, token: &str, vocabulary: &Vocabulary) -> Option<String> {
        if vocabulary.contains(token) {
            return None;
        }
        Some(token.strip_suffix(':').unwrap_or(token).to_string())
    }
}

/// Alternate policy: only explicit `[Name]` or `[Name]:` tokens are labels,
/// regardless of vocabulary.
///
/// Immune to vocabulary collisions, but requires editors to use the bracket
/// syntax and cannot express names containing whitespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct BracketSpeakerPolicy;

impl SpeakerPolicy for BracketSpeakerPolicy {
    fn classify_first_token(&self, token: &str, _vocabulary: &Vocabulary) -> Option<String> {
        let token = token.strip_suffix(':').unwrap_or(token);
        let name = token.strip_prefix('[')?.strip_suffix(']')?;
        (!name.is_empty()).then(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::from_words(&["Hello,", "there", "WORLD!"])
    }

    #[test]
    fn vocabulary_membership_is_normalized() {
        let vocab = vocab();

        assert!(vocab.contains("hello"));
        assert!(vocab.contains("Hello!"));
        assert!(vocab.contains("world"));
        assert!(!vocab.contains("Alice"));
    }

    #[test]
    fn unknown_token_is_a_speaker() {
        let policy = VocabularySpeakerPolicy;

        assert_eq!(
            policy.classify_first_token("Alice:", &vocab()),
            Some("Alice".to_string())
        );
        assert_eq!(
            policy.classify_first_token("Bob", &vocab()),
            Some("Bob".to_string())
        );
    }

    #[test]
    fn known_token_is_a_word() {
        let policy = VocabularySpeakerPolicy;

        assert_eq!(policy.classify_first_token("hello", &vocab()), None);
        assert_eq!(policy.classify_first_token("There,", &vocab()), None);
    }

    #[test]
    fn bracket_policy_requires_brackets() {
        let policy = BracketSpeakerPolicy;

        assert_eq!(
            policy.classify_first_token("[Alice]", &vocab()),
            Some("Alice".to_string())
        );
        assert_eq!(
            policy.classify_first_token("[Alice]:", &vocab()),
            Some("Alice".to_string())
        );
        assert_eq!(policy.classify_first_token("Alice:", &vocab()), None);
        assert_eq!(policy.classify_first_token("[]", &vocab()), None);
    }
}
