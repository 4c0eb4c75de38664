use crate::constants::{ENGLISH_STOP_WORDS, NOISE_FRAGMENT_STOP_WORDS, WORD_CLOUD_STOP_WORDS};
use crate::types::{Token, TokenRef};
use std::collections::HashSet;
use std::sync::LazyLock;

static DEFAULT_STOP_WORDS: LazyLock<StopWordSet> = LazyLock::new(|| {
    StopWordSet::from_lists(&[
        ENGLISH_STOP_WORDS,
        WORD_CLOUD_STOP_WORDS,
        NOISE_FRAGMENT_STOP_WORDS,
    ])
});

/// An immutable set of words excluded from tokenizer output.
///
/// Lookups are case-sensitive: words are stored exactly as listed, so `"The"`
/// is not matched by the stored `"the"`.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<Token>,
}

impl StopWordSet {
    /// The process-wide set: standard English stop words, generic word-cloud
    /// noise, and short noise fragments. Built once on first use.
    pub fn shared() -> &'static StopWordSet {
        &DEFAULT_STOP_WORDS
    }

    /// Unions several word lists into one set.
    pub fn from_lists(lists: &[&[&str]]) -> Self {
        Self {
            words: lists
                .iter()
                .flat_map(|list| list.iter())
                .map(|word| word.to_string())
                .collect(),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self::from_lists(&[words])
    }

    pub fn contains(&self, word: &TokenRef) -> bool {
        self.words.contains(word)
    }

    /// Drops every token present in the set, keeping order.
    pub fn remove_from(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| !self.contains(token))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
