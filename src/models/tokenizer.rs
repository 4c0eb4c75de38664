use crate::constants::{HASHTAG_SIGIL, MENTION_SIGIL, URL_MARKER};
use crate::models::StopWordSet;
use crate::types::{Token, TokenRef};

/// The token categories pulled out of a single post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizedPost {
    /// Lowercase content words, stop words and digits removed.
    pub words: Vec<Token>,
    /// Tokens beginning with `@`, case preserved.
    pub mentions: Vec<Token>,
    /// Tokens beginning with `#`, case preserved.
    pub hashtags: Vec<Token>,
    /// Tokens set aside because they contain `https`.
    pub urls: Vec<Token>,
}

pub struct Tokenizer<'a> {
    stop_words: &'a StopWordSet,
}

impl Tokenizer<'static> {
    /// Configuration for social-media post parsing with the shared stop word set
    pub fn post_parser() -> Self {
        Self {
            stop_words: StopWordSet::shared(),
        }
    }
}

impl<'a> Tokenizer<'a> {
    pub fn with_stop_words(stop_words: &'a StopWordSet) -> Self {
        Self { stop_words }
    }

    /// Splits raw post text into content words, mentions and hashtags.
    ///
    /// Each stage feeds the next, so the order below matters: stop words are
    /// removed once on the raw (case-preserved) tokens and once more after
    /// lowercasing and digit removal.
    pub fn extract(&self, text: &str) -> TokenizedPost {
        let tokens = Self::split_long_tokens(text);

        // First stop word pass, before punctuation is touched
        let tokens = self.stop_words.remove_from(tokens);

        let (urls, tokens): (Vec<Token>, Vec<Token>) = tokens
            .into_iter()
            .partition(|token| token.contains(URL_MARKER));

        let tokens: Vec<Token> = tokens
            .iter()
            .flat_map(|token| Self::split_long_tokens(&Self::strip_punctuation(token)))
            .filter(|token| !Self::is_lone_number(token))
            .collect();

        let mentions: Vec<Token> = tokens
            .iter()
            .filter(|token| token.starts_with(MENTION_SIGIL))
            .cloned()
            .collect();

        let hashtags: Vec<Token> = tokens
            .iter()
            .filter(|token| token.starts_with(HASHTAG_SIGIL))
            .cloned()
            .collect();

        let words: Vec<Token> = tokens
            .iter()
            .filter(|token| !token.starts_with(MENTION_SIGIL) && !token.starts_with(HASHTAG_SIGIL))
            .map(|token| token.to_lowercase())
            .flat_map(|token| Self::split_long_tokens(&Self::strip_digits(&token)))
            .collect();

        // Second pass catches stop words that were glued to digits
        let words = self.stop_words.remove_from(words);

        TokenizedPost {
            words,
            mentions,
            hashtags,
            urls,
        }
    }

    /// Whitespace split, keeping only tokens longer than one character.
    fn split_long_tokens(text: &TokenRef) -> Vec<Token> {
        text.split_whitespace()
            .filter(|token| token.chars().count() > 1)
            .map(|token| token.to_string())
            .collect()
    }

    /// Replaces everything except word characters and the two sigils with spaces.
    fn strip_punctuation(token: &TokenRef) -> Token {
        token
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c == MENTION_SIGIL || c == HASHTAG_SIGIL {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    fn strip_digits(token: &TokenRef) -> Token {
        token
            .chars()
            .map(|c| if c.is_ascii_digit() { ' ' } else { c })
            .collect()
    }

    fn is_lone_number(token: &TokenRef) -> bool {
        !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
    }
}
