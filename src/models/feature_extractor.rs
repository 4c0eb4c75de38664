use crate::constants::columns;
use crate::models::{FrequencyTable, Gender, Position, PostRecord, Race, Tokenizer};
use crate::types::{AuthorId, Frequency};
use crate::Error;
use log::debug;

/// Everything derived from one post that the stores need.
#[derive(Debug, Clone, PartialEq)]
pub struct PostFeatures {
    pub author: AuthorId,
    pub age: f64,
    pub gender: Gender,
    pub race: Race,
    pub position: Position,
    pub followers: f64,
    pub retweets: f64,
    pub has_media: bool,
    pub mentions: FrequencyTable,
    pub hashtags: FrequencyTable,
    pub words: FrequencyTable,
}

pub struct FeatureExtractor<'a> {
    tokenizer: Tokenizer<'a>,
    min_occurrences: Frequency,
}

impl FeatureExtractor<'static> {
    pub fn new(min_occurrences: Frequency) -> Self {
        Self::with_tokenizer(Tokenizer::post_parser(), min_occurrences)
    }
}

impl<'a> FeatureExtractor<'a> {
    pub fn with_tokenizer(tokenizer: Tokenizer<'a>, min_occurrences: Frequency) -> Self {
        Self {
            tokenizer,
            min_occurrences,
        }
    }

    pub fn extract(&self, post: &PostRecord) -> Result<PostFeatures, Error> {
        Self::validate(post)?;

        let tokenized = self.tokenizer.extract(&post.text);

        let mut words = FrequencyTable::from_tokens(&tokenized.words);
        words.retain(|_, frequency| frequency > self.min_occurrences);

        let features = PostFeatures {
            author: post.author.clone(),
            age: post.age,
            gender: Gender::from_code(post.gender),
            race: Race::from_code(post.race),
            position: Position::from_code(post.dw_score),
            followers: post.followers,
            retweets: post.retweet_count,
            has_media: post.media < 0.0,
            mentions: FrequencyTable::from_tokens(&tokenized.mentions),
            hashtags: FrequencyTable::from_tokens(&tokenized.hashtags),
            words,
        };

        debug!(
            "Extracted {} words, {} mentions, {} hashtags ({} URLs skipped) for {}",
            features.words.len(),
            features.mentions.len(),
            features.hashtags.len(),
            tokenized.urls.len(),
            features.author
        );

        Ok(features)
    }

    fn validate(post: &PostRecord) -> Result<(), Error> {
        if post.author.trim().is_empty() {
            return Err(Error::MissingField(columns::AUTHOR.to_string()));
        }

        let numbers = [
            (columns::RETWEET_COUNT, post.retweet_count),
            (columns::MEDIA, post.media),
            (columns::GENDER, post.gender),
            (columns::DW_SCORE, post.dw_score),
            (columns::RACE, post.race),
            (columns::AGE, post.age),
            (columns::FOLLOWERS, post.followers),
        ];

        for (name, value) in numbers {
            if !value.is_finite() {
                return Err(Error::MissingField(format!(
                    "'{}' of a post by {} is not a number",
                    name, post.author
                )));
            }
        }

        if post.retweet_count < 0.0 {
            return Err(Error::ParserError(format!(
                "Negative retweet count {} for a post by {}",
                post.retweet_count, post.author
            )));
        }

        Ok(())
    }
}
