use crate::constants::ELITES_DIRECTORY;
use crate::models::{FrequencyTable, Gender, Position, PostFeatures};
use crate::types::{AuthorId, Token};
use crate::utils::{author_file_name, read_json_document, write_json_document};
use crate::Error;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorProfile {
    #[serde(rename = "word clouds")]
    pub word_clouds: WordClouds,
    pub stats: AuthorStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordClouds {
    pub words: FrequencyTable,
    pub mentions: FrequencyTable,
    pub hashtags: FrequencyTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorStats {
    pub age: f64,
    pub gender: Gender,
    pub position: Position,
    pub followers: f64,
    #[serde(rename = "total tweets")]
    pub total_tweets: u64,
    #[serde(rename = "distinct words")]
    pub distinct_words: usize,
    #[serde(rename = "top words")]
    pub top_words: Vec<Token>,
    #[serde(rename = "bottom words")]
    pub bottom_words: Vec<Token>,
    pub retweets: Vec<f64>,
    #[serde(rename = "average retweets")]
    pub average_retweets: f64,
    pub media: Vec<bool>,
    #[serde(rename = "media percentage")]
    pub media_percentage: f64,
}

impl AuthorProfile {
    /// Starting state for an author seen for the first time.
    fn create(features: &PostFeatures, top_words_count: usize) -> Self {
        let word_clouds = WordClouds {
            words: features.words.clone(),
            mentions: features.mentions.clone(),
            hashtags: features.hashtags.clone(),
        };

        let (top_words, bottom_words) = word_clouds.words.extremes(top_words_count);

        let stats = AuthorStats {
            age: features.age,
            gender: features.gender,
            position: features.position,
            followers: features.followers,
            total_tweets: 1,
            distinct_words: word_clouds.words.len(),
            top_words,
            bottom_words,
            retweets: vec![features.retweets],
            average_retweets: features.retweets,
            media: vec![features.has_media],
            media_percentage: if features.has_media { 100.0 } else { 0.0 },
        };

        Self { word_clouds, stats }
    }

    /// Folds one more post into an existing profile.
    ///
    /// Gender is left as recorded at creation; age, position and followers
    /// take the latest values.
    fn update(&mut self, features: &PostFeatures, top_words_count: usize) {
        self.word_clouds.words.merge(&features.words);
        self.word_clouds.mentions.merge(&features.mentions);
        self.word_clouds.hashtags.merge(&features.hashtags);

        let stats = &mut self.stats;

        stats.age = features.age;
        stats.position = features.position;
        stats.followers = features.followers;
        stats.total_tweets += 1;

        stats.distinct_words = self.word_clouds.words.len();
        let (top_words, bottom_words) = self.word_clouds.words.extremes(top_words_count);
        stats.top_words = top_words;
        stats.bottom_words = bottom_words;

        stats.retweets.push(features.retweets);
        stats.average_retweets = stats.retweets.iter().sum::<f64>() / stats.retweets.len() as f64;

        stats.media.push(features.has_media);
        let with_media = stats.media.iter().filter(|&&has_media| has_media).count();
        stats.media_percentage = 100.0 * with_media as f64 / stats.media.len() as f64;
    }
}

/// Owns the directory of per-author profile documents.
pub struct AuthorProfileStore {
    directory: PathBuf,
    top_words_count: usize,
}

impl AuthorProfileStore {
    /// Opens (creating if needed) the profile directory below `output_folder`.
    pub fn open(output_folder: &Path, top_words_count: usize) -> Result<Self, Error> {
        let directory = output_folder.join(ELITES_DIRECTORY);
        fs::create_dir_all(&directory)?;

        Ok(Self {
            directory,
            top_words_count,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn profile_path(&self, author: &str) -> Result<PathBuf, Error> {
        Ok(self.directory.join(author_file_name(author)?))
    }

    pub fn load(&self, author: &str) -> Result<Option<AuthorProfile>, Error> {
        read_json_document(&self.profile_path(author)?)
    }

    /// Creates or updates the profile of `features.author` and persists it.
    pub fn upsert(&self, features: &PostFeatures) -> Result<AuthorProfile, Error> {
        let author: &AuthorId = &features.author;
        let path = self.profile_path(author)?;

        let profile = match read_json_document::<AuthorProfile>(&path)? {
            Some(mut profile) => {
                profile.update(features, self.top_words_count);
                debug!(
                    "Updated profile of {} ({} tweets)",
                    author, profile.stats.total_tweets
                );
                profile
            }
            None => {
                info!("Creating profile for {}", author);
                AuthorProfile::create(features, self.top_words_count)
            }
        };

        write_json_document(&path, &profile)?;

        Ok(profile)
    }
}
