use crate::models::{
    AuthorProfileStore, FeatureExtractor, GlobalSummaryStore, PostRecord, ProfilerConfig,
};
use crate::types::AuthorId;
use crate::Error;
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

/// Outcome of a completed batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub rows_processed: usize,
    pub authors: HashSet<AuthorId>,
}

/// Replays input rows, one at a time, into both stores.
pub struct BatchDriver<'a> {
    extractor: FeatureExtractor<'a>,
    profiles: AuthorProfileStore,
    global: GlobalSummaryStore,
}

impl BatchDriver<'static> {
    pub fn new(output_folder: &Path, config: &ProfilerConfig) -> Result<Self, Error> {
        Self::with_extractor(
            output_folder,
            config,
            FeatureExtractor::new(config.min_occurrences),
        )
    }
}

impl<'a> BatchDriver<'a> {
    pub fn with_extractor(
        output_folder: &Path,
        config: &ProfilerConfig,
        extractor: FeatureExtractor<'a>,
    ) -> Result<Self, Error> {
        Ok(Self {
            extractor,
            profiles: AuthorProfileStore::open(output_folder, config.top_words_count)?,
            global: GlobalSummaryStore::open(output_folder)?,
        })
    }

    pub fn profiles(&self) -> &AuthorProfileStore {
        &self.profiles
    }

    pub fn global(&self) -> &GlobalSummaryStore {
        &self.global
    }

    /// Processes a single row: author profile first, then the global summary.
    pub fn process(&mut self, post: &PostRecord) -> Result<(), Error> {
        let features = self.extractor.extract(post)?;

        self.profiles.upsert(&features)?;
        self.global.upsert(
            &features.author,
            features.position,
            features.gender,
            features.race,
        )?;

        Ok(())
    }

    /// Processes rows in the order given. The first failing row halts the batch.
    pub fn run<I>(&mut self, rows: I) -> Result<BatchSummary, Error>
    where
        I: IntoIterator<Item = Result<PostRecord, Error>>,
    {
        let mut summary = BatchSummary::default();

        for row in rows {
            let post = row?;
            debug!("Processing row {} by {}", summary.rows_processed + 1, post.author);

            self.process(&post)?;

            summary.rows_processed += 1;
            summary.authors.insert(post.author);
        }

        info!(
            "Processed {} rows from {} authors",
            summary.rows_processed,
            summary.authors.len()
        );

        Ok(summary)
    }
}
