mod config;
pub use config::DEFAULT_PROFILER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    AuthorProfile, AuthorProfileStore, BatchDriver, BatchSummary, Error, FeatureExtractor,
    FrequencyTable, Gender, GlobalSummary, GlobalSummaryStore, Position, PostFeatures,
    PostRecord, ProfilerConfig, Race, StopWordSet, TokenizedPost, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{AuthorId, Frequency, Token, TokenRef};

use log::info;
use std::path::Path;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Replays the input table at `input_path` into `output_folder` using the default configuration.
pub fn run_batch(input_path: &Path, output_folder: &Path) -> Result<BatchSummary, Error> {
    run_batch_with_custom_config(DEFAULT_PROFILER_CONFIG, input_path, output_folder)
}

pub fn run_batch_with_custom_config(
    config: &ProfilerConfig,
    input_path: &Path,
    output_folder: &Path,
) -> Result<BatchSummary, Error> {
    info!(
        "Profiling posts from {:?} into {:?}",
        input_path, output_folder
    );

    let rows = PostRecord::open_csv(input_path)?;
    let mut driver = BatchDriver::new(output_folder, config)?;

    driver.run(rows)
}
