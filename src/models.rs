pub mod author_profile_store;
pub use author_profile_store::{AuthorProfile, AuthorProfileStore, AuthorStats, WordClouds};

pub mod batch_driver;
pub use batch_driver::{BatchDriver, BatchSummary};

pub mod demographics;
pub use demographics::{Gender, Position, Race};

pub mod error;
pub use error::Error;

pub mod feature_extractor;
pub use feature_extractor::{FeatureExtractor, PostFeatures};

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod global_summary_store;
pub use global_summary_store::{
    DemographicTallies, GlobalSummary, GlobalSummaryStore, PositionClouds,
};

pub mod post_record;
pub use post_record::{PostRecord, PostRecordReader};

pub mod profiler_config;
pub use profiler_config::ProfilerConfig;

pub mod stop_words;
pub use stop_words::StopWordSet;

pub mod tokenizer;
pub use tokenizer::{TokenizedPost, Tokenizer};
