use crate::models::ProfilerConfig;

pub const DEFAULT_PROFILER_CONFIG: &ProfilerConfig = &ProfilerConfig {
    min_occurrences: 2.0,
    top_words_count: 5,
};
