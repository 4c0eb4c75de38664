use crate::types::Frequency;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilerConfig {
    /// Content words seen this many times or fewer within a single post are dropped.
    pub min_occurrences: Frequency,
    /// Length of the top and bottom word lists kept in each author profile.
    pub top_words_count: usize,
}
