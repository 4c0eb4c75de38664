pub mod constants;

use constants::{CONSERVATIVE_SCORE, INPUT_HEADERS, LIBERAL_SCORE};
use elite_profiler::{AuthorProfile, FrequencyTable, GlobalSummary, PostRecord};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A post with neutral defaults: male, white, conservative, no media.
pub fn post(author: &str, text: &str) -> PostRecord {
    PostRecord {
        text: text.to_string(),
        author: author.to_string(),
        retweet_count: 0.0,
        media: 1.0,
        gender: 1.0,
        dw_score: CONSERVATIVE_SCORE,
        race: 1.0,
        age: 50.0,
        followers: 1000.0,
    }
}

/// Same as `post`, but by a female, non-white, liberal author.
pub fn liberal_post(author: &str, text: &str) -> PostRecord {
    PostRecord {
        gender: -1.0,
        race: -1.0,
        dw_score: LIBERAL_SCORE,
        ..post(author, text)
    }
}

pub fn temp_output_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary output folder")
}

fn to_row(record: &PostRecord) -> Vec<String> {
    vec![
        record.text.clone(),
        record.author.clone(),
        record.retweet_count.to_string(),
        record.media.to_string(),
        record.gender.to_string(),
        record.dw_score.to_string(),
        record.race.to_string(),
        record.age.to_string(),
        record.followers.to_string(),
    ]
}

/// Renders posts as an input table with the standard header row.
pub fn to_csv(records: &[PostRecord]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(INPUT_HEADERS)
        .expect("Failed to write headers");
    for record in records {
        writer
            .write_record(to_row(record))
            .expect("Failed to write record");
    }
    String::from_utf8(writer.into_inner().expect("Failed to flush CSV"))
        .expect("CSV output is not UTF-8")
}

pub fn write_input_csv(dir: &Path, file_name: &str, records: &[PostRecord]) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, to_csv(records)).expect("Failed to write input table");
    path
}

pub fn write_input_csv_gz(dir: &Path, file_name: &str, records: &[PostRecord]) -> PathBuf {
    use std::io::Write;

    let path = dir.join(file_name);
    let mut encoder = GzEncoder::new(
        File::create(&path).expect("Failed to create input table"),
        Compression::default(),
    );
    encoder
        .write_all(to_csv(records).as_bytes())
        .expect("Failed to compress input table");
    encoder.finish().expect("Failed to finalize compression");
    path
}

pub fn read_profile(output: &Path, author: &str) -> AuthorProfile {
    let path = output.join("elites").join(format!("{}.json", author));
    let content = fs::read_to_string(&path).expect("Failed to read author profile");
    serde_json::from_str(&content).expect("Author profile is not valid JSON")
}

pub fn read_global_summary(output: &Path) -> GlobalSummary {
    let content = fs::read_to_string(output.join("main_page.json"))
        .expect("Failed to read global summary");
    serde_json::from_str(&content).expect("Global summary is not valid JSON")
}

pub fn table(entries: &[(&str, f64)]) -> FrequencyTable {
    FrequencyTable::from_parts(
        entries.iter().map(|(value, _)| value.to_string()).collect(),
        entries.iter().map(|(_, frequency)| *frequency).collect(),
    )
    .expect("Fixture table is malformed")
}

/// Repeats `word` `times` times, space separated.
pub fn repeat_word(word: &str, times: usize) -> String {
    vec![word; times].join(" ")
}
