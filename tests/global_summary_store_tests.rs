use elite_profiler::{Error, Gender, GlobalSummaryStore, Position, Race};
use std::fs;
use test_utils::{read_global_summary, temp_output_dir};

#[cfg(test)]
mod global_summary_store_tests {
    use super::*;

    #[test]
    fn test_new_author_is_added_and_tallied() {
        let output = temp_output_dir();
        let mut store = GlobalSummaryStore::open(output.path()).unwrap();

        store
            .upsert("RepAOC", Position::Liberal, Gender::Female, Race::NonWhite)
            .unwrap();

        let summary = store.summary();
        assert_eq!(summary.word_cloud.liberal.get("RepAOC"), Some(1.0));
        assert!(summary.word_cloud.conservative.is_empty());
        assert_eq!(summary.stats.gender["Female"], 1.0);
        assert_eq!(summary.stats.gender["Male"], 0.0);
        assert_eq!(summary.stats.race["Non-White"], 1.0);
        assert_eq!(summary.stats.race["White"], 0.0);
    }

    #[test]
    fn test_repeat_author_only_increments_count() {
        let output = temp_output_dir();
        let mut store = GlobalSummaryStore::open(output.path()).unwrap();

        store
            .upsert("SenCruz", Position::Conservative, Gender::Male, Race::White)
            .unwrap();
        let tallies_after_first = store.summary().stats.clone();
        store
            .upsert("SenCruz", Position::Conservative, Gender::Male, Race::White)
            .unwrap();

        assert_eq!(
            store.summary().word_cloud.conservative.get("SenCruz"),
            Some(2.0)
        );
        assert_eq!(store.summary().stats, tallies_after_first);
    }

    #[test]
    fn test_each_author_is_tallied_once() {
        let output = temp_output_dir();
        let mut store = GlobalSummaryStore::open(output.path()).unwrap();

        for author in ["SenA", "SenB", "SenA", "SenC", "SenB"] {
            store
                .upsert(author, Position::Conservative, Gender::Male, Race::White)
                .unwrap();
        }

        let summary = store.summary();
        assert_eq!(
            summary.word_cloud.conservative.distinct_values(),
            ["SenA", "SenB", "SenC"]
        );
        assert_eq!(
            summary.word_cloud.conservative.frequencies(),
            [2.0, 2.0, 1.0]
        );
        assert_eq!(summary.stats.gender["Male"], 3.0);
        assert_eq!(summary.stats.race["White"], 3.0);
    }

    #[test]
    fn test_position_tables_are_tracked_separately() {
        let output = temp_output_dir();
        let mut store = GlobalSummaryStore::open(output.path()).unwrap();

        store
            .upsert("SenA", Position::Conservative, Gender::Male, Race::White)
            .unwrap();
        store
            .upsert("SenA", Position::Liberal, Gender::Male, Race::White)
            .unwrap();

        let summary = store.summary();
        assert_eq!(summary.word_cloud.conservative.get("SenA"), Some(1.0));
        assert_eq!(summary.word_cloud.liberal.get("SenA"), Some(1.0));
        assert_eq!(summary.stats.gender["Male"], 2.0);
    }

    #[test]
    fn test_summary_is_persisted_and_reloaded() {
        let output = temp_output_dir();

        {
            let mut store = GlobalSummaryStore::open(output.path()).unwrap();
            store
                .upsert("SenA", Position::Liberal, Gender::Female, Race::White)
                .unwrap();
        }

        let persisted = read_global_summary(output.path());
        assert_eq!(persisted.word_cloud.liberal.get("SenA"), Some(1.0));

        let mut store = GlobalSummaryStore::open(output.path()).unwrap();
        assert_eq!(store.summary(), &persisted);

        store
            .upsert("SenA", Position::Liberal, Gender::Female, Race::White)
            .unwrap();
        let persisted = read_global_summary(output.path());
        assert_eq!(persisted.word_cloud.liberal.get("SenA"), Some(2.0));
        assert_eq!(persisted.stats.gender["Female"], 1.0);
    }

    #[test]
    fn test_nothing_is_written_before_the_first_upsert() {
        let output = temp_output_dir();

        let store = GlobalSummaryStore::open(output.path()).unwrap();

        assert!(!store.path().exists());
    }

    #[test]
    fn test_persisted_document_layout() {
        let output = temp_output_dir();
        let mut store = GlobalSummaryStore::open(output.path()).unwrap();
        store
            .upsert("SenA", Position::Liberal, Gender::Female, Race::NonWhite)
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "word cloud": {
                    "Liberal": {"distinct values": ["SenA"], "frequencies": [1.0]},
                    "Conservative": {"distinct values": [], "frequencies": []}
                },
                "stats": {
                    "gender": {"Female": 1.0, "Male": 0.0},
                    "race": {"Non-White": 1.0, "White": 0.0}
                }
            })
        );
    }

    #[test]
    fn test_unrecognized_labels_are_rejected() {
        let output = temp_output_dir();
        let mut store = GlobalSummaryStore::open(output.path()).unwrap();

        for (position, gender, race) in [
            ("Moderate", "Male", "White"),
            ("Liberal", "Unknown", "White"),
            ("Liberal", "Male", "Other"),
        ] {
            let result = store.upsert_labels("SenA", position, gender, race);
            assert!(matches!(result, Err(Error::UnrecognizedCategory(_))));
        }

        assert!(store.summary().word_cloud.liberal.is_empty());

        store
            .upsert_labels("SenA", "Liberal", "Male", "White")
            .unwrap();
        assert_eq!(store.summary().word_cloud.liberal.get("SenA"), Some(1.0));
    }

    #[test]
    fn test_missing_bucket_in_persisted_document_is_rejected() {
        let output = temp_output_dir();
        fs::write(
            output.path().join("main_page.json"),
            r#"{
                "word cloud": {
                    "Liberal": {"distinct values": [], "frequencies": []},
                    "Conservative": {"distinct values": [], "frequencies": []}
                },
                "stats": {"gender": {"Male": 0.0}, "race": {"White": 0.0, "Non-White": 0.0}}
            }"#,
        )
        .unwrap();
        let mut store = GlobalSummaryStore::open(output.path()).unwrap();

        let result = store.upsert("SenA", Position::Liberal, Gender::Female, Race::White);

        assert!(matches!(result, Err(Error::UnrecognizedCategory(_))));
        assert!(store.summary().word_cloud.liberal.is_empty());
    }

    #[test]
    fn test_failed_write_leaves_summary_unchanged() {
        let output = temp_output_dir();
        let mut store = GlobalSummaryStore::open(output.path()).unwrap();
        // A directory in the way of the temporary file makes the write fail
        fs::create_dir(output.path().join("main_page.json.tmp")).unwrap();

        let result = store.upsert("SenA", Position::Liberal, Gender::Male, Race::White);

        assert!(matches!(result, Err(Error::IoError(_))));
        assert!(store.summary().word_cloud.liberal.is_empty());
        assert_eq!(store.summary().stats.gender["Male"], 0.0);
        assert_eq!(store.summary().stats.race["White"], 0.0);
        assert!(!output.path().join("main_page.json").exists());

        fs::remove_dir(output.path().join("main_page.json.tmp")).unwrap();
        store
            .upsert("SenB", Position::Liberal, Gender::Male, Race::White)
            .unwrap();

        let persisted = read_global_summary(output.path());
        assert_eq!(persisted.word_cloud.liberal.distinct_values(), ["SenB"]);
        assert_eq!(persisted.stats.gender["Male"], 1.0);
    }

    #[test]
    fn test_corrupt_summary_fails_to_open() {
        let output = temp_output_dir();
        fs::write(output.path().join("main_page.json"), "not json").unwrap();

        let result = GlobalSummaryStore::open(output.path());

        assert!(matches!(result, Err(Error::JsonError(_))));
    }
}
