use crate::constants::MAIN_PAGE_FILE_NAME;
use crate::models::{FrequencyTable, Gender, Position, Race};
use crate::types::Frequency;
use crate::utils::{read_json_document, write_json_document};
use crate::Error;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSummary {
    #[serde(rename = "word cloud")]
    pub word_cloud: PositionClouds,
    pub stats: DemographicTallies,
}

/// Author → post count tables, one per position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionClouds {
    #[serde(rename = "Liberal")]
    pub liberal: FrequencyTable,
    #[serde(rename = "Conservative")]
    pub conservative: FrequencyTable,
}

/// Two-bucket tallies keyed by category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicTallies {
    pub gender: BTreeMap<String, Frequency>,
    pub race: BTreeMap<String, Frequency>,
}

impl PositionClouds {
    pub fn table(&self, position: Position) -> &FrequencyTable {
        match position {
            Position::Liberal => &self.liberal,
            Position::Conservative => &self.conservative,
        }
    }

    fn table_mut(&mut self, position: Position) -> &mut FrequencyTable {
        match position {
            Position::Liberal => &mut self.liberal,
            Position::Conservative => &mut self.conservative,
        }
    }
}

impl DemographicTallies {
    fn increment(buckets: &mut BTreeMap<String, Frequency>, label: &str) -> Result<(), Error> {
        let tally = buckets.get_mut(label).ok_or_else(|| {
            Error::UnrecognizedCategory(format!("No tally bucket for {:?}", label))
        })?;
        *tally += 1.0;
        Ok(())
    }
}

impl Default for GlobalSummary {
    fn default() -> Self {
        Self {
            word_cloud: PositionClouds::default(),
            stats: DemographicTallies {
                gender: Gender::ALL
                    .iter()
                    .map(|gender| (gender.to_string(), 0.0))
                    .collect(),
                race: Race::ALL.iter().map(|race| (race.to_string(), 0.0)).collect(),
            },
        }
    }
}

/// Sole owner of the global summary document.
///
/// The document is loaded once when the store is opened and every mutation
/// goes through `upsert`, which persists the whole document afterwards.
pub struct GlobalSummaryStore {
    path: PathBuf,
    summary: GlobalSummary,
}

impl GlobalSummaryStore {
    /// Loads the summary from `output_folder`, or starts an empty one.
    pub fn open(output_folder: &Path) -> Result<Self, Error> {
        fs::create_dir_all(output_folder)?;
        let path = output_folder.join(MAIN_PAGE_FILE_NAME);

        let summary = match read_json_document::<GlobalSummary>(&path)? {
            Some(summary) => summary,
            None => {
                debug!("Starting a new global summary at {:?}", path);
                GlobalSummary::default()
            }
        };

        Ok(Self { path, summary })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn summary(&self) -> &GlobalSummary {
        &self.summary
    }

    /// Counts one more post by `author` under `position`.
    ///
    /// Demographic tallies only move the first time an author enters the
    /// position's table.
    pub fn upsert(
        &mut self,
        author: &str,
        position: Position,
        gender: Gender,
        race: Race,
    ) -> Result<(), Error> {
        // Changes go to a copy that replaces the held summary only once it is on disk
        let mut updated = self.summary.clone();
        let table = updated.word_cloud.table_mut(position);

        if table.increment(author, 1.0) {
            DemographicTallies::increment(&mut updated.stats.gender, gender.as_str())?;
            DemographicTallies::increment(&mut updated.stats.race, race.as_str())?;
            debug!("Added {} to the {} cloud", author, position);
        }

        write_json_document(&self.path, &updated)?;
        self.summary = updated;

        Ok(())
    }

    /// Same as `upsert`, for category labels that have not been parsed yet.
    pub fn upsert_labels(
        &mut self,
        author: &str,
        position: &str,
        gender: &str,
        race: &str,
    ) -> Result<(), Error> {
        self.upsert(author, position.parse()?, gender.parse()?, race.parse()?)
    }
}
