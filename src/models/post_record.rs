use crate::constants::columns;
use crate::types::AuthorId;
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One row of the input table: a post and the attributes of its author.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub text: String,
    pub author: AuthorId,
    pub retweet_count: f64,
    /// Negative codes mark posts carrying media.
    pub media: f64,
    /// Negative codes are female.
    pub gender: f64,
    /// Political-lean score; negative is liberal.
    pub dw_score: f64,
    /// Negative codes are non-white.
    pub race: f64,
    pub age: f64,
    pub followers: f64,
}

/// Positions of the required columns within a header row.
struct ColumnIndex {
    text: usize,
    author: usize,
    retweet_count: usize,
    media: usize,
    gender: usize,
    dw_score: usize,
    race: usize,
    age: usize,
    followers: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, Error> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| Error::MissingField(format!("column '{}'", name)))
        };

        Ok(Self {
            text: position(columns::TEXT)?,
            author: position(columns::AUTHOR)?,
            retweet_count: position(columns::RETWEET_COUNT)?,
            media: position(columns::MEDIA)?,
            gender: position(columns::GENDER)?,
            dw_score: position(columns::DW_SCORE)?,
            race: position(columns::RACE)?,
            age: position(columns::AGE)?,
            followers: position(columns::FOLLOWERS)?,
        })
    }
}

impl PostRecord {
    /// Opens an input table from disk. Files ending in `.gz` are decompressed on the fly.
    pub fn open_csv(path: &Path) -> Result<PostRecordReader<Box<dyn Read>>, Error> {
        let file = BufReader::new(File::open(path)?);

        let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        PostRecordReader::new(reader)
    }

    /// Parses a whole in-memory table.
    pub fn read_csv_from_string(csv: &str) -> Result<Vec<PostRecord>, Error> {
        PostRecordReader::new(csv.as_bytes())?.collect()
    }

    fn from_csv_record(
        index: &ColumnIndex,
        record: &StringRecord,
        line: u64,
    ) -> Result<Self, Error> {
        let field = |position: usize, name: &str| {
            record
                .get(position)
                .ok_or_else(|| Error::MissingField(format!("'{}' on line {}", name, line)))
        };

        let number = |position: usize, name: &str| -> Result<f64, Error> {
            let raw = field(position, name)?.trim();

            if raw.is_empty() {
                return Err(Error::MissingField(format!("'{}' on line {}", name, line)));
            }

            raw.parse::<f64>().map_err(|e| {
                Error::ParserError(format!(
                    "Invalid '{}' value {:?} on line {}: {}",
                    name, raw, line, e
                ))
            })
        };

        let author = field(index.author, columns::AUTHOR)?.trim();
        if author.is_empty() {
            return Err(Error::MissingField(format!(
                "'{}' on line {}",
                columns::AUTHOR,
                line
            )));
        }

        Ok(Self {
            text: field(index.text, columns::TEXT)?.to_string(),
            author: author.to_string(),
            retweet_count: number(index.retweet_count, columns::RETWEET_COUNT)?,
            media: number(index.media, columns::MEDIA)?,
            gender: number(index.gender, columns::GENDER)?,
            dw_score: number(index.dw_score, columns::DW_SCORE)?,
            race: number(index.race, columns::RACE)?,
            age: number(index.age, columns::AGE)?,
            followers: number(index.followers, columns::FOLLOWERS)?,
        })
    }
}

/// Streams `PostRecord`s out of a CSV source in table order.
pub struct PostRecordReader<R: Read> {
    reader: csv::Reader<R>,
    index: ColumnIndex,
    record: StringRecord,
}

impl<R: Read> PostRecordReader<R> {
    pub fn new(source: R) -> Result<Self, Error> {
        // Rows with missing cells are reported as missing fields rather than CSV errors
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            index: ColumnIndex::from_headers(&headers)?,
            record: StringRecord::new(),
        })
    }
}

impl<R: Read> Iterator for PostRecordReader<R> {
    type Item = Result<PostRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                let line = self.record.position().map_or(0, |p| p.line());
                Some(PostRecord::from_csv_record(&self.index, &self.record, line))
            }
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
