use crate::Error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Reads a JSON document, returning `None` if the file does not exist.
///
/// Any other I/O failure, or malformed JSON, is an error.
pub fn read_json_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, Error> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let document = serde_json::from_reader(BufReader::new(file))?;

    Ok(Some(document))
}

/// Replaces the JSON document at `path` as a whole.
///
/// The document is written next to its destination and then renamed over it,
/// so readers only ever see the previous or the new version.
pub fn write_json_document<T: Serialize>(path: &Path, document: &T) -> Result<(), Error> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let file = File::create(tmp_path)?;

    if let Err(err) = write_and_sync(file, document) {
        // A failed cleanup is ignored in favor of the write error
        let _ = fs::remove_file(tmp_path);
        return Err(err);
    }

    fs::rename(tmp_path, path)?;

    Ok(())
}

fn write_and_sync<T: Serialize>(file: File, document: &T) -> Result<(), Error> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(())
}
