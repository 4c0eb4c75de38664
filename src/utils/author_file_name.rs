use crate::constants::DOCUMENT_EXTENSION;
use crate::Error;

/// Turns an author identifier into the file name of its profile document.
///
/// Identifiers that would escape the profile directory or produce a hidden
/// file are rejected.
pub fn author_file_name(author: &str) -> Result<String, Error> {
    let is_usable = !author.trim().is_empty()
        && !author.starts_with('.')
        && !author.contains(['/', '\\', '\0']);

    if !is_usable {
        return Err(Error::InvalidAuthor(author.to_string()));
    }

    Ok(format!("{}.{}", author, DOCUMENT_EXTENSION))
}
