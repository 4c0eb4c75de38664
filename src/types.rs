// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Identifies the author (elite) of a post, e.g. a public figure's handle.
///
/// Doubles as the file name of the author's profile document.
pub type AuthorId = String;

/// The count attached to a distinct value in a `FrequencyTable`.
///
/// Stored as a float so persisted documents read back unchanged as JSON numbers.
pub type Frequency = f64;
