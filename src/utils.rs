pub mod author_file_name;
pub use author_file_name::author_file_name;

pub mod dedup_vector;
pub use dedup_vector::dedup_vector;

pub mod persist_json;
pub use persist_json::{read_json_document, write_json_document};
