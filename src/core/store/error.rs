use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed JSON or a value that is neither a string nor an object.
    #[error("failed to parse locale file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to read locale file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A key cannot be stored because a prefix of its path already holds a string,
    /// or the key itself already holds a nested object.
    #[error("cannot store `{key}`: `{blocked_by}` is already taken")]
    PathConflict { key: String, blocked_by: String },
}
