use std::{io::Error as IoError, path::PathBuf};

use serde_json::Error as SerdeError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("failed to deserialize `{path}`")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: SerdeError,
    },
    #[error("failed to serialize user data")]
    Serialize(#[source] SerdeError),
    #[error("failed to write `{path}`")]
    Write {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("no pokémon at position {index}, only {len} caught")]
    InvalidSelection { index: usize, len: usize },
}
