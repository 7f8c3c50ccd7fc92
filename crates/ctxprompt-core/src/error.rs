use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cannot use manifest '{path}': {reason}")]
    Manifest { path: PathBuf, reason: String },

    #[error("no valid file paths found in '{0}'")]
    EmptyManifest(PathBuf),

    #[error("'{0}' is not a valid git repository")]
    NotARepository(PathBuf),

    #[error("failed to run `{command}`: {source}")]
    GitSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {status}: {stderr}")]
    Git {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("could not create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
