use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by an AutoRest invocation.
///
/// Every variant is fatal to the call that produced it; there are no
/// retries and no partial results in this layer.
#[derive(Debug, Error)]
pub enum Error {
    /// No input file was set on the settings or supplied by the caller.
    #[error("no input file set; pass one to generate() or set input-file in the settings")]
    MissingInputFile,

    /// None of the candidate executable names resolved on PATH.
    #[error(
        "AutoRest executable not found (tried {candidates:?}); \
         make sure AutoRest is installed and available in PATH"
    )]
    ToolNotFound { candidates: Vec<String> },

    /// The child process could not be launched at the OS level.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// AutoRest ran but reported failure through its exit status.
    #[error("AutoRest exited with status {code}")]
    ToolFailed { code: i32 },

    /// A settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings file could not be parsed as TOML.
    #[error("failed to parse settings file {path}: {source}")]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
