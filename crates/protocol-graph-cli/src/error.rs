use std::{io, path::PathBuf};

use protocol_graph::errors::{ConfigError, DiagramError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no protocol specifications found in {0}")]
    NoSpecs(PathBuf),

    #[error("invalid style file '{path}': {message}")]
    Style { path: PathBuf, message: String },

    #[error("unsupported style file '{0}', expected a .toml or .json extension")]
    UnsupportedStyle(PathBuf),

    #[error("missing protocol, run with --help for usage or --list for builtin names")]
    MissingProtocol,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Diagram(#[from] DiagramError),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}
