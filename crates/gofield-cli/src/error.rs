use gofield::core::io::pdb::PdbError;
use gofield::core::forcefield::params::ParamLoadError;
use gofield::core::models::builder::BuildError;
use gofield::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Params(#[from] ParamLoadError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to read structure '{path}': {source}", path = .path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("failed to parse input file '{path}': {source}", path = .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("chain '{id}' requested but not present in '{path}'", path = .path.display())]
    MissingChain { path: PathBuf, id: char },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
