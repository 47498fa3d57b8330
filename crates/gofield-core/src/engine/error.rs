use crate::core::models::bead::BeadKind;
use thiserror::Error;

/// Errors raised during parameter generation.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error(
        "{generator}: chain '{chain}' contains a {kind} bead; \
         only CarbonAlpha beads are supported"
    )]
    UnsupportedBeadKind {
        generator: &'static str,
        chain: String,
        kind: BeadKind,
    },

    #[error("no entry '{key}' in the {table} table")]
    MissingEnvEntry { table: &'static str, key: String },

    #[error("no excluded-volume radius defined for bead '{bead_name}'")]
    MissingRadius { bead_name: String },

    #[error("no charge defined for bead '{bead_name}'")]
    MissingCharge { bead_name: String },

    #[error("generator '{generator}' requires the [{section}] parameter section")]
    MissingSection {
        generator: &'static str,
        section: &'static str,
    },

    #[error("unknown force-field generator '{name}'")]
    UnknownGenerator { name: String },
}
