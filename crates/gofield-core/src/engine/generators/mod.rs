//! The force-field generator family.
//!
//! Each generator turns coarse-grained groups into term tables of the output
//! document: `generate_intra` handles one group, `generate_inter` a pair of
//! groups. The set is closed; [`Generator`] dispatches exhaustively and is
//! selected by name at configuration time.

pub mod aicg;
pub mod clementi;
pub mod debye_huckel;
pub mod excluded_volume;
pub mod go_contact;

use crate::core::document::ForceFieldData;
use crate::core::forcefield::params::ForceFieldParams;
use crate::core::models::bead::BeadKind;
use crate::core::models::chain::Chain;
use crate::core::models::group::Group;
use crate::engine::error::EngineError;
use toml::Value;

pub use aicg::Aicg2Plus;
pub use clementi::ClementiGo;
pub use debye_huckel::DebyeHuckel;
pub use excluded_volume::ExcludedVolume;
pub use go_contact::GoContact;

pub trait ForceFieldGenerator {
    /// The name this generator is selected by in configuration files.
    fn name(&self) -> &'static str;

    /// Verifies that every bead of the chain is of a kind this generator
    /// can handle.
    fn check_bead_kinds(&self, chain: &Chain) -> Result<(), EngineError>;

    /// Emits the terms defined within one group.
    fn generate_intra(&self, out: &mut ForceFieldData, group: &Group) -> Result<(), EngineError>;

    /// Emits the terms defined between two groups.
    fn generate_inter(
        &self,
        out: &mut ForceFieldData,
        lhs: &Group,
        rhs: &Group,
    ) -> Result<(), EngineError>;
}

/// The closed set of available generators.
#[derive(Debug, Clone)]
pub enum Generator {
    Aicg2Plus(Aicg2Plus),
    GoContact(GoContact),
    ClementiGo(ClementiGo),
    ExcludedVolume(ExcludedVolume),
    DebyeHuckel(DebyeHuckel),
}

impl Generator {
    /// Builds the generator selected by `name`, taking its parameter section
    /// from the bundle. A missing section or an unknown name is an error.
    pub fn from_name(name: &str, params: &ForceFieldParams) -> Result<Self, EngineError> {
        match name {
            "AICG2+" => {
                let p = params
                    .aicg2_plus
                    .clone()
                    .ok_or(EngineError::MissingSection {
                        generator: "AICG2+",
                        section: "aicg2_plus",
                    })?;
                Ok(Self::Aicg2Plus(Aicg2Plus::new(p)))
            }
            "GoContact" => {
                let p = params
                    .go_contact
                    .clone()
                    .ok_or(EngineError::MissingSection {
                        generator: "GoContact",
                        section: "go_contact",
                    })?;
                Ok(Self::GoContact(GoContact::new(p)))
            }
            "ClementiGo" => {
                let p = params
                    .clementi_go
                    .clone()
                    .ok_or(EngineError::MissingSection {
                        generator: "ClementiGo",
                        section: "clementi_go",
                    })?;
                Ok(Self::ClementiGo(ClementiGo::new(p)))
            }
            "ExcludedVolume" => {
                let p = params
                    .excluded_volume
                    .clone()
                    .ok_or(EngineError::MissingSection {
                        generator: "ExcludedVolume",
                        section: "excluded_volume",
                    })?;
                Ok(Self::ExcludedVolume(ExcludedVolume::new(p)))
            }
            "DebyeHuckel" => {
                let p = params
                    .electrostatics
                    .clone()
                    .ok_or(EngineError::MissingSection {
                        generator: "DebyeHuckel",
                        section: "electrostatics",
                    })?;
                Ok(Self::DebyeHuckel(DebyeHuckel::new(p)))
            }
            _ => Err(EngineError::UnknownGenerator {
                name: name.to_string(),
            }),
        }
    }
}

impl ForceFieldGenerator for Generator {
    fn name(&self) -> &'static str {
        match self {
            Self::Aicg2Plus(g) => g.name(),
            Self::GoContact(g) => g.name(),
            Self::ClementiGo(g) => g.name(),
            Self::ExcludedVolume(g) => g.name(),
            Self::DebyeHuckel(g) => g.name(),
        }
    }

    fn check_bead_kinds(&self, chain: &Chain) -> Result<(), EngineError> {
        match self {
            Self::Aicg2Plus(g) => g.check_bead_kinds(chain),
            Self::GoContact(g) => g.check_bead_kinds(chain),
            Self::ClementiGo(g) => g.check_bead_kinds(chain),
            Self::ExcludedVolume(g) => g.check_bead_kinds(chain),
            Self::DebyeHuckel(g) => g.check_bead_kinds(chain),
        }
    }

    fn generate_intra(&self, out: &mut ForceFieldData, group: &Group) -> Result<(), EngineError> {
        match self {
            Self::Aicg2Plus(g) => g.generate_intra(out, group),
            Self::GoContact(g) => g.generate_intra(out, group),
            Self::ClementiGo(g) => g.generate_intra(out, group),
            Self::ExcludedVolume(g) => g.generate_intra(out, group),
            Self::DebyeHuckel(g) => g.generate_intra(out, group),
        }
    }

    fn generate_inter(
        &self,
        out: &mut ForceFieldData,
        lhs: &Group,
        rhs: &Group,
    ) -> Result<(), EngineError> {
        match self {
            Self::Aicg2Plus(g) => g.generate_inter(out, lhs, rhs),
            Self::GoContact(g) => g.generate_inter(out, lhs, rhs),
            Self::ClementiGo(g) => g.generate_inter(out, lhs, rhs),
            Self::ExcludedVolume(g) => g.generate_inter(out, lhs, rhs),
            Self::DebyeHuckel(g) => g.generate_inter(out, lhs, rhs),
        }
    }
}

/// Metadata keys that identify a mergeable local term table.
pub(crate) const LOCAL_MERGE_KEYS: [&str; 3] = ["interaction", "potential", "topology"];

/// Metadata keys that identify a mergeable global pair table.
pub(crate) const GLOBAL_MERGE_KEYS: [&str; 4] =
    ["interaction", "potential", "ignore", "spatial_partition"];

pub(crate) fn index_array(indices: &[usize]) -> Value {
    Value::Array(indices.iter().map(|&i| Value::Integer(i as i64)).collect())
}

pub(crate) fn float_array(values: &[f64]) -> Value {
    Value::Array(values.iter().map(|&v| Value::Float(v)).collect())
}

/// Chains of carbon-alpha beads only; shared by the generators that rely on
/// atomistic roles or residue-level geometry.
pub(crate) fn require_carbon_alpha(
    generator: &'static str,
    chain: &Chain,
) -> Result<(), EngineError> {
    for bead in chain {
        if bead.kind() != BeadKind::CarbonAlpha {
            return Err(EngineError::UnsupportedBeadKind {
                generator,
                chain: chain.name().to_string(),
                kind: bead.kind(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::params::{ForceFieldParams, GoContactParams};
    use std::collections::BTreeMap;

    fn bundle() -> ForceFieldParams {
        ForceFieldParams {
            masses: BTreeMap::new(),
            aicg2_plus: None,
            go_contact: Some(GoContactParams {
                coef_contact: 0.3,
                contact_threshold: 6.5,
            }),
            clementi_go: None,
            excluded_volume: None,
            electrostatics: None,
        }
    }

    #[test]
    fn from_name_selects_by_configuration_name() {
        let generator = Generator::from_name("GoContact", &bundle()).unwrap();
        assert_eq!(generator.name(), "GoContact");
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        let err = Generator::from_name("Lennard-Jones", &bundle()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownGenerator { .. }));
    }

    #[test]
    fn from_name_requires_the_parameter_section() {
        let err = Generator::from_name("AICG2+", &bundle()).unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingSection {
                generator: "AICG2+",
                section: "aicg2_plus",
            }
        );
    }
}
