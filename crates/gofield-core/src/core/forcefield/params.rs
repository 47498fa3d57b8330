use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Per-category contact energy weights of the AICG2+ scheme, one per
/// classification category plus the long-range count and the offset.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactWeights {
    pub backbone_hydrogen_bond: f64,
    pub backbone_donor_acceptor: f64,
    pub backbone_carbon_contact: f64,
    pub backbone_contact: f64,
    pub sidechain_hydrogen_bond: f64,
    pub sidechain_donor_acceptor: f64,
    pub sidechain_salt_bridge: f64,
    pub sidechain_carbon_contact: f64,
    pub sidechain_charge_contact: f64,
    pub sidechain_contact: f64,
    pub heterogeneous_hydrogen_bond: f64,
    pub heterogeneous_donor_acceptor: f64,
    pub heterogeneous_carbon_contact: f64,
    pub heterogeneous_charge_contact: f64,
    pub heterogeneous_contact: f64,
    pub long_range_contact: f64,
    pub offset: f64,
}

/// Flexible-local potential data: spring constants plus the bead-name-keyed
/// interpolation tables shared through the emitted `env` block. Sorted maps
/// keep the emitted environment deterministic.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FlexibleLocalParams {
    pub k_angle: f64,
    pub k_dihedral: f64,
    pub angle_term1: BTreeMap<String, [f64; 10]>,
    pub angle_term2: BTreeMap<String, [f64; 10]>,
    pub dihedral_term: BTreeMap<String, [f64; 7]>,
}

/// Parameters of the AICG2+ generator.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AicgParams {
    /// Lower clamp bound of the contact coefficient.
    pub e_min: f64,
    /// Upper clamp bound of the contact coefficient.
    pub e_max: f64,

    /// Bead-pair distance below which a native (Go) contact is formed.
    pub go_contact_threshold: f64,
    /// Atom-pair distance below which a pair is a short-range contact.
    pub atom_contact_cutoff: f64,
    pub hydrogen_bond_cutoff: f64,
    pub salt_bridge_cutoff: f64,

    /// Base coefficient of the Gaussian 1-3 term.
    pub coef_13: f64,
    /// Base coefficient of the Gaussian dihedral term.
    pub coef_14: f64,
    /// Base coefficient of the Go contact term.
    pub coef_go: f64,
    /// Harmonic bond spring constant.
    pub bond_coef: f64,
    /// Width of the Gaussian 1-3 term.
    pub sigma_13: f64,
    /// Width of the Gaussian dihedral term.
    pub sigma_dihedral: f64,

    pub contact_energy_coefficients: ContactWeights,
    pub flexible_local: FlexibleLocalParams,
}

impl AicgParams {
    /// Emits the only configuration diagnostic defined for this bundle: the
    /// Go-contact threshold is expected to exceed the atom-contact cutoff,
    /// otherwise long-range counting degenerates to zero. A warning, not an
    /// error.
    pub fn check_cutoff_relation(&self) {
        if self.go_contact_threshold <= self.atom_contact_cutoff {
            warn!(
                go_contact_threshold = self.go_contact_threshold,
                atom_contact_cutoff = self.atom_contact_cutoff,
                "go contact threshold is not larger than the atom contact cutoff; \
                 long-range contact counts will be zero"
            );
        }
    }
}

/// Parameters of the constant-coefficient Go-contact generator.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GoContactParams {
    pub coef_contact: f64,
    pub contact_threshold: f64,
}

/// Parameters of the Clementi-style Go generator.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClementiGoParams {
    pub coef_bond: f64,
    pub coef_angle: f64,
    pub coef_dihedral_1: f64,
    pub coef_dihedral_3: f64,
    pub coef_contact: f64,
    pub contact_threshold: f64,
}

/// Parameters of the excluded-volume generator: one well depth plus a
/// bead-name-keyed radius table.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExcludedVolumeParams {
    pub epsilon: f64,
    pub radii: BTreeMap<String, f64>,
}

/// Parameters of the Debye-Hückel electrostatics generator.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ElectrostaticsParams {
    pub charge: BTreeMap<String, f64>,
}

/// The full parameter bundle, deserialized from one TOML file. Sections for
/// generators that are not selected may be omitted.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ForceFieldParams {
    /// Residue-name-keyed bead masses used by the coarse-graining builder.
    #[serde(default)]
    pub masses: BTreeMap<String, f64>,
    pub aicg2_plus: Option<AicgParams>,
    pub go_contact: Option<GoContactParams>,
    pub clementi_go: Option<ClementiGoParams>,
    pub excluded_volume: Option<ExcludedVolumeParams>,
    pub electrostatics: Option<ElectrostaticsParams>,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("file I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl ForceFieldParams {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let params: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        if let Some(aicg) = &params.aicg2_plus {
            aicg.check_cutoff_relation();
        }
        Ok(params)
    }
}
