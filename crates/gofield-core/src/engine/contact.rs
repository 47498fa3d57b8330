//! The AICG2+ contact coefficient: an atomistic tally over heavy-atom pairs
//! of two beads, reduced to one energy weight.

use crate::core::forcefield::params::{AicgParams, ContactWeights};
use crate::core::forcefield::roles::{self, AtomLocation};
use crate::core::geometry::distance;
use crate::core::models::bead::{Bead, BeadKind};

/// Coefficient used for bead pairs without atomistic detail (anything other
/// than a CarbonAlpha/CarbonAlpha pair).
pub const DEFAULT_CONTACT_COEF: f64 = 0.3;

/// Per-category atom-pair counts between two beads. Field names mirror the
/// weights in [`ContactWeights`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactCounts {
    pub backbone_hydrogen_bond: usize,
    pub backbone_donor_acceptor: usize,
    pub backbone_carbon_contact: usize,
    pub backbone_contact: usize,

    pub sidechain_hydrogen_bond: usize,
    pub sidechain_salt_bridge: usize,
    pub sidechain_donor_acceptor: usize,
    pub sidechain_charge_contact: usize,
    pub sidechain_carbon_contact: usize,
    pub sidechain_contact: usize,

    pub heterogeneous_hydrogen_bond: usize,
    pub heterogeneous_donor_acceptor: usize,
    pub heterogeneous_charge_contact: usize,
    pub heterogeneous_carbon_contact: usize,
    pub heterogeneous_contact: usize,

    pub short_range: usize,
    pub long_range: usize,
}

impl ContactCounts {
    /// Counts every heavy-atom pair of the two beads into its category.
    ///
    /// Every pair closer than `go_contact_threshold` increments the
    /// long-range count; pairs closer than `atom_contact_cutoff` are also
    /// classified as short-range contacts. The raw tally double-counts the
    /// short-range pairs in `long_range`; [`ContactCounts::normalized`]
    /// resolves that.
    pub fn tally(bead1: &Bead, bead2: &Bead, params: &AicgParams) -> Self {
        let mut counts = Self::default();

        for (atom1, role1) in bead1.heavy_atoms() {
            for (atom2, role2) in bead2.heavy_atoms() {
                let dist = distance(&atom1.position, &atom2.position);

                if dist < params.go_contact_threshold {
                    counts.long_range += 1;
                }
                if dist >= params.atom_contact_cutoff {
                    continue;
                }
                counts.short_range += 1;

                let da_pair = roles::is_donor_acceptor_pair(role1, role2);
                let charged = role1.charged() || role2.charged();
                let carbon = role1.carbon || role2.carbon;

                match (role1.location, role2.location) {
                    (AtomLocation::Backbone, AtomLocation::Backbone) => {
                        if da_pair {
                            if dist < params.hydrogen_bond_cutoff {
                                counts.backbone_hydrogen_bond += 1;
                            } else {
                                counts.backbone_donor_acceptor += 1;
                            }
                        } else if carbon {
                            counts.backbone_carbon_contact += 1;
                        } else {
                            counts.backbone_contact += 1;
                        }
                    }
                    (AtomLocation::Sidechain, AtomLocation::Sidechain) => {
                        if da_pair {
                            if roles::is_cation_anion_pair(role1, role2) {
                                if dist < params.salt_bridge_cutoff {
                                    counts.sidechain_salt_bridge += 1;
                                } else {
                                    counts.sidechain_charge_contact += 1;
                                }
                            } else if dist < params.hydrogen_bond_cutoff {
                                counts.sidechain_hydrogen_bond += 1;
                            } else if charged {
                                counts.sidechain_charge_contact += 1;
                            } else {
                                counts.sidechain_donor_acceptor += 1;
                            }
                        } else if charged {
                            counts.sidechain_charge_contact += 1;
                        } else if carbon {
                            counts.sidechain_carbon_contact += 1;
                        } else {
                            counts.sidechain_contact += 1;
                        }
                    }
                    // backbone-sidechain in either order
                    _ => {
                        if da_pair {
                            if dist < params.hydrogen_bond_cutoff {
                                counts.heterogeneous_hydrogen_bond += 1;
                            } else if charged {
                                counts.heterogeneous_charge_contact += 1;
                            } else {
                                counts.heterogeneous_donor_acceptor += 1;
                            }
                        } else if charged {
                            counts.heterogeneous_charge_contact += 1;
                        } else if carbon {
                            counts.heterogeneous_carbon_contact += 1;
                        } else {
                            counts.heterogeneous_contact += 1;
                        }
                    }
                }
            }
        }
        counts
    }

    /// Applies the two post-tally corrections.
    ///
    /// A residue pair cannot form more than one salt bridge; surplus salt
    /// bridges become sidechain charge contacts (backbones never form salt
    /// bridges). The long-range count then drops the short-range pairs it
    /// contains. When the tally ran with a threshold not larger than the
    /// cutoff the long-range count carries no information and is zeroed.
    pub fn normalized(mut self, params: &AicgParams) -> Self {
        if self.sidechain_salt_bridge > 1 {
            self.sidechain_charge_contact += self.sidechain_salt_bridge - 1;
            self.sidechain_salt_bridge = 1;
        }

        if params.atom_contact_cutoff < params.go_contact_threshold {
            // every short-range pair is counted in long_range as well
            assert!(
                self.long_range >= self.short_range,
                "long-range contact count ({}) fell below the short-range count ({})",
                self.long_range,
                self.short_range
            );
            self.long_range -= self.short_range;
        } else {
            self.long_range = 0;
        }
        self
    }

    /// Weighted sum of the normalized counts, including the offset.
    pub fn energy(&self, w: &ContactWeights) -> f64 {
        w.offset
            + w.backbone_hydrogen_bond * self.backbone_hydrogen_bond as f64
            + w.backbone_donor_acceptor * self.backbone_donor_acceptor as f64
            + w.backbone_carbon_contact * self.backbone_carbon_contact as f64
            + w.backbone_contact * self.backbone_contact as f64
            + w.sidechain_hydrogen_bond * self.sidechain_hydrogen_bond as f64
            + w.sidechain_donor_acceptor * self.sidechain_donor_acceptor as f64
            + w.sidechain_salt_bridge * self.sidechain_salt_bridge as f64
            + w.sidechain_carbon_contact * self.sidechain_carbon_contact as f64
            + w.sidechain_charge_contact * self.sidechain_charge_contact as f64
            + w.sidechain_contact * self.sidechain_contact as f64
            + w.heterogeneous_hydrogen_bond * self.heterogeneous_hydrogen_bond as f64
            + w.heterogeneous_donor_acceptor * self.heterogeneous_donor_acceptor as f64
            + w.heterogeneous_carbon_contact * self.heterogeneous_carbon_contact as f64
            + w.heterogeneous_charge_contact * self.heterogeneous_charge_contact as f64
            + w.heterogeneous_contact * self.heterogeneous_contact as f64
            + w.long_range_contact * self.long_range as f64
    }
}

fn clamp_energy(params: &AicgParams, value: f64) -> f64 {
    if value >= params.e_max {
        params.e_max
    } else if value <= params.e_min {
        params.e_min
    } else {
        value
    }
}

/// The contact energy coefficient of a bead pair.
///
/// CarbonAlpha pairs get the full atomistic classification clamped into
/// `[e_min, e_max]`; any other pair falls back to
/// [`DEFAULT_CONTACT_COEF`] because its atoms carry no role information
/// usable by the scheme.
pub fn contact_coefficient(bead1: &Bead, bead2: &Bead, params: &AicgParams) -> f64 {
    if bead1.kind() != BeadKind::CarbonAlpha || bead2.kind() != BeadKind::CarbonAlpha {
        return DEFAULT_CONTACT_COEF;
    }
    let counts = ContactCounts::tally(bead1, bead2, params).normalized(params);
    clamp_energy(params, counts.energy(&params.contact_energy_coefficients))
}
