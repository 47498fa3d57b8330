//! The Clementi-style Go model: harmonic bonds and angles, a 1/3-periodic
//! dihedral, and 10-12 native contacts with a single well depth.

use super::{index_array, require_carbon_alpha, ForceFieldGenerator, LOCAL_MERGE_KEYS};
use crate::core::document::{meta, ForceFieldData, Term};
use crate::core::forcefield::params::ClementiGoParams;
use crate::core::geometry::{angle, dihedral, distance};
use crate::core::models::chain::Chain;
use crate::core::models::group::Group;
use crate::engine::error::EngineError;
use crate::engine::neighbors::{min_distance_sq, ChainPairLedger};
use toml::{Table, Value};
use tracing::debug;

const NAME: &str = "ClementiGo";

#[derive(Debug, Clone)]
pub struct ClementiGo {
    params: ClementiGoParams,
}

impl ClementiGo {
    pub fn new(params: ClementiGoParams) -> Self {
        Self { params }
    }

    fn bond_terms(&self, out: &mut ForceFieldData, chain: &Chain) {
        let table = out.local_table(
            meta(&[
                ("interaction", "BondLength"),
                ("potential", "Harmonic"),
                ("topology", "bond"),
            ]),
            &LOCAL_MERGE_KEYS,
        );
        for pair in chain.beads().windows(2) {
            let (b1, b2) = (&pair[0], &pair[1]);
            let mut values = Table::new();
            values.insert("indices".into(), index_array(&[b1.index(), b2.index()]));
            values.insert(
                "v0".into(),
                Value::Float(distance(b1.position(), b2.position())),
            );
            values.insert("k".into(), Value::Float(self.params.coef_bond));
            table.parameters.push(Term::new(values));
        }
    }

    fn angle_terms(&self, out: &mut ForceFieldData, chain: &Chain) {
        let table = out.local_table(
            meta(&[
                ("interaction", "BondAngle"),
                ("potential", "Harmonic"),
                ("topology", "none"),
            ]),
            &LOCAL_MERGE_KEYS,
        );
        for window in chain.beads().windows(3) {
            let (b1, b2, b3) = (&window[0], &window[1], &window[2]);
            let mut values = Table::new();
            values.insert(
                "indices".into(),
                index_array(&[b1.index(), b2.index(), b3.index()]),
            );
            values.insert(
                "v0".into(),
                Value::Float(angle(b1.position(), b2.position(), b3.position())),
            );
            values.insert("k".into(), Value::Float(self.params.coef_angle));
            table.parameters.push(Term::new(values));
        }
    }

    fn dihedral_terms(&self, out: &mut ForceFieldData, chain: &Chain) {
        let table = out.local_table(
            meta(&[
                ("interaction", "DihedralAngle"),
                ("potential", "ClementiDihedral"),
                ("topology", "none"),
            ]),
            &LOCAL_MERGE_KEYS,
        );
        for window in chain.beads().windows(4) {
            let (b1, b2, b3, b4) = (&window[0], &window[1], &window[2], &window[3]);
            let mut values = Table::new();
            values.insert(
                "indices".into(),
                index_array(&[b1.index(), b2.index(), b3.index(), b4.index()]),
            );
            values.insert(
                "eq".into(),
                Value::Float(dihedral(
                    b1.position(),
                    b2.position(),
                    b3.position(),
                    b4.position(),
                )),
            );
            values.insert("k1".into(), Value::Float(self.params.coef_dihedral_1));
            values.insert("k3".into(), Value::Float(self.params.coef_dihedral_3));
            table.parameters.push(Term::new(values));
        }
    }

    fn intra_chain_contacts(&self, out: &mut ForceFieldData, chain: &Chain) {
        let table = out.local_table(
            meta(&[
                ("interaction", "BondLength"),
                ("potential", "Go1012Contact"),
                ("topology", "contact"),
            ]),
            &LOCAL_MERGE_KEYS,
        );
        let threshold_sq = self.params.contact_threshold * self.params.contact_threshold;
        let beads = chain.beads();
        for i in 0..beads.len().saturating_sub(4) {
            for j in (i + 4)..beads.len() {
                let (b1, b2) = (&beads[i], &beads[j]);
                if min_distance_sq(b1, b2) < threshold_sq {
                    let mut values = Table::new();
                    values.insert("indices".into(), index_array(&[b1.index(), b2.index()]));
                    values.insert(
                        "eq".into(),
                        Value::Float(distance(b1.position(), b2.position())),
                    );
                    values.insert("k".into(), Value::Float(self.params.coef_contact));
                    table.parameters.push(Term::new(values));
                }
            }
        }
    }
}

impl ForceFieldGenerator for ClementiGo {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check_bead_kinds(&self, chain: &Chain) -> Result<(), EngineError> {
        require_carbon_alpha(NAME, chain)
    }

    fn generate_intra(&self, out: &mut ForceFieldData, group: &Group) -> Result<(), EngineError> {
        for chain in group {
            self.check_bead_kinds(chain)?;
        }
        for chain in group {
            debug!(chain = chain.name(), "generating Clementi Go parameters");
            self.bond_terms(out, chain);
            self.angle_terms(out, chain);
            self.dihedral_terms(out, chain);
            self.intra_chain_contacts(out, chain);
        }
        Ok(())
    }

    fn generate_inter(
        &self,
        out: &mut ForceFieldData,
        lhs: &Group,
        rhs: &Group,
    ) -> Result<(), EngineError> {
        for chain in lhs.iter().chain(rhs.iter()) {
            self.check_bead_kinds(chain)?;
        }

        let threshold_sq = self.params.contact_threshold * self.params.contact_threshold;
        let table = out.local_table(
            meta(&[
                ("interaction", "BondLength"),
                ("potential", "Go1012Contact"),
                ("topology", "contact"),
            ]),
            &LOCAL_MERGE_KEYS,
        );

        let mut ledger = ChainPairLedger::new();
        for chain1 in lhs {
            for chain2 in rhs {
                if chain1.name() == chain2.name() {
                    continue;
                }
                if !ledger.insert(chain1.name(), chain2.name()) {
                    continue;
                }
                for b1 in chain1 {
                    for b2 in chain2 {
                        if min_distance_sq(b1, b2) < threshold_sq {
                            let mut values = Table::new();
                            values.insert("indices".into(), index_array(&[b1.index(), b2.index()]));
                            values.insert(
                                "eq".into(),
                                Value::Float(distance(b1.position(), b2.position())),
                            );
                            values.insert("k".into(), Value::Float(self.params.coef_contact));
                            table.parameters.push(Term::new(values));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
