//! The AICG2+ generator: structure-based local terms with atomistic contact
//! energies, plus flexible-local corrections for regions without a rigid
//! native structure.

use super::{float_array, index_array, require_carbon_alpha, ForceFieldGenerator, LOCAL_MERGE_KEYS};
use crate::core::document::{meta, ForceFieldData, Term, TermTable};
use crate::core::forcefield::params::AicgParams;
use crate::core::geometry::{dihedral, distance};
use crate::core::models::bead::Bead;
use crate::core::models::chain::Chain;
use crate::core::models::group::Group;
use crate::engine::contact::contact_coefficient;
use crate::engine::error::EngineError;
use crate::engine::neighbors::{min_distance_sq, ChainPairLedger};
use toml::{Table, Value};
use tracing::{debug, info};

const NAME: &str = "AICG2+";

#[derive(Debug, Clone)]
pub struct Aicg2Plus {
    params: AicgParams,
}

impl Aicg2Plus {
    pub fn new(params: AicgParams) -> Self {
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
        for (n, pair) in chain.beads().windows(2).enumerate() {
            let (b1, b2) = (&pair[0], &pair[1]);
            let mut values = Table::new();
            values.insert("indices".into(), index_array(&[b1.index(), b2.index()]));
            values.insert(
                "v0".into(),
                Value::Float(distance(b1.position(), b2.position())),
            );
            values.insert("k".into(), Value::Float(self.params.bond_coef));
            let term = if n == 0 {
                Term::with_comment(
                    values,
                    format!("AICG2+ BondLength for chain {}", chain.name()),
                )
            } else {
                Term::new(values)
            };
            table.parameters.push(term);
        }
    }

    fn gaussian_13_terms(&self, out: &mut ForceFieldData, chain: &Chain) {
        let table = out.local_table(
            meta(&[
                ("interaction", "BondLength"),
                ("potential", "Gaussian"),
                ("topology", "none"),
            ]),
            &LOCAL_MERGE_KEYS,
        );
        for window in chain.beads().windows(3) {
            if window.iter().any(Bead::is_flexible) {
                continue;
            }
            let (b1, b3) = (&window[0], &window[2]);
            let mut values = Table::new();
            values.insert("indices".into(), index_array(&[b1.index(), b3.index()]));
            values.insert(
                "v0".into(),
                Value::Float(distance(b1.position(), b3.position())),
            );
            values.insert("sigma".into(), Value::Float(self.params.sigma_13));
            values.insert(
                "k".into(),
                Value::Float(self.params.coef_13 * contact_coefficient(b1, b3, &self.params)),
            );
            table.parameters.push(Term::new(values));
        }
    }

    fn flexible_angle_env(&self, table: &mut TermTable) {
        let flp = &self.params.flexible_local;
        for (name, ys) in &flp.angle_term1 {
            table.env.insert(format!("y1_{}", name), float_array(ys));
        }
        for (name, ys) in &flp.angle_term2 {
            table.env.insert(format!("y2_{}", name), float_array(ys));
        }
    }

    /// Checks that every flexible-local window of the chain has its lookup
    /// table entries, so emission cannot fail halfway through a group.
    fn check_env_tables(&self, chain: &Chain) -> Result<(), EngineError> {
        let flp = &self.params.flexible_local;
        for window in chain.beads().windows(3) {
            let name = window[1].name();
            if !flp.angle_term1.contains_key(name) {
                return Err(EngineError::MissingEnvEntry {
                    table: "angle_term1",
                    key: name.to_string(),
                });
            }
            if !flp.angle_term2.contains_key(name) {
                return Err(EngineError::MissingEnvEntry {
                    table: "angle_term2",
                    key: name.to_string(),
                });
            }
        }
        for window in chain.beads().windows(4) {
            let key = format!("{}-{}", window[1].name(), window[2].name());
            if !flp.dihedral_term.contains_key(&key) {
                return Err(EngineError::MissingEnvEntry {
                    table: "dihedral_term",
                    key,
                });
            }
        }
        Ok(())
    }

    fn flexible_angle_terms(&self, out: &mut ForceFieldData, chain: &Chain) {
        let flp = &self.params.flexible_local;
        let table = out.local_table(
            meta(&[
                ("interaction", "BondAngle"),
                ("potential", "FlexibleLocalAngle"),
                ("topology", "none"),
            ]),
            &LOCAL_MERGE_KEYS,
        );
        self.flexible_angle_env(table);

        for window in chain.beads().windows(3) {
            let (b1, b2, b3) = (&window[0], &window[1], &window[2]);
            let mut values = Table::new();
            values.insert(
                "indices".into(),
                index_array(&[b1.index(), b2.index(), b3.index()]),
            );
            values.insert("k".into(), Value::Float(flp.k_angle));
            values.insert("y".into(), Value::String(format!("y1_{}", b2.name())));
            values.insert("d2y".into(), Value::String(format!("y2_{}", b2.name())));
            table.parameters.push(Term::new(values));
        }
    }

    fn gaussian_dihedral_terms(&self, out: &mut ForceFieldData, chain: &Chain) {
        let table = out.local_table(
            meta(&[
                ("interaction", "DihedralAngle"),
                ("potential", "Gaussian"),
                ("topology", "none"),
            ]),
            &LOCAL_MERGE_KEYS,
        );
        for window in chain.beads().windows(4) {
            if window.iter().any(Bead::is_flexible) {
                continue;
            }
            let (b1, b2, b3, b4) = (&window[0], &window[1], &window[2], &window[3]);
            let mut values = Table::new();
            values.insert("indices".into(), index_array(&[b1.index(), b2.index(), b3.index(), b4.index()]));
            values.insert(
                "v0".into(),
                Value::Float(dihedral(
                    b1.position(),
                    b2.position(),
                    b3.position(),
                    b4.position(),
                )),
            );
            values.insert("sigma".into(), Value::Float(self.params.sigma_dihedral));
            values.insert(
                "k".into(),
                Value::Float(self.params.coef_14 * contact_coefficient(b1, b4, &self.params)),
            );
            table.parameters.push(Term::new(values));
        }
    }

    fn flexible_dihedral_terms(&self, out: &mut ForceFieldData, chain: &Chain) {
        let flp = &self.params.flexible_local;
        let table = out.local_table(
            meta(&[
                ("interaction", "DihedralAngle"),
                ("potential", "FlexibleLocalDihedral"),
                ("topology", "none"),
            ]),
            &LOCAL_MERGE_KEYS,
        );
        for (key, ys) in &flp.dihedral_term {
            table.env.insert(key.clone(), float_array(ys));
        }

        for window in chain.beads().windows(4) {
            let (b1, b2, b3, b4) = (&window[0], &window[1], &window[2], &window[3]);
            let mut values = Table::new();
            values.insert("indices".into(), index_array(&[b1.index(), b2.index(), b3.index(), b4.index()]));
            values.insert("k".into(), Value::Float(flp.k_dihedral));
            values.insert(
                "coef".into(),
                Value::String(format!("{}-{}", b2.name(), b3.name())),
            );
            table.parameters.push(Term::new(values));
        }
    }

    fn intra_chain_go_contacts(&self, out: &mut ForceFieldData, chain: &Chain) {
        let table = out.local_table(
            meta(&[
                ("interaction", "BondLength"),
                ("potential", "GoContact"),
                ("topology", "contact"),
            ]),
            &LOCAL_MERGE_KEYS,
        );
        let threshold_sq = self.params.go_contact_threshold * self.params.go_contact_threshold;

        let beads = chain.beads();
        // beads closer than 4 along the chain are covered by the local terms
        for i in 0..beads.len().saturating_sub(4) {
            for j in (i + 4)..beads.len() {
                let (b1, b2) = (&beads[i], &beads[j]);
                if b1.is_flexible() || b2.is_flexible() {
                    continue;
                }
                if min_distance_sq(b1, b2) < threshold_sq {
                    let mut values = Table::new();
                    values.insert("indices".into(), index_array(&[b1.index(), b2.index()]));
                    values.insert(
                        "v0".into(),
                        Value::Float(distance(b1.position(), b2.position())),
                    );
                    values.insert(
                        "k".into(),
                        Value::Float(
                            -self.params.coef_go * contact_coefficient(b1, b2, &self.params),
                        ),
                    );
                    table.parameters.push(Term::new(values));
                }
            }
        }
    }
}

impl ForceFieldGenerator for Aicg2Plus {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check_bead_kinds(&self, chain: &Chain) -> Result<(), EngineError> {
        require_carbon_alpha(NAME, chain)
    }

    fn generate_intra(&self, out: &mut ForceFieldData, group: &Group) -> Result<(), EngineError> {
        // validate the whole group before emitting anything
        for chain in group {
            self.check_bead_kinds(chain)?;
            self.check_env_tables(chain)?;
        }

        for chain in group {
            debug!(chain = chain.name(), "generating AICG2+ local parameters");
            self.bond_terms(out, chain);
            self.gaussian_13_terms(out, chain);
            self.flexible_angle_terms(out, chain);
            self.gaussian_dihedral_terms(out, chain);
            self.flexible_dihedral_terms(out, chain);
            self.intra_chain_go_contacts(out, chain);
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

        let threshold_sq = self.params.go_contact_threshold * self.params.go_contact_threshold;
        let mut ledger = ChainPairLedger::new();

        let table = out.local_table(
            meta(&[
                ("interaction", "BondLength"),
                ("potential", "GoContact"),
                ("topology", "contact"),
            ]),
            &LOCAL_MERGE_KEYS,
        );

        for chain1 in lhs {
            for chain2 in rhs {
                if chain1.name() == chain2.name() {
                    continue;
                }
                if !ledger.insert(chain1.name(), chain2.name()) {
                    continue;
                }
                info!(
                    lhs = chain1.name(),
                    rhs = chain2.name(),
                    "generating inter-chain AICG2+ Go contacts"
                );
                for b1 in chain1 {
                    for b2 in chain2 {
                        if b1.is_flexible() || b2.is_flexible() {
                            continue;
                        }
                        if min_distance_sq(b1, b2) < threshold_sq {
                            let mut values = Table::new();
                            values.insert("indices".into(), index_array(&[b1.index(), b2.index()]));
                            values.insert(
                                "v0".into(),
                                Value::Float(distance(b1.position(), b2.position())),
                            );
                            values.insert(
                                "k".into(),
                                Value::Float(
                                    -self.params.coef_go
                                        * contact_coefficient(b1, b2, &self.params),
                                ),
                            );
                            table.parameters.push(Term::new(values));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
