//! Constant-coefficient Go contacts. Unlike AICG2+, every contact gets the
//! same well depth, so this generator works for any bead kind.

use super::{index_array, ForceFieldGenerator, LOCAL_MERGE_KEYS};
use crate::core::document::{meta, ForceFieldData, Term};
use crate::core::forcefield::params::GoContactParams;
use crate::core::geometry::distance;
use crate::core::models::chain::Chain;
use crate::core::models::group::Group;
use crate::engine::error::EngineError;
use crate::engine::neighbors::{min_distance_sq, ChainPairLedger};
use toml::{Table, Value};
use tracing::info;

const NAME: &str = "GoContact";

#[derive(Debug, Clone)]
pub struct GoContact {
    params: GoContactParams,
}

impl GoContact {
    pub fn new(params: GoContactParams) -> Self {
        Self { params }
    }

    /// Appends the contacts between two chains. The first emitted term gets
    /// a comment naming the chain pair.
    fn chain_pair_contacts(&self, out: &mut ForceFieldData, chain1: &Chain, chain2: &Chain) {
        info!(
            lhs = chain1.name(),
            rhs = chain2.name(),
            coefficient = self.params.coef_contact,
            "generating Go contact parameters"
        );
        let threshold_sq = self.params.contact_threshold * self.params.contact_threshold;
        let table = out.local_table(
            meta(&[
                ("interaction", "BondLength"),
                ("potential", "GoContact"),
                ("topology", "contact"),
            ]),
            &LOCAL_MERGE_KEYS,
        );

        let mut first = true;
        for b1 in chain1 {
            if b1.is_flexible() {
                continue;
            }
            for b2 in chain2 {
                if b2.is_flexible() {
                    continue;
                }
                if min_distance_sq(b1, b2) < threshold_sq {
                    let mut values = Table::new();
                    values.insert("indices".into(), index_array(&[b1.index(), b2.index()]));
                    values.insert(
                        "v0".into(),
                        Value::Float(distance(b1.position(), b2.position())),
                    );
                    values.insert("k".into(), Value::Float(-self.params.coef_contact));
                    let term = if first {
                        first = false;
                        Term::with_comment(
                            values,
                            format!(
                                "Go Contact Potential between chain {} and chain {}",
                                chain1.name(),
                                chain2.name()
                            ),
                        )
                    } else {
                        Term::new(values)
                    };
                    table.parameters.push(term);
                }
            }
        }
    }
}

impl ForceFieldGenerator for GoContact {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check_bead_kinds(&self, _chain: &Chain) -> Result<(), EngineError> {
        Ok(())
    }

    /// Contacts between distinct chains of the same group.
    fn generate_intra(&self, out: &mut ForceFieldData, group: &Group) -> Result<(), EngineError> {
        let chains = group.chains();
        for i in 0..chains.len() {
            for j in (i + 1)..chains.len() {
                self.chain_pair_contacts(out, &chains[i], &chains[j]);
            }
        }
        Ok(())
    }

    fn generate_inter(
        &self,
        out: &mut ForceFieldData,
        lhs: &Group,
        rhs: &Group,
    ) -> Result<(), EngineError> {
        let mut ledger = ChainPairLedger::new();
        for chain1 in lhs {
            for chain2 in rhs {
                if chain1.name() == chain2.name() {
                    continue;
                }
                if !ledger.insert(chain1.name(), chain2.name()) {
                    continue;
                }
                self.chain_pair_contacts(out, chain1, chain2);
            }
        }
        Ok(())
    }
}
