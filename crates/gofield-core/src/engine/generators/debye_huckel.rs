//! Debye-Hückel electrostatics: one global pair table listing the charged
//! beads. Ionic-strength handling lives in the simulator, not here.

use super::{ForceFieldGenerator, GLOBAL_MERGE_KEYS};
use crate::core::document::{ForceFieldData, Term};
use crate::core::forcefield::params::ElectrostaticsParams;
use crate::core::models::chain::Chain;
use crate::core::models::group::Group;
use crate::engine::error::EngineError;
use toml::{Table, Value};

const NAME: &str = "DebyeHuckel";

#[derive(Debug, Clone)]
pub struct DebyeHuckel {
    params: ElectrostaticsParams,
}

impl DebyeHuckel {
    pub fn new(params: ElectrostaticsParams) -> Self {
        Self { params }
    }

    fn table_meta(&self) -> Table {
        let mut within = Table::new();
        within.insert("bond".into(), Value::Integer(3));
        within.insert("contact".into(), Value::Integer(1));

        let mut ignore = Table::new();
        ignore.insert("particles_within".into(), Value::Table(within));
        ignore.insert("molecule".into(), Value::String("Nothing".into()));

        let mut partition = Table::new();
        partition.insert("type".into(), Value::String("CellList".into()));
        partition.insert("margin".into(), Value::Float(0.5));

        let mut meta = Table::new();
        meta.insert("interaction".into(), Value::String("Pair".into()));
        meta.insert("potential".into(), Value::String("DebyeHuckel".into()));
        meta.insert("ignore".into(), Value::Table(ignore));
        meta.insert("spatial_partition".into(), Value::Table(partition));
        meta
    }
}

impl ForceFieldGenerator for DebyeHuckel {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check_bead_kinds(&self, _chain: &Chain) -> Result<(), EngineError> {
        Ok(())
    }

    fn generate_intra(&self, out: &mut ForceFieldData, group: &Group) -> Result<(), EngineError> {
        let mut terms = Vec::new();
        for bead in group.beads() {
            let charge =
                *self
                    .params
                    .charge
                    .get(bead.name())
                    .ok_or_else(|| EngineError::MissingCharge {
                        bead_name: bead.name().to_string(),
                    })?;
            if charge == 0.0 {
                continue;
            }
            let mut values = Table::new();
            values.insert("index".into(), Value::Integer(bead.index() as i64));
            values.insert("charge".into(), Value::Float(charge));
            terms.push(Term::new(values));
        }

        let table = out.global_table(self.table_meta(), &GLOBAL_MERGE_KEYS);
        table.parameters.extend(terms);
        Ok(())
    }

    /// Charges are per bead, not per pair; the intra pass already listed
    /// every bead of every group.
    fn generate_inter(
        &self,
        _out: &mut ForceFieldData,
        _lhs: &Group,
        _rhs: &Group,
    ) -> Result<(), EngineError> {
        Ok(())
    }
}
