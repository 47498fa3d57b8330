//! Soft-core excluded volume over every bead, emitted as one global pair
//! table with per-bead radii.

use super::{ForceFieldGenerator, GLOBAL_MERGE_KEYS};
use crate::core::document::{ForceFieldData, Term};
use crate::core::forcefield::params::ExcludedVolumeParams;
use crate::core::models::chain::Chain;
use crate::core::models::group::Group;
use crate::engine::error::EngineError;
use toml::{Table, Value};

const NAME: &str = "ExcludedVolume";

#[derive(Debug, Clone)]
pub struct ExcludedVolume {
    params: ExcludedVolumeParams,
}

impl ExcludedVolume {
    pub fn new(params: ExcludedVolumeParams) -> Self {
        Self { params }
    }

    /// The table metadata. The inter-group variant restricts the pair list
    /// to pairs spanning the two groups via `ignore.group.inter`.
    fn table_meta(&self, inter_groups: Option<(&str, &str)>) -> Table {
        let mut within = Table::new();
        within.insert("bond".into(), Value::Integer(3));
        within.insert("contact".into(), Value::Integer(1));

        let mut ignore = Table::new();
        ignore.insert("particles_within".into(), Value::Table(within));
        ignore.insert("molecule".into(), Value::String("Nothing".into()));
        if let Some((lhs, rhs)) = inter_groups {
            let mut group = Table::new();
            group.insert(
                "inter".into(),
                Value::Array(vec![
                    Value::String(lhs.to_string()),
                    Value::String(rhs.to_string()),
                ]),
            );
            ignore.insert("group".into(), Value::Table(group));
        }

        let mut partition = Table::new();
        partition.insert("type".into(), Value::String("CellList".into()));
        partition.insert("margin".into(), Value::Float(0.5));

        let mut meta = Table::new();
        meta.insert("interaction".into(), Value::String("Pair".into()));
        meta.insert("potential".into(), Value::String("ExcludedVolume".into()));
        meta.insert("ignore".into(), Value::Table(ignore));
        meta.insert("spatial_partition".into(), Value::Table(partition));
        meta.insert("epsilon".into(), Value::Float(self.params.epsilon));
        meta
    }

    fn radius_terms(&self, terms: &mut Vec<Term>, group: &Group) -> Result<(), EngineError> {
        for bead in group.beads() {
            let radius =
                *self
                    .params
                    .radii
                    .get(bead.name())
                    .ok_or_else(|| EngineError::MissingRadius {
                        bead_name: bead.name().to_string(),
                    })?;
            let mut values = Table::new();
            values.insert("index".into(), Value::Integer(bead.index() as i64));
            values.insert("radius".into(), Value::Float(radius));
            terms.push(Term::new(values));
        }
        Ok(())
    }
}

impl ForceFieldGenerator for ExcludedVolume {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check_bead_kinds(&self, _chain: &Chain) -> Result<(), EngineError> {
        Ok(())
    }

    fn generate_intra(&self, out: &mut ForceFieldData, group: &Group) -> Result<(), EngineError> {
        let mut terms = Vec::new();
        self.radius_terms(&mut terms, group)?;
        let table = out.global_table(self.table_meta(None), &GLOBAL_MERGE_KEYS);
        table.parameters.extend(terms);
        Ok(())
    }

    fn generate_inter(
        &self,
        out: &mut ForceFieldData,
        lhs: &Group,
        rhs: &Group,
    ) -> Result<(), EngineError> {
        let mut terms = Vec::new();
        self.radius_terms(&mut terms, lhs)?;
        self.radius_terms(&mut terms, rhs)?;
        let table = out.global_table(
            self.table_meta(Some((lhs.name(), rhs.name()))),
            &GLOBAL_MERGE_KEYS,
        );
        table.parameters.extend(terms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::bead::{Bead, BeadKind};
    use nalgebra::Point3;
    use std::collections::BTreeMap;

    fn bead(index: usize, name: &str) -> Bead {
        let atom = Atom::new(" CA ", name, index as i32, " C", Point3::origin());
        Bead::new(index, name, BeadKind::CarbonAlpha, 71.09, Point3::origin(), vec![atom])
    }

    fn group(name: &str, beads: Vec<Bead>) -> Group {
        let mut chain = Chain::new("A");
        for b in beads {
            chain.push(b);
        }
        let mut group = Group::new(name);
        group.push(chain);
        group
    }

    fn generator() -> ExcludedVolume {
        ExcludedVolume::new(ExcludedVolumeParams {
            epsilon: 0.6,
            radii: BTreeMap::from([("ALA".to_string(), 3.0), ("GLY".to_string(), 2.6)]),
        })
    }

    #[test]
    fn intra_lists_every_bead_with_its_radius() {
        let mut out = ForceFieldData::new();
        generator()
            .generate_intra(&mut out, &group("m", vec![bead(0, "ALA"), bead(1, "GLY")]))
            .unwrap();

        let table = &out.global()[0];
        assert_eq!(table.meta["potential"], Value::String("ExcludedVolume".into()));
        assert_eq!(table.meta["epsilon"], Value::Float(0.6));
        assert_eq!(table.parameters.len(), 2);
        assert_eq!(table.parameters[1].values["radius"], Value::Float(2.6));
    }

    #[test]
    fn unknown_bead_name_yields_missing_radius() {
        let mut out = ForceFieldData::new();
        let err = generator()
            .generate_intra(&mut out, &group("m", vec![bead(0, "XYZ")]))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingRadius {
                bead_name: "XYZ".to_string()
            }
        );
        assert!(out.global().is_empty());
    }

    #[test]
    fn inter_table_restricts_pairs_to_the_group_pair() {
        let mut out = ForceFieldData::new();
        let lhs = group("first", vec![bead(0, "ALA")]);
        let rhs = group("second", vec![bead(1, "GLY")]);
        generator().generate_inter(&mut out, &lhs, &rhs).unwrap();

        let table = &out.global()[0];
        let inter = table.meta["ignore"]["group"]["inter"].as_array().unwrap();
        assert_eq!(inter.len(), 2);
        assert_eq!(inter[0], Value::String("first".to_string()));
        assert_eq!(table.parameters.len(), 2);
    }

    #[test]
    fn intra_and_inter_tables_do_not_merge() {
        let mut out = ForceFieldData::new();
        let lhs = group("first", vec![bead(0, "ALA")]);
        let rhs = group("second", vec![bead(1, "GLY")]);
        let exv = generator();
        exv.generate_intra(&mut out, &lhs).unwrap();
        exv.generate_intra(&mut out, &rhs).unwrap();
        exv.generate_inter(&mut out, &lhs, &rhs).unwrap();

        // the two intra calls merge; the inter table differs in `ignore`
        assert_eq!(out.global().len(), 2);
        assert_eq!(out.global()[0].parameters.len(), 2);
        assert_eq!(out.global()[1].parameters.len(), 2);
    }
}
