//! In-memory force-field document assembled by the generators and consumed
//! by the writer.
//!
//! The document mirrors the output layout: a `local` and a `global` list of
//! term tables, each table carrying its metadata (interaction, potential,
//! topology, ...), an optional shared `env` block, and the parameter terms
//! themselves. Generators never write files; they append terms here and the
//! writer serializes the finished document in one pass.

use std::collections::BTreeMap;
use toml::{Table, Value};

/// One parameter entry of a term table: the entry's key/value pairs plus an
/// optional trailing comment rendered on the same output line.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub values: Table,
    pub comment: Option<String>,
}

impl Term {
    pub fn new(values: Table) -> Self {
        Self {
            values,
            comment: None,
        }
    }

    pub fn with_comment(values: Table, comment: impl Into<String>) -> Self {
        Self {
            values,
            comment: Some(comment.into()),
        }
    }
}

/// One `[[forcefields.local]]` or `[[forcefields.global]]` table.
#[derive(Debug, Clone, PartialEq)]
pub struct TermTable {
    /// Table-level metadata such as `interaction`, `potential`, `topology`.
    pub meta: Table,
    /// Shared data referenced by the parameter entries, keyed by name.
    /// Sorted so repeated runs serialize identically.
    pub env: BTreeMap<String, Value>,
    pub parameters: Vec<Term>,
}

impl TermTable {
    pub fn new(meta: Table) -> Self {
        Self {
            meta,
            env: BTreeMap::new(),
            parameters: Vec::new(),
        }
    }

    /// True when `self.meta` agrees with `meta` on every key that `keys`
    /// names. Keys outside the list are not compared, so tables that differ
    /// only in undeclared metadata still merge.
    fn matches(&self, meta: &Table, keys: &[&str]) -> bool {
        keys.iter()
            .all(|key| self.meta.get(*key) == meta.get(*key))
    }
}

/// The assembled force field: local (bonded) and global (pairwise) tables
/// in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForceFieldData {
    local: Vec<TermTable>,
    global: Vec<TermTable>,
}

impl ForceFieldData {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn local(&self) -> &[TermTable] {
        &self.local
    }

    #[inline]
    pub fn global(&self) -> &[TermTable] {
        &self.global
    }

    /// Returns the local table whose metadata matches `meta` on the declared
    /// `keys`, appending a fresh table from `meta` if none exists yet.
    ///
    /// This is how repeated generator invocations (per group, per chain)
    /// accumulate into a single output table instead of emitting duplicates.
    pub fn local_table(&mut self, meta: Table, keys: &[&str]) -> &mut TermTable {
        Self::find_or_insert(&mut self.local, meta, keys)
    }

    /// The global-list counterpart of [`ForceFieldData::local_table`].
    pub fn global_table(&mut self, meta: Table, keys: &[&str]) -> &mut TermTable {
        Self::find_or_insert(&mut self.global, meta, keys)
    }

    fn find_or_insert<'a>(
        tables: &'a mut Vec<TermTable>,
        meta: Table,
        keys: &[&str],
    ) -> &'a mut TermTable {
        let position = tables.iter().position(|t| t.matches(&meta, keys));
        match position {
            Some(i) => &mut tables[i],
            None => {
                tables.push(TermTable::new(meta));
                tables.last_mut().unwrap()
            }
        }
    }
}

/// Builds a metadata table from string key/value pairs.
pub fn meta(pairs: &[(&str, &str)]) -> Table {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(i: i64) -> Term {
        let mut values = Table::new();
        values.insert("i".to_string(), Value::Integer(i));
        Term::new(values)
    }

    #[test]
    fn local_table_merges_on_matching_metadata() {
        let mut data = ForceFieldData::new();
        let keys = ["interaction", "potential"];
        let m = meta(&[("interaction", "BondLength"), ("potential", "Harmonic")]);

        data.local_table(m.clone(), &keys).parameters.push(term(1));
        data.local_table(m, &keys).parameters.push(term(2));

        assert_eq!(data.local().len(), 1);
        assert_eq!(data.local()[0].parameters.len(), 2);
    }

    #[test]
    fn local_table_separates_on_differing_metadata() {
        let mut data = ForceFieldData::new();
        let keys = ["interaction", "potential"];
        data.local_table(
            meta(&[("interaction", "BondLength"), ("potential", "Harmonic")]),
            &keys,
        );
        data.local_table(
            meta(&[("interaction", "BondLength"), ("potential", "Gaussian")]),
            &keys,
        );
        assert_eq!(data.local().len(), 2);
    }

    #[test]
    fn undeclared_metadata_keys_do_not_block_a_merge() {
        let mut data = ForceFieldData::new();
        let keys = ["interaction"];
        let mut first = meta(&[("interaction", "BondAngle")]);
        first.insert("note".to_string(), Value::String("a".to_string()));
        let second = meta(&[("interaction", "BondAngle")]);

        data.local_table(first, &keys);
        data.local_table(second, &keys);
        assert_eq!(data.local().len(), 1);
    }

    #[test]
    fn tables_keep_first_seen_order() {
        let mut data = ForceFieldData::new();
        let keys = ["interaction"];
        data.global_table(meta(&[("interaction", "Pair")]), &keys);
        data.local_table(meta(&[("interaction", "BondLength")]), &keys);
        data.global_table(meta(&[("interaction", "Distance")]), &keys);

        let names: Vec<&Value> = data
            .global()
            .iter()
            .map(|t| t.meta.get("interaction").unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                &Value::String("Pair".to_string()),
                &Value::String("Distance".to_string())
            ]
        );
    }
}
