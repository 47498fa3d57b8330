//! Serializes a [`ForceFieldData`] document as a TOML fragment.
//!
//! The output favors human inspection over minimality: metadata keys come in
//! a fixed order, shared `env` blocks are wrapped in editor fold markers,
//! and parameter entries are emitted as one aligned inline table per line
//! with the bead indices first.

use crate::core::document::{ForceFieldData, Term, TermTable};
use std::io::{self, Write};
use toml::{Table, Value};

/// Metadata keys emitted before any others, in this order.
const META_KEY_ORDER: [&str; 5] = [
    "interaction",
    "potential",
    "topology",
    "ignore",
    "spatial_partition",
];

/// Parameter keys emitted before any others, in this order.
const INDEX_KEY_ORDER: [&str; 5] = ["i", "j", "k", "l", "indices"];

pub fn write_forcefield(out: &mut impl Write, data: &ForceFieldData) -> io::Result<()> {
    for table in data.local() {
        write_table(out, "local", table)?;
    }
    for table in data.global() {
        write_table(out, "global", table)?;
    }
    Ok(())
}

fn write_table(out: &mut impl Write, list: &str, table: &TermTable) -> io::Result<()> {
    writeln!(out, "[[forcefields.{}]]", list)?;

    for key in ordered_keys(&table.meta, &META_KEY_ORDER) {
        if let Some(value) = table.meta.get(&key) {
            writeln!(out, "{} = {}", format_key(&key), format_value(value))?;
        }
    }

    if !table.env.is_empty() {
        writeln!(out, "# env {{{{{{")?;
        for (name, value) in &table.env {
            writeln!(out, "env.{} = {}", format_key(name), format_value(value))?;
        }
        writeln!(out, "# }}}}}}")?;
    }

    write_parameters(out, &table.parameters)?;
    writeln!(out)
}

fn write_parameters(out: &mut impl Write, terms: &[Term]) -> io::Result<()> {
    if terms.is_empty() {
        writeln!(out, "parameters = []")?;
        return Ok(());
    }

    let keys = parameter_keys(terms);
    let widths = column_widths(terms, &keys);

    writeln!(out, "parameters = [")?;
    for term in terms {
        let mut fields = Vec::with_capacity(keys.len());
        for (key, width) in keys.iter().zip(widths.iter().copied()) {
            if let Some(value) = term.values.get(key) {
                fields.push(format!(
                    "{} = {:>width$}",
                    format_key(key),
                    format_value(value),
                    width = width
                ));
            }
        }
        match &term.comment {
            Some(comment) => writeln!(out, "{{{}}}, # {}", fields.join(", "), comment)?,
            None => writeln!(out, "{{{}}},", fields.join(", "))?,
        }
    }
    writeln!(out, "]")
}

/// Union of the terms' keys, index keys first, the rest in first-seen order.
fn parameter_keys(terms: &[Term]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for key in INDEX_KEY_ORDER {
        if terms.iter().any(|t| t.values.contains_key(key)) {
            keys.push(key.to_string());
        }
    }
    for term in terms {
        for key in term.values.keys() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    keys
}

fn column_widths(terms: &[Term], keys: &[String]) -> Vec<usize> {
    keys.iter()
        .map(|key| {
            terms
                .iter()
                .filter_map(|t| t.values.get(key))
                .map(|v| format_value(v).len())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn ordered_keys(table: &Table, priority: &[&str]) -> Vec<String> {
    let mut keys: Vec<String> = priority
        .iter()
        .filter(|k| table.contains_key(**k))
        .map(|k| k.to_string())
        .collect();
    for key in table.keys() {
        if !keys.contains(key) {
            keys.push(key.clone());
        }
    }
    keys
}

fn format_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        key.to_string()
    } else {
        format!("\"{}\"", key.escape_default())
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s.escape_default()),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(d) => d.to_string(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Table(table) => {
            let inner: Vec<String> = ordered_keys(table, &META_KEY_ORDER)
                .iter()
                .filter_map(|k| {
                    table
                        .get(k)
                        .map(|v| format!("{} = {}", format_key(k), format_value(v)))
                })
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

/// Floats always carry a decimal point so a reparse keeps the type.
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        format!("{}", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::meta;

    fn render(data: &ForceFieldData) -> String {
        let mut buf = Vec::new();
        write_forcefield(&mut buf, data).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn term(pairs: &[(&str, Value)]) -> Term {
        let values: Table = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Term::new(values)
    }

    #[test]
    fn writes_metadata_in_fixed_order() {
        let mut data = ForceFieldData::new();
        let mut m = meta(&[
            ("topology", "bond"),
            ("potential", "Harmonic"),
            ("interaction", "BondLength"),
        ]);
        m.insert("extra".to_string(), Value::Boolean(true));
        data.local_table(m, &["interaction", "potential"]);

        let text = render(&data);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[[forcefields.local]]");
        assert_eq!(lines[1], "interaction = \"BondLength\"");
        assert_eq!(lines[2], "potential = \"Harmonic\"");
        assert_eq!(lines[3], "topology = \"bond\"");
        assert_eq!(lines[4], "extra = true");
        assert_eq!(lines[5], "parameters = []");
    }

    #[test]
    fn aligns_parameter_columns_and_puts_indices_first() {
        let mut data = ForceFieldData::new();
        let table = data.local_table(meta(&[("interaction", "BondLength")]), &["interaction"]);
        table.parameters.push(term(&[
            ("v0", Value::Float(3.8)),
            ("i", Value::Integer(1)),
            ("j", Value::Integer(2)),
        ]));
        table.parameters.push(Term::with_comment(
            [
                ("i".to_string(), Value::Integer(10)),
                ("j".to_string(), Value::Integer(11)),
                ("v0".to_string(), Value::Float(12.25)),
            ]
            .into_iter()
            .collect(),
            "ALA-GLY",
        ));

        let text = render(&data);
        assert!(text.contains("{i =  1, j =  2, v0 =   3.8},\n"));
        assert!(text.contains("{i = 10, j = 11, v0 = 12.25}, # ALA-GLY\n"));
    }

    #[test]
    fn wraps_env_entries_in_fold_markers() {
        let mut data = ForceFieldData::new();
        let table = data.local_table(meta(&[("interaction", "BondAngle")]), &["interaction"]);
        table.env.insert(
            "y1_ALA".to_string(),
            Value::Array(vec![Value::Float(0.5), Value::Float(1.0)]),
        );

        let text = render(&data);
        assert!(text.contains("# env {{{\n"));
        assert!(text.contains("env.y1_ALA = [0.5, 1.0]\n"));
        assert!(text.contains("# }}}\n"));
    }

    #[test]
    fn output_reparses_as_valid_toml() {
        let mut data = ForceFieldData::new();
        let table = data.global_table(
            meta(&[("interaction", "Pair"), ("potential", "ExcludedVolume")]),
            &["interaction", "potential"],
        );
        table
            .env
            .insert("epsilon".to_string(), Value::Float(0.6));
        table.parameters.push(term(&[
            ("index", Value::Integer(0)),
            ("radius", Value::Float(3.0)),
        ]));

        let text = render(&data);
        let parsed: Table = text.parse().unwrap();
        let forcefields = parsed["forcefields"].as_table().unwrap();
        let global = forcefields["global"].as_array().unwrap();
        assert_eq!(global.len(), 1);
        assert_eq!(global[0]["env"]["epsilon"], Value::Float(0.6));
        assert_eq!(global[0]["parameters"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn floats_keep_a_decimal_point() {
        assert_eq!(format_float(110.0), "110.0");
        assert_eq!(format_float(0.15), "0.15");
    }
}
