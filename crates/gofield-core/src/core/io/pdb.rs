use crate::core::models::atom::Atom;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

/// One residue of a parsed PDB chain: its atoms in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct PdbResidue {
    pub name: String,
    pub seq: i32,
    pub atoms: Vec<Atom>,
}

/// One chain of a parsed PDB structure.
#[derive(Debug, Clone, PartialEq)]
pub struct PdbChain {
    pub id: char,
    pub residues: Vec<PdbResidue>,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("ATOM/HETATM record is too short (needs at least 54 columns)")]
    LineTooShort,
    #[error("invalid integer in columns {columns} (value: '{value}')")]
    InvalidInt { columns: &'static str, value: String },
    #[error("invalid float in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
}

fn slice(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("")
}

fn parse_f64(line: &str, start: usize, end: usize, columns: &'static str, line_no: usize) -> Result<f64, PdbError> {
    let value = slice(line, start, end).trim();
    value.parse().map_err(|_| PdbError::Parse {
        line: line_no,
        kind: PdbParseErrorKind::InvalidFloat {
            columns,
            value: value.to_string(),
        },
    })
}

/// Reads the first model of a PDB file into chain-grouped, residue-grouped
/// atoms. `ATOM` and `HETATM` records are accepted; `TER` or a change of the
/// chain-identifier column closes the current chain; `ENDMDL`/`END` stops.
///
/// The four-character atom name and two-character element symbol keep their
/// fixed-width padding, which downstream role classification depends on.
pub fn read_pdb(reader: &mut impl BufRead) -> Result<Vec<PdbChain>, PdbError> {
    let mut chains: Vec<PdbChain> = Vec::new();
    let mut open = false;

    for (idx, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_no = idx + 1;
        // record names may be shorter than their six-column field
        let record = line.get(0..6).unwrap_or(&line).trim_end();

        match record {
            "TER" => {
                open = false;
            }
            "ENDMDL" | "END" => break,
            "ATOM" | "HETATM" => {
                if line.len() < 54 {
                    return Err(PdbError::Parse {
                        line: line_no,
                        kind: PdbParseErrorKind::LineTooShort,
                    });
                }

                let name = slice(&line, 12, 16);
                let residue_name = slice(&line, 17, 20).trim().to_string();
                let chain_id = slice(&line, 21, 22).chars().next().unwrap_or(' ');
                let seq_str = slice(&line, 22, 26).trim();
                let residue_seq: i32 = seq_str.parse().map_err(|_| PdbError::Parse {
                    line: line_no,
                    kind: PdbParseErrorKind::InvalidInt {
                        columns: "23-26",
                        value: seq_str.to_string(),
                    },
                })?;

                let x = parse_f64(&line, 30, 38, "31-38", line_no)?;
                let y = parse_f64(&line, 38, 46, "39-46", line_no)?;
                let z = parse_f64(&line, 46, 54, "47-54", line_no)?;
                let element = slice(&line, 76, 78);

                let atom = Atom::new(
                    name,
                    &residue_name,
                    residue_seq,
                    element,
                    Point3::new(x, y, z),
                );

                let start_new_chain = !open
                    || chains.last().map(|c| c.id) != Some(chain_id);
                if start_new_chain {
                    chains.push(PdbChain {
                        id: chain_id,
                        residues: Vec::new(),
                    });
                    open = true;
                }
                let chain = chains.last_mut().unwrap();

                let start_new_residue = chain
                    .residues
                    .last()
                    .map(|r| r.seq != residue_seq || r.name != residue_name)
                    .unwrap_or(true);
                if start_new_residue {
                    chain.residues.push(PdbResidue {
                        name: residue_name,
                        seq: residue_seq,
                        atoms: Vec::new(),
                    });
                }
                chain.residues.last_mut().unwrap().atoms.push(atom);
            }
            _ => {}
        }
    }
    Ok(chains)
}
