use super::bead::{Bead, BeadKind};
use super::chain::Chain;
use super::group::Group;
use crate::core::io::pdb::PdbChain;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("residue {residue_seq} of chain '{chain}' has no atoms")]
    NoAtoms { chain: String, residue_seq: i32 },
    #[error(
        "residue {residue_name} {residue_seq} of chain '{chain}' has no CA atom; \
         cannot place a carbon-alpha bead"
    )]
    MissingCarbonAlpha {
        chain: String,
        residue_seq: i32,
        residue_name: String,
    },
    #[error(
        "residue {residue_name} {residue_seq} of chain '{chain}' has {count} CA atoms; \
         alternate locations must be resolved before coarse-graining"
    )]
    MultipleCarbonAlpha {
        chain: String,
        residue_seq: i32,
        residue_name: String,
        count: usize,
    },
    #[error("no mass defined for residue '{residue_name}'")]
    MissingMass { residue_name: String },
}

/// Coarse-grains one PDB chain into a carbon-alpha bead chain.
///
/// Each residue becomes one bead positioned on its single ` CA ` atom and
/// carrying all of the residue's atoms. Global bead indices start at
/// `index_offset` and follow residue order. Residues without exactly one CA
/// atom, and residue names absent from `masses`, are fatal.
pub fn carbon_alpha_chain(
    pdb: &PdbChain,
    masses: &BTreeMap<String, f64>,
    index_offset: usize,
) -> Result<Chain, BuildError> {
    let chain_name = pdb.id.to_string();
    let mut chain = Chain::new(&chain_name);

    for (i, residue) in pdb.residues.iter().enumerate() {
        if residue.atoms.is_empty() {
            return Err(BuildError::NoAtoms {
                chain: chain_name.clone(),
                residue_seq: residue.seq,
            });
        }

        let mut ca_atoms = residue.atoms.iter().filter(|a| a.name == " CA ");
        let ca = ca_atoms.next().ok_or_else(|| BuildError::MissingCarbonAlpha {
            chain: chain_name.clone(),
            residue_seq: residue.seq,
            residue_name: residue.name.clone(),
        })?;
        let extra = ca_atoms.count();
        if extra > 0 {
            return Err(BuildError::MultipleCarbonAlpha {
                chain: chain_name.clone(),
                residue_seq: residue.seq,
                residue_name: residue.name.clone(),
                count: extra + 1,
            });
        }

        let mass = *masses
            .get(&residue.name)
            .ok_or_else(|| BuildError::MissingMass {
                residue_name: residue.name.clone(),
            })?;

        chain.push(Bead::new(
            index_offset + i,
            &residue.name,
            BeadKind::CarbonAlpha,
            mass,
            ca.position,
            residue.atoms.clone(),
        ));
    }

    debug!(
        chain = %chain_name,
        beads = chain.len(),
        first_index = index_offset,
        "coarse-grained chain to carbon-alpha beads"
    );
    Ok(chain)
}

/// Coarse-grains a set of PDB chains into one group, assigning contiguous
/// global bead indices across the chains in input order.
pub fn carbon_alpha_group(
    name: &str,
    pdb_chains: &[PdbChain],
    masses: &BTreeMap<String, f64>,
    index_offset: usize,
) -> Result<Group, BuildError> {
    let mut group = Group::new(name);
    let mut offset = index_offset;
    for pdb in pdb_chains {
        let chain = carbon_alpha_chain(pdb, masses, offset)?;
        offset += chain.len();
        group.push(chain);
    }
    Ok(group)
}
