//! The end-to-end generation workflow.
//!
//! Everything here is synchronous and single-threaded; for a fixed input the
//! assembled document is bit-for-bit reproducible. Groups run in declaration
//! order, group pairs in lexicographic index order, chains and beads in
//! their own order.

use crate::core::document::ForceFieldData;
use crate::core::models::group::Group;
use crate::engine::error::EngineError;
use crate::engine::generators::{ForceFieldGenerator, Generator};
use tracing::info;

/// Runs the selected generators over the groups and assembles the output
/// document.
///
/// Bead kinds are validated for every generator/chain combination before
/// any term is emitted, so an invalid system never produces a partial
/// document. Each generator then runs `generate_intra` per group and
/// `generate_inter` per unordered group pair.
pub fn generate_forcefield(
    generators: &[Generator],
    groups: &[Group],
) -> Result<ForceFieldData, EngineError> {
    for generator in generators {
        for group in groups {
            for chain in group {
                generator.check_bead_kinds(chain)?;
            }
        }
    }

    let mut out = ForceFieldData::new();
    for generator in generators {
        info!(generator = generator.name(), "generating parameters");
        for group in groups {
            generator.generate_intra(&mut out, group)?;
        }
        for (i, lhs) in groups.iter().enumerate() {
            for rhs in &groups[i + 1..] {
                generator.generate_inter(&mut out, lhs, rhs)?;
            }
        }
    }
    Ok(out)
}
