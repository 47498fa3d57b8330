use crate::core::geometry::distance_sq;
use crate::core::models::bead::Bead;

/// Squared minimum distance between the heavy atoms of two beads.
///
/// Returns `f64::MAX` when either bead has no heavy atoms, so any threshold
/// comparison treats the pair as out of contact.
pub fn min_distance_sq(bead1: &Bead, bead2: &Bead) -> f64 {
    let mut min = f64::MAX;
    for (atom1, _) in bead1.heavy_atoms() {
        for (atom2, _) in bead2.heavy_atoms() {
            let d = distance_sq(&atom1.position, &atom2.position);
            if d < min {
                min = d;
            }
        }
    }
    min
}

/// Tracks which unordered chain-name pairs have already been processed, so
/// overlapping group definitions do not emit the same contact list twice.
#[derive(Debug, Default)]
pub struct ChainPairLedger {
    seen: Vec<(String, String)>,
}

impl ChainPairLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pair and returns `true` the first time it is seen,
    /// regardless of argument order.
    pub fn insert(&mut self, lhs: &str, rhs: &str) -> bool {
        let known = self
            .seen
            .iter()
            .any(|(a, b)| (a == lhs && b == rhs) || (a == rhs && b == lhs));
        if known {
            return false;
        }
        self.seen.push((lhs.to_string(), rhs.to_string()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::bead::{Bead, BeadKind};
    use nalgebra::Point3;

    fn bead(atoms: Vec<Atom>) -> Bead {
        Bead::new(0, "ALA", BeadKind::CarbonAlpha, 71.09, Point3::origin(), atoms)
    }

    #[test]
    fn min_distance_ignores_hydrogens() {
        let b1 = bead(vec![Atom::new(" CA ", "ALA", 1, " C", Point3::origin())]);
        let b2 = bead(vec![
            Atom::new(" HA ", "ALA", 2, " H", Point3::new(1.0, 0.0, 0.0)),
            Atom::new(" CA ", "ALA", 2, " C", Point3::new(3.0, 0.0, 0.0)),
        ]);
        assert_eq!(min_distance_sq(&b1, &b2), 9.0);
    }

    #[test]
    fn min_distance_of_hydrogen_only_bead_is_max() {
        let b1 = bead(vec![Atom::new(" CA ", "ALA", 1, " C", Point3::origin())]);
        let b2 = bead(vec![Atom::new(" HA ", "ALA", 2, " H", Point3::origin())]);
        assert_eq!(min_distance_sq(&b1, &b2), f64::MAX);
    }

    #[test]
    fn ledger_dedups_unordered_pairs() {
        let mut ledger = ChainPairLedger::new();
        assert!(ledger.insert("A", "B"));
        assert!(!ledger.insert("B", "A"));
        assert!(!ledger.insert("A", "B"));
        assert!(ledger.insert("A", "C"));
    }
}
