use super::atom::Atom;
use crate::core::forcefield::roles::{AtomLocation, AtomRole};
use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The coarse-graining scheme a bead belongs to.
///
/// The set is closed: force-field generators match on it exhaustively to
/// decide whether they can produce atomistic contact energies for a bead
/// pair (only [`BeadKind::CarbonAlpha`] carries that detail).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeadKind {
    /// One bead per amino acid, placed on the Cα atom.
    CarbonAlpha,
    /// Nucleotide phosphate bead (3SPN2-style DNA model).
    Phosphate,
    /// Nucleotide sugar bead.
    Sugar,
    /// Nucleotide base bead.
    Base,
}

#[derive(Debug, Error)]
#[error("invalid bead kind string: '{0}'")]
pub struct ParseBeadKindError(pub String);

impl FromStr for BeadKind {
    type Err = ParseBeadKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CarbonAlpha" => Ok(BeadKind::CarbonAlpha),
            "Phosphate" => Ok(BeadKind::Phosphate),
            "Sugar" => Ok(BeadKind::Sugar),
            "Base" => Ok(BeadKind::Base),
            _ => Err(ParseBeadKindError(s.to_string())),
        }
    }
}

impl fmt::Display for BeadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BeadKind::CarbonAlpha => "CarbonAlpha",
            BeadKind::Phosphate => "Phosphate",
            BeadKind::Sugar => "Sugar",
            BeadKind::Base => "Base",
        };
        write!(f, "{}", s)
    }
}

/// One coarse-grained particle: an ordered group of source atoms reduced to
/// a single position.
///
/// The `index` is the bead's global index, unique across the whole system
/// and assigned once at coarse-graining time; emitted parameter terms refer
/// to beads by this index. Atom roles are classified once at construction,
/// so contact scans never re-examine atom name strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Bead {
    index: usize,
    name: String,
    kind: BeadKind,
    mass: f64,
    is_flexible: bool,
    position: Point3<f64>,
    atoms: Vec<Atom>,
    roles: Vec<AtomRole>,
}

impl Bead {
    pub fn new(
        index: usize,
        name: &str,
        kind: BeadKind,
        mass: f64,
        position: Point3<f64>,
        atoms: Vec<Atom>,
    ) -> Self {
        let roles = atoms.iter().map(AtomRole::classify).collect();
        Self {
            index,
            name: name.to_string(),
            kind,
            mass,
            is_flexible: false,
            position,
            atoms,
            roles,
        }
    }

    /// Global bead index, stable for the lifetime of the system.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Bead name; for Cα beads this is the residue name (e.g. "ALA").
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> BeadKind {
        self.kind
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Whether this bead lies in a configured flexible region. Flexible
    /// beads are excluded from rigid local terms and native contacts.
    #[inline]
    pub fn is_flexible(&self) -> bool {
        self.is_flexible
    }

    pub fn set_flexible(&mut self, flexible: bool) {
        self.is_flexible = flexible;
    }

    /// Coarse-grained position (for Cα beads, the CA atom position).
    #[inline]
    pub fn position(&self) -> &Point3<f64> {
        &self.position
    }

    /// All source atoms, including hydrogens.
    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Precomputed roles, parallel to [`Bead::atoms`].
    #[inline]
    pub fn roles(&self) -> &[AtomRole] {
        &self.roles
    }

    /// Non-hydrogen atoms with their precomputed roles. All contact
    /// counting and minimum-distance searches run over this view.
    pub fn heavy_atoms(&self) -> impl Iterator<Item = (&Atom, &AtomRole)> {
        self.atoms
            .iter()
            .zip(self.roles.iter())
            .filter(|(_, role)| role.location != AtomLocation::Hydrogen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ca_atom(name: &str, x: f64) -> Atom {
        Atom::new(name, "ALA", 1, "", Point3::new(x, 0.0, 0.0))
    }

    fn bead_with(atoms: Vec<Atom>) -> Bead {
        Bead::new(7, "ALA", BeadKind::CarbonAlpha, 71.09, Point3::origin(), atoms)
    }

    #[test]
    fn new_classifies_every_atom_once() {
        let bead = bead_with(vec![ca_atom(" CA ", 0.0), ca_atom(" CB ", 1.0)]);
        assert_eq!(bead.roles().len(), 2);
        assert_eq!(bead.roles()[0].location, AtomLocation::Backbone);
        assert_eq!(bead.roles()[1].location, AtomLocation::Sidechain);
    }

    #[test]
    fn heavy_atoms_skips_hydrogens() {
        let bead = bead_with(vec![
            ca_atom(" CA ", 0.0),
            Atom::new(" HA ", "ALA", 1, " H", Point3::origin()),
            ca_atom(" CB ", 1.0),
        ]);
        let names: Vec<&str> = bead.heavy_atoms().map(|(a, _)| a.name.as_str()).collect();
        assert_eq!(names, vec![" CA ", " CB "]);
    }

    #[test]
    fn beads_are_rigid_by_default() {
        let mut bead = bead_with(vec![ca_atom(" CA ", 0.0)]);
        assert!(!bead.is_flexible());
        bead.set_flexible(true);
        assert!(bead.is_flexible());
    }

    #[test]
    fn bead_kind_round_trips_through_strings() {
        for kind in [
            BeadKind::CarbonAlpha,
            BeadKind::Phosphate,
            BeadKind::Sugar,
            BeadKind::Base,
        ] {
            assert_eq!(kind.to_string().parse::<BeadKind>().unwrap(), kind);
        }
        assert!("Centroid".parse::<BeadKind>().is_err());
    }
}
