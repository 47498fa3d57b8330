//! Atom role classification for the contact-energy scheme.
//!
//! Every rule here is a pure function of the atom's static fields (name,
//! residue name, element); no geometry is consulted. Distance criteria are
//! applied by the caller. The rules operate on the fixed-width PDB atom name
//! with its padding intact, so `" CA "` (backbone) and `" CB "` (sidechain)
//! are distinguished exactly.

use crate::core::models::atom::Atom;
use phf::{Set, phf_set};
use tracing::warn;

/// Fixed-width backbone atom names of the protein main chain.
static BACKBONE_ATOM_NAMES: Set<&'static str> = phf_set! {
    " N  ", " C  ", " O  ", " OXT", " CA ",
};

/// Where an atom sits relative to the protein backbone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomLocation {
    /// Main-chain atom (N, C, O, OXT, CA).
    Backbone,
    /// Heavy atom of a side group.
    Sidechain,
    /// Hydrogen; excluded from all contact counting.
    Hydrogen,
}

/// Precomputed classification of one atom.
///
/// Built once per atom at coarse-graining time so the O(N²) contact scans
/// never re-match name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomRole {
    pub location: AtomLocation,
    pub donor: bool,
    pub acceptor: bool,
    pub cation: bool,
    pub anion: bool,
    pub carbon: bool,
}

impl AtomRole {
    /// Classifies an atom from its static fields.
    pub fn classify(atom: &Atom) -> Self {
        let location = if is_hydrogen(atom) {
            AtomLocation::Hydrogen
        } else if is_backbone(atom) {
            AtomLocation::Backbone
        } else {
            AtomLocation::Sidechain
        };
        Self {
            location,
            donor: is_donor(atom),
            acceptor: is_acceptor(atom),
            cation: is_cation(atom),
            anion: is_anion(atom),
            carbon: is_carbon(atom),
        }
    }

    /// True if the atom carries a formal charge in the classification scheme.
    #[inline]
    pub fn charged(&self) -> bool {
        self.cation || self.anion
    }
}

/// Main-chain atoms, matched by exact fixed-width name.
pub fn is_backbone(atom: &Atom) -> bool {
    BACKBONE_ATOM_NAMES.contains(atom.name.as_str())
}

/// Heavy atom outside the backbone.
pub fn is_sidechain(atom: &Atom) -> bool {
    !is_backbone(atom) && !is_hydrogen(atom)
}

/// Hydrogen detection per the wwPDB v3 conventions, with the documented
/// exception for metal symbols (Hg, Hf, Ho, Hs) whose names begin with 'H'.
pub fn is_hydrogen(atom: &Atom) -> bool {
    // wwPDB v3 conformant element column (should be right justified, but allow both).
    if atom.element == " H" || atom.element == "H " {
        return true;
    }
    if atom.name_char(1) == 'H' {
        return true;
    }
    // Older formats left-justify hydrogen names into column 13.
    if atom.name.trim_start().starts_with('H') {
        if matches!(
            atom.element.as_str(),
            "Hg" | "HG" | "Hf" | "HF" | "Ho" | "HO" | "Hs" | "HS"
        ) {
            return false;
        }
        warn!(
            atom = %atom.name,
            residue = %atom.residue_name,
            "atom name starting with H found; considering it a hydrogen. \
             If it is not, fill in the element symbol column"
        );
        return true;
    }
    false
}

/// Hydrogen-bond donor heavy atoms: any nitrogen, plus the hydroxyl/thiol
/// oxygens and sulfurs of Ser, Thr, Tyr and Cys.
pub fn is_donor(atom: &Atom) -> bool {
    atom.name_char(1) == 'N'
        || (atom.residue_name == "SER" && atom.name == " OG ")
        || (atom.residue_name == "THR" && atom.name == " OG1")
        || (atom.residue_name == "TYR" && atom.name == " OH ")
        || (atom.residue_name == "CYS" && atom.name_char(1) == 'S')
}

/// Hydrogen-bond acceptors: any oxygen or sulfur.
pub fn is_acceptor(atom: &Atom) -> bool {
    atom.name_char(1) == 'O' || atom.name_char(1) == 'S'
}

/// Positively charged sidechain atoms (Arg guanidinium, Lys amine).
pub fn is_cation(atom: &Atom) -> bool {
    matches!(
        (atom.residue_name.as_str(), atom.name.as_str()),
        ("ARG", " NH1") | ("ARG", " NH2") | ("LYS", " NZ ")
    )
}

/// Negatively charged sidechain atoms (Glu/Asp carboxylates).
pub fn is_anion(atom: &Atom) -> bool {
    matches!(
        (atom.residue_name.as_str(), atom.name.as_str()),
        ("GLU", " OE1") | ("GLU", " OE2") | ("ASP", " OD1") | ("ASP", " OD2")
    )
}

/// Carbon atoms, by the second name character.
pub fn is_carbon(atom: &Atom) -> bool {
    atom.name_char(1) == 'C'
}

/// True if either ordering of the pair is donor + acceptor.
#[inline]
pub fn is_donor_acceptor_pair(lhs: &AtomRole, rhs: &AtomRole) -> bool {
    (lhs.acceptor && rhs.donor) || (rhs.acceptor && lhs.donor)
}

/// True if either ordering of the pair is cation + anion.
#[inline]
pub fn is_cation_anion_pair(lhs: &AtomRole, rhs: &AtomRole) -> bool {
    (lhs.cation && rhs.anion) || (rhs.cation && lhs.anion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn atom(name: &str, residue: &str, element: &str) -> Atom {
        Atom::new(name, residue, 1, element, Point3::origin())
    }

    #[test]
    fn backbone_names_match_exactly_including_padding() {
        assert!(is_backbone(&atom(" N  ", "ALA", " N")));
        assert!(is_backbone(&atom(" C  ", "ALA", " C")));
        assert!(is_backbone(&atom(" O  ", "ALA", " O")));
        assert!(is_backbone(&atom(" OXT", "ALA", " O")));
        assert!(is_backbone(&atom(" CA ", "ALA", " C")));
    }

    #[test]
    fn sidechain_atoms_are_not_backbone() {
        assert!(!is_backbone(&atom(" CB ", "ALA", " C")));
        assert!(is_sidechain(&atom(" CB ", "ALA", " C")));
        assert!(is_sidechain(&atom(" OG ", "SER", " O")));
    }

    #[test]
    fn hydrogen_is_neither_backbone_nor_sidechain() {
        let h = atom(" HB2", "ALA", " H");
        assert!(is_hydrogen(&h));
        assert!(!is_sidechain(&h));
        assert_eq!(AtomRole::classify(&h).location, AtomLocation::Hydrogen);
    }

    #[test]
    fn hydrogen_detected_by_second_name_character() {
        assert!(is_hydrogen(&atom("1HB ", "ALA", "  ")));
        assert!(is_hydrogen(&atom(" HG ", "CYS", "  ")));
    }

    #[test]
    fn leading_h_without_element_is_treated_as_hydrogen() {
        assert!(is_hydrogen(&atom("HD11", "LEU", "  ")));
    }

    #[test]
    fn metal_symbols_starting_with_h_are_not_hydrogens() {
        assert!(!is_hydrogen(&atom("HG  ", "HG ", "Hg")));
        assert!(!is_hydrogen(&atom("HF  ", "HF ", "HF")));
        assert!(!is_hydrogen(&atom("HO  ", "HO ", "Ho")));
        assert!(!is_hydrogen(&atom("HS  ", "HS ", "Hs")));
    }

    #[test]
    fn nitrogen_atoms_are_donors() {
        assert!(is_donor(&atom(" N  ", "ALA", " N")));
        assert!(is_donor(&atom(" NE2", "GLN", " N")));
    }

    #[test]
    fn residue_specific_hydroxyls_are_donors() {
        assert!(is_donor(&atom(" OG ", "SER", " O")));
        assert!(is_donor(&atom(" OG1", "THR", " O")));
        assert!(is_donor(&atom(" OH ", "TYR", " O")));
        assert!(is_donor(&atom(" SG ", "CYS", " S")));
        // The same atom name in another residue is not a donor.
        assert!(!is_donor(&atom(" OG ", "XXX", " O")));
    }

    #[test]
    fn oxygen_and_sulfur_are_acceptors() {
        assert!(is_acceptor(&atom(" O  ", "ALA", " O")));
        assert!(is_acceptor(&atom(" SD ", "MET", " S")));
        assert!(!is_acceptor(&atom(" CB ", "ALA", " C")));
    }

    #[test]
    fn charged_atoms_match_the_fixed_membership_tables() {
        assert!(is_cation(&atom(" NH1", "ARG", " N")));
        assert!(is_cation(&atom(" NH2", "ARG", " N")));
        assert!(is_cation(&atom(" NZ ", "LYS", " N")));
        assert!(is_anion(&atom(" OE1", "GLU", " O")));
        assert!(is_anion(&atom(" OE2", "GLU", " O")));
        assert!(is_anion(&atom(" OD1", "ASP", " O")));
        assert!(is_anion(&atom(" OD2", "ASP", " O")));
        assert!(!is_cation(&atom(" NZ ", "ARG", " N")));
        assert!(!is_anion(&atom(" OD1", "ASN", " O")));
    }

    #[test]
    fn pair_predicates_are_symmetric() {
        let donor = AtomRole::classify(&atom(" NZ ", "LYS", " N"));
        let acceptor = AtomRole::classify(&atom(" OD1", "ASP", " O"));
        assert!(is_donor_acceptor_pair(&donor, &acceptor));
        assert!(is_donor_acceptor_pair(&acceptor, &donor));
        assert!(is_cation_anion_pair(&donor, &acceptor));
        assert!(is_cation_anion_pair(&acceptor, &donor));
    }

    #[test]
    fn classify_captures_all_flags_for_a_carboxylate_oxygen() {
        let role = AtomRole::classify(&atom(" OD1", "ASP", " O"));
        assert_eq!(role.location, AtomLocation::Sidechain);
        assert!(!role.donor);
        assert!(role.acceptor);
        assert!(!role.cation);
        assert!(role.anion);
        assert!(!role.carbon);
        assert!(role.charged());
    }
}
