use nalgebra::Point3;

/// A single atom of the reference all-atom structure.
///
/// Fields mirror the fixed-width PDB ATOM record: the atom name keeps its
/// four-character padding (e.g. `" CA "`, `" OG1"`) and the element symbol is
/// two characters, right-justified (e.g. `" C"`, `"FE"`). The padding is
/// significant: role classification matches names including their spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Four-character atom name, padding preserved.
    pub name: String,
    /// Residue name (e.g. "ALA", "ARG").
    pub residue_name: String,
    /// Residue sequence number from the source structure.
    pub residue_seq: i32,
    /// Two-character element symbol, right-justified.
    pub element: String,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates an atom, normalizing the name to four characters and the
    /// element symbol to two (right-justified), as the PDB format defines.
    pub fn new(
        name: &str,
        residue_name: &str,
        residue_seq: i32,
        element: &str,
        position: Point3<f64>,
    ) -> Self {
        // truncate by characters, not bytes; malformed records must not panic
        let mut name: String = name.chars().take(4).collect();
        while name.chars().count() < 4 {
            name.push(' ');
        }
        let symbol: String = element.trim().chars().take(2).collect();
        Self {
            name,
            residue_name: residue_name.to_string(),
            residue_seq,
            element: format!("{:>2}", symbol),
            position,
        }
    }

    /// The name character at `idx`, or `' '` when the name is shorter.
    /// Classification rules key on fixed character positions.
    #[inline]
    pub fn name_char(&self, idx: usize) -> char {
        self.name.as_bytes().get(idx).copied().unwrap_or(b' ') as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pads_short_names_to_four_characters() {
        let atom = Atom::new(" CA", "ALA", 1, " C", Point3::origin());
        assert_eq!(atom.name, " CA ");
        assert_eq!(atom.element, " C");
    }

    #[test]
    fn new_truncates_overlong_names() {
        let atom = Atom::new(" OG12", "SER", 2, " O", Point3::origin());
        assert_eq!(atom.name, " OG1");
    }

    #[test]
    fn new_right_justifies_single_letter_elements() {
        let atom = Atom::new(" N  ", "GLY", 3, "N", Point3::origin());
        assert_eq!(atom.element, " N");
    }

    #[test]
    fn new_accepts_multibyte_input_without_panicking() {
        let atom = Atom::new("Cα", "ALA", 1, "α", Point3::origin());
        assert_eq!(atom.name.chars().count(), 4);
        assert_eq!(atom.element, " α");
    }

    #[test]
    fn name_char_returns_space_past_the_end() {
        let atom = Atom::new(" CA ", "ALA", 1, " C", Point3::origin());
        assert_eq!(atom.name_char(1), 'C');
        assert_eq!(atom.name_char(7), ' ');
    }
}
