use super::bead::Bead;

/// An ordered sequence of beads with a chain identifier.
///
/// Bead order equals residue order in the source structure; consecutive
/// beads are assumed bonded, which is what the bonded term builders rely on.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    name: String,
    beads: Vec<Bead>,
}

impl Chain {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            beads: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.beads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    pub fn push(&mut self, bead: Bead) {
        self.beads.push(bead);
    }

    #[inline]
    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }

    #[inline]
    pub fn beads_mut(&mut self) -> &mut [Bead] {
        &mut self.beads
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bead> {
        self.beads.iter()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Bead;
    type IntoIter = std::slice::Iter<'a, Bead>;
    fn into_iter(self) -> Self::IntoIter {
        self.beads.iter()
    }
}
