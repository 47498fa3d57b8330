use super::bead::Bead;
use super::chain::Chain;

/// A named collection of chains.
///
/// Groups serve two purposes: they are the unit handed to intra-group term
/// generation, and one side of an inter-group pairing. A PDB chain ID is a
/// single character and collides easily, so groups carry their own names
/// (e.g. a protein complex grouped as one unit).
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    name: String,
    chains: Vec<Chain>,
}

impl Group {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            chains: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn push(&mut self, chain: Chain) {
        self.chains.push(chain);
    }

    #[inline]
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    #[inline]
    pub fn chains_mut(&mut self) -> &mut [Chain] {
        &mut self.chains
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chain> {
        self.chains.iter()
    }

    /// Marks every bead whose global index falls in `[first, last]` as
    /// flexible. Returns the number of beads marked.
    pub fn mark_flexible(&mut self, first: usize, last: usize) -> usize {
        let mut marked = 0;
        for chain in &mut self.chains {
            for bead in chain.beads_mut() {
                if (first..=last).contains(&bead.index()) {
                    bead.set_flexible(true);
                    marked += 1;
                }
            }
        }
        marked
    }

    /// All beads of the group in chain order then bead order.
    pub fn beads(&self) -> impl Iterator<Item = &Bead> {
        self.chains.iter().flat_map(|chain| chain.iter())
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Chain;
    type IntoIter = std::slice::Iter<'a, Chain>;
    fn into_iter(self) -> Self::IntoIter {
        self.chains.iter()
    }
}
