//! The coarse-grained molecular hierarchy: atoms grouped into beads,
//! beads into chains, chains into groups, plus the builder that reduces a
//! parsed structure to carbon-alpha beads.

pub mod atom;
pub mod bead;
pub mod builder;
pub mod chain;
pub mod group;
