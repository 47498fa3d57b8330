//! Structure input and force-field output.

pub mod forcefield_writer;
pub mod pdb;
