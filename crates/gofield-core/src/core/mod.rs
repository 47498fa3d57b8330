//! Foundational, stateless building blocks: molecular models, geometry,
//! force-field parameter data, the output document, and file I/O.

pub mod document;
pub mod forcefield;
pub mod geometry;
pub mod io;
pub mod models;
