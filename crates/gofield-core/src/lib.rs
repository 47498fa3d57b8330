//! Coarse-grained Go-model force-field parameter generation.
//!
//! The crate reduces all-atom protein structures to carbon-alpha beads and
//! derives simulation-ready interaction parameters from the native
//! structure: AICG2+ structure-based terms with atomistic contact energies,
//! plain and Clementi-style Go contacts, excluded volume and Debye-Hückel
//! electrostatics. The output is a TOML force-field document.
//!
//! The code is organized in three layers:
//!
//! - [`core`]: stateless building blocks (models, geometry, parameter
//!   bundles, the output document, file I/O),
//! - [`engine`]: the generation logic (contact classification, neighbor
//!   searches, the generator family),
//! - [`workflows`]: the public entry points that tie the two together.

pub mod core;
pub mod engine;
pub mod workflows;
