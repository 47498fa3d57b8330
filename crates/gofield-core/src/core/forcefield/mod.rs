//! Force-field parameter bundles and the atom role classification the
//! contact-energy scheme is built on.

pub mod params;
pub mod roles;
