//! Parameter-generation logic: contact-energy classification, neighbor
//! searches and the generator family.

pub mod contact;
pub mod error;
pub mod generators;
pub mod neighbors;
