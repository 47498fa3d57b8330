//! High-level entry points combining the core models with the engine.

pub mod generate;
