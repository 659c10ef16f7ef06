//! Provides input/output functionality for crystal-structure file formats.
//!
//! Formats implement the [`traits::StructureFormat`] trait, which separates
//! the interpreted structure from verbatim format metadata (header lines)
//! so that output can preserve input content the model does not understand.

pub mod poscar;
pub mod traits;
