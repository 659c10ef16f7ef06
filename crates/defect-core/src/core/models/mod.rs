//! Data structures representing a crystal structure as read from a
//! positional file.
//!
//! The model deliberately mirrors the shape of the POSCAR positional block:
//! an ordered list of species, each owning the positions of its atoms in
//! insertion order. Species order is semantically meaningful and drives both
//! count/position consistency and serialization.

pub mod coords;
pub mod elements;
pub mod species;
pub mod structure;
