//! # Battle Rules
//!
//! The rulebook crate - contains all combat rules, mechanics, and unit
//! definitions for word battles. This crate is the single source of truth for
//! battle state and does not contain any turn sequencing; the engine crate
//! drives these types.

pub mod error;
pub mod mechanics;
pub mod units;

pub use error::*;
pub use mechanics::*;
pub use units::*;
