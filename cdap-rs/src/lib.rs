//! Randomized instance synthesis for the Cross-Docking Assignment Problem (CDAP).
//!
//! In CDAP, suppliers ship pallets for customers through a cross-docking
//! center with capacity-constrained inbound and outbound doors.
//! This crate generates well-formed random instances of the problem:
//! a supplier-to-customer demand matrix with a configurable fill density,
//! door sets under two capacity models and a complete door distance table.

/// Entities that compose an instance
pub mod entities;
/// Generators that synthesize every part of an instance
pub mod generator;
/// Export of instances to their external (JSON) representation
pub mod io;
/// Various utility functions
pub mod util;
