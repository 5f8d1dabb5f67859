//! Fewest-switches surface hopping for one nuclear coordinate and two
//! electronic states.
//!
//! The electronic structure is supplied from outside through the
//! [AdiabaticInterface](interface::AdiabaticInterface) trait. This crate owns the
//! electronic propagation, the hopping decision, the nuclear integration and
//! the aggregation of trajectory ensembles.

pub mod defaults;
pub mod dynamics;
pub mod errors;
pub mod initialization;
pub mod interface;
pub mod output;

pub use errors::DynamicsError;
pub use num_complex::Complex64 as c64;
