//! Bannerlands engine library.
//!
//! Exposes the map model, legal-order generation, strategy port, turn
//! runner, and visualization snapshot for use by integration tests and
//! the demo binary.

pub mod map;
pub mod movegen;
pub mod sim;
pub mod strategy;
pub mod view;
