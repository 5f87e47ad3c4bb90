//! Delivery Pricing Engine
//!
//! This crate computes the cost of a delivery from its distance, package size,
//! fragility, and the current service load level. Pricing is a pure, stateless
//! calculation with no I/O beyond an error diagnostic emitted at the
//! compatibility boundary.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
