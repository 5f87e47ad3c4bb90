//! Calculation logic for the Delivery Pricing Engine.
//!
//! This module contains the pricing rules: the tiered distance surcharge,
//! the package size surcharge, the fragile cargo surcharge, the service
//! load multiplier, request validation, the quote orchestrator, and the
//! sentinel compatibility boundary.

mod compat;
mod distance_tier;
mod fragile_surcharge;
mod load_multiplier;
mod quote;
mod size_surcharge;
mod validate;

pub use compat::{SENTINEL_COST, calculate_delivery_cost};
pub use distance_tier::distance_surcharge;
pub use fragile_surcharge::fragile_surcharge;
pub use load_multiplier::load_multiplier;
pub use quote::{MINIMUM_COST, quote_delivery};
pub use size_surcharge::size_surcharge;
pub use validate::{FRAGILE_DISTANCE_LIMIT_KM, validate_request};
