//! Core data models for the Delivery Pricing Engine.
//!
//! This module contains the request and quote models used throughout the engine.

mod quote;
mod request;

pub use quote::{PriceComponent, PriceLine, Quote};
pub use request::{DeliveryRequest, LoadLevel, PackageSize};
