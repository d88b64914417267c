//! Science components for the coastal monitoring toolkit
//!
//! Each component pairs a serialisable parameters struct (with defaults
//! matching the dashboard's reference configuration) with a small model
//! exposing pure calculation methods:
//!
//! - `tide`: synthetic tide-height series generator
//! - `sediment`: bedload sediment-transport rate
//! - `carbonate`: seawater carbonate-system equilibrium
//! - `shoreline`: linear shoreline-retreat projection

pub mod components;
pub mod constants;
