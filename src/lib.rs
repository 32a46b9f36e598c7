#![forbid(unsafe_code)]
//! Effective emulation settings resolution and text snapshots
//!
//! Settings live in two tiers: a global record and named profile records
//! that may opt into custom values. [`config::resolve_effective`] picks the
//! record that applies to a profile and [`snapshot::format`] renders it.

pub mod config;
pub mod constants;
pub mod snapshot;
