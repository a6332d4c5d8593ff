//! Common utilities for the Bramble selector engine.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated stderr output for unsupported features

pub mod warning;
