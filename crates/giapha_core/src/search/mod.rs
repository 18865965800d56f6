//! Member filtering and search entry points.
//!
//! # Responsibility
//! - Compute matching subsets of the member snapshot for highlighting and
//!   table display.
//! - Keep result shaping deterministic and order-preserving.

pub mod filter;
