//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository snapshots through the tree, style, filter and
//!   aggregation engines.
//! - Keep callers decoupled from storage details.

pub mod chart_service;
