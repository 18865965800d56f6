//! Genealogy tree engines.
//!
//! # Responsibility
//! - Convert the flat member snapshot into a validated forest.
//! - Assign structural top-to-bottom ranks for layered rendering.
//!
//! # Invariants
//! - Forest construction fails fast on duplicate ids, dangling parent
//!   references and cyclic ancestry; it never renders a corrupted hierarchy.
//! - Ranks are derived structurally, never copied from the author-asserted
//!   `generation` field.

pub mod forest;
pub mod rank;
