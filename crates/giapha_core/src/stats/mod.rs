//! Aggregate statistics over the member snapshot.
//!
//! # Responsibility
//! - Compute per-generation counts and living/deceased totals for dashboard
//!   widgets.
//!
//! # Invariants
//! - Both reducers are O(n), single-pass and side-effect-free.
//! - Results are independent of input ordering.
//! - `living + deceased` always equals the input length.

use crate::model::member::Member;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Member counts keyed by generation.
///
/// Members without an author-asserted generation are bucketed separately in
/// `unassigned` rather than being folded into any numeric key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationCounts {
    /// Counts in ascending generation order.
    pub by_generation: BTreeMap<i32, usize>,
    /// Members with `generation: None`.
    pub unassigned: usize,
}

impl GenerationCounts {
    /// Returns the total across all buckets.
    pub fn total(&self) -> usize {
        self.by_generation.values().sum::<usize>() + self.unassigned
    }
}

/// Living/deceased totals for one member snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeStatusSummary {
    pub living: usize,
    pub deceased: usize,
}

impl LifeStatusSummary {
    /// Returns `living + deceased`.
    pub fn total(&self) -> usize {
        self.living + self.deceased
    }
}

/// Counts members per generation, ascending, with a separate bucket for
/// members lacking the field.
pub fn counts_by_generation(members: &[Member]) -> GenerationCounts {
    let mut counts = GenerationCounts::default();
    for member in members {
        match member.generation {
            Some(generation) => *counts.by_generation.entry(generation).or_insert(0) += 1,
            None => counts.unassigned += 1,
        }
    }
    counts
}

/// Computes living/deceased totals.
///
/// Deceased ⇔ `dod_lunar` is present and non-blank; living is the complement,
/// so the totals always sum to the input length.
pub fn life_status_summary(members: &[Member]) -> LifeStatusSummary {
    let mut summary = LifeStatusSummary::default();
    for member in members {
        if member.is_deceased() {
            summary.deceased += 1;
        } else {
            summary.living += 1;
        }
    }
    summary
}
