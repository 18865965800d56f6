//! Render-adapter payload for the tree chart.
//!
//! # Responsibility
//! - Define the node/edge handoff consumed by external layout backends.
//! - Keep the payload serializable and free of layout geometry; the backend
//!   owns placement, the core owns structure and styling.
//!
//! # Invariants
//! - `key` values are unique (derived from member ids).
//! - Edges point parent → child, top-to-bottom.

use crate::model::member::MemberId;
use crate::style::Style;
use serde::{Deserialize, Serialize};

pub mod dot;

/// One node of the chart handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartNode {
    /// Unique node key, the member id rendered as text.
    pub key: String,
    /// Display label: full name plus an optional generation caption.
    pub label: String,
    /// Resolved visual style.
    pub style: Style,
    /// Navigation target for the profile popup collaborator.
    pub nav_target: Option<MemberId>,
}

/// One parent → child edge of the chart handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEdge {
    pub from_key: String,
    pub to_key: String,
}

/// Full chart handoff: nodes with styles plus the edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub nodes: Vec<ChartNode>,
    pub edges: Vec<ChartEdge>,
}
