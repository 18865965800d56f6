//! Member domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by the tree, filter and aggregation
//!   engines.
//! - Provide life-status and root helpers used across core.
//!
//! # Invariants
//! - `id` is stable and unique across one member set.
//! - `father_id: None` marks a founder (root of its own tree).
//! - A trimmed, non-empty `dod_lunar` is the source of truth for deceased
//!   state.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for every member record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MemberId = i64;

/// Canonical genealogy record.
///
/// Structural fields (`id`, `father_id`) drive the tree engines; `generation`
/// is an author-asserted depth used only for styling and labels; the
/// remaining optional fields are display payload for the profile view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable global ID used as node key and popup navigation target.
    pub id: MemberId,
    /// Display name; search key for case-insensitive substring matching.
    pub full_name: String,
    /// Parent link. `None` marks a founder.
    pub father_id: Option<MemberId>,
    /// Author-asserted generational depth. May be absent and may diverge
    /// from the structural rank without being an error.
    pub generation: Option<i32>,
    /// Lunar-calendar date of birth, free-form text.
    pub dob_lunar: Option<String>,
    /// Lunar-calendar date of death. Presence implies deceased.
    pub dod_lunar: Option<String>,
    /// Portrait URL for the profile view.
    pub avatar_url: Option<String>,
    /// Short annotation shown next to the name.
    pub note: Option<String>,
    /// Long-form biography text.
    pub biography: Option<String>,
    /// Notable achievements text.
    pub achievements: Option<String>,
}

/// Validation error for member records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    /// `full_name` is blank after trim.
    BlankFullName(MemberId),
    /// `father_id` points at the member itself.
    SelfParent(MemberId),
}

impl Display for MemberValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankFullName(id) => write!(f, "member {id} has a blank full_name"),
            Self::SelfParent(id) => write!(f, "member {id} cites itself as father"),
        }
    }
}

impl Error for MemberValidationError {}

impl Member {
    /// Creates a member with only structural fields set.
    ///
    /// Optional payload fields start as `None`; callers fill them as needed.
    pub fn new(id: MemberId, full_name: impl Into<String>, father_id: Option<MemberId>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            father_id,
            generation: None,
            dob_lunar: None,
            dod_lunar: None,
            avatar_url: None,
            note: None,
            biography: None,
            achievements: None,
        }
    }

    /// Returns whether this member is a founder (tree root).
    pub fn is_root(&self) -> bool {
        self.father_id.is_none()
    }

    /// Returns whether this member is deceased.
    ///
    /// Deceased ⇔ `dod_lunar` is present and non-blank after trim.
    pub fn is_deceased(&self) -> bool {
        self.dod_lunar
            .as_deref()
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }

    /// Validates record-local invariants.
    ///
    /// Cross-record invariants (unique ids, resolvable parents, acyclic
    /// ancestry) are enforced by the tree builder over the full set.
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(MemberValidationError::BlankFullName(self.id));
        }
        if self.father_id == Some(self.id) {
            return Err(MemberValidationError::SelfParent(self.id));
        }
        Ok(())
    }
}
