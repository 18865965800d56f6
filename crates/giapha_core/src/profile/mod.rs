//! Profile resolution for the popup collaborator.
//!
//! # Responsibility
//! - Resolve one member's extended display payload from the shared snapshot.
//! - Derive a lifespan caption from the free-form lunar date strings.
//!
//! # Invariants
//! - The selected member id is an explicit parameter; no ambient navigation
//!   state is read.
//! - Resolution never mutates the snapshot.

use crate::model::member::{Member, MemberId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})\b").expect("valid year regex"));

/// Extended display payload for one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: MemberId,
    pub full_name: String,
    pub generation: Option<i32>,
    pub avatar_url: Option<String>,
    pub note: Option<String>,
    pub biography: Option<String>,
    pub achievements: Option<String>,
    /// Caption like `1920 – 1985`, `1920 –` for the living, or `None` when
    /// no year can be extracted from either date string.
    pub lifespan: Option<String>,
}

/// Resolves the profile for `id` out of the full member snapshot.
///
/// Returns `None` when the id is not present.
pub fn resolve_profile(members: &[Member], id: MemberId) -> Option<MemberProfile> {
    let member = members.iter().find(|member| member.id == id)?;
    Some(MemberProfile {
        id: member.id,
        full_name: member.full_name.clone(),
        generation: member.generation,
        avatar_url: member.avatar_url.clone(),
        note: member.note.clone(),
        biography: member.biography.clone(),
        achievements: member.achievements.clone(),
        lifespan: lifespan_caption(member),
    })
}

/// Builds the lifespan caption from lunar date strings.
///
/// The date strings are free-form; the first 4-digit run in each is treated
/// as the year. A deceased member without an extractable death year still
/// gets the birth year alone.
fn lifespan_caption(member: &Member) -> Option<String> {
    let birth_year = member.dob_lunar.as_deref().and_then(extract_year);
    let death_year = member.dod_lunar.as_deref().and_then(extract_year);

    match (birth_year, death_year) {
        (Some(birth), Some(death)) => Some(format!("{birth} – {death}")),
        (Some(birth), None) if member.is_deceased() => Some(birth.to_string()),
        (Some(birth), None) => Some(format!("{birth} –")),
        (None, Some(death)) => Some(format!("– {death}")),
        (None, None) => None,
    }
}

fn extract_year(value: &str) -> Option<u32> {
    YEAR_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|year| year.as_str().parse().ok())
}
