//! Domain model for genealogy records.
//!
//! # Responsibility
//! - Define the canonical member record consumed by every engine in core.
//! - Keep optional display-only payload separate from structural fields.
//!
//! # Invariants
//! - Every member is identified by a stable integer `MemberId`.
//! - `father_id` is the only structural link; all other optional fields are
//!   presentation payload.

pub mod member;
