//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the member-store capability consumed by the chart pipeline.
//! - Isolate SQLite query details from the pure engines.
//!
//! # Invariants
//! - Repository writes must enforce `Member::validate()` before persistence.
//! - Snapshot reads are deterministic: `generation ASC NULLS LAST, id ASC`.

pub mod member_repo;
