//! Core genealogy chart logic for GiaPha.
//! This crate is the single source of truth for tree, style and aggregation
//! invariants; rendering backends and UI chrome live elsewhere.

pub mod chart;
pub mod db;
pub mod logging;
pub mod model;
pub mod profile;
pub mod repo;
pub mod search;
pub mod service;
pub mod stats;
pub mod style;
pub mod tree;

pub use chart::dot::{to_dot, GraphOptions};
pub use chart::{ChartData, ChartEdge, ChartNode};
pub use logging::{
    default_log_level, init_logging, init_logging_from_env, logging_config_from_env, logging_status,
};
pub use model::member::{Member, MemberId, MemberValidationError};
pub use profile::{resolve_profile, MemberProfile};
pub use repo::member_repo::{
    InMemoryMemberRepository, MemberRepository, RepoError, RepoResult, SqliteMemberRepository,
};
pub use search::filter::{filter_members, is_name_match, MemberFilter};
pub use service::chart_service::{node_label, ChartService, ChartServiceError, Statistics};
pub use stats::{counts_by_generation, life_status_summary, GenerationCounts, LifeStatusSummary};
pub use style::{Style, StyleBand, StylePalette};
pub use tree::forest::{build_forest, Forest, ForestNode, TreeBuildError, TreeBuildResult};
pub use tree::rank::assign_ranks;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
