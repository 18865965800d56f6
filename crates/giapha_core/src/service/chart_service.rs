//! Chart pipeline use-case service.
//!
//! # Responsibility
//! - Run fetch → forest → ranks → styles → chart data over one snapshot.
//! - Expose the filter and aggregation engines behind the same repository
//!   capability.
//!
//! # Invariants
//! - The repository is an injected capability; no global client state.
//! - Each call operates on a fresh immutable snapshot and is idempotent for
//!   identical stores.
//! - Chart nodes are emitted layer by layer (ascending rank, input order
//!   within a layer); edges point parent → child.

use crate::chart::{ChartData, ChartEdge, ChartNode};
use crate::model::member::{Member, MemberId};
use crate::profile::{resolve_profile, MemberProfile};
use crate::repo::member_repo::{MemberRepository, RepoError};
use crate::search::filter::{filter_members, is_name_match, MemberFilter};
use crate::stats::{counts_by_generation, life_status_summary, GenerationCounts, LifeStatusSummary};
use crate::style::StylePalette;
use crate::tree::forest::{build_forest, TreeBuildError};
use crate::tree::rank::assign_ranks;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart pipeline operations.
#[derive(Debug)]
pub enum ChartServiceError {
    /// Snapshot could not be fetched from the repository.
    Repo(RepoError),
    /// Snapshot failed forest validation.
    Tree(TreeBuildError),
}

impl Display for ChartServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Tree(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ChartServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Tree(err) => Some(err),
        }
    }
}

impl From<RepoError> for ChartServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<TreeBuildError> for ChartServiceError {
    fn from(value: TreeBuildError) -> Self {
        Self::Tree(value)
    }
}

/// Aggregate dashboard payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub generation_counts: GenerationCounts,
    pub life_status: LifeStatusSummary,
}

/// Chart pipeline facade over one injected member repository.
pub struct ChartService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> ChartService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds the full chart handoff for one snapshot.
    ///
    /// The `filter` only drives search highlighting here; every member stays
    /// in the chart so the tree shape is never broken by a search.
    pub fn build_chart(
        &self,
        filter: &MemberFilter,
        palette: &StylePalette,
    ) -> Result<ChartData, ChartServiceError> {
        let members = self.repo.fetch_all_members()?;
        let forest = build_forest(&members)?;
        let ranks = assign_ranks(&forest);
        let needle = filter.search_needle();

        // Layer-major emission: ascending rank, snapshot order within a rank.
        let mut order: Vec<usize> = (0..forest.len()).collect();
        order.sort_by_key(|&idx| (ranks[idx], idx));

        let mut nodes = Vec::with_capacity(forest.len());
        for idx in order {
            let member = &forest.nodes()[idx].member;
            nodes.push(ChartNode {
                key: member.id.to_string(),
                label: node_label(member),
                style: palette.resolve(
                    member.generation,
                    is_name_match(&member.full_name, &needle),
                    member.is_deceased(),
                ),
                nav_target: Some(member.id),
            });
        }

        let edges = forest
            .edges()
            .into_iter()
            .map(|(parent, child)| ChartEdge {
                from_key: forest.nodes()[parent].member.id.to_string(),
                to_key: forest.nodes()[child].member.id.to_string(),
            })
            .collect::<Vec<_>>();

        info!(
            "event=chart_build module=service status=ok nodes={} edges={} roots={}",
            nodes.len(),
            edges.len(),
            forest.roots().len()
        );

        Ok(ChartData { nodes, edges })
    }

    /// Returns the matching member subset, preserving snapshot order.
    pub fn search(&self, filter: &MemberFilter) -> Result<Vec<Member>, ChartServiceError> {
        let members = self.repo.fetch_all_members()?;
        Ok(filter_members(&members, filter)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Computes dashboard statistics over the full snapshot.
    pub fn statistics(&self) -> Result<Statistics, ChartServiceError> {
        let members = self.repo.fetch_all_members()?;
        Ok(Statistics {
            generation_counts: counts_by_generation(&members),
            life_status: life_status_summary(&members),
        })
    }

    /// Resolves one member profile for the popup collaborator.
    pub fn profile(&self, id: MemberId) -> Result<Option<MemberProfile>, ChartServiceError> {
        let members = self.repo.fetch_all_members()?;
        Ok(resolve_profile(&members, id))
    }
}

/// Builds the node label: full name plus a generation caption when present.
pub fn node_label(member: &Member) -> String {
    match member.generation {
        Some(generation) => format!("{}\nĐời thứ {generation}", member.full_name),
        None => member.full_name.clone(),
    }
}
