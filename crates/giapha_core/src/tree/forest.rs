//! Forest construction from flat member records.
//!
//! # Responsibility
//! - Index members by id, resolve parent links, and surface data-integrity
//!   errors before any layout work happens.
//! - Keep child ordering equal to input ordering so left-right placement is
//!   reproducible.
//!
//! # Invariants
//! - Every non-root node has exactly one parent in the forest.
//! - Nodes reachable from all roots equal the input record count.
//! - A dangling `father_id` is never silently promoted to a root.

use crate::model::member::{Member, MemberId};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for forest construction.
pub type TreeBuildResult<T> = Result<T, TreeBuildError>;

/// Data-integrity error detected while building the forest.
///
/// All variants are fatal for the build; recovery policy (for example
/// rendering a dangling node as a flagged root) belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeBuildError {
    /// Two records share one `id`.
    DuplicateId(MemberId),
    /// `father_id` points at a nonexistent record.
    DanglingParentReference {
        member_id: MemberId,
        father_id: MemberId,
    },
    /// A parent chain revisits itself. Carries the cycle membership in
    /// walk order for diagnosis.
    CyclicAncestry(Vec<MemberId>),
}

impl Display for TreeBuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate member id: {id}"),
            Self::DanglingParentReference {
                member_id,
                father_id,
            } => write!(
                f,
                "member {member_id} cites nonexistent father {father_id}"
            ),
            Self::CyclicAncestry(ids) => {
                let cycle = ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                write!(f, "cyclic ancestry: {cycle}")
            }
        }
    }
}

impl Error for TreeBuildError {}

/// One node of the built forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestNode {
    /// Owned member record for this node.
    pub member: Member,
    /// Parent node index. `None` for roots.
    pub parent: Option<usize>,
    /// Child node indices in input order.
    pub children: Vec<usize>,
}

/// Validated forest over one member snapshot.
///
/// Node indices are stable and equal to the input record positions, so
/// callers can keep parallel per-node data (ranks, styles) in plain vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forest {
    nodes: Vec<ForestNode>,
    roots: Vec<usize>,
    index: HashMap<MemberId, usize>,
}

impl Forest {
    /// Returns the total node count.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the forest is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns root node indices in input order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Returns all nodes in input order.
    pub fn nodes(&self) -> &[ForestNode] {
        &self.nodes
    }

    /// Returns the node index for a member id.
    pub fn index_of(&self, id: MemberId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Returns every parent/child edge as `(parent_index, child_index)`,
    /// parents in input order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for (parent, node) in self.nodes.iter().enumerate() {
            for &child in &node.children {
                edges.push((parent, child));
            }
        }
        edges
    }
}

/// Builds a validated forest from one member snapshot.
///
/// # Contract
/// - Fails with [`TreeBuildError::DuplicateId`] on id collisions.
/// - Fails with [`TreeBuildError::DanglingParentReference`] when `father_id`
///   resolves to no record; the node is not promoted to a root.
/// - Fails with [`TreeBuildError::CyclicAncestry`] when a parent chain
///   revisits itself, naming the cycle's member ids.
/// - On success, summing nodes reachable from all roots equals input length.
pub fn build_forest(members: &[Member]) -> TreeBuildResult<Forest> {
    let mut index: HashMap<MemberId, usize> = HashMap::with_capacity(members.len());
    for (position, member) in members.iter().enumerate() {
        match index.entry(member.id) {
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
            Entry::Occupied(_) => return Err(TreeBuildError::DuplicateId(member.id)),
        }
    }

    let mut nodes: Vec<ForestNode> = members
        .iter()
        .map(|member| ForestNode {
            member: member.clone(),
            parent: None,
            children: Vec::new(),
        })
        .collect();

    let mut roots = Vec::new();
    for (position, member) in members.iter().enumerate() {
        match member.father_id {
            None => roots.push(position),
            Some(father_id) => {
                let Some(&parent) = index.get(&father_id) else {
                    return Err(TreeBuildError::DanglingParentReference {
                        member_id: member.id,
                        father_id,
                    });
                };
                nodes[position].parent = Some(parent);
                nodes[parent].children.push(position);
            }
        }
    }

    detect_cycles(&nodes)?;

    Ok(Forest {
        nodes,
        roots,
        index,
    })
}

/// Walks ancestor chains of every node and fails on the first revisit.
///
/// Nodes whose chain already reached a root are memoized, keeping the whole
/// pass linear in the node count.
fn detect_cycles(nodes: &[ForestNode]) -> TreeBuildResult<()> {
    let mut verified: HashSet<usize> = HashSet::with_capacity(nodes.len());

    for start in 0..nodes.len() {
        if verified.contains(&start) {
            continue;
        }

        let mut path: Vec<usize> = Vec::new();
        let mut on_path: HashSet<usize> = HashSet::new();
        let mut cursor = Some(start);

        while let Some(current) = cursor {
            if verified.contains(&current) {
                break;
            }
            if !on_path.insert(current) {
                let cycle_start = path
                    .iter()
                    .position(|&idx| idx == current)
                    .unwrap_or_default();
                let cycle = path[cycle_start..]
                    .iter()
                    .map(|&idx| nodes[idx].member.id)
                    .collect();
                return Err(TreeBuildError::CyclicAncestry(cycle));
            }
            path.push(current);
            cursor = nodes[current].parent;
        }

        verified.extend(path);
    }

    Ok(())
}
