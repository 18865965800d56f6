//! Name and generation filtering over the member snapshot.
//!
//! # Responsibility
//! - Select members by case-insensitive name substring and optional
//!   generation set.
//!
//! # Invariants
//! - Input relative order is preserved in results.
//! - An empty filter is a full passthrough, never an error.
//! - Members without a `generation` are excluded by any non-empty
//!   generation set.

use crate::model::member::Member;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Filter options for member selection.
///
/// Both dimensions are conjunctive; an empty dimension is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    /// Name query; blank means "match everyone".
    pub query: String,
    /// Generation whitelist; empty means "all generations".
    pub generations: BTreeSet<i32>,
}

impl MemberFilter {
    /// Creates a name-only filter.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            generations: BTreeSet::new(),
        }
    }

    /// Adds a generation whitelist to this filter.
    pub fn with_generations(mut self, generations: impl IntoIterator<Item = i32>) -> Self {
        self.generations = generations.into_iter().collect();
        self
    }

    /// Returns the query with surrounding/internal whitespace normalized.
    ///
    /// A blank normalized query disables name matching entirely.
    pub fn normalized_query(&self) -> String {
        WHITESPACE_RE
            .replace_all(self.query.trim(), " ")
            .to_string()
    }

    /// Returns the lowercased normalized query used for name comparison.
    ///
    /// Compute this once per pass and hand it to [`is_name_match`]; the
    /// normalization allocates and must not run per member.
    pub fn search_needle(&self) -> String {
        self.normalized_query().to_lowercase()
    }

    /// Returns whether one member passes both filter dimensions.
    pub fn matches(&self, member: &Member) -> bool {
        let needle = self.search_needle();
        self.matches_generation(member)
            && (needle.is_empty() || name_contains(&member.full_name, &needle))
    }

    /// Returns whether one member matches the name query alone.
    ///
    /// This is the search-highlight predicate: a blank query matches nobody
    /// for highlighting purposes, while [`MemberFilter::matches`] treats it
    /// as a passthrough. Loops should use [`MemberFilter::search_needle`] and
    /// [`is_name_match`] instead.
    pub fn is_search_match(&self, member: &Member) -> bool {
        is_name_match(&member.full_name, &self.search_needle())
    }

    pub(crate) fn matches_generation(&self, member: &Member) -> bool {
        if self.generations.is_empty() {
            return true;
        }
        member
            .generation
            .map(|generation| self.generations.contains(&generation))
            .unwrap_or(false)
    }
}

/// Selects the matching subsequence of `members`, preserving input order.
pub fn filter_members<'a>(members: &'a [Member], filter: &MemberFilter) -> Vec<&'a Member> {
    let needle = filter.search_needle();
    members
        .iter()
        .filter(|member| {
            filter.matches_generation(member)
                && (needle.is_empty() || name_contains(&member.full_name, &needle))
        })
        .collect()
}

/// Search-highlight predicate against a precomputed needle.
///
/// `needle` must come from [`MemberFilter::search_needle`]; a blank needle
/// matches nobody.
pub fn is_name_match(name: &str, needle: &str) -> bool {
    !needle.is_empty() && name_contains(name, needle)
}

fn name_contains(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}
