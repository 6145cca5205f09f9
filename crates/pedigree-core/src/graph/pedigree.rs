//! Pedigree graph storage and invariant-preserving mutations.
//!
//! # Data model
//!
//! [`PedigreeGraph`] is a mapping from member identifier to its ordered list
//! of *children* (adjacency keyed by parent). Parenthood is encoded
//! implicitly: X is a parent of Y iff Y appears in X's child list. A member
//! with no entry does not exist; a member with an empty child list exists
//! but has no children. No reverse (child → parents) index is maintained;
//! parents are derived by scanning the adjacency (see
//! [`PedigreeGraph::parents_of`]).
//!
//! # Invariants
//!
//! After every successful mutation:
//!
//! 1. Every identifier referenced as a child has a top-level entry.
//! 2. A member has either zero or exactly two *distinct* recorded parents.
//! 3. The graph is acyclic.
//! 4. [`PedigreeGraph::len`] equals the number of top-level entries.
//!
//! Failed mutations leave the graph bit-identical to its pre-call state:
//! reparenting validates the proposed edges analytically *before* touching
//! the adjacency, so there is no speculative mutation to roll back.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. Callers needing concurrent access must
//! serialize mutations behind a lock; traversals read the live adjacency
//! without snapshotting.

#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_const_for_fn,
)]

use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::error::PedigreeError;
use crate::parents::ParentPair;

// ---------------------------------------------------------------------------
// PedigreeGraph
// ---------------------------------------------------------------------------

/// An in-memory two-parent DAG, keyed by an opaque member identifier.
///
/// Member identity is governed by `T`'s `Eq + Hash` contract together with
/// the hasher `S` chosen at construction. Every internal set and map is
/// built from the instance's hasher, so one equivalence contract governs
/// all lookups for the lifetime of the instance.
///
/// `Clone` produces a structurally independent copy: the adjacency storage
/// is deep-copied, so mutations to the copy never affect the original.
#[derive(Debug, Clone)]
pub struct PedigreeGraph<T, S = RandomState> {
    /// member → ordered list of its children.
    pub(crate) adjacency: HashMap<T, Vec<T>, S>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<T> PedigreeGraph<T> {
    /// Create an empty graph with the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Create an empty graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(capacity),
        }
    }
}

impl<T, S> PedigreeGraph<T, S> {
    /// Create an empty graph using the supplied hasher.
    ///
    /// The hasher fixes the equivalence contract for the lifetime of the
    /// instance: all membership tests, adjacency lookups, and traversal
    /// visited-sets go through it.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            adjacency: HashMap::with_hasher(hasher),
        }
    }

    /// Create an empty graph with pre-allocated capacity and the supplied
    /// hasher.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            adjacency: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Number of distinct members currently stored. O(1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over all member identifiers, each exactly once.
    ///
    /// Order is unspecified; no ordering guarantee is part of the contract.
    pub fn members(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }
}

impl<T: Eq + Hash, S: BuildHasher> PedigreeGraph<T, S> {
    /// Returns `true` iff `member` has a top-level entry. O(1) amortized.
    #[must_use]
    pub fn contains(&self, member: &T) -> bool {
        self.adjacency.contains_key(member)
    }
}

impl<T, S: Default> Default for PedigreeGraph<T, S> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::with_hasher(S::default()),
        }
    }
}

/// Two graphs are equal when they hold the same member set and the same
/// child lists (child order included, since slot order is part of storage).
impl<T: Eq + Hash, S: BuildHasher> PartialEq for PedigreeGraph<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for PedigreeGraph<T, S> {}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

impl<T, S> PedigreeGraph<T, S>
where
    T: Eq + Hash + Clone + fmt::Debug,
    S: BuildHasher + Clone,
{
    /// Insert `member` as a root: no parents, empty child list.
    ///
    /// # Errors
    ///
    /// Returns [`PedigreeError::AlreadyExists`] if `member` is already
    /// present. The graph is unchanged on failure.
    pub fn add_member(&mut self, member: T) -> Result<(), PedigreeError<T>> {
        if self.contains(&member) {
            return Err(PedigreeError::AlreadyExists(member));
        }
        tracing::debug!(?member, "adding root member");
        self.adjacency.insert(member, Vec::new());
        Ok(())
    }

    /// Insert `member` as a new child of both parents in `parents`.
    ///
    /// On success a new empty entry is created for `member` and `member` is
    /// appended to both parents' child lists. No cycle check is needed: a
    /// brand-new member cannot be its own ancestor.
    ///
    /// # Errors
    ///
    /// - [`PedigreeError::DuplicateParents`] if the pair names the same
    ///   member twice.
    /// - [`PedigreeError::ParentNotFound`] if either parent is absent.
    /// - [`PedigreeError::AlreadyExists`] if `member` is already present.
    ///
    /// The graph is unchanged on failure.
    pub fn add_member_with_parents(
        &mut self,
        member: T,
        parents: &ParentPair<T>,
    ) -> Result<(), PedigreeError<T>> {
        if parents.is_degenerate() {
            return Err(PedigreeError::DuplicateParents(parents.parent1.clone()));
        }
        for parent in parents.as_array() {
            if !self.contains(parent) {
                return Err(PedigreeError::ParentNotFound(parent.clone()));
            }
        }
        if self.contains(&member) {
            return Err(PedigreeError::AlreadyExists(member));
        }

        tracing::debug!(?member, ?parents, "adding member with parents");
        self.adjacency.insert(member.clone(), Vec::new());
        for parent in parents.as_array() {
            if let Some(children) = self.adjacency.get_mut(parent) {
                children.push(member.clone());
            }
        }
        Ok(())
    }

    /// Detach `member` from any current parents and reattach it under both
    /// parents in `parents`.
    ///
    /// The proposed state is validated analytically before any mutation:
    /// membership, parent existence, pair distinctness, and acyclicity are
    /// all checked against the *current* adjacency, and the edge swap is
    /// applied only once the proposal is fully valid. A failed call leaves
    /// the graph bit-identical to its pre-call state, and no transiently
    /// invalid state is ever observable.
    ///
    /// # Errors
    ///
    /// - [`PedigreeError::MemberNotFound`] if `member` is absent.
    /// - [`PedigreeError::DuplicateParents`] if the pair names the same
    ///   member twice.
    /// - [`PedigreeError::ParentNotFound`] if either new parent is absent.
    /// - [`PedigreeError::CycleDetected`] if a new parent is `member` itself
    ///   or one of its descendants.
    pub fn change_parents(
        &mut self,
        member: &T,
        parents: &ParentPair<T>,
    ) -> Result<(), PedigreeError<T>> {
        if !self.contains(member) {
            return Err(PedigreeError::MemberNotFound(member.clone()));
        }
        if parents.is_degenerate() {
            return Err(PedigreeError::DuplicateParents(parents.parent1.clone()));
        }
        for parent in parents.as_array() {
            if !self.contains(parent) {
                return Err(PedigreeError::ParentNotFound(parent.clone()));
            }
        }
        // Acyclicity against the proposed edges: parent → member closes a
        // cycle iff the parent is member itself or already reachable from
        // member along child edges.
        for parent in parents.as_array() {
            if parent == member || self.reaches(member, parent) {
                return Err(PedigreeError::CycleDetected {
                    member: member.clone(),
                    parent: parent.clone(),
                });
            }
        }

        let detached = self.detach_from_parents(member);
        for parent in parents.as_array() {
            if let Some(children) = self.adjacency.get_mut(parent) {
                children.push(member.clone());
            }
        }
        tracing::debug!(?member, ?parents, detached, "reparented member");
        Ok(())
    }

    /// Remove `member` from the graph, severing the edges that touch it.
    ///
    /// The member's entry is deleted and it is removed from its parents'
    /// child lists. Direct children are NOT deleted: they lose the incoming
    /// edge that routed through `member` but keep their entries (and any
    /// edge from their other parent). This is a local severing operation,
    /// not a cascading delete.
    ///
    /// # Errors
    ///
    /// Returns [`PedigreeError::MemberNotFound`] if `member` is absent.
    pub fn remove_member(&mut self, member: &T) -> Result<(), PedigreeError<T>> {
        if !self.contains(member) {
            return Err(PedigreeError::MemberNotFound(member.clone()));
        }
        let detached = self.detach_from_parents(member);
        let children = self.adjacency.remove(member);
        tracing::debug!(
            ?member,
            detached,
            orphaned = children.as_ref().map_or(0, Vec::len),
            "removed member"
        );
        Ok(())
    }

    /// Detach `member` from its current parents without reattaching.
    ///
    /// No-op if the member already has no parents.
    ///
    /// # Errors
    ///
    /// Returns [`PedigreeError::MemberNotFound`] if `member` is absent.
    pub fn remove_parents(&mut self, member: &T) -> Result<(), PedigreeError<T>> {
        if !self.contains(member) {
            return Err(PedigreeError::MemberNotFound(member.clone()));
        }
        let detached = self.detach_from_parents(member);
        tracing::debug!(?member, detached, "removed parent edges");
        Ok(())
    }

    /// Remove `member` from every child list in the graph, returning the
    /// number of edges severed.
    ///
    /// Handles zero, one, or two incoming edges uniformly: after
    /// [`PedigreeGraph::remove_member`] destroyed one parent of a pair, the
    /// surviving residual edge is still cleaned up here.
    fn detach_from_parents(&mut self, member: &T) -> usize {
        let mut detached = 0;
        for children in self.adjacency.values_mut() {
            if let Some(pos) = children.iter().position(|c| c == member) {
                children.remove(pos);
                detached += 1;
            }
        }
        detached
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
