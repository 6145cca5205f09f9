//! Parent resolution and transitive traversal queries.
//!
//! # Algorithms
//!
//! - **Parent resolution** ([`PedigreeGraph::parents_of`]): a graph-wide
//!   adjacency scan ("who lists this member as a child") that
//!   short-circuits as soon as two distinct parents are found. No reverse
//!   index is maintained.
//! - **Descendants** ([`PedigreeGraph::descendants`]): BFS over child edges
//!   with a visited set, collecting every reached vertex except the start.
//! - **Ancestors** ([`PedigreeGraph::ancestors`]): a graph-wide membership
//!   sweep: a vertex is an ancestor iff the member is reachable from it
//!   along child edges. Reachability uses an explicit worklist, never
//!   recursion, so deep pedigrees cannot overflow the stack.
//!
//! All visited sets are built from the instance's hasher, keeping every
//! comparison under the single equivalence contract fixed at construction.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::collections::{HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use super::pedigree::PedigreeGraph;
use crate::error::PedigreeError;
use crate::parents::ParentPair;

impl<T, S> PedigreeGraph<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Resolve the recorded parents of `member`.
    ///
    /// Returns `None` if the member has no recorded parent pair, or the
    /// pair if it has one. A member left with a single residual edge (its
    /// other parent was removed) has no recorded pair and also yields
    /// `None`.
    ///
    /// Scans the whole adjacency in the worst case; terminates early once
    /// two distinct parents have been found.
    ///
    /// # Errors
    ///
    /// Returns [`PedigreeError::MemberNotFound`] if `member` is absent.
    pub fn parents_of(&self, member: &T) -> Result<Option<ParentPair<T>>, PedigreeError<T>> {
        if !self.contains(member) {
            return Err(PedigreeError::MemberNotFound(member.clone()));
        }

        let mut found: Vec<&T> = Vec::with_capacity(2);
        for (candidate, children) in &self.adjacency {
            if children.iter().any(|c| c == member) {
                found.push(candidate);
                if found.len() == 2 {
                    break;
                }
            }
        }

        match found.as_slice() {
            [p1, p2] => Ok(Some(ParentPair::new((*p1).clone(), (*p2).clone()))),
            _ => Ok(None),
        }
    }

    /// The full transitive descendant set of `member`, excluding `member`
    /// itself.
    ///
    /// BFS over child edges; each vertex is visited at most once.
    ///
    /// # Errors
    ///
    /// Returns [`PedigreeError::MemberNotFound`] if `member` is absent.
    pub fn descendants(&self, member: &T) -> Result<HashSet<T, S>, PedigreeError<T>> {
        if !self.contains(member) {
            return Err(PedigreeError::MemberNotFound(member.clone()));
        }

        let mut visited: HashSet<T, S> =
            HashSet::with_hasher(self.adjacency.hasher().clone());
        let mut queue: VecDeque<&T> = VecDeque::new();

        if let Some(children) = self.adjacency.get(member) {
            for child in children {
                if visited.insert(child.clone()) {
                    queue.push_back(child);
                }
            }
        }
        while let Some(current) = queue.pop_front() {
            if let Some(children) = self.adjacency.get(current) {
                for child in children {
                    if visited.insert(child.clone()) {
                        queue.push_back(child);
                    }
                }
            }
        }

        Ok(visited)
    }

    /// The full transitive ancestor set of `member`: every vertex from
    /// which `member` is reachable along child edges.
    ///
    /// Graph-wide sweep: each vertex is tested for reachability to
    /// `member`. O(V·(V+E)) worst case, straightforward polynomial cost,
    /// per the engine's contract.
    ///
    /// # Errors
    ///
    /// Returns [`PedigreeError::MemberNotFound`] if `member` is absent.
    pub fn ancestors(&self, member: &T) -> Result<HashSet<T, S>, PedigreeError<T>> {
        if !self.contains(member) {
            return Err(PedigreeError::MemberNotFound(member.clone()));
        }

        let mut out: HashSet<T, S> =
            HashSet::with_hasher(self.adjacency.hasher().clone());
        for candidate in self.adjacency.keys() {
            if candidate == member {
                continue;
            }
            if self.reaches(candidate, member) {
                out.insert(candidate.clone());
            }
        }
        Ok(out)
    }

    /// Returns `true` iff `descendant` is reachable from `member` along
    /// child edges, directly or transitively.
    ///
    /// A member is never its own descendant (the graph is acyclic).
    ///
    /// # Errors
    ///
    /// Returns [`PedigreeError::MemberNotFound`] if either argument is
    /// absent.
    pub fn is_descendant(&self, member: &T, descendant: &T) -> Result<bool, PedigreeError<T>> {
        if !self.contains(member) {
            return Err(PedigreeError::MemberNotFound(member.clone()));
        }
        if !self.contains(descendant) {
            return Err(PedigreeError::MemberNotFound(descendant.clone()));
        }
        Ok(self.reaches(member, descendant))
    }

    /// BFS reachability from `from` to `target` along child edges, with
    /// early exit on the first hit. The start vertex itself does not count
    /// as reached.
    pub(crate) fn reaches(&self, from: &T, target: &T) -> bool {
        let mut visited: HashSet<&T, S> =
            HashSet::with_hasher(self.adjacency.hasher().clone());
        let mut queue: VecDeque<&T> = VecDeque::new();
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            if let Some(children) = self.adjacency.get(current) {
                for child in children {
                    if child == target {
                        return true;
                    }
                    if visited.insert(child) {
                        queue.push_back(child);
                    }
                }
            }
        }
        false
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
