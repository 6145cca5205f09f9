//! Extraction of independent ancestor/descendant subgraphs.
//!
//! An extract is a brand-new [`PedigreeGraph`] holding the requested member
//! plus its full ancestor (or descendant) set, built with the same hasher
//! as the source. The extract shares no storage with the source: mutations
//! to one never affect the other.
//!
//! # Partial parent pairs
//!
//! A kept member keeps its parent edges only when BOTH of its parents are
//! inside the extract. A pair with one parent outside would leave the
//! member with a single recorded parent, which the two-parent invariant
//! forbids; such members appear parentless in the extract instead.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::pedigree::PedigreeGraph;
use crate::error::PedigreeError;

impl<T, S> PedigreeGraph<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Extract an independent graph of `member` and its full descendant
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`PedigreeError::MemberNotFound`] if `member` is absent.
    pub fn descendant_graph(&self, member: &T) -> Result<Self, PedigreeError<T>> {
        let mut kept = self.descendants(member)?;
        kept.insert(member.clone());
        Ok(self.extract(&kept))
    }

    /// Extract an independent graph of `member` and its full ancestor set.
    ///
    /// Returns `None` when the member has no ancestors: there is no
    /// ancestry to extract.
    ///
    /// # Errors
    ///
    /// Returns [`PedigreeError::MemberNotFound`] if `member` is absent.
    pub fn ancestor_graph(&self, member: &T) -> Result<Option<Self>, PedigreeError<T>> {
        let mut kept = self.ancestors(member)?;
        if kept.is_empty() {
            return Ok(None);
        }
        kept.insert(member.clone());
        Ok(Some(self.extract(&kept)))
    }

    /// Build a new graph holding exactly the `kept` members and, for each
    /// kept member whose full parent pair is also kept, its two parent
    /// edges.
    fn extract(&self, kept: &HashSet<T, S>) -> Self {
        let mut extracted = Self {
            adjacency: HashMap::with_capacity_and_hasher(
                kept.len(),
                self.adjacency.hasher().clone(),
            ),
        };
        for member in kept {
            extracted.adjacency.insert(member.clone(), Vec::new());
        }

        for member in kept {
            let mut owners: Vec<&T> = Vec::with_capacity(2);
            for (candidate, children) in &self.adjacency {
                if children.iter().any(|c| c == member) {
                    owners.push(candidate);
                    if owners.len() == 2 {
                        break;
                    }
                }
            }
            if let [p1, p2] = owners.as_slice() {
                if kept.contains(*p1) && kept.contains(*p2) {
                    for parent in [*p1, *p2] {
                        if let Some(children) = extracted.adjacency.get_mut(parent) {
                            children.push(member.clone());
                        }
                    }
                }
            }
        }
        extracted
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parents::ParentPair;

    /// Roots a, b; c child of {a, b}; d child of {c, b}; unrelated root x
    /// with child y of {x, a}.
    fn herd() -> PedigreeGraph<&'static str> {
        let mut g = PedigreeGraph::new();
        g.add_member("a").unwrap();
        g.add_member("b").unwrap();
        g.add_member("x").unwrap();
        g.add_member_with_parents("c", &ParentPair::new("a", "b"))
            .unwrap();
        g.add_member_with_parents("d", &ParentPair::new("c", "b"))
            .unwrap();
        g.add_member_with_parents("y", &ParentPair::new("x", "a"))
            .unwrap();
        g
    }

    // -------------------------------------------------------------------
    // descendant_graph
    // -------------------------------------------------------------------

    #[test]
    fn descendant_graph_holds_subtree_only() {
        let g = herd();
        let sub = g.descendant_graph(&"c").unwrap();

        assert_eq!(sub.len(), 2);
        assert!(sub.contains(&"c"));
        assert!(sub.contains(&"d"));
        assert!(!sub.contains(&"a"));
        assert!(!sub.contains(&"y"));
    }

    #[test]
    fn descendant_graph_drops_partial_pairs() {
        // d's parents are {c, b}; b is outside the extract rooted at c, so
        // d appears parentless rather than single-parented.
        let g = herd();
        let sub = g.descendant_graph(&"c").unwrap();

        assert_eq!(sub.parents_of(&"d").unwrap(), None);
        assert!(sub.descendants(&"c").unwrap().is_empty());
    }

    #[test]
    fn descendant_graph_keeps_complete_pairs() {
        // Rooted at b: kept = {b, c, d} plus... a is outside, so c loses
        // its pair; d's pair {c, b} is fully kept and survives.
        let g = herd();
        let sub = g.descendant_graph(&"b").unwrap();

        assert_eq!(sub.len(), 3);
        assert_eq!(sub.parents_of(&"c").unwrap(), None);
        let d_parents = sub.parents_of(&"d").unwrap().unwrap();
        assert!(d_parents.same_pair(&ParentPair::new("b", "c")));
    }

    #[test]
    fn descendant_graph_of_leaf_is_singleton() {
        let g = herd();
        let sub = g.descendant_graph(&"d").unwrap();
        assert_eq!(sub.len(), 1);
        assert!(sub.contains(&"d"));
    }

    #[test]
    fn descendant_graph_missing_member() {
        let g = herd();
        assert_eq!(
            g.descendant_graph(&"nope").unwrap_err(),
            PedigreeError::MemberNotFound("nope")
        );
    }

    #[test]
    fn descendant_graph_is_independent() {
        let g = herd();
        let mut sub = g.descendant_graph(&"b").unwrap();

        sub.remove_member(&"d").unwrap();
        sub.add_member("new").unwrap();

        assert!(g.contains(&"d"));
        assert!(!g.contains(&"new"));
        assert!(g.descendants(&"b").unwrap().contains("d"));
    }

    // -------------------------------------------------------------------
    // ancestor_graph
    // -------------------------------------------------------------------

    #[test]
    fn ancestor_graph_of_root_is_none() {
        let g = herd();
        assert!(g.ancestor_graph(&"a").unwrap().is_none());
    }

    #[test]
    fn ancestor_graph_holds_full_ancestry() {
        let g = herd();
        let sub = g.ancestor_graph(&"d").unwrap().unwrap();

        // d's ancestors are a, b, c.
        assert_eq!(sub.len(), 4);
        for m in ["a", "b", "c", "d"] {
            assert!(sub.contains(&m));
        }
        assert!(!sub.contains(&"x"));
        assert!(!sub.contains(&"y"));
    }

    #[test]
    fn ancestor_graph_preserves_kept_pairs() {
        let g = herd();
        let sub = g.ancestor_graph(&"d").unwrap().unwrap();

        // Both pairs {a,b}→c and {c,b}→d are fully inside the extract.
        let c_parents = sub.parents_of(&"c").unwrap().unwrap();
        assert!(c_parents.same_pair(&ParentPair::new("a", "b")));
        let d_parents = sub.parents_of(&"d").unwrap().unwrap();
        assert!(d_parents.same_pair(&ParentPair::new("c", "b")));
    }

    #[test]
    fn ancestor_graph_is_closed_under_parents() {
        // The ancestor set is closed under ancestry: every kept member's
        // parents are themselves ancestors, so no pair is ever dropped in
        // an ancestor extract (unlike descendant extracts).
        let mut g = herd();
        g.add_member_with_parents("z", &ParentPair::new("y", "c"))
            .unwrap();

        let sub = g.ancestor_graph(&"z").unwrap().unwrap();
        assert_eq!(sub.len(), 6);
        let z_parents = sub.parents_of(&"z").unwrap().unwrap();
        assert!(z_parents.same_pair(&ParentPair::new("c", "y")));
        let y_parents = sub.parents_of(&"y").unwrap().unwrap();
        assert!(y_parents.same_pair(&ParentPair::new("x", "a")));
    }

    #[test]
    fn ancestor_graph_missing_member() {
        let g = herd();
        assert_eq!(
            g.ancestor_graph(&"nope").unwrap_err(),
            PedigreeError::MemberNotFound("nope")
        );
    }

    #[test]
    fn ancestor_graph_is_independent() {
        let g = herd();
        let mut sub = g.ancestor_graph(&"c").unwrap().unwrap();

        sub.remove_member(&"a").unwrap();

        assert!(g.contains(&"a"));
        let c_parents = g.parents_of(&"c").unwrap().unwrap();
        assert!(c_parents.same_pair(&ParentPair::new("a", "b")));
    }
}
