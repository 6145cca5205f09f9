//! Error taxonomy for pedigree graph operations.
//!
//! Every variant is a caller-input or caller-state violation, never a
//! transient fault: there is nothing to retry. Callers are expected to check
//! preconditions (e.g. [`PedigreeGraph::contains`]) before calling, or to
//! treat the error as fatal to that call.
//!
//! [`PedigreeGraph::contains`]: crate::PedigreeGraph::contains

/// Errors from pedigree graph mutations and queries.
///
/// The offending member identifier is carried in the variant so callers can
/// report which input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PedigreeError<T> {
    /// An add operation targeted an identifier already present in the graph.
    #[error("member already exists: {0:?}")]
    AlreadyExists(T),

    /// A query or mutation referenced an identifier absent from the graph.
    #[error("member not found: {0:?}")]
    MemberNotFound(T),

    /// An add/reparent operation referenced a parent identifier absent from
    /// the graph.
    #[error("parent not found: {0:?}")]
    ParentNotFound(T),

    /// A reparent operation would make the member its own ancestor.
    #[error("reparenting {member:?} under {parent:?} would create a cycle")]
    CycleDetected {
        /// The member being reparented.
        member: T,
        /// The proposed parent that is already a descendant of (or equal to)
        /// the member.
        parent: T,
    },

    /// The supplied parent pair names the same member in both slots.
    ///
    /// A member has either zero or two *distinct* parents; a degenerate pair
    /// can never produce a valid state, so the input is rejected up front.
    #[error("parent pair names the same member twice: {0:?}")]
    DuplicateParents(T),
}
