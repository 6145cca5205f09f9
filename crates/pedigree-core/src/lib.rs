//! pedigree-core: an in-memory pedigree graph engine.
//!
//! A pedigree graph is a directed acyclic graph in which every member has
//! either **zero** or **exactly two distinct** parents. Edges run from
//! parent to child and are stored as an adjacency list keyed by parent;
//! parenthood is implicit (X is a parent of Y iff Y appears in X's child
//! list). Parents are resolved by scanning the adjacency, never by a
//! maintained reverse index.
//!
//! # Conventions
//!
//! - **Errors**: every fallible operation returns [`PedigreeError`], a typed
//!   `thiserror` enum. Failures never leave the graph partially mutated.
//! - **Logging**: `tracing` macros (`debug!`, `trace!`). The library never
//!   installs a subscriber.
//! - **Equivalence**: member identity is governed by the key type's
//!   `Eq + Hash` contract plus the hasher chosen at construction
//!   ([`PedigreeGraph::with_hasher`]). Every internal set and map uses the
//!   instance's hasher.

pub mod error;
pub mod graph;
pub mod parents;

pub use error::PedigreeError;
pub use graph::PedigreeGraph;
pub use parents::ParentPair;
