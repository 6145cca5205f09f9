//! The pedigree graph engine.
//!
//! ## Submodules
//!
//! - [`pedigree`]: [`PedigreeGraph`] storage and invariant-preserving
//!   mutations (add, reparent, remove).
//! - [`traversal`]: parent resolution and transitive
//!   ancestor/descendant queries.
//! - [`subgraph`]: extraction of independent ancestor/descendant
//!   subgraphs.

pub mod pedigree;
pub mod subgraph;
pub mod traversal;

pub use pedigree::PedigreeGraph;
