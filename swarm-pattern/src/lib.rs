//! # swarm-pattern
//!
//! Coordination pattern catalog and selection for the swarm coordinator.
//!
//! Holds the fixed catalog of coordination strategies (hierarchical,
//! peer-to-peer, pipeline, event-driven, hybrid) and scores each against a
//! project analysis with a weighted multi-criteria function. Near-miss tiers
//! earn partial credit through a reusable ordinal-distance helper; project
//! types carry static per-pattern affinities. Selection over an empty
//! catalog is a fatal precondition error.

pub mod affinity;
pub mod catalog;
pub mod fit;
pub mod selector;

pub use affinity::type_affinity;
pub use catalog::PatternCatalog;
pub use fit::{DistanceCredit, ordinal_fit};
pub use selector::{PatternSelection, PatternSelector, quality_fit, score_pattern};
