//! # swarm-analysis
//!
//! Requirement document analysis for the swarm coordinator.
//!
//! Turns a free-text (or pre-structured) requirement document into a
//! [`swarm_core::ProjectAnalysis`]: a technology profile matched against
//! static taxonomy tables, a three-dimension complexity assessment, a
//! priority-chain project type, team/quality/timeline constraints, and a
//! confidence score. All scoring is deterministic substring matching over
//! normalized text; no stage ever fails on poor input.

pub mod analyzer;
pub mod complexity;
pub mod constraints;
pub mod extractor;
pub mod project_type;
pub mod taxonomy;

pub use analyzer::ProjectAnalyzer;
pub use complexity::assess;
pub use constraints::extract_constraints;
pub use extractor::{extract, normalize};
pub use project_type::classify_type;
