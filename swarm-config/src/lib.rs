//! # swarm-config
//!
//! Configuration synthesis for the swarm coordinator.
//!
//! Fuses formulaic baselines computed from a project analysis and its
//! selected coordination pattern with a static knowledge base of
//! best-practice recommendations, producing the six-section
//! [`swarm_core::ConfigurationProfile`]. A validator gates the result with a
//! fixed checklist and a 0-1 score.

pub mod gates;
pub mod knowledge;
pub mod roles;
pub mod synth;
pub mod validator;

pub use gates::build_gates;
pub use knowledge::{KnowledgeBase, Recommendations};
pub use roles::build_roles;
pub use synth::ConfigSynthesizer;
pub use validator::{TOTAL_CHECKS, validate};
