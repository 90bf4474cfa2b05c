//! # swarm-coordinator
//!
//! Turns a requirement document into a validated runtime configuration for a
//! multi-agent coordination platform.
//!
//! The pipeline has four pure stages over immutable value objects:
//!
//! 1. **Analyze**: match the document against static taxonomy tables,
//!    score complexity on three dimensions, classify the project type, and
//!    read team/quality/timeline constraints.
//! 2. **Select**: score every catalog pattern with a weighted
//!    multi-criteria function and pick the best fit.
//! 3. **Synthesize**: compute formulaic baselines and fuse them with
//!    knowledge-base recommendations into a six-section configuration.
//! 4. **Validate**: run a fixed checklist and produce an error/warning
//!    list with a 0-1 score.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use swarm_coordinator::Coordinator;
//!
//! #[tokio::main]
//! async fn main() -> swarm_coordinator::Result<()> {
//!     let coordinator = Coordinator::new();
//!     let plan = coordinator
//!         .run("REST API with PostgreSQL and Docker for a team of 4, production quality")
//!         .await?;
//!
//!     assert!(plan.validation.is_valid);
//!     println!("{}", plan.config.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod pipeline;

pub use pipeline::{CoordinationPlan, Coordinator};

// Re-exports
pub use swarm_analysis::{ProjectAnalyzer, assess, classify_type, extract, extract_constraints};
pub use swarm_config::{ConfigSynthesizer, KnowledgeBase, Recommendations, validate};
pub use swarm_core::{
    ComplexityProfile, ComplexityTier, ConfigurationProfile, CoordinationPattern,
    CoordinatorError, PatternScore, ProjectAnalysis, ProjectConstraints, ProjectType, QualityTier,
    RequirementProfile, Result, TeamSize, ValidationResult,
};
pub use swarm_pattern::{PatternCatalog, PatternSelection, PatternSelector};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::pipeline::{CoordinationPlan, Coordinator};
    pub use swarm_analysis::ProjectAnalyzer;
    pub use swarm_config::{ConfigSynthesizer, KnowledgeBase, validate};
    pub use swarm_core::{
        ComplexityTier, ConfigurationProfile, CoordinationPattern, CoordinatorError,
        ProjectAnalysis, ProjectType, QualityTier, RequirementProfile, Result, TeamSize,
        ValidationResult,
    };
    pub use swarm_pattern::{PatternCatalog, PatternSelection, PatternSelector};
}
