//! # swarm-core
//!
//! Core types for the swarm coordinator.
//!
//! This crate defines the value objects exchanged between the pipeline
//! stages: the classification enums and profiles produced by analysis, the
//! coordination pattern definitions consumed by selection, the six-section
//! runtime configuration produced by synthesis, and the validation result
//! that gates the final output. Every type is immutable after construction;
//! each stage returns a new instance instead of mutating its input.

pub mod config;
pub mod error;
pub mod types;

pub use config::{
    AgentRole, AllocationStrategy, AuditPolicy, AuthPolicy, BackupPolicy, CommunicationPolicy,
    ConfigurationProfile, CoordinationRules, CoordinationSection, DatabaseIntegration,
    DeploymentIntegration, FailoverPolicy, GateKind, IntegrationPoints, LoadBalancing,
    LogDestination, LogLevel, LoggingSection, MemoryBackend, MemorySection, MemoryStrategy,
    OptimizationPolicy, OrchestratorSection, Protocol, QualityGate, RateLimitPolicy,
    RecyclingPolicy, SchedulingAlgorithm, SchedulingPolicy, TerminalSection, TerminalSecurity,
    ToolAccessSection, VersionControlIntegration, limits,
};
pub use error::{CoordinatorError, Result};
pub use types::{
    ComplexityProfile, ComplexityTier, CoordinationPattern, PatternScore, ProjectAnalysis,
    ProjectConstraints, ProjectType, QualityTier, RequirementProfile, TeamSize, ValidationResult,
};
