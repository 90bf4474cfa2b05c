//! Configuration synthesis
//!
//! Each section is computed in two stages: a formulaic baseline from the
//! analysis and the selected pattern, then fusion with the knowledge-base
//! recommendation. A recommendation only replaces the baseline when it is
//! more generous under that parameter's ordering (more agents, larger cache,
//! stronger backend, safer flags); numeric results are clamped to their
//! documented ranges before they are written into the profile.

mod coordination;
mod logging;
mod memory;
mod orchestrator;
mod terminal;
mod tools;

use crate::knowledge::KnowledgeBase;
use swarm_core::{ComplexityTier, ConfigurationProfile, CoordinationPattern, ProjectAnalysis, TeamSize};
use tracing::debug;

/// Synthesizes runtime configurations from an analysis and a pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSynthesizer;

impl ConfigSynthesizer {
    /// Create a new synthesizer.
    pub fn new() -> Self {
        Self
    }

    /// Build the full configuration profile.
    ///
    /// Never fails for a well-formed analysis and pattern; knowledge lookups
    /// that miss fall back silently to the baseline.
    pub fn synthesize(
        &self,
        analysis: &ProjectAnalysis,
        pattern: &CoordinationPattern,
        knowledge: &KnowledgeBase,
    ) -> ConfigurationProfile {
        let recommendations = knowledge.recommendations(
            analysis.complexity.tier,
            analysis.constraints.quality,
            analysis.constraints.team_size,
            analysis.project_type,
        );

        debug!(
            pattern = %pattern.name,
            tier = ?analysis.complexity.tier,
            quality = ?analysis.constraints.quality,
            "synthesizing configuration"
        );

        ConfigurationProfile {
            orchestrator: orchestrator::build(analysis, pattern, &recommendations),
            memory: memory::build(analysis, &recommendations),
            coordination: coordination::build(analysis, pattern, &recommendations),
            tools: tools::build(analysis, &recommendations),
            logging: logging::build(analysis),
            terminal: terminal::build(analysis, &recommendations),
        }
    }
}

/// Team-size factor shared by cache and pool sizing.
pub(crate) fn team_factor(team_size: TeamSize) -> u32 {
    match team_size {
        TeamSize::Solo => 1,
        TeamSize::Small => 2,
        TeamSize::Medium => 4,
        TeamSize::Large => 8,
    }
}

/// Integer complexity factor used by the cache-size baseline.
pub(crate) fn cache_complexity_factor(tier: ComplexityTier) -> u32 {
    match tier {
        ComplexityTier::Simple => 1,
        ComplexityTier::Moderate => 2,
        ComplexityTier::Complex => 3,
        ComplexityTier::Enterprise => 5,
    }
}

/// Agent-count multiplier used by the orchestration baseline.
pub(crate) fn agent_multiplier(tier: ComplexityTier) -> f64 {
    match tier {
        ComplexityTier::Simple => 1.0,
        ComplexityTier::Moderate => 1.5,
        ComplexityTier::Complex => 2.0,
        ComplexityTier::Enterprise => 2.5,
    }
}
