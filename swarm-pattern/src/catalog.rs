//! The coordination pattern catalog
//!
//! Five built-in patterns registered in a fixed order; declaration order is
//! the tie break during selection, so the `Vec` ordering is load-bearing.

use swarm_core::{ComplexityTier, CoordinationPattern, TeamSize};

/// Registry of coordination patterns.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<CoordinationPattern>,
}

impl PatternCatalog {
    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Create the catalog of built-in patterns.
    pub fn builtin() -> Self {
        Self {
            patterns: vec![
                hierarchical(),
                peer_to_peer(),
                pipeline(),
                event_driven(),
                hybrid(),
            ],
        }
    }

    /// All patterns in declaration order.
    pub fn patterns(&self) -> &[CoordinationPattern] {
        &self.patterns
    }

    /// Look up a pattern by name.
    pub fn get(&self, name: &str) -> Option<&CoordinationPattern> {
        self.patterns.iter().find(|pattern| pattern.name == name)
    }

    /// Register a pattern. A pattern with the same name is replaced in
    /// place, keeping its position in the tie-break order.
    pub fn register(&mut self, pattern: CoordinationPattern) {
        match self.patterns.iter_mut().find(|existing| existing.name == pattern.name) {
            Some(existing) => *existing = pattern,
            None => self.patterns.push(pattern),
        }
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no pattern is registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn hierarchical() -> CoordinationPattern {
    CoordinationPattern::new("hierarchical", "Central coordinator with specialized sub-agents")
        .with_best_for(vec![
            "complex projects".to_string(),
            "large teams".to_string(),
            "enterprise requirements".to_string(),
            "clear role separation needed".to_string(),
        ])
        .with_agents(vec![
            "architect".to_string(),
            "backend_dev".to_string(),
            "frontend_dev".to_string(),
            "database_designer".to_string(),
            "tester".to_string(),
            "devops".to_string(),
            "security".to_string(),
        ])
        .with_coordination_rule("central_decision_making")
        .with_quality_gates(vec![
            "code_review".to_string(),
            "integration_testing".to_string(),
            "security_scan".to_string(),
            "performance_testing".to_string(),
        ])
        .with_complexity_fit(vec![
            ComplexityTier::Moderate,
            ComplexityTier::Complex,
            ComplexityTier::Enterprise,
        ])
        .with_team_size_fit(vec![TeamSize::Small, TeamSize::Medium, TeamSize::Large])
}

fn peer_to_peer() -> CoordinationPattern {
    CoordinationPattern::new("peer_to_peer", "Distributed coordination with consensus")
        .with_best_for(vec![
            "research projects".to_string(),
            "small teams".to_string(),
            "experimental work".to_string(),
            "collaborative analysis".to_string(),
        ])
        .with_agents(vec![
            "researcher".to_string(),
            "analyst".to_string(),
            "writer".to_string(),
            "reviewer".to_string(),
        ])
        .with_coordination_rule("consensus_based")
        .with_quality_gates(vec!["peer_review".to_string(), "validation_testing".to_string()])
        .with_complexity_fit(vec![ComplexityTier::Simple, ComplexityTier::Moderate])
        .with_team_size_fit(vec![TeamSize::Solo, TeamSize::Small])
}

fn pipeline() -> CoordinationPattern {
    CoordinationPattern::new("pipeline", "Sequential processing with handoffs")
        .with_best_for(vec![
            "data processing".to_string(),
            "content creation".to_string(),
            "linear workflows".to_string(),
            "batch processing".to_string(),
        ])
        .with_agents(vec![
            "collector".to_string(),
            "processor".to_string(),
            "transformer".to_string(),
            "publisher".to_string(),
        ])
        .with_coordination_rule("sequential_handoff")
        .with_quality_gates(vec!["stage_validation".to_string(), "output_verification".to_string()])
        .with_complexity_fit(vec![
            ComplexityTier::Simple,
            ComplexityTier::Moderate,
            ComplexityTier::Complex,
        ])
        .with_team_size_fit(vec![TeamSize::Solo, TeamSize::Small, TeamSize::Medium])
}

fn event_driven() -> CoordinationPattern {
    CoordinationPattern::new("event_driven", "Reactive coordination based on events")
        .with_best_for(vec![
            "monitoring systems".to_string(),
            "real-time processing".to_string(),
            "reactive workflows".to_string(),
            "microservices architecture".to_string(),
        ])
        .with_agents(vec![
            "monitor".to_string(),
            "analyzer".to_string(),
            "responder".to_string(),
            "notifier".to_string(),
        ])
        .with_coordination_rule("event_triggered")
        .with_quality_gates(vec!["event_validation".to_string(), "response_testing".to_string()])
        .with_complexity_fit(vec![
            ComplexityTier::Moderate,
            ComplexityTier::Complex,
            ComplexityTier::Enterprise,
        ])
        .with_team_size_fit(vec![TeamSize::Small, TeamSize::Medium, TeamSize::Large])
}

fn hybrid() -> CoordinationPattern {
    CoordinationPattern::new("hybrid", "Combination of hierarchical and peer-to-peer structures")
        .with_best_for(vec![
            "complex enterprise projects".to_string(),
            "mixed team structures".to_string(),
            "multi-phase projects".to_string(),
            "flexible coordination needs".to_string(),
        ])
        .with_agents(vec![
            "coordinator".to_string(),
            "architect".to_string(),
            "lead_dev".to_string(),
            "specialist_dev".to_string(),
            "researcher".to_string(),
            "tester".to_string(),
            "reviewer".to_string(),
        ])
        .with_coordination_rule("adaptive_mixed")
        .with_quality_gates(vec![
            "phase_review".to_string(),
            "peer_validation".to_string(),
            "integration_testing".to_string(),
            "final_review".to_string(),
        ])
        .with_complexity_fit(vec![ComplexityTier::Complex, ComplexityTier::Enterprise])
        .with_team_size_fit(vec![TeamSize::Medium, TeamSize::Large])
}
