//! Orchestration limits and agent deployment

use super::agent_multiplier;
use crate::knowledge::Recommendations;
use crate::roles::build_roles;
use swarm_core::{
    AllocationStrategy, ComplexityTier, CoordinationPattern, FailoverPolicy, OrchestratorSection,
    ProjectAnalysis, QualityTier, RecyclingPolicy, TeamSize, limits,
};

pub(super) fn build(
    analysis: &ProjectAnalysis,
    pattern: &CoordinationPattern,
    recommendations: &Recommendations,
) -> OrchestratorSection {
    let quality = analysis.constraints.quality;

    let baseline_agents = ((pattern.agents.len() as f64
        * agent_multiplier(analysis.complexity.tier))
    .round() as u32)
        .min(50);
    let fused_agents = baseline_agents.max(recommendations.max_concurrent_agents.unwrap_or(0));
    let max_concurrent_agents =
        fused_agents.clamp(*limits::MAX_CONCURRENT_AGENTS.start(), *limits::MAX_CONCURRENT_AGENTS.end());

    let task_queue_size = (max_concurrent_agents * 10)
        .clamp(*limits::TASK_QUEUE_SIZE.start(), *limits::TASK_QUEUE_SIZE.end());

    let baseline_strategy = allocation_baseline(analysis);
    let resource_allocation_strategy =
        baseline_strategy.max(recommendations.allocation_strategy.unwrap_or(baseline_strategy));

    let baseline_tasks = if quality == QualityTier::Prototype { 50 } else { 100 };
    let agent_recycling = RecyclingPolicy {
        enabled: quality != QualityTier::MissionCritical,
        max_age: if quality == QualityTier::Prototype { "2h" } else { "4h" }.to_string(),
        max_tasks: baseline_tasks.max(recommendations.recycling_max_tasks.unwrap_or(0)),
    };

    let failover = FailoverPolicy {
        enabled: quality >= QualityTier::Enterprise || recommendations.failover_enabled,
        ..FailoverPolicy::default()
    };

    OrchestratorSection {
        max_concurrent_agents,
        task_queue_size,
        health_check_interval: if quality == QualityTier::MissionCritical { 15_000 } else { 30_000 },
        shutdown_timeout: 30_000,
        agent_timeout_ms: if quality == QualityTier::Prototype { 180_000 } else { 300_000 },
        resource_allocation_strategy,
        agent_recycling,
        failover,
        agent_roles: build_roles(pattern, analysis),
    }
}

fn allocation_baseline(analysis: &ProjectAnalysis) -> AllocationStrategy {
    if analysis.constraints.quality == QualityTier::MissionCritical {
        AllocationStrategy::Performance
    } else if analysis.constraints.team_size == TeamSize::Large {
        AllocationStrategy::Balanced
    } else if analysis.complexity.tier == ComplexityTier::Simple {
        AllocationStrategy::MemoryOptimized
    } else {
        AllocationStrategy::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use swarm_core::{ComplexityProfile, ProjectConstraints, ProjectType, RequirementProfile};

    fn analysis(technical: u8, team_size: TeamSize, quality: QualityTier) -> ProjectAnalysis {
        ProjectAnalysis {
            description: String::new(),
            project_type: ProjectType::WebBackend,
            requirements: RequirementProfile::new(),
            complexity: ComplexityProfile::new(technical, technical, technical),
            constraints: ProjectConstraints {
                team_size,
                quality,
                timeline_days: None,
                compliance: Default::default(),
            },
            confidence: 0.5,
        }
    }

    fn pattern() -> CoordinationPattern {
        CoordinationPattern::new("hierarchical", "test").with_agents(vec![
            "architect".to_string(),
            "backend_dev".to_string(),
            "tester".to_string(),
            "devops".to_string(),
        ])
    }

    fn recommendations(
        analysis: &ProjectAnalysis,
    ) -> Recommendations {
        KnowledgeBase::new().recommendations(
            analysis.complexity.tier,
            analysis.constraints.quality,
            analysis.constraints.team_size,
            analysis.project_type,
        )
    }

    #[test]
    fn test_recommendation_raises_agent_count() {
        // Simple tier, 4 agents -> baseline 4; Large team recommends 30
        let analysis = analysis(1, TeamSize::Large, QualityTier::Production);
        let section = build(&analysis, &pattern(), &recommendations(&analysis));

        assert_eq!(section.max_concurrent_agents, 30);
        assert_eq!(section.task_queue_size, 300);
    }

    #[test]
    fn test_enterprise_tier_scales_baseline() {
        // technical 10 -> overall 10 -> Enterprise; 4 agents x 2.5 = 10
        let analysis = analysis(10, TeamSize::Solo, QualityTier::Production);
        let section = build(&analysis, &pattern(), &recommendations(&analysis));

        // knowledge recommends ceil(3 x 2.5) = 8, baseline 10 stands
        assert_eq!(section.max_concurrent_agents, 10);
    }

    #[test]
    fn test_mission_critical_settings() {
        let analysis = analysis(10, TeamSize::Large, QualityTier::MissionCritical);
        let section = build(&analysis, &pattern(), &recommendations(&analysis));

        assert_eq!(section.health_check_interval, 15_000);
        assert!(!section.agent_recycling.enabled);
        assert!(section.failover.enabled);
        assert_eq!(section.resource_allocation_strategy, AllocationStrategy::Performance);
    }

    #[test]
    fn test_prototype_settings() {
        let analysis = analysis(1, TeamSize::Solo, QualityTier::Prototype);
        let section = build(&analysis, &pattern(), &recommendations(&analysis));

        assert_eq!(section.agent_timeout_ms, 180_000);
        assert_eq!(section.agent_recycling.max_age, "2h");
        assert!(!section.failover.enabled);
    }

    #[test]
    fn test_agent_count_stays_in_range() {
        for technical in [1u8, 5, 10] {
            for team in TeamSize::ORDER {
                for quality in QualityTier::ORDER {
                    let analysis = analysis(technical, team, quality);
                    let section = build(&analysis, &pattern(), &recommendations(&analysis));
                    assert!(limits::MAX_CONCURRENT_AGENTS.contains(&section.max_concurrent_agents));
                    assert!(limits::TASK_QUEUE_SIZE.contains(&section.task_queue_size));
                }
            }
        }
    }

    #[test]
    fn test_roles_attached_for_every_agent() {
        let analysis = analysis(5, TeamSize::Small, QualityTier::Production);
        let section = build(&analysis, &pattern(), &recommendations(&analysis));
        assert_eq!(section.agent_roles.len(), 4);
    }
}
