//! Coordination and load-balancing policy

use crate::gates::build_gates;
use crate::knowledge::Recommendations;
use swarm_core::{
    CommunicationPolicy, CoordinationPattern, CoordinationRules, CoordinationSection,
    LoadBalancing, ProjectAnalysis, Protocol, SchedulingAlgorithm, SchedulingPolicy,
};

struct PatternDefaults {
    load_balancing: LoadBalancing,
    scheduling: SchedulingPolicy,
    communication: CommunicationPolicy,
}

pub(super) fn build(
    analysis: &ProjectAnalysis,
    pattern: &CoordinationPattern,
    recommendations: &Recommendations,
) -> CoordinationSection {
    let defaults = pattern_defaults(&pattern.name);

    let load_balancing_strategy = defaults
        .load_balancing
        .max(recommendations.load_balancing.unwrap_or(defaults.load_balancing));

    CoordinationSection {
        max_retries: 3,
        retry_delay: 1_000,
        deadlock_detection: true,
        resource_timeout: 60_000,
        message_timeout: 30_000,
        priority_levels: 5,
        load_balancing_strategy,
        scheduling: defaults.scheduling,
        communication: defaults.communication,
        rules: rules_for(&pattern.name),
        quality_gates: build_gates(pattern, analysis.constraints.quality),
    }
}

fn pattern_defaults(name: &str) -> PatternDefaults {
    match name {
        "peer_to_peer" => PatternDefaults {
            load_balancing: LoadBalancing::RoundRobin,
            scheduling: SchedulingPolicy {
                algorithm: SchedulingAlgorithm::Fifo,
                fairness: true,
                starvation_prevention: true,
            },
            communication: CommunicationPolicy {
                protocol: Protocol::Async,
                buffer_size: 500,
                compression: false,
            },
        },
        "pipeline" => PatternDefaults {
            load_balancing: LoadBalancing::RoundRobin,
            scheduling: SchedulingPolicy {
                algorithm: SchedulingAlgorithm::ShortestJobFirst,
                fairness: false,
                starvation_prevention: false,
            },
            communication: CommunicationPolicy {
                protocol: Protocol::Sync,
                buffer_size: 100,
                compression: true,
            },
        },
        "event_driven" => PatternDefaults {
            load_balancing: LoadBalancing::Adaptive,
            scheduling: SchedulingPolicy {
                algorithm: SchedulingAlgorithm::DeadlineAware,
                fairness: true,
                starvation_prevention: true,
            },
            communication: CommunicationPolicy {
                protocol: Protocol::Async,
                buffer_size: 2_000,
                compression: true,
            },
        },
        "hybrid" => PatternDefaults {
            load_balancing: LoadBalancing::Adaptive,
            scheduling: SchedulingPolicy {
                algorithm: SchedulingAlgorithm::PriorityQueue,
                fairness: true,
                starvation_prevention: true,
            },
            communication: CommunicationPolicy {
                protocol: Protocol::Async,
                buffer_size: 1_500,
                compression: true,
            },
        },
        // hierarchical, and any custom pattern without its own row
        _ => PatternDefaults {
            load_balancing: LoadBalancing::Weighted,
            scheduling: SchedulingPolicy {
                algorithm: SchedulingAlgorithm::PriorityQueue,
                fairness: true,
                starvation_prevention: true,
            },
            communication: CommunicationPolicy {
                protocol: Protocol::Async,
                buffer_size: 1_000,
                compression: true,
            },
        },
    }
}

fn rules_for(name: &str) -> CoordinationRules {
    match name {
        "peer_to_peer" => CoordinationRules {
            decision_making: "consensus".to_string(),
            communication_flow: "mesh".to_string(),
            conflict_resolution: "voting".to_string(),
            task_assignment: "self_organizing".to_string(),
        },
        "pipeline" => CoordinationRules {
            decision_making: "sequential".to_string(),
            communication_flow: "linear".to_string(),
            conflict_resolution: "upstream_decides".to_string(),
            task_assignment: "stage_based".to_string(),
        },
        "event_driven" => CoordinationRules {
            decision_making: "reactive".to_string(),
            communication_flow: "publish_subscribe".to_string(),
            conflict_resolution: "event_priority".to_string(),
            task_assignment: "event_triggered".to_string(),
        },
        "hybrid" => CoordinationRules {
            decision_making: "adaptive".to_string(),
            communication_flow: "mixed".to_string(),
            conflict_resolution: "context_dependent".to_string(),
            task_assignment: "flexible".to_string(),
        },
        _ => CoordinationRules {
            decision_making: "central".to_string(),
            communication_flow: "hub_and_spoke".to_string(),
            conflict_resolution: "coordinator_decides".to_string(),
            task_assignment: "top_down".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use swarm_core::{
        ComplexityProfile, ProjectConstraints, ProjectType, QualityTier, RequirementProfile,
        TeamSize,
    };

    fn analysis(team_size: TeamSize) -> ProjectAnalysis {
        ProjectAnalysis {
            description: String::new(),
            project_type: ProjectType::WebBackend,
            requirements: RequirementProfile::new(),
            complexity: ComplexityProfile::new(4, 3, 1),
            constraints: ProjectConstraints {
                team_size,
                quality: QualityTier::Production,
                timeline_days: None,
                compliance: Default::default(),
            },
            confidence: 0.5,
        }
    }

    fn pattern(name: &str) -> CoordinationPattern {
        CoordinationPattern::new(name, "test")
            .with_quality_gates(vec!["code_review".to_string(), "unit_testing".to_string()])
    }

    fn build_for(name: &str, team_size: TeamSize) -> CoordinationSection {
        let analysis = analysis(team_size);
        let recommendations = KnowledgeBase::new().recommendations(
            analysis.complexity.tier,
            analysis.constraints.quality,
            analysis.constraints.team_size,
            analysis.project_type,
        );
        build(&analysis, &pattern(name), &recommendations)
    }

    #[test]
    fn test_pattern_rows() {
        let pipeline = build_for("pipeline", TeamSize::Solo);
        assert_eq!(pipeline.scheduling.algorithm, SchedulingAlgorithm::ShortestJobFirst);
        assert_eq!(pipeline.communication.protocol, Protocol::Sync);
        assert_eq!(pipeline.communication.buffer_size, 100);
        assert_eq!(pipeline.rules.task_assignment, "stage_based");

        let event = build_for("event_driven", TeamSize::Small);
        assert_eq!(event.load_balancing_strategy, LoadBalancing::Adaptive);
        assert_eq!(event.rules.communication_flow, "publish_subscribe");
    }

    #[test]
    fn test_unknown_pattern_uses_hierarchical_row() {
        let section = build_for("bespoke", TeamSize::Solo);
        assert_eq!(section.load_balancing_strategy, LoadBalancing::Weighted);
        assert_eq!(section.rules.decision_making, "central");
    }

    #[test]
    fn test_team_recommendation_upgrades_balancing() {
        // pipeline defaults to round-robin; a Small team recommends weighted
        let section = build_for("pipeline", TeamSize::Small);
        assert_eq!(section.load_balancing_strategy, LoadBalancing::Weighted);

        // solo recommendation is round-robin, the default stands
        let solo = build_for("pipeline", TeamSize::Solo);
        assert_eq!(solo.load_balancing_strategy, LoadBalancing::RoundRobin);

        // an adaptive default never downgrades
        let event = build_for("event_driven", TeamSize::Solo);
        assert_eq!(event.load_balancing_strategy, LoadBalancing::Adaptive);
    }

    #[test]
    fn test_gates_are_configured() {
        let section = build_for("hierarchical", TeamSize::Small);
        assert_eq!(section.quality_gates.len(), 2);
        assert_eq!(section.quality_gates[0].name, "code_review");
    }
}
