//! Per-project-type pattern affinities
//!
//! A static table of how naturally each pattern serves each project type.
//! Project types without a row, and patterns without an entry, score a
//! neutral 0.5.

use swarm_core::ProjectType;

const AFFINITIES: &[(ProjectType, &[(&str, f64)])] = &[
    (
        ProjectType::WebFrontend,
        &[
            ("hierarchical", 0.8),
            ("peer_to_peer", 0.6),
            ("pipeline", 0.4),
            ("event_driven", 0.3),
            ("hybrid", 0.7),
        ],
    ),
    (
        ProjectType::WebBackend,
        &[
            ("hierarchical", 0.9),
            ("peer_to_peer", 0.5),
            ("pipeline", 0.6),
            ("event_driven", 0.7),
            ("hybrid", 0.8),
        ],
    ),
    (
        ProjectType::Microservices,
        &[
            ("hierarchical", 0.7),
            ("peer_to_peer", 0.4),
            ("pipeline", 0.5),
            ("event_driven", 0.9),
            ("hybrid", 0.8),
        ],
    ),
    (
        ProjectType::DataProcessing,
        &[
            ("hierarchical", 0.6),
            ("peer_to_peer", 0.5),
            ("pipeline", 0.9),
            ("event_driven", 0.7),
            ("hybrid", 0.7),
        ],
    ),
    (
        ProjectType::MlPipeline,
        &[
            ("hierarchical", 0.7),
            ("peer_to_peer", 0.6),
            ("pipeline", 0.9),
            ("event_driven", 0.6),
            ("hybrid", 0.8),
        ],
    ),
    (
        ProjectType::Research,
        &[
            ("hierarchical", 0.5),
            ("peer_to_peer", 0.9),
            ("pipeline", 0.7),
            ("event_driven", 0.4),
            ("hybrid", 0.6),
        ],
    ),
];

/// Affinity of a pattern for a project type, 0.5 when unlisted.
pub fn type_affinity(project_type: ProjectType, pattern_name: &str) -> f64 {
    AFFINITIES
        .iter()
        .find(|(listed, _)| *listed == project_type)
        .and_then(|(_, row)| {
            row.iter().find(|(name, _)| *name == pattern_name).map(|(_, value)| *value)
        })
        .unwrap_or(0.5)
}
