//! Audit and log policy

use std::collections::BTreeMap;
use swarm_core::{AuditPolicy, LogDestination, LogLevel, LoggingSection, ProjectAnalysis, QualityTier};

pub(super) fn build(analysis: &ProjectAnalysis) -> LoggingSection {
    let quality = analysis.constraints.quality;
    let prototype = quality == QualityTier::Prototype;
    let mission_critical = quality == QualityTier::MissionCritical;

    let level = match quality {
        QualityTier::Prototype => LogLevel::Debug,
        QualityTier::Production | QualityTier::Enterprise => LogLevel::Info,
        QualityTier::MissionCritical => LogLevel::Warn,
    };

    let pipeline_level = if prototype { LogLevel::Debug } else { LogLevel::Info };
    let components = BTreeMap::from([
        ("orchestrator".to_string(), pipeline_level),
        ("memory".to_string(), LogLevel::Info),
        ("terminal".to_string(), LogLevel::Warn),
        ("tools".to_string(), LogLevel::Info),
        ("coordination".to_string(), pipeline_level),
    ]);

    LoggingSection {
        level,
        format: "json".to_string(),
        destination: if prototype { LogDestination::Console } else { LogDestination::File },
        file_output: "logs/swarm-coordinator.log".to_string(),
        max_file_size: "10MB".to_string(),
        max_files: if mission_critical { 10 } else { 5 },
        components,
        audit: AuditPolicy {
            enabled: quality >= QualityTier::Enterprise,
            include_payloads: mission_critical,
            retention: if mission_critical { "90d" } else { "30d" }.to_string(),
        },
    }
}
