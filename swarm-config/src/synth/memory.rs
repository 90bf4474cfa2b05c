//! Memory and cache policy

use super::{cache_complexity_factor, team_factor};
use crate::knowledge::Recommendations;
use swarm_core::{
    BackupPolicy, ComplexityTier, MemoryBackend, MemorySection, MemoryStrategy, OptimizationPolicy,
    ProjectAnalysis, ProjectType, QualityTier, TeamSize, limits,
};

pub(super) fn build(analysis: &ProjectAnalysis, recommendations: &Recommendations) -> MemorySection {
    let quality = analysis.constraints.quality;
    let tier = analysis.complexity.tier;

    let baseline_backend = backend_baseline(analysis.project_type);
    let backend = baseline_backend.max(recommendations.memory_backend.unwrap_or(baseline_backend));

    let baseline_cache =
        (100 * team_factor(analysis.constraints.team_size) * cache_complexity_factor(tier)).min(2000);
    let cache_size_mb = baseline_cache
        .max(recommendations.cache_size_mb.unwrap_or(0))
        .clamp(*limits::CACHE_SIZE_MB.start(), *limits::CACHE_SIZE_MB.end());

    let baseline_retention = match quality {
        QualityTier::Prototype => 7,
        QualityTier::Production => 30,
        QualityTier::Enterprise => 90,
        QualityTier::MissionCritical => 365,
    };
    let retention_days = baseline_retention
        .max(recommendations.retention_days.unwrap_or(0))
        .clamp(*limits::RETENTION_DAYS.start(), *limits::RETENTION_DAYS.end());

    let mission_critical = quality == QualityTier::MissionCritical;

    MemorySection {
        backend,
        strategy: strategy_for(analysis),
        cache_size_mb,
        sync_interval: 5_000,
        conflict_resolution: "crdt".to_string(),
        retention_days,
        compression_enabled: true,
        encryption_enabled: quality >= QualityTier::Enterprise
            || recommendations.encryption_enabled,
        backup: BackupPolicy {
            enabled: quality != QualityTier::Prototype,
            interval: if mission_critical { "6h" } else { "24h" }.to_string(),
            max_backups: if mission_critical { 10 } else { 5 },
        },
        optimization: OptimizationPolicy {
            auto_cleanup: true,
            cleanup_threshold: "1GB".to_string(),
            index_rebuild_interval: if mission_critical { "24h" } else { "48h" }.to_string(),
        },
    }
}

fn backend_baseline(project_type: ProjectType) -> MemoryBackend {
    match project_type {
        ProjectType::Research => MemoryBackend::Markdown,
        ProjectType::DataProcessing | ProjectType::DataAnalytics => MemoryBackend::Sqlite,
        _ => MemoryBackend::Hybrid,
    }
}

fn strategy_for(analysis: &ProjectAnalysis) -> MemoryStrategy {
    if matches!(analysis.complexity.tier, ComplexityTier::Complex | ComplexityTier::Enterprise) {
        MemoryStrategy::PersistentHierarchical
    } else if matches!(analysis.constraints.team_size, TeamSize::Medium | TeamSize::Large) {
        MemoryStrategy::SharedContext
    } else if matches!(
        analysis.project_type,
        ProjectType::DataProcessing | ProjectType::MlPipeline
    ) {
        MemoryStrategy::PipelineMemory
    } else {
        MemoryStrategy::SessionBased
    }
}
