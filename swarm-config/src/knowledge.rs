//! Static best-practice knowledge base
//!
//! Tier-keyed recommendation tables consulted during synthesis. A lookup
//! miss is silent and the formulaic baseline stands; a table missing an
//! entire tier row is a construction bug and fails [`KnowledgeBase::validate`].

use std::collections::BTreeMap;
use swarm_core::{
    AllocationStrategy, ComplexityTier, CoordinatorError, LoadBalancing, MemoryBackend,
    ProjectType, QualityTier, Result, TeamSize,
};

/// Recommendation tables keyed by classification tiers.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    /// Concurrent agent baseline per team size
    pub base_agents: BTreeMap<TeamSize, u32>,
    /// Agent-count multiplier per complexity tier
    pub complexity_multiplier: BTreeMap<ComplexityTier, f64>,
    /// Cache size (MB) per complexity tier
    pub cache_size_mb: BTreeMap<ComplexityTier, u32>,
    /// Memory backend per complexity tier
    pub memory_backend: BTreeMap<ComplexityTier, MemoryBackend>,
    /// Retention (days) per quality tier
    pub retention_days: BTreeMap<QualityTier, u32>,
    /// Load balancing per team size
    pub load_balancing: BTreeMap<TeamSize, LoadBalancing>,
    /// Terminal pool size per complexity tier
    pub terminal_pool: BTreeMap<ComplexityTier, u32>,
    /// Command timeout (ms) per complexity tier
    pub command_timeout: BTreeMap<ComplexityTier, u64>,
    /// Tool requests per minute per team size
    pub requests_per_minute: BTreeMap<TeamSize, u32>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            base_agents: BTreeMap::from([
                (TeamSize::Solo, 3),
                (TeamSize::Small, 8),
                (TeamSize::Medium, 15),
                (TeamSize::Large, 30),
            ]),
            complexity_multiplier: BTreeMap::from([
                (ComplexityTier::Simple, 1.0),
                (ComplexityTier::Moderate, 1.5),
                (ComplexityTier::Complex, 2.0),
                (ComplexityTier::Enterprise, 2.5),
            ]),
            cache_size_mb: BTreeMap::from([
                (ComplexityTier::Simple, 100),
                (ComplexityTier::Moderate, 500),
                (ComplexityTier::Complex, 1000),
                (ComplexityTier::Enterprise, 2000),
            ]),
            memory_backend: BTreeMap::from([
                (ComplexityTier::Simple, MemoryBackend::Sqlite),
                (ComplexityTier::Moderate, MemoryBackend::Hybrid),
                (ComplexityTier::Complex, MemoryBackend::Hybrid),
                (ComplexityTier::Enterprise, MemoryBackend::Distributed),
            ]),
            retention_days: BTreeMap::from([
                (QualityTier::Prototype, 30),
                (QualityTier::Production, 90),
                (QualityTier::Enterprise, 90),
                (QualityTier::MissionCritical, 30),
            ]),
            load_balancing: BTreeMap::from([
                (TeamSize::Solo, LoadBalancing::RoundRobin),
                (TeamSize::Small, LoadBalancing::Weighted),
                (TeamSize::Medium, LoadBalancing::Weighted),
                (TeamSize::Large, LoadBalancing::Adaptive),
            ]),
            terminal_pool: BTreeMap::from([
                (ComplexityTier::Simple, 10),
                (ComplexityTier::Moderate, 10),
                (ComplexityTier::Complex, 10),
                (ComplexityTier::Enterprise, 20),
            ]),
            command_timeout: BTreeMap::from([
                (ComplexityTier::Simple, 300_000),
                (ComplexityTier::Moderate, 300_000),
                (ComplexityTier::Complex, 600_000),
                (ComplexityTier::Enterprise, 600_000),
            ]),
            requests_per_minute: BTreeMap::from([
                (TeamSize::Solo, 50),
                (TeamSize::Small, 100),
                (TeamSize::Medium, 200),
                (TeamSize::Large, 500),
            ]),
        }
    }
}

impl KnowledgeBase {
    /// Create the built-in knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify that every table covers every tier it is keyed by.
    ///
    /// An incomplete table means the static configuration itself is broken,
    /// so this is a fatal error rather than a silent fallback.
    pub fn validate(&self) -> Result<()> {
        fn check_tiers<K: Ord + Copy + std::fmt::Debug, V>(
            table: &BTreeMap<K, V>,
            tiers: &[K],
            name: &str,
        ) -> Result<()> {
            for tier in tiers {
                if !table.contains_key(tier) {
                    return Err(CoordinatorError::Knowledge(format!(
                        "table `{name}` is missing a row for tier {tier:?}"
                    )));
                }
            }
            Ok(())
        }

        check_tiers(&self.base_agents, &TeamSize::ORDER, "base_agents")?;
        check_tiers(&self.complexity_multiplier, &ComplexityTier::ORDER, "complexity_multiplier")?;
        check_tiers(&self.cache_size_mb, &ComplexityTier::ORDER, "cache_size_mb")?;
        check_tiers(&self.memory_backend, &ComplexityTier::ORDER, "memory_backend")?;
        check_tiers(&self.retention_days, &QualityTier::ORDER, "retention_days")?;
        check_tiers(&self.load_balancing, &TeamSize::ORDER, "load_balancing")?;
        check_tiers(&self.terminal_pool, &ComplexityTier::ORDER, "terminal_pool")?;
        check_tiers(&self.command_timeout, &ComplexityTier::ORDER, "command_timeout")?;
        check_tiers(&self.requests_per_minute, &TeamSize::ORDER, "requests_per_minute")?;

        Ok(())
    }

    /// Look up the recommendations for one project profile. Missing rows
    /// yield `None` for that parameter and the caller keeps its baseline.
    pub fn recommendations(
        &self,
        complexity: ComplexityTier,
        quality: QualityTier,
        team_size: TeamSize,
        _project_type: ProjectType,
    ) -> Recommendations {
        let heavy = matches!(complexity, ComplexityTier::Complex | ComplexityTier::Enterprise);

        let max_concurrent_agents = match (
            self.base_agents.get(&team_size),
            self.complexity_multiplier.get(&complexity),
        ) {
            (Some(base), Some(multiplier)) => {
                Some(((f64::from(*base) * multiplier).round() as u32).min(50))
            }
            _ => None,
        };

        Recommendations {
            max_concurrent_agents,
            allocation_strategy: Some(if heavy {
                AllocationStrategy::Performance
            } else {
                AllocationStrategy::Balanced
            }),
            failover_enabled: heavy,
            recycling_max_tasks: Some(if complexity == ComplexityTier::Enterprise { 50 } else { 25 }),
            memory_backend: self.memory_backend.get(&complexity).copied(),
            cache_size_mb: self.cache_size_mb.get(&complexity).copied(),
            encryption_enabled: quality >= QualityTier::Enterprise,
            retention_days: self.retention_days.get(&quality).copied(),
            load_balancing: self.load_balancing.get(&team_size).copied(),
            terminal_pool: self.terminal_pool.get(&complexity).copied(),
            command_timeout: self.command_timeout.get(&complexity).copied(),
            requests_per_minute: self.requests_per_minute.get(&team_size).copied(),
        }
    }
}

/// Recommendations for one project profile; `None` means no table row, in
/// which case the formulaic baseline stands.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub max_concurrent_agents: Option<u32>,
    pub allocation_strategy: Option<AllocationStrategy>,
    pub failover_enabled: bool,
    pub recycling_max_tasks: Option<u32>,
    pub memory_backend: Option<MemoryBackend>,
    pub cache_size_mb: Option<u32>,
    pub encryption_enabled: bool,
    pub retention_days: Option<u32>,
    pub load_balancing: Option<LoadBalancing>,
    pub terminal_pool: Option<u32>,
    pub command_timeout: Option<u64>,
    pub requests_per_minute: Option<u32>,
}
