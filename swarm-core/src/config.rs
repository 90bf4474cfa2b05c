//! Runtime configuration profile for the coordination platform
//!
//! Six named sections, each a typed record. Field names serialize in
//! camelCase and stay stable across analyses so external consumers can diff
//! configurations. Strategy values are ordered enums: a later variant is the
//! "more generous" choice, which lets synthesis fuse a baseline with a
//! knowledge-base recommendation by taking the maximum.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Documented valid ranges for numeric configuration values.
///
/// Synthesis clamps into these ranges; validation re-checks them.
pub mod limits {
    use std::ops::RangeInclusive;

    /// Concurrent agent count
    pub const MAX_CONCURRENT_AGENTS: RangeInclusive<u32> = 1..=100;
    /// Task queue length
    pub const TASK_QUEUE_SIZE: RangeInclusive<u32> = 10..=1000;
    /// Memory cache size in MB
    pub const CACHE_SIZE_MB: RangeInclusive<u32> = 10..=10000;
    /// Memory retention in days
    pub const RETENTION_DAYS: RangeInclusive<u32> = 1..=365;
    /// Terminal pool size
    pub const TERMINAL_POOL_SIZE: RangeInclusive<u32> = 1..=50;
    /// Coordination retry count
    pub const MAX_RETRIES: RangeInclusive<u32> = 0..=10;
    /// Coordination priority levels
    pub const PRIORITY_LEVELS: RangeInclusive<u8> = 1..=10;
    /// Concurrent terminal commands
    pub const MAX_CONCURRENT_COMMANDS: RangeInclusive<u32> = 1..=10;
}

/// Resource allocation strategies, ordered by how aggressively they spend
/// resources for throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationStrategy {
    MemoryOptimized,
    Balanced,
    Performance,
}

/// Load balancing strategies, ordered by sophistication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadBalancing {
    RoundRobin,
    Weighted,
    Adaptive,
}

/// Memory backends, ordered from lightest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryBackend {
    Markdown,
    Sqlite,
    Hybrid,
    Distributed,
}

/// Memory organization strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryStrategy {
    SessionBased,
    SharedContext,
    PipelineMemory,
    PersistentHierarchical,
}

/// Task scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulingAlgorithm {
    Fifo,
    ShortestJobFirst,
    PriorityQueue,
    DeadlineAware,
}

/// Inter-agent communication protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    Sync,
    Async,
}

/// Log verbosity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Log output destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogDestination {
    Console,
    File,
}

/// How a quality gate is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    Manual,
    Automated,
}

/// One agent role deployed by the selected coordination pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRole {
    /// Role identifier from the pattern
    pub role: String,
    /// Specialization derived from project type and tech stack
    pub specialization: String,
    /// What this role can do
    pub capabilities: Vec<String>,
    /// Tools available to the role
    pub tools: Vec<String>,
    /// Roles that must exist before this one can act
    pub depends_on: Vec<String>,
}

/// Agent recycling policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingPolicy {
    pub enabled: bool,
    pub max_age: String,
    pub max_tasks: u32,
}

impl Default for RecyclingPolicy {
    fn default() -> Self {
        Self { enabled: true, max_age: "4h".to_string(), max_tasks: 100 }
    }
}

/// Orchestrator failover policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailoverPolicy {
    pub enabled: bool,
    pub detection_threshold: u64,
    pub recovery_strategy: String,
}

impl Default for FailoverPolicy {
    fn default() -> Self {
        Self { enabled: false, detection_threshold: 10_000, recovery_strategy: "restart".to_string() }
    }
}

/// Orchestration limits and agent deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorSection {
    pub max_concurrent_agents: u32,
    pub task_queue_size: u32,
    pub health_check_interval: u64,
    pub shutdown_timeout: u64,
    pub agent_timeout_ms: u64,
    pub resource_allocation_strategy: AllocationStrategy,
    pub agent_recycling: RecyclingPolicy,
    pub failover: FailoverPolicy,
    /// Role manifests for the selected pattern's agents
    pub agent_roles: Vec<AgentRole>,
}

impl Default for OrchestratorSection {
    fn default() -> Self {
        Self {
            max_concurrent_agents: 10,
            task_queue_size: 100,
            health_check_interval: 30_000,
            shutdown_timeout: 30_000,
            agent_timeout_ms: 300_000,
            resource_allocation_strategy: AllocationStrategy::Balanced,
            agent_recycling: RecyclingPolicy::default(),
            failover: FailoverPolicy::default(),
            agent_roles: Vec::new(),
        }
    }
}

/// Memory backup policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPolicy {
    pub enabled: bool,
    pub interval: String,
    pub max_backups: u32,
}

impl Default for BackupPolicy {
    fn default() -> Self {
        Self { enabled: true, interval: "24h".to_string(), max_backups: 5 }
    }
}

/// Memory maintenance policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPolicy {
    pub auto_cleanup: bool,
    pub cleanup_threshold: String,
    pub index_rebuild_interval: String,
}

impl Default for OptimizationPolicy {
    fn default() -> Self {
        Self {
            auto_cleanup: true,
            cleanup_threshold: "1GB".to_string(),
            index_rebuild_interval: "48h".to_string(),
        }
    }
}

/// Memory and cache policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySection {
    pub backend: MemoryBackend,
    pub strategy: MemoryStrategy,
    pub cache_size_mb: u32,
    pub sync_interval: u64,
    pub conflict_resolution: String,
    pub retention_days: u32,
    pub compression_enabled: bool,
    pub encryption_enabled: bool,
    pub backup: BackupPolicy,
    pub optimization: OptimizationPolicy,
}

impl Default for MemorySection {
    fn default() -> Self {
        Self {
            backend: MemoryBackend::Hybrid,
            strategy: MemoryStrategy::SessionBased,
            cache_size_mb: 100,
            sync_interval: 5_000,
            conflict_resolution: "crdt".to_string(),
            retention_days: 30,
            compression_enabled: true,
            encryption_enabled: false,
            backup: BackupPolicy::default(),
            optimization: OptimizationPolicy::default(),
        }
    }
}

/// Task scheduling policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingPolicy {
    pub algorithm: SchedulingAlgorithm,
    pub fairness: bool,
    pub starvation_prevention: bool,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self { algorithm: SchedulingAlgorithm::PriorityQueue, fairness: true, starvation_prevention: true }
    }
}

/// Inter-agent communication policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationPolicy {
    pub protocol: Protocol,
    pub buffer_size: u32,
    pub compression: bool,
}

impl Default for CommunicationPolicy {
    fn default() -> Self {
        Self { protocol: Protocol::Async, buffer_size: 1_000, compression: true }
    }
}

/// Behavioral rules of the selected coordination pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinationRules {
    pub decision_making: String,
    pub communication_flow: String,
    pub conflict_resolution: String,
    pub task_assignment: String,
}

/// One configured quality gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityGate {
    pub name: String,
    pub kind: GateKind,
    pub trigger: String,
    pub criteria: BTreeMap<String, Value>,
    pub actions: Vec<String>,
}

/// Coordination and load-balancing policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinationSection {
    pub max_retries: u32,
    pub retry_delay: u64,
    pub deadlock_detection: bool,
    pub resource_timeout: u64,
    pub message_timeout: u64,
    pub priority_levels: u8,
    pub load_balancing_strategy: LoadBalancing,
    pub scheduling: SchedulingPolicy,
    pub communication: CommunicationPolicy,
    pub rules: CoordinationRules,
    pub quality_gates: Vec<QualityGate>,
}

impl Default for CoordinationSection {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay: 1_000,
            deadlock_detection: true,
            resource_timeout: 60_000,
            message_timeout: 30_000,
            priority_levels: 5,
            load_balancing_strategy: LoadBalancing::RoundRobin,
            scheduling: SchedulingPolicy::default(),
            communication: CommunicationPolicy::default(),
            rules: CoordinationRules {
                decision_making: "central".to_string(),
                communication_flow: "hub_and_spoke".to_string(),
                conflict_resolution: "coordinator_decides".to_string(),
                task_assignment: "top_down".to_string(),
            },
            quality_gates: Vec::new(),
        }
    }
}

/// Tool authentication policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPolicy {
    pub enabled: bool,
    pub method: String,
    pub token_expiry: String,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self { enabled: false, method: "token".to_string(), token_expiry: "24h".to_string() }
    }
}

/// Tool rate-limiting policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitPolicy {
    pub enabled: bool,
    pub requests_per_minute: u32,
    pub burst_size: u32,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self { enabled: true, requests_per_minute: 100, burst_size: 20 }
    }
}

/// Version control integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionControlIntegration {
    pub system: String,
    pub hooks: Vec<String>,
}

impl Default for VersionControlIntegration {
    fn default() -> Self {
        Self {
            system: "git".to_string(),
            hooks: vec!["pre_commit".to_string(), "post_merge".to_string()],
        }
    }
}

/// Database integration derived from the detected stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseIntegration {
    pub engine: String,
    pub connection_pool: bool,
    pub migration_support: bool,
}

/// Deployment integration derived from the detected stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentIntegration {
    pub target: String,
    pub auto_deploy: bool,
    pub rollback_support: bool,
}

/// External integration points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPoints {
    #[serde(default)]
    pub version_control: VersionControlIntegration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseIntegration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentIntegration>,
}

/// Tool access policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAccessSection {
    pub allowed_tools: Vec<String>,
    pub max_request_size: String,
    pub request_timeout: u64,
    pub tls_enabled: bool,
    pub authentication: AuthPolicy,
    pub rate_limiting: RateLimitPolicy,
    pub integrations: IntegrationPoints,
}

impl Default for ToolAccessSection {
    fn default() -> Self {
        Self {
            allowed_tools: vec!["*".to_string()],
            max_request_size: "10MB".to_string(),
            request_timeout: 30_000,
            tls_enabled: false,
            authentication: AuthPolicy::default(),
            rate_limiting: RateLimitPolicy::default(),
            integrations: IntegrationPoints::default(),
        }
    }
}

/// Audit trail policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditPolicy {
    pub enabled: bool,
    pub include_payloads: bool,
    pub retention: String,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self { enabled: false, include_payloads: false, retention: "30d".to_string() }
    }
}

/// Audit and log policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingSection {
    pub level: LogLevel,
    pub format: String,
    pub destination: LogDestination,
    pub file_output: String,
    pub max_file_size: String,
    pub max_files: u32,
    pub components: BTreeMap<String, LogLevel>,
    pub audit: AuditPolicy,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: "json".to_string(),
            destination: LogDestination::Console,
            file_output: "logs/swarm-coordinator.log".to_string(),
            max_file_size: "10MB".to_string(),
            max_files: 5,
            components: BTreeMap::new(),
            audit: AuditPolicy::default(),
        }
    }
}

/// Terminal command security policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalSecurity {
    pub allowed_commands: Vec<String>,
    pub blocked_commands: Vec<String>,
    pub sandboxed: bool,
    pub max_execution_time: u64,
}

impl Default for TerminalSecurity {
    fn default() -> Self {
        Self {
            allowed_commands: Vec::new(),
            blocked_commands: Vec::new(),
            sandboxed: false,
            max_execution_time: 300_000,
        }
    }
}

/// Terminal and execution policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalSection {
    #[serde(rename = "type")]
    pub kind: String,
    pub pool_size: u32,
    pub recycle_after: u32,
    pub health_check_interval: u64,
    pub command_timeout: u64,
    pub max_concurrent_commands: u32,
    pub shell_preference: Vec<String>,
    pub environment: BTreeMap<String, String>,
    pub security: TerminalSecurity,
}

impl Default for TerminalSection {
    fn default() -> Self {
        Self {
            kind: "auto".to_string(),
            pool_size: 5,
            recycle_after: 10,
            health_check_interval: 60_000,
            command_timeout: 300_000,
            max_concurrent_commands: 3,
            shell_preference: vec!["bash".to_string(), "zsh".to_string(), "sh".to_string()],
            environment: BTreeMap::new(),
            security: TerminalSecurity::default(),
        }
    }
}

/// The complete synthesized runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationProfile {
    pub orchestrator: OrchestratorSection,
    pub memory: MemorySection,
    pub coordination: CoordinationSection,
    pub tools: ToolAccessSection,
    pub logging: LoggingSection,
    pub terminal: TerminalSection,
}

impl ConfigurationProfile {
    /// Export the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
