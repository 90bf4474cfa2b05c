//! Configuration validation
//!
//! A fixed checklist over the synthesized profile: structural requirements
//! (at least one agent role, at least one quality gate) and documented
//! numeric ranges are errors; weaker signals (no scoped tools, no component
//! log levels) are warnings. Always returns a result object, never panics.

use swarm_core::{ConfigurationProfile, ValidationResult, limits};
use tracing::debug;

/// Number of checks in the fixed checklist; the denominator of the score.
pub const TOTAL_CHECKS: u32 = 10;

/// Validate a configuration profile.
pub fn validate(config: &ConfigurationProfile) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.orchestrator.agent_roles.is_empty() {
        errors.push("no agent roles configured".to_string());
    }

    if config.coordination.quality_gates.is_empty() {
        errors.push("no quality gates configured".to_string());
    }

    if !limits::MAX_CONCURRENT_AGENTS.contains(&config.orchestrator.max_concurrent_agents) {
        errors.push(format!(
            "maxConcurrentAgents {} outside [{}, {}]",
            config.orchestrator.max_concurrent_agents,
            limits::MAX_CONCURRENT_AGENTS.start(),
            limits::MAX_CONCURRENT_AGENTS.end()
        ));
    }

    if !limits::TASK_QUEUE_SIZE.contains(&config.orchestrator.task_queue_size) {
        errors.push(format!(
            "taskQueueSize {} outside [{}, {}]",
            config.orchestrator.task_queue_size,
            limits::TASK_QUEUE_SIZE.start(),
            limits::TASK_QUEUE_SIZE.end()
        ));
    }

    if !limits::CACHE_SIZE_MB.contains(&config.memory.cache_size_mb) {
        errors.push(format!(
            "cacheSizeMb {} outside [{}, {}]",
            config.memory.cache_size_mb,
            limits::CACHE_SIZE_MB.start(),
            limits::CACHE_SIZE_MB.end()
        ));
    }

    if !limits::RETENTION_DAYS.contains(&config.memory.retention_days) {
        errors.push(format!(
            "retentionDays {} outside [{}, {}]",
            config.memory.retention_days,
            limits::RETENTION_DAYS.start(),
            limits::RETENTION_DAYS.end()
        ));
    }

    if !limits::TERMINAL_POOL_SIZE.contains(&config.terminal.pool_size) {
        errors.push(format!(
            "terminal poolSize {} outside [{}, {}]",
            config.terminal.pool_size,
            limits::TERMINAL_POOL_SIZE.start(),
            limits::TERMINAL_POOL_SIZE.end()
        ));
    }

    if !limits::PRIORITY_LEVELS.contains(&config.coordination.priority_levels) {
        errors.push(format!(
            "priorityLevels {} outside [{}, {}]",
            config.coordination.priority_levels,
            limits::PRIORITY_LEVELS.start(),
            limits::PRIORITY_LEVELS.end()
        ));
    }

    if config.tools.allowed_tools.is_empty() {
        warnings.push("no allowed tool patterns; agents will have no tool access".to_string());
    }

    if config.logging.components.is_empty() {
        warnings.push("no per-component log levels configured".to_string());
    }

    let result = ValidationResult::from_checks(TOTAL_CHECKS, errors, warnings);
    debug!(
        valid = result.is_valid,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        score = result.score,
        "configuration validated"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_core::{AgentRole, GateKind, QualityGate};

    fn well_formed() -> ConfigurationProfile {
        let mut config = ConfigurationProfile::default();
        config.orchestrator.agent_roles.push(AgentRole {
            role: "architect".to_string(),
            specialization: "api_architecture".to_string(),
            capabilities: vec!["system_design".to_string()],
            tools: vec!["system_design_tool".to_string()],
            depends_on: vec![],
        });
        config.coordination.quality_gates.push(QualityGate {
            name: "code_review".to_string(),
            kind: GateKind::Manual,
            trigger: "on_pull_request".to_string(),
            criteria: Default::default(),
            actions: vec!["block_merge".to_string()],
        });
        config.logging.components.insert("orchestrator".to_string(), swarm_core::LogLevel::Info);
        config
    }

    #[test]
    fn test_well_formed_config_passes() {
        let result = validate(&well_formed());
        assert!(result.is_valid, "errors: {:?}", result.errors);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_missing_roles_and_gates_are_errors() {
        let config = ConfigurationProfile::default();
        let result = validate(&config);

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("agent roles")));
        assert!(result.errors.iter().any(|e| e.contains("quality gates")));
    }

    #[test]
    fn test_out_of_range_values_are_errors() {
        let mut config = well_formed();
        config.orchestrator.max_concurrent_agents = 500;
        config.memory.cache_size_mb = 5;
        config.coordination.priority_levels = 0;

        let result = validate(&config);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.iter().any(|e| e.contains("maxConcurrentAgents")));
        assert!(result.errors.iter().any(|e| e.contains("cacheSizeMb")));
        assert!(result.errors.iter().any(|e| e.contains("priorityLevels")));
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let mut config = well_formed();
        config.tools.allowed_tools.clear();
        config.logging.components.clear();

        let result = validate(&config);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.score, (f64::from(TOTAL_CHECKS) - 1.0) / f64::from(TOTAL_CHECKS));
    }

    #[test]
    fn test_score_floors_at_zero_for_broken_config() {
        let mut config = ConfigurationProfile::default();
        config.orchestrator.max_concurrent_agents = 0;
        config.orchestrator.task_queue_size = 0;
        config.memory.cache_size_mb = 0;
        config.memory.retention_days = 0;
        config.terminal.pool_size = 0;
        config.coordination.priority_levels = 0;
        config.tools.allowed_tools.clear();
        config.logging.components.clear();

        let result = validate(&config);
        assert!(!result.is_valid);
        assert!(result.score >= 0.0);
        assert_eq!(result.errors.len(), 8);
        assert_eq!(result.warnings.len(), 2);
    }
}
