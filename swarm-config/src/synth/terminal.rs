//! Terminal and execution policy

use super::team_factor;
use crate::knowledge::Recommendations;
use std::collections::BTreeMap;
use swarm_core::{ProjectAnalysis, QualityTier, TerminalSection, TerminalSecurity, limits};

const BASE_COMMANDS: &[&str] =
    &["git.*", "ls", "pwd", "cd", "mkdir", "touch", "cat", "grep", "find"];

const BLOCKED_COMMANDS: &[&str] = &[
    "rm -rf /",
    "sudo rm",
    "format.*",
    "del /s /q",
    "shutdown.*",
    "reboot.*",
    "halt.*",
    "poweroff.*",
];

pub(super) fn build(
    analysis: &ProjectAnalysis,
    recommendations: &Recommendations,
) -> TerminalSection {
    let quality = analysis.constraints.quality;
    let mission_critical = quality == QualityTier::MissionCritical;

    let baseline_pool = (5 * team_factor(analysis.constraints.team_size)).min(20);
    let pool_size = baseline_pool
        .max(recommendations.terminal_pool.unwrap_or(0))
        .clamp(*limits::TERMINAL_POOL_SIZE.start(), *limits::TERMINAL_POOL_SIZE.end());

    let command_timeout = 300_000u64.max(recommendations.command_timeout.unwrap_or(0));

    TerminalSection {
        kind: "auto".to_string(),
        pool_size,
        recycle_after: 10,
        health_check_interval: 60_000,
        command_timeout,
        max_concurrent_commands: 3,
        shell_preference: vec!["bash".to_string(), "zsh".to_string(), "sh".to_string()],
        environment: environment(analysis),
        security: TerminalSecurity {
            allowed_commands: allowed_commands(analysis),
            blocked_commands: BLOCKED_COMMANDS.iter().map(|c| (*c).to_string()).collect(),
            sandboxed: quality >= QualityTier::Enterprise,
            max_execution_time: if mission_critical { 600_000 } else { 300_000 },
        },
    }
}

fn allowed_commands(analysis: &ProjectAnalysis) -> Vec<String> {
    let mut commands: Vec<String> = BASE_COMMANDS.iter().map(|c| (*c).to_string()).collect();

    for language in &analysis.requirements.languages {
        let extra: &[&str] = match language.as_str() {
            "python" => &["python.*", "pip.*", "pytest.*"],
            "javascript" => &["npm.*", "node.*", "yarn.*"],
            "java" => &["mvn.*", "gradle.*", "java.*"],
            _ => &[],
        };
        commands.extend(extra.iter().map(|c| (*c).to_string()));
    }

    if analysis.requirements.infrastructure.contains("docker") {
        commands.push("docker.*".to_string());
    }
    if analysis.requirements.infrastructure.contains("kubernetes") {
        commands.push("kubectl.*".to_string());
    }

    commands
}

fn environment(analysis: &ProjectAnalysis) -> BTreeMap<String, String> {
    let mut env = BTreeMap::from([
        ("PATH".to_string(), "/usr/local/bin:/usr/bin:/bin".to_string()),
        ("LANG".to_string(), "en_US.UTF-8".to_string()),
    ]);

    if analysis.requirements.languages.contains("python") {
        env.insert("PYTHONPATH".to_string(), ".".to_string());
        env.insert("PYTHONUNBUFFERED".to_string(), "1".to_string());
    }
    if analysis.requirements.languages.contains("javascript") {
        env.insert("NODE_ENV".to_string(), "development".to_string());
    }
    if analysis.requirements.languages.contains("java") {
        env.insert("JAVA_HOME".to_string(), "/usr/lib/jvm/default-java".to_string());
    }

    env
}
