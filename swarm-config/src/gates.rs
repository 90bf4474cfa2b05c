//! Quality gate manifests
//!
//! Expands the selected pattern's gate identifiers into configured gates:
//! execution kind, trigger condition, pass criteria, and follow-up actions.
//! Enterprise and stricter quality tiers tighten review and coverage
//! criteria.

use serde_json::{Value, json};
use std::collections::BTreeMap;
use swarm_core::{CoordinationPattern, GateKind, QualityGate, QualityTier};

/// Build gate manifests for every gate in the pattern.
pub fn build_gates(pattern: &CoordinationPattern, quality: QualityTier) -> Vec<QualityGate> {
    pattern
        .quality_gates
        .iter()
        .map(|name| QualityGate {
            name: name.clone(),
            kind: gate_kind(name),
            trigger: gate_trigger(name).to_string(),
            criteria: gate_criteria(name, quality),
            actions: gate_actions(name),
        })
        .collect()
}

fn gate_kind(name: &str) -> GateKind {
    match name {
        "code_review" | "peer_review" | "phase_review" | "final_review" => GateKind::Manual,
        _ => GateKind::Automated,
    }
}

fn gate_trigger(name: &str) -> &'static str {
    match name {
        "code_review" => "on_pull_request",
        "unit_testing" => "on_code_change",
        "integration_testing" => "on_merge",
        "security_scan" => "on_deployment",
        "performance_testing" => "on_release",
        "peer_review" => "on_completion",
        "validation_testing" => "on_output",
        _ => "on_completion",
    }
}

fn gate_criteria(name: &str, quality: QualityTier) -> BTreeMap<String, Value> {
    let mut criteria: BTreeMap<String, Value> = match name {
        "code_review" => BTreeMap::from([
            ("approvals_required".to_string(), json!(1)),
            ("blocking_issues".to_string(), json!(0)),
        ]),
        "unit_testing" => BTreeMap::from([
            ("coverage_threshold".to_string(), json!(80)),
            ("passing_tests".to_string(), json!("100%")),
        ]),
        "integration_testing" => BTreeMap::from([
            ("passing_tests".to_string(), json!("100%")),
            ("response_time".to_string(), json!("<2s")),
        ]),
        "security_scan" => BTreeMap::from([
            ("critical_vulnerabilities".to_string(), json!(0)),
            ("high_vulnerabilities".to_string(), json!(0)),
        ]),
        "performance_testing" => BTreeMap::from([
            ("response_time".to_string(), json!("<1s")),
            ("throughput".to_string(), json!(">100rps")),
        ]),
        _ => BTreeMap::new(),
    };

    if quality >= QualityTier::Enterprise {
        match name {
            "unit_testing" => {
                criteria.insert("coverage_threshold".to_string(), json!(90));
            }
            "code_review" => {
                criteria.insert("approvals_required".to_string(), json!(2));
            }
            _ => {}
        }
    }

    criteria
}

fn gate_actions(name: &str) -> Vec<String> {
    let actions: &[&str] = match name {
        "code_review" => &["block_merge", "request_changes"],
        "unit_testing" => &["block_deployment", "generate_report"],
        "integration_testing" => &["block_release", "notify_team"],
        "security_scan" => &["block_deployment", "create_ticket"],
        "performance_testing" => &["block_release", "optimize_code"],
        _ => &["notify_team"],
    };

    actions.iter().map(|action| (*action).to_string()).collect()
}
