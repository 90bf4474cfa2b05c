//! Constraint extraction: team size, quality tier, timeline, compliance
//!
//! Cue matching with stated defaults: Small team and Production quality when
//! the document gives no signal. Timelines are read from `N days|weeks|months`
//! phrases; the first phrasing found wins.

use crate::extractor::{any_token, contains_token, normalize};
use regex::Regex;
use std::sync::LazyLock;
use swarm_core::{ProjectConstraints, QualityTier, TeamSize};

const SOLO_CUES: &[&str] = &["solo", "single developer", "one person", "just me"];
const SMALL_TEAM_CUES: &[&str] = &["team", "multiple developers"];
const MEDIUM_TEAM_CUES: &[&str] = &["large team", "many developers"];
const LARGE_TEAM_CUES: &[&str] = &["enterprise", "organization", "company-wide"];

const PROTOTYPE_CUES: &[&str] = &["prototype", "mvp", "proof of concept"];
const ENTERPRISE_CUES: &[&str] = &["enterprise", "mission critical", "high availability"];
const CRITICAL_CUES: &[&str] = &["critical", "safety", "financial", "healthcare"];

const COMPLIANCE_STANDARDS: &[&str] = &["gdpr", "hipaa", "sox", "pci-dss", "soc 2", "iso 27001"];

static DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*days?").expect("Invalid regex pattern"));
static WEEKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*weeks?").expect("Invalid regex pattern"));
static MONTHS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*months?").expect("Invalid regex pattern"));

/// Extract project constraints from a document.
pub fn extract_constraints(text: &str) -> ProjectConstraints {
    extract_constraints_normalized(&normalize(text))
}

pub(crate) fn extract_constraints_normalized(text: &str) -> ProjectConstraints {
    let mut constraints = ProjectConstraints::default();

    if any_token(text, SOLO_CUES) {
        constraints.team_size = TeamSize::Solo;
    }
    if any_token(text, SMALL_TEAM_CUES) {
        constraints.team_size = TeamSize::Small;
    }
    if any_token(text, MEDIUM_TEAM_CUES) {
        constraints.team_size = TeamSize::Medium;
    }
    if any_token(text, LARGE_TEAM_CUES) {
        constraints.team_size = TeamSize::Large;
    }

    if any_token(text, PROTOTYPE_CUES) {
        constraints.quality = QualityTier::Prototype;
    }
    if any_token(text, ENTERPRISE_CUES) {
        constraints.quality = QualityTier::Enterprise;
    }
    if any_token(text, CRITICAL_CUES) {
        constraints.quality = QualityTier::MissionCritical;
    }

    constraints.timeline_days = extract_timeline(text);

    for standard in COMPLIANCE_STANDARDS {
        if contains_token(text, standard) {
            constraints.compliance.insert((*standard).to_string());
        }
    }

    constraints
}

/// Read a timeline as days; days take precedence over weeks over months.
fn extract_timeline(text: &str) -> Option<u32> {
    let conversions: [(&Regex, u32); 3] = [(&DAYS_RE, 1), (&WEEKS_RE, 7), (&MONTHS_RE, 30)];

    for (pattern, multiplier) in conversions {
        if let Some(captures) = pattern.captures(text) {
            if let Ok(count) = captures[1].parse::<u32>() {
                return Some(count.saturating_mul(multiplier));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_cues() {
        let constraints = extract_constraints("a straightforward service");
        assert_eq!(constraints.team_size, TeamSize::Small);
        assert_eq!(constraints.quality, QualityTier::Production);
        assert_eq!(constraints.timeline_days, None);
        assert!(constraints.compliance.is_empty());
    }

    #[test]
    fn test_solo_cue() {
        let constraints = extract_constraints("a solo researcher running studies");
        assert_eq!(constraints.team_size, TeamSize::Solo);
    }

    #[test]
    fn test_team_cue_escalation() {
        assert_eq!(extract_constraints("a team of 4").team_size, TeamSize::Small);
        assert_eq!(extract_constraints("a large team effort").team_size, TeamSize::Medium);
        assert_eq!(extract_constraints("company-wide rollout").team_size, TeamSize::Large);
    }

    #[test]
    fn test_quality_cue_escalation() {
        assert_eq!(extract_constraints("just an mvp").quality, QualityTier::Prototype);
        assert_eq!(
            extract_constraints("high availability required").quality,
            QualityTier::Enterprise
        );
        assert_eq!(
            extract_constraints("a healthcare records system").quality,
            QualityTier::MissionCritical
        );
        // "mission critical" hits both the enterprise and critical cue lists;
        // the stricter tier wins
        assert_eq!(
            extract_constraints("mission critical workload").quality,
            QualityTier::MissionCritical
        );
    }

    #[test]
    fn test_timeline_units() {
        assert_eq!(extract_constraints("ship in 10 days").timeline_days, Some(10));
        assert_eq!(extract_constraints("ship in 2 weeks").timeline_days, Some(14));
        assert_eq!(extract_constraints("ship in 3 months").timeline_days, Some(90));
        assert_eq!(extract_constraints("ship whenever").timeline_days, None);
    }

    #[test]
    fn test_compliance_standards() {
        let constraints = extract_constraints("must satisfy gdpr and soc 2");
        assert!(constraints.compliance.contains("gdpr"));
        assert!(constraints.compliance.contains("soc 2"));
        assert_eq!(constraints.compliance.len(), 2);
    }
}
