//! Three-dimension complexity scoring
//!
//! Additive, saturating scores: each dimension starts at 1, gains fixed
//! bonuses for matched cues, and never leaves [1, 10]. The overall score and
//! tier are derived by [`ComplexityProfile::new`].

use crate::extractor::{any_token, contains_token, normalize};
use crate::taxonomy;
use swarm_core::{ComplexityProfile, RequirementProfile};

const TEAM_CUES: &[&str] = &["team", "multiple developers", "collaboration"];
const SCALE_CUES: &[&str] = &["large team", "enterprise", "organization"];
const PROCESS_CUES: &[&str] = &["agile", "scrum", "ci/cd", "devops"];
const COMPLIANCE_CUES: &[&str] = &["compliance", "audit", "governance", "security"];

const URGENCY_CUES: &[&str] = &["urgent", "asap", "quickly", "fast"];
const DEADLINE_CUES: &[&str] = &["deadline", "timeline", "schedule"];
const MVP_CUES: &[&str] = &["mvp", "prototype", "proof of concept"];
const LONG_TERM_CUES: &[&str] = &["long-term", "gradual", "phased", "iterative"];

/// Assess complexity from a document and its requirement profile.
pub fn assess(text: &str, profile: &RequirementProfile) -> ComplexityProfile {
    assess_normalized(&normalize(text), profile)
}

pub(crate) fn assess_normalized(text: &str, profile: &RequirementProfile) -> ComplexityProfile {
    ComplexityProfile::new(
        technical_score(text, profile),
        organizational_score(text),
        temporal_score(text),
    )
}

/// Technical dimension: stepped by the number of distinct technologies
/// across every profile set, plus up to +2 for complexity-signaling words.
fn technical_score(text: &str, profile: &RequirementProfile) -> u8 {
    let mut score: u8 = 1;

    score += match profile.total_identified() {
        0 => 0,
        1..=3 => 1,
        4..=6 => 3,
        7..=10 => 5,
        _ => 7,
    };

    let indicators = taxonomy::COMPLEXITY_INDICATORS
        .iter()
        .filter(|indicator| contains_token(text, indicator))
        .count();
    score += indicators.min(2) as u8;

    score.min(10)
}

/// Organizational dimension: team, scale, process, and compliance cues.
fn organizational_score(text: &str) -> u8 {
    let mut score: u8 = 1;

    if any_token(text, TEAM_CUES) {
        score += 2;
    }
    if any_token(text, SCALE_CUES) {
        score += 3;
    }
    if any_token(text, PROCESS_CUES) {
        score += 1;
    }
    if any_token(text, COMPLIANCE_CUES) {
        score += 2;
    }

    score.min(10)
}

/// Temporal dimension: urgency raises the score, long-term phrasing lowers
/// it (floored at 1).
fn temporal_score(text: &str) -> u8 {
    let mut score: u8 = 1;

    if any_token(text, URGENCY_CUES) {
        score += 3;
    }
    if any_token(text, DEADLINE_CUES) {
        score += 2;
    }
    if any_token(text, MVP_CUES) {
        score += 1;
    }
    if any_token(text, LONG_TERM_CUES) {
        score = score.saturating_sub(2).max(1);
    }

    score.min(10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;
    use swarm_core::ComplexityTier;

    fn assess_text(text: &str) -> ComplexityProfile {
        let profile = extract(text);
        assess(text, &profile)
    }

    #[test]
    fn test_empty_input_scores_minimum() {
        let profile = assess_text("");
        assert_eq!((profile.technical, profile.organizational, profile.temporal), (1, 1, 1));
        assert_eq!(profile.overall, 1.0);
        assert_eq!(profile.tier, ComplexityTier::Simple);
    }

    #[test]
    fn test_technology_count_steps() {
        // postgresql + docker + api + rest = 4 technologies -> +3
        let profile = assess_text("REST API with PostgreSQL on Docker");
        assert_eq!(profile.technical, 4);
    }

    #[test]
    fn test_indicator_bonus_caps_at_two() {
        let profile = assess_text("distributed real-time streaming blockchain platform");
        // no stack identified, indicators capped at +2
        assert_eq!(profile.technical, 3);
    }

    #[test]
    fn test_organizational_cues_stack() {
        let text = "large team with enterprise governance, agile process and compliance audits";
        let profile = assess_text(text);
        // team +2, scale +3, process +1, compliance +2
        assert_eq!(profile.organizational, 9);
    }

    #[test]
    fn test_temporal_pressure_and_relief() {
        assert_eq!(assess_text("urgent deadline for the mvp").temporal, 7);
        assert_eq!(assess_text("a phased long-term effort").temporal, 1);
        assert_eq!(assess_text("urgent but phased rollout").temporal, 2);
    }

    #[test]
    fn test_scores_stay_bounded() {
        let text = "urgent asap deadline schedule mvp prototype large team enterprise \
                    organization compliance audit governance security agile scrum devops \
                    distributed scalable microservices real-time streaming analytics \
                    python javascript java go rust php ruby react vue angular django \
                    postgresql mysql mongodb redis aws docker kubernetes terraform";
        let profile = assess_text(text);
        assert!(profile.technical <= 10);
        assert!(profile.organizational <= 10);
        assert!(profile.temporal <= 10);
        assert!(profile.overall <= 10.0);
    }
}
