//! Weighted multi-criteria pattern selection
//!
//! Every catalog pattern is scored against the analysis:
//! 0.4·complexity_fit + 0.3·team_fit + 0.2·type_affinity + 0.1·quality_fit,
//! clamped to 1.0. The highest score wins; equal scores resolve to the
//! pattern declared first. An empty catalog is a fatal precondition error,
//! never a silent default.

use crate::affinity::type_affinity;
use crate::catalog::PatternCatalog;
use crate::fit::{DistanceCredit, ordinal_fit};
use serde::{Deserialize, Serialize};
use swarm_core::{
    ComplexityTier, CoordinationPattern, CoordinatorError, PatternScore, ProjectAnalysis,
    QualityTier, Result, TeamSize,
};
use tracing::info;

const COMPLEXITY_WEIGHT: f64 = 0.4;
const TEAM_WEIGHT: f64 = 0.3;
const TYPE_WEIGHT: f64 = 0.2;
const QUALITY_WEIGHT: f64 = 0.1;

const COMPLEXITY_CREDIT: DistanceCredit = DistanceCredit { adjacent: 0.7, near: 0.4, far: 0.1 };
const TEAM_CREDIT: DistanceCredit = DistanceCredit { adjacent: 0.8, near: 0.5, far: 0.2 };

/// The winning pattern and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSelection {
    /// The selected pattern
    pub pattern: CoordinationPattern,
    /// Its fit score (0-1)
    pub score: f64,
}

impl PatternSelection {
    /// Name of the selected pattern.
    pub fn name(&self) -> &str {
        &self.pattern.name
    }
}

/// Scores catalog patterns against a project analysis.
#[derive(Debug, Clone, Default)]
pub struct PatternSelector {
    catalog: PatternCatalog,
}

impl PatternSelector {
    /// Create a selector over a catalog.
    pub fn new(catalog: PatternCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog backing this selector.
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Score every pattern, best first. Equal scores keep declaration order.
    pub fn score_all(&self, analysis: &ProjectAnalysis) -> Vec<PatternScore> {
        let mut scored: Vec<PatternScore> = self
            .catalog
            .patterns()
            .iter()
            .map(|pattern| PatternScore {
                name: pattern.name.clone(),
                score: score_pattern(pattern, analysis),
            })
            .collect();

        // stable sort keeps catalog declaration order on ties
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Select the best-fitting pattern for the analysis.
    ///
    /// Fails with [`CoordinatorError::EmptyCatalog`] when no pattern is
    /// registered; this signals a static configuration bug.
    pub fn select(&self, analysis: &ProjectAnalysis) -> Result<PatternSelection> {
        if self.catalog.is_empty() {
            return Err(CoordinatorError::EmptyCatalog);
        }

        let mut ranked: Vec<(usize, f64)> = self
            .catalog
            .patterns()
            .iter()
            .enumerate()
            .map(|(index, pattern)| (index, score_pattern(pattern, analysis)))
            .collect();

        // stable sort keeps catalog declaration order on ties
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let (index, score) = ranked[0];
        let pattern = self.catalog.patterns()[index].clone();

        info!(pattern = %pattern.name, score, "coordination pattern selected");

        Ok(PatternSelection { pattern, score })
    }
}

/// Weighted fit of one pattern for one analysis, in [0, 1].
pub fn score_pattern(pattern: &CoordinationPattern, analysis: &ProjectAnalysis) -> f64 {
    let complexity = ordinal_fit(
        &ComplexityTier::ORDER,
        analysis.complexity.tier,
        &pattern.complexity_fit,
        COMPLEXITY_CREDIT,
    );
    let team = ordinal_fit(
        &TeamSize::ORDER,
        analysis.constraints.team_size,
        &pattern.team_size_fit,
        TEAM_CREDIT,
    );
    let affinity = type_affinity(analysis.project_type, &pattern.name);
    let quality = quality_fit(pattern, analysis.constraints.quality);

    let score = complexity * COMPLEXITY_WEIGHT
        + team * TEAM_WEIGHT
        + affinity * TYPE_WEIGHT
        + quality * QUALITY_WEIGHT;

    score.min(1.0)
}

/// Quality fit from the pattern's gate count: each quality tier favors a
/// gate-count range, with fixed partial credit outside it.
pub fn quality_fit(pattern: &CoordinationPattern, quality: QualityTier) -> f64 {
    let gates = pattern.quality_gates.len();

    match quality {
        QualityTier::Prototype => {
            if gates <= 2 {
                1.0
            } else {
                0.7
            }
        }
        QualityTier::Production => {
            if (2..=4).contains(&gates) {
                1.0
            } else {
                0.8
            }
        }
        QualityTier::Enterprise => {
            if gates >= 3 {
                1.0
            } else {
                0.6
            }
        }
        QualityTier::MissionCritical => {
            if gates >= 4 {
                1.0
            } else {
                0.5
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_core::{
        ComplexityProfile, ProjectConstraints, ProjectType, RequirementProfile,
    };

    fn analysis(
        project_type: ProjectType,
        technical: u8,
        team_size: TeamSize,
        quality: QualityTier,
    ) -> ProjectAnalysis {
        ProjectAnalysis {
            description: String::new(),
            project_type,
            requirements: RequirementProfile::new(),
            complexity: ComplexityProfile::new(technical, 3, 1),
            constraints: ProjectConstraints {
                team_size,
                quality,
                timeline_days: None,
                compliance: Default::default(),
            },
            confidence: 0.5,
        }
    }

    #[test]
    fn test_backend_moderate_small_selects_hierarchical() {
        // technical 4 -> overall 3.1 -> Moderate
        let analysis =
            analysis(ProjectType::WebBackend, 4, TeamSize::Small, QualityTier::Production);
        let selector = PatternSelector::default();
        let selection = selector.select(&analysis).unwrap();

        assert_eq!(selection.name(), "hierarchical");
        assert!(selection.score > 0.5);
    }

    #[test]
    fn test_solo_research_prefers_peer_to_peer() {
        let analysis = analysis(ProjectType::Research, 1, TeamSize::Solo, QualityTier::Production);
        let selector = PatternSelector::default();
        let ranked = selector.score_all(&analysis);

        let peer = ranked.iter().find(|s| s.name == "peer_to_peer").unwrap();
        let hier = ranked.iter().find(|s| s.name == "hierarchical").unwrap();
        assert!(peer.score > hier.score);
        assert_eq!(selector.select(&analysis).unwrap().name(), "peer_to_peer");
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        let analysis =
            analysis(ProjectType::WebBackend, 4, TeamSize::Small, QualityTier::Production);
        let selector = PatternSelector::new(PatternCatalog::empty());
        let error = selector.select(&analysis).unwrap_err();
        assert!(matches!(error, CoordinatorError::EmptyCatalog));
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let selector = PatternSelector::default();
        for technical in [1u8, 4, 7, 10] {
            for team in TeamSize::ORDER {
                for quality in QualityTier::ORDER {
                    let analysis = analysis(ProjectType::Microservices, technical, team, quality);
                    for scored in selector.score_all(&analysis) {
                        assert!(
                            (0.0..=1.0).contains(&scored.score),
                            "{} scored {}",
                            scored.name,
                            scored.score
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_quality_fit_ranges() {
        let catalog = PatternCatalog::builtin();
        let p2p = catalog.get("peer_to_peer").unwrap(); // 2 gates
        let hier = catalog.get("hierarchical").unwrap(); // 4 gates

        assert_eq!(quality_fit(p2p, QualityTier::Prototype), 1.0);
        assert_eq!(quality_fit(hier, QualityTier::Prototype), 0.7);
        assert_eq!(quality_fit(p2p, QualityTier::Production), 1.0);
        assert_eq!(quality_fit(hier, QualityTier::MissionCritical), 1.0);
        assert_eq!(quality_fit(p2p, QualityTier::MissionCritical), 0.5);
        assert_eq!(quality_fit(p2p, QualityTier::Enterprise), 0.6);
    }

    #[test]
    fn test_ties_resolve_to_declaration_order() {
        let mut catalog = PatternCatalog::empty();
        let twin = |name: &str| {
            CoordinationPattern::new(name, "twin")
                .with_agents(vec!["worker".to_string()])
                .with_quality_gates(vec!["review".to_string(), "verify".to_string()])
                .with_complexity_fit(vec![ComplexityTier::Simple])
                .with_team_size_fit(vec![TeamSize::Solo])
        };
        catalog.register(twin("first"));
        catalog.register(twin("second"));

        let analysis = analysis(ProjectType::Automation, 1, TeamSize::Solo, QualityTier::Production);
        let selector = PatternSelector::new(catalog);
        assert_eq!(selector.select(&analysis).unwrap().name(), "first");
    }

    #[test]
    fn test_selection_is_deterministic() {
        let analysis =
            analysis(ProjectType::DataProcessing, 6, TeamSize::Medium, QualityTier::Enterprise);
        let selector = PatternSelector::default();
        let first = selector.select(&analysis).unwrap();
        let second = selector.select(&analysis).unwrap();
        assert_eq!(first, second);
    }
}
