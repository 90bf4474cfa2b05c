//! End-to-end document analysis
//!
//! `ProjectAnalyzer` runs the full analysis: requirement extraction and
//! constraint extraction execute as two concurrent sub-analyses joined before
//! classification (the merge is field-wise, so join order cannot change the
//! result), then complexity, project type, and confidence are derived.

use crate::complexity::assess_normalized;
use crate::constraints::extract_constraints_normalized;
use crate::extractor::{extract_normalized, normalize};
use crate::project_type::classify_normalized;
use swarm_core::{ComplexityProfile, ProjectAnalysis, ProjectConstraints, RequirementProfile};
use tracing::{debug, info};

/// Analyzer for requirement documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectAnalyzer;

impl ProjectAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyze a free-text requirement document.
    ///
    /// Never fails: an empty or unrecognizable document yields default
    /// classifications with a low confidence score.
    pub async fn analyze(&self, description: &str) -> ProjectAnalysis {
        let normalized = normalize(description);
        debug!(words = normalized.split(' ').count(), "analyzing requirement document");

        let (requirements, constraints) = tokio::join!(
            requirement_scan(normalized.clone()),
            constraint_scan(normalized.clone()),
        );

        self.assemble(description, &normalized, requirements, constraints)
    }

    /// Analyze with a pre-parsed requirement profile, as produced from a
    /// structured document; extraction is skipped, everything else runs
    /// unchanged.
    pub async fn analyze_with_profile(
        &self,
        description: &str,
        requirements: RequirementProfile,
    ) -> ProjectAnalysis {
        let normalized = normalize(description);
        let constraints = extract_constraints_normalized(&normalized);

        self.assemble(description, &normalized, requirements, constraints)
    }

    fn assemble(
        &self,
        description: &str,
        normalized: &str,
        requirements: RequirementProfile,
        constraints: ProjectConstraints,
    ) -> ProjectAnalysis {
        let complexity = assess_normalized(normalized, &requirements);
        let project_type = classify_normalized(normalized, &requirements);
        let confidence = confidence_score(&requirements, &complexity);

        info!(
            ?project_type,
            tier = ?complexity.tier,
            team = ?constraints.team_size,
            quality = ?constraints.quality,
            confidence,
            "analysis complete"
        );

        ProjectAnalysis {
            description: description.to_string(),
            project_type,
            requirements,
            complexity,
            constraints,
            confidence,
        }
    }
}

async fn requirement_scan(normalized: String) -> RequirementProfile {
    extract_normalized(&normalized)
}

async fn constraint_scan(normalized: String) -> ProjectConstraints {
    extract_constraints_normalized(&normalized)
}

/// Confidence heuristic over the identified stack and the complexity shape.
///
/// A document with no identifiable technology is answered, but with
/// confidence below 0.5.
fn confidence_score(requirements: &RequirementProfile, complexity: &ComplexityProfile) -> f64 {
    let mut score: f64 = 0.5;

    let stack = requirements.stack_identified();
    if stack >= 3 {
        score += 0.2;
    }
    if stack >= 6 {
        score += 0.1;
    }

    if complexity.technical > 1 {
        score += 0.1;
    }
    if complexity.overall > 9.0 {
        score -= 0.1;
    }
    if requirements.is_empty() {
        score -= 0.2;
    }

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_core::{ComplexityTier, ProjectType, QualityTier, TeamSize};

    #[tokio::test]
    async fn test_analyze_full_document() {
        let analyzer = ProjectAnalyzer::new();
        let analysis = analyzer
            .analyze(
                "Build a REST API with PostgreSQL and Docker for a team of 4, \
                 3 months to production quality",
            )
            .await;

        assert_eq!(analysis.project_type, ProjectType::WebBackend);
        assert_eq!(analysis.complexity.technical, 4);
        assert_eq!(analysis.complexity.tier, ComplexityTier::Moderate);
        assert_eq!(analysis.constraints.team_size, TeamSize::Small);
        assert_eq!(analysis.constraints.quality, QualityTier::Production);
        assert_eq!(analysis.constraints.timeline_days, Some(90));
        assert!(analysis.confidence > 0.5);
    }

    #[tokio::test]
    async fn test_analyze_empty_document_degrades_gracefully() {
        let analyzer = ProjectAnalyzer::new();
        let analysis = analyzer.analyze("").await;

        assert!(analysis.requirements.is_empty());
        assert_eq!(
            (
                analysis.complexity.technical,
                analysis.complexity.organizational,
                analysis.complexity.temporal
            ),
            (1, 1, 1)
        );
        assert_eq!(analysis.complexity.overall, 1.0);
        assert_eq!(analysis.complexity.tier, ComplexityTier::Simple);
        assert!(analysis.confidence < 0.5);
    }

    #[tokio::test]
    async fn test_analyze_is_deterministic() {
        let analyzer = ProjectAnalyzer::new();
        let text = "python fastapi microservices on kubernetes for a large team";
        let first = analyzer.analyze(text).await;
        let second = analyzer.analyze(text).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_analyze_with_profile_skips_extraction() {
        let analyzer = ProjectAnalyzer::new();
        let profile = RequirementProfile::new()
            .with_languages(["rust"])
            .with_databases(["postgresql"])
            .with_infrastructure(["docker"]);

        let analysis = analyzer.analyze_with_profile("structured submission", profile).await;

        assert_eq!(analysis.requirements.stack_identified(), 2);
        assert_eq!(analysis.requirements.total_identified(), 3);
        assert!(!analysis.requirements.is_empty());
    }

    #[tokio::test]
    async fn test_confidence_rises_with_identified_stack() {
        let analyzer = ProjectAnalyzer::new();
        let sparse = analyzer.analyze("a small script").await;
        let rich = analyzer
            .analyze("python django postgresql redis react on aws with docker")
            .await;
        assert!(rich.confidence > sparse.confidence);
    }
}
