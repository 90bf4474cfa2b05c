//! Tool access policy

use crate::knowledge::Recommendations;
use swarm_core::{
    AuthPolicy, DatabaseIntegration, DeploymentIntegration, IntegrationPoints, ProjectAnalysis,
    QualityTier, RateLimitPolicy, TeamSize, ToolAccessSection, VersionControlIntegration,
};

const LANGUAGE_TOOLS: &[(&str, &[&str])] = &[
    ("python", &["python.*", "pip.*", "pytest.*", "black.*", "ruff.*"]),
    ("javascript", &["npm.*", "node.*", "yarn.*", "eslint.*", "jest.*"]),
    ("typescript", &["tsc.*", "npm.*", "yarn.*", "eslint.*"]),
    ("java", &["mvn.*", "gradle.*", "java.*", "junit.*"]),
    ("go", &["go.*", "gofmt.*", "golint.*"]),
    ("rust", &["cargo.*", "rustc.*", "rustfmt.*"]),
    ("php", &["composer.*", "php.*", "phpunit.*"]),
    ("ruby", &["gem.*", "bundle.*", "rake.*", "rspec.*"]),
    ("csharp", &["dotnet.*", "nuget.*", "msbuild.*"]),
];

pub(super) fn build(
    analysis: &ProjectAnalysis,
    recommendations: &Recommendations,
) -> ToolAccessSection {
    let quality = analysis.constraints.quality;

    let baseline_rpm = match analysis.constraints.team_size {
        TeamSize::Solo => 50,
        TeamSize::Small => 100,
        TeamSize::Medium => 200,
        TeamSize::Large => 500,
    };
    let requests_per_minute =
        baseline_rpm.max(recommendations.requests_per_minute.unwrap_or(0));

    ToolAccessSection {
        allowed_tools: allowed_tools(analysis),
        max_request_size: "10MB".to_string(),
        request_timeout: 30_000,
        tls_enabled: quality == QualityTier::MissionCritical,
        authentication: AuthPolicy {
            enabled: quality >= QualityTier::Enterprise,
            ..AuthPolicy::default()
        },
        rate_limiting: RateLimitPolicy {
            enabled: true,
            requests_per_minute,
            burst_size: (requests_per_minute / 5).min(50),
        },
        integrations: integrations(analysis),
    }
}

/// Allowed tool patterns for the detected languages; everything when no
/// language was identified.
fn allowed_tools(analysis: &ProjectAnalysis) -> Vec<String> {
    let mut patterns: Vec<String> = Vec::new();

    for language in &analysis.requirements.languages {
        if let Some((_, tools)) =
            LANGUAGE_TOOLS.iter().find(|(name, _)| name == &language.as_str())
        {
            for tool in *tools {
                let tool = (*tool).to_string();
                if !patterns.contains(&tool) {
                    patterns.push(tool);
                }
            }
        }
    }

    if patterns.is_empty() {
        patterns.push("*".to_string());
    }

    patterns
}

fn integrations(analysis: &ProjectAnalysis) -> IntegrationPoints {
    let database =
        analysis.requirements.first_database().map(|engine| DatabaseIntegration {
            engine: engine.to_string(),
            connection_pool: true,
            migration_support: true,
        });

    let deployment =
        analysis.requirements.first_infrastructure().map(|target| DeploymentIntegration {
            target: target.to_string(),
            auto_deploy: analysis.constraints.quality != QualityTier::MissionCritical,
            rollback_support: true,
        });

    IntegrationPoints { version_control: VersionControlIntegration::default(), database, deployment }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use swarm_core::{ComplexityProfile, ProjectConstraints, ProjectType, RequirementProfile};

    fn analysis(
        requirements: RequirementProfile,
        team_size: TeamSize,
        quality: QualityTier,
    ) -> ProjectAnalysis {
        ProjectAnalysis {
            description: String::new(),
            project_type: ProjectType::WebBackend,
            requirements,
            complexity: ComplexityProfile::new(4, 3, 1),
            constraints: ProjectConstraints {
                team_size,
                quality,
                timeline_days: None,
                compliance: Default::default(),
            },
            confidence: 0.5,
        }
    }

    fn build_for(analysis: &ProjectAnalysis) -> ToolAccessSection {
        let recommendations = KnowledgeBase::new().recommendations(
            analysis.complexity.tier,
            analysis.constraints.quality,
            analysis.constraints.team_size,
            analysis.project_type,
        );
        build(analysis, &recommendations)
    }

    #[test]
    fn test_language_scoped_tools() {
        let analysis = analysis(
            RequirementProfile::new().with_languages(["python", "rust"]),
            TeamSize::Small,
            QualityTier::Production,
        );
        let section = build_for(&analysis);

        assert!(section.allowed_tools.contains(&"pytest.*".to_string()));
        assert!(section.allowed_tools.contains(&"cargo.*".to_string()));
        assert!(!section.allowed_tools.contains(&"*".to_string()));
    }

    #[test]
    fn test_wildcard_when_no_language() {
        let analysis =
            analysis(RequirementProfile::new(), TeamSize::Small, QualityTier::Production);
        assert_eq!(build_for(&analysis).allowed_tools, vec!["*".to_string()]);
    }

    #[test]
    fn test_rate_limit_scales_with_team() {
        let solo = analysis(RequirementProfile::new(), TeamSize::Solo, QualityTier::Production);
        let section = build_for(&solo);
        assert_eq!(section.rate_limiting.requests_per_minute, 50);
        assert_eq!(section.rate_limiting.burst_size, 10);

        let large = analysis(RequirementProfile::new(), TeamSize::Large, QualityTier::Production);
        let section = build_for(&large);
        assert_eq!(section.rate_limiting.requests_per_minute, 500);
        assert_eq!(section.rate_limiting.burst_size, 50);
        assert!(section.rate_limiting.enabled);
    }

    #[test]
    fn test_security_flags_by_quality() {
        let production =
            analysis(RequirementProfile::new(), TeamSize::Small, QualityTier::Production);
        let section = build_for(&production);
        assert!(!section.authentication.enabled);
        assert!(!section.tls_enabled);

        let enterprise =
            analysis(RequirementProfile::new(), TeamSize::Small, QualityTier::Enterprise);
        assert!(build_for(&enterprise).authentication.enabled);

        let critical =
            analysis(RequirementProfile::new(), TeamSize::Small, QualityTier::MissionCritical);
        let section = build_for(&critical);
        assert!(section.authentication.enabled);
        assert!(section.tls_enabled);
    }

    #[test]
    fn test_integrations_from_detected_stack() {
        let analysis = analysis(
            RequirementProfile::new()
                .with_databases(["postgresql"])
                .with_infrastructure(["docker"]),
            TeamSize::Small,
            QualityTier::MissionCritical,
        );
        let section = build_for(&analysis);

        let database = section.integrations.database.unwrap();
        assert_eq!(database.engine, "postgresql");
        let deployment = section.integrations.deployment.unwrap();
        assert_eq!(deployment.target, "docker");
        assert!(!deployment.auto_deploy);
        assert_eq!(section.integrations.version_control.system, "git");
    }
}
