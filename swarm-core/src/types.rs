//! Classification and analysis types shared across the pipeline
//!
//! Every type here is a value object: constructed once by a pipeline stage,
//! read-only afterwards. Derived fields (overall complexity score, tier) are
//! computed by constructors and cannot be set independently.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Supported project types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    WebFrontend,
    WebBackend,
    WebFullstack,
    MobileNative,
    MobileCrossplatform,
    ApiRest,
    ApiGraphql,
    Microservices,
    DataProcessing,
    DataAnalytics,
    MlPipeline,
    Automation,
    CiCd,
    Monitoring,
    Research,
}

/// Project complexity tiers, ordered from lightest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    Simple,
    Moderate,
    Complex,
    Enterprise,
}

impl ComplexityTier {
    /// Tiers in ascending order, used for ordinal-distance scoring.
    pub const ORDER: [ComplexityTier; 4] =
        [Self::Simple, Self::Moderate, Self::Complex, Self::Enterprise];

    /// Position of this tier in [`Self::ORDER`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Team size tiers, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSize {
    Solo,
    Small,
    Medium,
    Large,
}

impl TeamSize {
    /// Tiers in ascending order, used for ordinal-distance scoring.
    pub const ORDER: [TeamSize; 4] = [Self::Solo, Self::Small, Self::Medium, Self::Large];

    /// Position of this tier in [`Self::ORDER`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Quality requirement tiers, ordered from loosest to strictest.
///
/// Safety and security defaults in the synthesized configuration are
/// monotonic in this ordering: once a tier enables a flag, every higher
/// tier enables it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Prototype,
    Production,
    Enterprise,
    MissionCritical,
}

impl QualityTier {
    /// Tiers in ascending order.
    pub const ORDER: [QualityTier; 4] =
        [Self::Prototype, Self::Production, Self::Enterprise, Self::MissionCritical];

    /// Position of this tier in [`Self::ORDER`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Technology requirements extracted from a requirement document.
///
/// Entries are trimmed, lowercased, and deduplicated; `BTreeSet` keeps
/// iteration order deterministic so downstream output is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementProfile {
    /// Programming languages identified
    #[serde(default)]
    pub languages: BTreeSet<String>,
    /// Frameworks and libraries
    #[serde(default)]
    pub frameworks: BTreeSet<String>,
    /// Database technologies
    #[serde(default)]
    pub databases: BTreeSet<String>,
    /// Infrastructure and deployment targets
    #[serde(default)]
    pub infrastructure: BTreeSet<String>,
    /// Development and build tools
    #[serde(default)]
    pub tools: BTreeSet<String>,
    /// External APIs and integration markers
    #[serde(default)]
    pub integrations: BTreeSet<String>,
}

impl RequirementProfile {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add languages, normalizing each entry.
    pub fn with_languages<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.languages.extend(entries.into_iter().filter_map(|e| normalize_entry(e.as_ref())));
        self
    }

    /// Add frameworks, normalizing each entry.
    pub fn with_frameworks<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.frameworks.extend(entries.into_iter().filter_map(|e| normalize_entry(e.as_ref())));
        self
    }

    /// Add databases, normalizing each entry.
    pub fn with_databases<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.databases.extend(entries.into_iter().filter_map(|e| normalize_entry(e.as_ref())));
        self
    }

    /// Add infrastructure targets, normalizing each entry.
    pub fn with_infrastructure<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.infrastructure.extend(entries.into_iter().filter_map(|e| normalize_entry(e.as_ref())));
        self
    }

    /// Add development tools, normalizing each entry.
    pub fn with_tools<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tools.extend(entries.into_iter().filter_map(|e| normalize_entry(e.as_ref())));
        self
    }

    /// Add integration markers, normalizing each entry.
    pub fn with_integrations<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.integrations.extend(entries.into_iter().filter_map(|e| normalize_entry(e.as_ref())));
        self
    }

    /// Total distinct technologies across all six sets.
    pub fn total_identified(&self) -> usize {
        self.languages.len()
            + self.frameworks.len()
            + self.databases.len()
            + self.infrastructure.len()
            + self.tools.len()
            + self.integrations.len()
    }

    /// Distinct entries in the core stack sets (languages, frameworks,
    /// databases); used by the confidence heuristic.
    pub fn stack_identified(&self) -> usize {
        self.languages.len() + self.frameworks.len() + self.databases.len()
    }

    /// True when no technology was identified in any set.
    pub fn is_empty(&self) -> bool {
        self.total_identified() == 0
    }

    /// First language, framework, database, or infrastructure target, if any.
    pub fn first_language(&self) -> Option<&str> {
        self.languages.iter().next().map(String::as_str)
    }

    /// First detected framework, if any.
    pub fn first_framework(&self) -> Option<&str> {
        self.frameworks.iter().next().map(String::as_str)
    }

    /// First detected database, if any.
    pub fn first_database(&self) -> Option<&str> {
        self.databases.iter().next().map(String::as_str)
    }

    /// First detected infrastructure target, if any.
    pub fn first_infrastructure(&self) -> Option<&str> {
        self.infrastructure.iter().next().map(String::as_str)
    }
}

fn normalize_entry(entry: &str) -> Option<String> {
    let normalized = entry.trim().to_lowercase();
    if normalized.is_empty() { None } else { Some(normalized) }
}

/// Complexity assessment across three dimensions.
///
/// `overall` and `tier` are derived by [`ComplexityProfile::new`] and are
/// never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityProfile {
    /// Technical complexity score (1-10)
    pub technical: u8,
    /// Team/process complexity score (1-10)
    pub organizational: u8,
    /// Timeline pressure score (1-10)
    pub temporal: u8,
    /// Weighted overall score, rounded to one decimal
    pub overall: f64,
    /// Tier derived from the overall score
    pub tier: ComplexityTier,
}

impl ComplexityProfile {
    /// Build a profile from the three dimension scores.
    ///
    /// Inputs are clamped to [1, 10]; the overall score is the weighted
    /// average 0.5·technical + 0.3·organizational + 0.2·temporal rounded to
    /// one decimal, and the tier follows from the overall score.
    pub fn new(technical: u8, organizational: u8, temporal: u8) -> Self {
        let technical = technical.clamp(1, 10);
        let organizational = organizational.clamp(1, 10);
        let temporal = temporal.clamp(1, 10);

        let raw = f64::from(technical) * 0.5
            + f64::from(organizational) * 0.3
            + f64::from(temporal) * 0.2;
        let overall = (raw * 10.0).round() / 10.0;

        Self { technical, organizational, temporal, overall, tier: Self::tier_for(overall) }
    }

    /// Map an overall score to a tier.
    ///
    /// The two lowest ranges (<=1.0 and <=3.0) both resolve to Simple.
    pub fn tier_for(overall: f64) -> ComplexityTier {
        if overall <= 1.0 {
            ComplexityTier::Simple
        } else if overall <= 3.0 {
            ComplexityTier::Simple
        } else if overall <= 6.0 {
            ComplexityTier::Moderate
        } else if overall <= 8.5 {
            ComplexityTier::Complex
        } else {
            ComplexityTier::Enterprise
        }
    }
}

/// Constraints extracted from a requirement document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConstraints {
    /// Team size tier; Small when no cue is found
    pub team_size: TeamSize,
    /// Quality requirement tier; Production when no cue is found
    pub quality: QualityTier,
    /// Timeline in days, when the document states one
    pub timeline_days: Option<u32>,
    /// Compliance standards mentioned in the document
    #[serde(default)]
    pub compliance: BTreeSet<String>,
}

impl Default for ProjectConstraints {
    fn default() -> Self {
        Self {
            team_size: TeamSize::Small,
            quality: QualityTier::Production,
            timeline_days: None,
            compliance: BTreeSet::new(),
        }
    }
}

/// Complete analysis of one requirement document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    /// Original document text
    pub description: String,
    /// Identified project type
    pub project_type: ProjectType,
    /// Technology stack profile
    pub requirements: RequirementProfile,
    /// Complexity assessment
    pub complexity: ComplexityProfile,
    /// Team/quality/timeline constraints
    pub constraints: ProjectConstraints,
    /// Analysis confidence (0-1)
    pub confidence: f64,
}

/// A named multi-agent coordination strategy with applicability ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinationPattern {
    /// Pattern name
    pub name: String,
    /// Pattern description
    pub description: String,
    /// Ideal use cases
    pub best_for: Vec<String>,
    /// Agent roles this pattern deploys
    pub agents: Vec<String>,
    /// Coordination rule identifier
    pub coordination_rule: String,
    /// Quality assurance gates
    pub quality_gates: Vec<String>,
    /// Complexity tiers this pattern suits
    pub complexity_fit: Vec<ComplexityTier>,
    /// Team sizes this pattern suits
    pub team_size_fit: Vec<TeamSize>,
}

impl CoordinationPattern {
    /// Create a pattern with a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            best_for: Vec::new(),
            agents: Vec::new(),
            coordination_rule: String::new(),
            quality_gates: Vec::new(),
            complexity_fit: Vec::new(),
            team_size_fit: Vec::new(),
        }
    }

    /// Set the ideal use cases.
    pub fn with_best_for(mut self, best_for: Vec<String>) -> Self {
        self.best_for = best_for;
        self
    }

    /// Set the agent roles.
    pub fn with_agents(mut self, agents: Vec<String>) -> Self {
        self.agents = agents;
        self
    }

    /// Set the coordination rule identifier.
    pub fn with_coordination_rule(mut self, rule: impl Into<String>) -> Self {
        self.coordination_rule = rule.into();
        self
    }

    /// Set the quality gates.
    pub fn with_quality_gates(mut self, gates: Vec<String>) -> Self {
        self.quality_gates = gates;
        self
    }

    /// Set the applicable complexity tiers.
    pub fn with_complexity_fit(mut self, tiers: Vec<ComplexityTier>) -> Self {
        self.complexity_fit = tiers;
        self
    }

    /// Set the applicable team sizes.
    pub fn with_team_size_fit(mut self, sizes: Vec<TeamSize>) -> Self {
        self.team_size_fit = sizes;
        self
    }
}

/// Score assigned to one catalog pattern during selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternScore {
    /// Pattern name
    pub name: String,
    /// Fit score (0-1)
    pub score: f64,
}

/// Outcome of validating a synthesized configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether validation passed (no errors)
    pub is_valid: bool,
    /// Validation errors
    pub errors: Vec<String>,
    /// Validation warnings
    pub warnings: Vec<String>,
    /// Validation score (0-1)
    pub score: f64,
}

impl ValidationResult {
    /// Build a result from a fixed check count and the collected findings.
    ///
    /// Score = max(0, (total − errors − 0.5·warnings) / total).
    pub fn from_checks(total_checks: u32, errors: Vec<String>, warnings: Vec<String>) -> Self {
        let failed = errors.len() as f64;
        let warned = warnings.len() as f64;
        let score = ((f64::from(total_checks) - failed - warned * 0.5) / f64::from(total_checks))
            .max(0.0);

        Self { is_valid: errors.is_empty(), errors, warnings, score }
    }

    /// True when any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_profile_derives_overall_and_tier() {
        let profile = ComplexityProfile::new(4, 3, 1);
        assert_eq!(profile.overall, 3.1);
        assert_eq!(profile.tier, ComplexityTier::Moderate);
    }

    #[test]
    fn test_complexity_profile_clamps_inputs() {
        let profile = ComplexityProfile::new(0, 15, 5);
        assert_eq!(profile.technical, 1);
        assert_eq!(profile.organizational, 10);
        assert_eq!(profile.temporal, 5);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ComplexityProfile::tier_for(1.0), ComplexityTier::Simple);
        assert_eq!(ComplexityProfile::tier_for(3.0), ComplexityTier::Simple);
        assert_eq!(ComplexityProfile::tier_for(3.1), ComplexityTier::Moderate);
        assert_eq!(ComplexityProfile::tier_for(6.0), ComplexityTier::Moderate);
        assert_eq!(ComplexityProfile::tier_for(8.5), ComplexityTier::Complex);
        assert_eq!(ComplexityProfile::tier_for(8.6), ComplexityTier::Enterprise);
    }

    #[test]
    fn test_requirement_profile_normalizes_and_dedups() {
        let profile = RequirementProfile::new()
            .with_languages(["  Python ", "python", "RUST", ""])
            .with_databases(["PostgreSQL"]);

        assert_eq!(profile.languages.len(), 2);
        assert!(profile.languages.contains("python"));
        assert!(profile.languages.contains("rust"));
        assert!(profile.databases.contains("postgresql"));
        assert_eq!(profile.total_identified(), 3);
        assert_eq!(profile.stack_identified(), 3);
    }

    #[test]
    fn test_tier_order_indices() {
        assert_eq!(ComplexityTier::Simple.index(), 0);
        assert_eq!(ComplexityTier::Enterprise.index(), 3);
        assert_eq!(TeamSize::Solo.index(), 0);
        assert_eq!(QualityTier::MissionCritical.index(), 3);
        assert!(QualityTier::Production < QualityTier::Enterprise);
    }

    #[test]
    fn test_validation_score_formula() {
        let result = ValidationResult::from_checks(
            10,
            vec!["missing roles".to_string()],
            vec!["no tools".to_string(), "no components".to_string()],
        );
        assert!(!result.is_valid);
        assert!(result.has_errors());
        assert!(result.has_warnings());
        assert_eq!(result.score, (10.0 - 1.0 - 1.0) / 10.0);
    }

    #[test]
    fn test_validation_score_floors_at_zero() {
        let errors: Vec<String> = (0..20).map(|i| format!("error {i}")).collect();
        let result = ValidationResult::from_checks(10, errors, vec![]);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_pattern_builder() {
        let pattern = CoordinationPattern::new("pipeline", "Sequential processing with handoffs")
            .with_agents(vec!["collector".to_string(), "processor".to_string()])
            .with_coordination_rule("sequential_handoff")
            .with_quality_gates(vec!["stage_validation".to_string()])
            .with_complexity_fit(vec![ComplexityTier::Simple, ComplexityTier::Moderate])
            .with_team_size_fit(vec![TeamSize::Solo, TeamSize::Small]);

        assert_eq!(pattern.name, "pipeline");
        assert_eq!(pattern.agents.len(), 2);
        assert_eq!(pattern.quality_gates.len(), 1);
    }

    #[test]
    fn test_project_type_serde_names() {
        let json = serde_json::to_string(&ProjectType::WebBackend).unwrap();
        assert_eq!(json, "\"web_backend\"");
        let json = serde_json::to_string(&ProjectType::MlPipeline).unwrap();
        assert_eq!(json, "\"ml_pipeline\"");
    }
}
