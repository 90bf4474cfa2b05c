//! The end-to-end coordination pipeline
//!
//! `Coordinator` chains the four stages (analyze, select, synthesize,
//! validate) over immutable value objects. The only fatal errors are static
//! configuration bugs (an empty pattern catalog, an incomplete knowledge
//! table); poor input degrades to a low-confidence result instead.

use swarm_analysis::ProjectAnalyzer;
use swarm_config::{ConfigSynthesizer, KnowledgeBase, validate};
use swarm_core::{
    ConfigurationProfile, CoordinationPattern, ProjectAnalysis, Result, ValidationResult,
};
use swarm_pattern::{PatternCatalog, PatternSelection, PatternSelector};
use tracing::info;

/// A full pipeline run: the analysis, the winning pattern, the synthesized
/// configuration, and its validation.
#[derive(Debug, Clone)]
pub struct CoordinationPlan {
    /// Document analysis
    pub analysis: ProjectAnalysis,
    /// Selected pattern and score
    pub selection: PatternSelection,
    /// Synthesized runtime configuration
    pub config: ConfigurationProfile,
    /// Validation outcome for the configuration
    pub validation: ValidationResult,
}

/// Facade over the analysis-to-configuration pipeline.
#[derive(Debug, Clone, Default)]
pub struct Coordinator {
    analyzer: ProjectAnalyzer,
    selector: PatternSelector,
    synthesizer: ConfigSynthesizer,
    knowledge: KnowledgeBase,
}

impl Coordinator {
    /// Create a coordinator with the built-in catalog and knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom pattern catalog.
    pub fn with_catalog(mut self, catalog: PatternCatalog) -> Self {
        self.selector = PatternSelector::new(catalog);
        self
    }

    /// Use a custom knowledge base.
    pub fn with_knowledge(mut self, knowledge: KnowledgeBase) -> Self {
        self.knowledge = knowledge;
        self
    }

    /// Analyze a requirement document.
    pub async fn analyze(&self, description: &str) -> ProjectAnalysis {
        self.analyzer.analyze(description).await
    }

    /// Select the best coordination pattern for an analysis.
    pub fn select(&self, analysis: &ProjectAnalysis) -> Result<PatternSelection> {
        self.selector.select(analysis)
    }

    /// Synthesize the runtime configuration for an analysis and pattern.
    pub fn synthesize(
        &self,
        analysis: &ProjectAnalysis,
        pattern: &CoordinationPattern,
    ) -> ConfigurationProfile {
        self.synthesizer.synthesize(analysis, pattern, &self.knowledge)
    }

    /// Validate a synthesized configuration.
    pub fn validate(&self, config: &ConfigurationProfile) -> ValidationResult {
        validate(config)
    }

    /// Run the whole pipeline over a requirement document.
    ///
    /// Fails only on static-table preconditions: an empty catalog or an
    /// incomplete knowledge table. Validation findings are returned in the
    /// plan, not raised as errors.
    pub async fn run(&self, description: &str) -> Result<CoordinationPlan> {
        self.knowledge.validate()?;

        let analysis = self.analyze(description).await;
        let selection = self.select(&analysis)?;
        let config = self.synthesize(&analysis, &selection.pattern);
        let validation = self.validate(&config);

        info!(
            pattern = %selection.name(),
            score = selection.score,
            valid = validation.is_valid,
            validation_score = validation.score,
            "coordination plan ready"
        );

        Ok(CoordinationPlan { analysis, selection, config, validation })
    }
}
