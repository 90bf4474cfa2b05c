//! Project type classification
//!
//! A priority-ordered keyword chain: the first rule whose cues match wins,
//! so ties are impossible by construction. Frontend and mobile rules carry
//! an extra guard on the extracted profile (a UI framework, or a
//! cross-platform stack) before they may claim the document.

use crate::extractor::{any_token, normalize};
use swarm_core::{ProjectType, RequirementProfile};

const FRONTEND_CUES: &[&str] = &["frontend", "ui", "user interface", "web app", "spa"];
const BACKEND_CUES: &[&str] = &["backend", "api", "server", "database", "rest", "graphql"];
const FULLSTACK_CUES: &[&str] = &["full-stack", "fullstack", "complete application", "end-to-end"];
const MOBILE_CUES: &[&str] = &["mobile", "ios", "android", "app store", "mobile app"];
const MICROSERVICE_CUES: &[&str] = &["microservices", "micro-services"];
const DATA_CUES: &[&str] = &["data processing", "etl", "pipeline", "batch processing"];
const ANALYTICS_CUES: &[&str] = &["analytics", "reporting", "dashboard", "metrics", "insights"];
const ML_CUES: &[&str] = &["machine learning", "ml", "ai", "neural network", "deep learning"];
const AUTOMATION_CUES: &[&str] = &["automation", "script", "tool", "utility", "bot"];
const RESEARCH_CUES: &[&str] = &["research", "researcher", "experiment", "study", "peer review"];
const MONITORING_CUES: &[&str] = &["monitoring", "observability", "alerting"];

const UI_FRAMEWORKS: &[&str] = &["react", "vue", "angular"];

/// Classify the primary project type from a document and its profile.
pub fn classify_type(text: &str, profile: &RequirementProfile) -> ProjectType {
    classify_normalized(&normalize(text), profile)
}

pub(crate) fn classify_normalized(text: &str, profile: &RequirementProfile) -> ProjectType {
    if any_token(text, FRONTEND_CUES)
        && UI_FRAMEWORKS.iter().any(|fw| profile.frameworks.contains(*fw))
    {
        return ProjectType::WebFrontend;
    }

    if any_token(text, BACKEND_CUES) {
        return ProjectType::WebBackend;
    }

    if any_token(text, FULLSTACK_CUES) {
        return ProjectType::WebFullstack;
    }

    if any_token(text, MOBILE_CUES) {
        if profile.frameworks.contains("flutter") || profile.languages.contains("dart") {
            return ProjectType::MobileCrossplatform;
        }
        return ProjectType::MobileNative;
    }

    if any_token(text, MICROSERVICE_CUES) {
        return ProjectType::Microservices;
    }

    if any_token(text, DATA_CUES) {
        return ProjectType::DataProcessing;
    }

    if any_token(text, ANALYTICS_CUES) {
        return ProjectType::DataAnalytics;
    }

    if any_token(text, ML_CUES) {
        return ProjectType::MlPipeline;
    }

    if any_token(text, AUTOMATION_CUES) {
        return ProjectType::Automation;
    }

    if any_token(text, RESEARCH_CUES) {
        return ProjectType::Research;
    }

    if any_token(text, MONITORING_CUES) {
        return ProjectType::Monitoring;
    }

    ProjectType::WebBackend
}
