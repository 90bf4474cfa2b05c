//! Agent role manifests
//!
//! Expands the selected pattern's role identifiers into full manifests:
//! a specialization keyed by project type and detected stack, a capability
//! list, a tool list, and intra-team dependencies restricted to roles the
//! pattern actually deploys.

use swarm_core::{AgentRole, CoordinationPattern, ProjectAnalysis, ProjectType, RequirementProfile};

/// Build role manifests for every agent in the pattern.
pub fn build_roles(pattern: &CoordinationPattern, analysis: &ProjectAnalysis) -> Vec<AgentRole> {
    pattern
        .agents
        .iter()
        .map(|role| AgentRole {
            role: role.clone(),
            specialization: specialization(role, analysis.project_type, &analysis.requirements),
            capabilities: capabilities(role),
            tools: role_tools(role, &analysis.requirements),
            depends_on: dependencies(role, &pattern.agents),
        })
        .collect()
}

fn specialization(
    role: &str,
    project_type: ProjectType,
    requirements: &RequirementProfile,
) -> String {
    match (role, project_type) {
        ("architect", ProjectType::WebBackend) => "api_architecture".to_string(),
        ("architect", ProjectType::WebFrontend) => "frontend_architecture".to_string(),
        ("architect", ProjectType::Microservices) => "microservices_architecture".to_string(),
        ("architect", ProjectType::DataProcessing) => "data_architecture".to_string(),
        ("architect", ProjectType::MlPipeline) => "ml_architecture".to_string(),
        ("backend_dev", ProjectType::WebBackend) => {
            format!("{}_backend", requirements.first_language().unwrap_or("python"))
        }
        ("backend_dev", ProjectType::ApiRest) => "rest_api_development".to_string(),
        ("backend_dev", ProjectType::Microservices) => "microservices_development".to_string(),
        ("frontend_dev", ProjectType::WebFrontend) => {
            format!("{}_frontend", requirements.first_framework().unwrap_or("react"))
        }
        ("frontend_dev", ProjectType::WebFullstack) => "fullstack_frontend".to_string(),
        ("database_designer", ProjectType::WebBackend) => {
            format!("{}_design", requirements.first_database().unwrap_or("postgresql"))
        }
        ("database_designer", ProjectType::DataProcessing) => "data_modeling".to_string(),
        ("tester", ProjectType::WebBackend) => "api_testing".to_string(),
        ("tester", ProjectType::WebFrontend) => "ui_testing".to_string(),
        ("tester", ProjectType::DataProcessing) => "data_validation_testing".to_string(),
        ("devops", ProjectType::WebBackend) => {
            format!("{}_deployment", requirements.first_infrastructure().unwrap_or("docker"))
        }
        ("devops", ProjectType::Microservices) => "container_orchestration".to_string(),
        _ => format!("{role}_general"),
    }
}

fn capabilities(role: &str) -> Vec<String> {
    let list: &[&str] = match role {
        "architect" => &[
            "system_design",
            "architecture_planning",
            "technology_selection",
            "scalability_analysis",
            "performance_optimization",
        ],
        "backend_dev" => &[
            "api_development",
            "database_integration",
            "business_logic",
            "error_handling",
            "performance_optimization",
        ],
        "frontend_dev" => &[
            "ui_development",
            "user_experience",
            "responsive_design",
            "state_management",
            "component_architecture",
        ],
        "database_designer" => &[
            "schema_design",
            "query_optimization",
            "data_modeling",
            "indexing_strategy",
            "migration_planning",
        ],
        "tester" => &[
            "test_planning",
            "automated_testing",
            "manual_testing",
            "bug_reporting",
            "quality_assurance",
        ],
        "devops" => &[
            "deployment_automation",
            "infrastructure_management",
            "monitoring_setup",
            "ci_cd_pipeline",
            "security_configuration",
        ],
        "security" => &[
            "security_analysis",
            "vulnerability_assessment",
            "secure_coding",
            "compliance_checking",
            "threat_modeling",
        ],
        _ => &["general_development"],
    };

    list.iter().map(|capability| (*capability).to_string()).collect()
}

fn role_tools(role: &str, requirements: &RequirementProfile) -> Vec<String> {
    let base: &[&str] = match role {
        "architect" => &["system_design_tool", "architecture_validator", "tech_stack_analyzer"],
        "backend_dev" => &["code_generator", "api_tester", "database_connector", "error_handler"],
        "frontend_dev" => &["ui_generator", "component_builder", "style_manager", "asset_optimizer"],
        "database_designer" => {
            &["schema_generator", "query_optimizer", "migration_tool", "data_validator"]
        }
        "tester" => &["test_generator", "test_runner", "bug_tracker", "coverage_analyzer"],
        "devops" => &["deployment_tool", "container_manager", "monitoring_setup", "ci_cd_manager"],
        "security" => &["security_scanner", "vulnerability_checker", "compliance_validator"],
        _ => &["general_tool"],
    };

    // collected through a sorted set so the manifest order is reproducible
    let mut tools: std::collections::BTreeSet<String> =
        base.iter().map(|tool| (*tool).to_string()).collect();

    for language in &requirements.languages {
        match language.as_str() {
            "python" => {
                tools.insert("python_linter".to_string());
                tools.insert("pytest_runner".to_string());
            }
            "javascript" => {
                tools.insert("eslint".to_string());
                tools.insert("jest_runner".to_string());
            }
            "java" => {
                tools.insert("maven_tool".to_string());
                tools.insert("junit_runner".to_string());
            }
            _ => {}
        }
    }

    tools.into_iter().collect()
}

fn dependencies(role: &str, all_agents: &[String]) -> Vec<String> {
    let wanted: &[&str] = match role {
        "backend_dev" => &["architect", "database_designer"],
        "frontend_dev" => &["architect", "backend_dev"],
        "tester" => &["backend_dev", "frontend_dev"],
        "devops" => &["backend_dev", "frontend_dev", "tester"],
        "security" => &["architect"],
        _ => &[],
    };

    wanted
        .iter()
        .filter(|dependency| all_agents.iter().any(|agent| agent == *dependency))
        .map(|dependency| (*dependency).to_string())
        .collect()
}
