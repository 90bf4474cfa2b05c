//! Static trigger tables for requirement extraction
//!
//! Each table maps a category label to the keywords that signal it. Matching
//! is standalone-substring containment (see [`crate::extractor`]): a trigger
//! only matches when it is not embedded in a longer alphanumeric token, which
//! guards overlapping triggers such as `java` inside `javascript` or `ml`
//! inside `html`. Table authors must keep trigger lists distinct enough that
//! this guard suffices.

/// Version of the trigger tables; bump when any table changes.
pub const TAXONOMY_VERSION: u32 = 1;

/// Programming language triggers.
pub const LANGUAGES: &[(&str, &[&str])] = &[
    ("python", &["python", "py", "django", "flask", "fastapi", "pandas", "numpy"]),
    ("javascript", &["javascript", "js", "node", "nodejs", "npm", "yarn"]),
    ("typescript", &["typescript", "ts", "angular", "nest"]),
    ("java", &["java", "spring", "maven", "gradle", "hibernate"]),
    ("go", &["go", "golang", "gin", "echo", "gorilla"]),
    ("rust", &["rust", "cargo", "actix", "tokio", "serde"]),
    ("php", &["php", "laravel", "symfony", "composer"]),
    ("ruby", &["ruby", "rails", "gem", "bundler"]),
    ("csharp", &["c#", "csharp", ".net", "dotnet", "asp.net"]),
    ("swift", &["swift", "ios", "xcode"]),
    ("kotlin", &["kotlin", "android"]),
    ("dart", &["dart", "flutter"]),
];

/// Framework and library triggers.
pub const FRAMEWORKS: &[(&str, &[&str])] = &[
    ("react", &["react", "reactjs", "jsx", "next.js", "nextjs"]),
    ("vue", &["vue", "vuejs", "nuxt", "nuxtjs"]),
    ("angular", &["angular", "angularjs"]),
    ("django", &["django", "drf", "django-rest-framework"]),
    ("flask", &["flask", "werkzeug"]),
    ("fastapi", &["fastapi", "starlette"]),
    ("express", &["express", "expressjs"]),
    ("spring", &["spring", "spring-boot", "spring-mvc"]),
    ("laravel", &["laravel", "eloquent"]),
    ("rails", &["rails", "ruby-on-rails"]),
];

/// Database triggers.
pub const DATABASES: &[(&str, &[&str])] = &[
    ("postgresql", &["postgresql", "postgres", "psql"]),
    ("mysql", &["mysql", "mariadb"]),
    ("mongodb", &["mongodb", "mongo", "mongoose"]),
    ("redis", &["redis", "elasticache"]),
    ("elasticsearch", &["elasticsearch", "elastic", "opensearch"]),
    ("sqlite", &["sqlite", "sqlite3"]),
    ("cassandra", &["cassandra", "scylla"]),
    ("dynamodb", &["dynamodb", "dynamo"]),
];

/// Infrastructure and deployment triggers.
pub const INFRASTRUCTURE: &[(&str, &[&str])] = &[
    ("aws", &["aws", "amazon", "ec2", "s3", "lambda", "cloudformation"]),
    ("gcp", &["gcp", "google-cloud", "gke", "cloud-run"]),
    ("azure", &["azure", "microsoft-cloud"]),
    ("docker", &["docker", "dockerfile", "container"]),
    ("kubernetes", &["kubernetes", "k8s", "kubectl", "helm"]),
    ("terraform", &["terraform", "tf"]),
    ("ansible", &["ansible", "playbook"]),
];

/// External API and integration markers; each matched marker lands in the
/// profile's integrations set verbatim.
pub const INTEGRATION_MARKERS: &[&str] =
    &["api", "rest", "graphql", "webhook", "integration", "third-party"];

/// Development tool markers; each matched marker lands in the profile's
/// tools set verbatim.
pub const TOOL_MARKERS: &[&str] =
    &["git", "github", "gitlab", "jenkins", "ci/cd", "testing", "pytest", "jest"];

/// Keywords that raise the technical complexity score.
pub const COMPLEXITY_INDICATORS: &[&str] = &[
    "microservices",
    "distributed",
    "scalable",
    "high-performance",
    "real-time",
    "machine learning",
    "ai",
    "blockchain",
    "websocket",
    "streaming",
    "big data",
    "analytics",
    "enterprise",
    "multi-tenant",
];

/// Generic words dropped during normalization. Words longer than three
/// characters survive even when listed here.
pub const STOP_WORDS: &[&str] =
    &["the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_labels_are_distinct() {
        let mut labels: Vec<&str> = LANGUAGES.iter().map(|(label, _)| *label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), LANGUAGES.len());
    }

    #[test]
    fn test_no_empty_trigger_lists() {
        for (label, triggers) in
            LANGUAGES.iter().chain(FRAMEWORKS).chain(DATABASES).chain(INFRASTRUCTURE)
        {
            assert!(!triggers.is_empty(), "category {label} has no triggers");
            assert!(triggers.iter().all(|t| !t.is_empty()), "category {label} has an empty trigger");
        }
    }

    #[test]
    fn test_markers_are_lowercase() {
        for marker in INTEGRATION_MARKERS.iter().chain(TOOL_MARKERS).chain(COMPLEXITY_INDICATORS) {
            assert_eq!(*marker, marker.to_lowercase());
        }
    }
}
