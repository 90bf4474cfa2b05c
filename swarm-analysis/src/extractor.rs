//! Text normalization and requirement extraction
//!
//! Turns a requirement document into a [`RequirementProfile`] by matching the
//! taxonomy trigger tables against the normalized text. Total and infallible:
//! a document with no recognizable technology yields an empty profile.

use crate::taxonomy;
use swarm_core::RequirementProfile;

/// Normalize a document for matching: lowercase, collapse whitespace, and
/// drop short generic stop-words.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let words = lowered
        .split_whitespace()
        .filter(|word| !taxonomy::STOP_WORDS.contains(word) || word.len() > 3);

    words.collect::<Vec<_>>().join(" ")
}

/// Test whether `token` occurs in `text` as a standalone substring.
///
/// A candidate occurrence is rejected when the character immediately before
/// or after it is alphanumeric, so `java` does not match inside
/// `javascript` and `ml` does not match inside `html`.
pub(crate) fn contains_token(text: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(pos) = text[start..].find(token) {
        let begin = start + pos;
        let end = begin + token.len();

        let clear_before = begin == 0 || !bytes[begin - 1].is_ascii_alphanumeric();
        let clear_after = end == text.len() || !bytes[end].is_ascii_alphanumeric();
        if clear_before && clear_after {
            return true;
        }

        start = begin + 1;
        while start < text.len() && !text.is_char_boundary(start) {
            start += 1;
        }
    }

    false
}

/// True when any trigger in the list matches the text.
pub(crate) fn any_token(text: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| contains_token(text, token))
}

/// Extract a requirement profile from a document.
pub fn extract(text: &str) -> RequirementProfile {
    extract_normalized(&normalize(text))
}

/// Extract from text that has already been normalized.
pub(crate) fn extract_normalized(text: &str) -> RequirementProfile {
    let mut profile = RequirementProfile::new();

    for (label, triggers) in taxonomy::LANGUAGES {
        if any_token(text, triggers) {
            profile.languages.insert((*label).to_string());
        }
    }

    for (label, triggers) in taxonomy::FRAMEWORKS {
        if any_token(text, triggers) {
            profile.frameworks.insert((*label).to_string());
        }
    }

    for (label, triggers) in taxonomy::DATABASES {
        if any_token(text, triggers) {
            profile.databases.insert((*label).to_string());
        }
    }

    for (label, triggers) in taxonomy::INFRASTRUCTURE {
        if any_token(text, triggers) {
            profile.infrastructure.insert((*label).to_string());
        }
    }

    for marker in taxonomy::INTEGRATION_MARKERS {
        if contains_token(text, marker) {
            profile.integrations.insert((*marker).to_string());
        }
    }

    for marker in taxonomy::TOOL_MARKERS {
        if contains_token(text, marker) {
            profile.tools.insert((*marker).to_string());
        }
    }

    profile
}
