//! Static site content: the project list and the social directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both documents are JSON compiled into the binary and parsed once on first
//! use. Bad content never blocks the page: it is logged and replaced by an
//! empty list or directory.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub mod project;
pub mod social;

use std::collections::HashSet;
use std::sync::LazyLock;

pub use project::{Project, ProjectIcon, ProjectStatus};
pub use social::SocialDirectory;

const PROJECTS_JSON: &str = include_str!("projects.json");
const SOCIAL_JSON: &str = include_str!("social.json");

/// Content that failed to load or violates the dataset invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("content parse failed: {0}")]
    Parse(String),
    #[error("duplicate project id: {0}")]
    DuplicateProjectId(String),
    #[error("project {id:?} has an empty {field}")]
    EmptyField { id: String, field: &'static str },
}

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    parse_projects(PROJECTS_JSON).unwrap_or_else(|e| {
        leptos::logging::warn!("project list rejected: {e}");
        Vec::new()
    })
});

static SOCIAL: LazyLock<SocialDirectory> = LazyLock::new(|| {
    parse_social(SOCIAL_JSON).unwrap_or_else(|e| {
        leptos::logging::warn!("social directory rejected: {e}");
        SocialDirectory::default()
    })
});

/// The project list, in display order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn social_directory() -> &'static SocialDirectory {
    &SOCIAL
}

/// Parse and validate a project list document.
///
/// # Errors
///
/// `Parse` for malformed JSON, otherwise whatever [`validate_projects`] rejects.
pub fn parse_projects(raw: &str) -> Result<Vec<Project>, ContentError> {
    let projects: Vec<Project> = serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))?;
    validate_projects(&projects)?;
    Ok(projects)
}

/// Parse the social directory document.
///
/// # Errors
///
/// `Parse` for malformed JSON or missing required fields.
pub fn parse_social(raw: &str) -> Result<SocialDirectory, ContentError> {
    serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))
}

/// Ids must be unique; `id`, `title` and `url` must be non-empty.
///
/// # Errors
///
/// The first violation found, in list order.
pub fn validate_projects(projects: &[Project]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for project in projects {
        for (field, value) in [("id", &project.id), ("title", &project.title), ("url", &project.url)] {
            if value.trim().is_empty() {
                return Err(ContentError::EmptyField { id: project.id.clone(), field });
            }
        }
        if !seen.insert(project.id.as_str()) {
            return Err(ContentError::DuplicateProjectId(project.id.clone()));
        }
    }
    Ok(())
}
