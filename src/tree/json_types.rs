//! JSON report types

use std::path::PathBuf;

use serde::Serialize;

use crate::error::TraversalIssue;
use crate::stats::{GrandTotal, Summary};

use super::walker::WalkResult;

/// Serializable view of a recoverable failure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonIssue {
    pub path: PathBuf,
    pub message: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub warning: bool,
}

impl From<&TraversalIssue> for JsonIssue {
    fn from(issue: &TraversalIssue) -> Self {
        Self {
            path: issue.path.clone(),
            message: issue.error.to_string(),
            warning: issue.error.is_warning(),
        }
    }
}

/// Result for one root path.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRoot {
    pub path: PathBuf,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<JsonIssue>,
}

impl JsonRoot {
    pub fn new(path: impl Into<PathBuf>, result: &WalkResult) -> Self {
        Self {
            path: path.into(),
            summary: result.summary,
            issues: result.issues.iter().map(JsonIssue::from).collect(),
        }
    }
}

/// The whole `--json` document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JsonReport {
    pub roots: Vec<JsonRoot>,
    /// Present only when more than one root was analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<GrandTotal>,
}

impl JsonReport {
    pub fn push(&mut self, root: JsonRoot) {
        self.roots.push(root);
    }

    pub fn finish(&mut self, total: &GrandTotal) {
        self.total = total.should_report().then_some(*total);
    }
}
