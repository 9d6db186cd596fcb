//! Shared API types between the portfolio server and the Yew frontend.

use serde::{Deserialize, Serialize};

/// A showcased portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier used in vote requests.
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Tech stack labels shown on the project card.
    pub tech: Vec<String>,
    /// Current vote count (server-authoritative).
    pub votes: u32,
    /// Link to a live demo, if one is hosted.
    pub demo_url: Option<String>,
}

impl Project {
    /// Create a project with zero votes.
    pub fn new(id: &str, title: &str, summary: &str, tech: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            votes: 0,
            demo_url: None,
        }
    }
}

/// Body for POST /api/vote. `count` is the number of accumulated
/// clicks being flushed in one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub id: String,
    pub count: u32,
}

/// Error payload returned by API routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: &str) -> Self {
        Self {
            message: message.into(),
            code: Some(code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_serialization() {
        let project = Project::new(
            "receipt-scanner",
            "Receipt Scanner",
            "OCR receipts into itemized expenses",
            &["ocr", "vision"],
        );

        let json = serde_json::to_string(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, project);
        assert_eq!(parsed.votes, 0);
    }

    #[test]
    fn test_vote_request_shape() {
        let req = VoteRequest {
            id: "x".to_string(),
            count: 5,
        };

        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"id":"x","count":5}"#);
    }

    #[test]
    fn test_api_error_omits_missing_code() {
        let err = ApiError::new("boom");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("code"));

        let err = ApiError::with_code("missing", "NOT_FOUND");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("NOT_FOUND"));
    }
}
