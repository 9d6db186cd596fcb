//! Application state for the portfolio server.

use std::sync::Arc;
use tokio::sync::RwLock;
use web_types::Project;

/// Shared application state.
///
/// Vote counts live in memory for the lifetime of the process; the project
/// list is the single authoritative copy the frontend reconciles against.
#[derive(Clone)]
pub struct AppState {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl AppState {
    /// Create app state with the given project list.
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: Arc::new(RwLock::new(projects)),
        }
    }

    /// Current snapshot of the full project list.
    pub async fn snapshot(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    /// Add `count` votes to the given project and return the refreshed
    /// list, or `None` if the id is unknown.
    pub async fn apply_votes(&self, id: &str, count: u32) -> Option<Vec<Project>> {
        let mut projects = self.projects.write().await;
        let project = projects.iter_mut().find(|p| p.id == id)?;
        project.votes = project.votes.saturating_add(count);
        Some(projects.clone())
    }
}

/// The showcased sub-projects.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project::new(
            "receipt-scanner",
            "Receipt Scanner",
            "Snap a photo of a receipt and get an itemized expense breakdown.",
            &["ocr", "vision"],
        ),
        Project::new(
            "reading-practice",
            "Reading Practice",
            "Guided reading-aloud practice with word-level feedback.",
            &["speech", "education"],
        ),
        Project::new(
            "dictate",
            "Voice Dictation",
            "Live microphone dictation with streaming transcription.",
            &["speech", "streaming"],
        ),
        Project::new(
            "confidence-tracker",
            "AI Confidence Tracker",
            "Track how model confidence shifts across a conversation.",
            &["llm", "analytics"],
        ),
        Project::new(
            "voice-clips",
            "Voice Clips",
            "Offline-first voice-clip recorder that syncs when back online.",
            &["audio", "offline-first"],
        ),
    ]
}
