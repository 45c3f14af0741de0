//! Player configuration.

/// Configuration for the conversation flow.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Languages offered during setup; viewer input must match one exactly.
    pub languages: Vec<String>,
    /// Label on the advance control shown with every text line.
    pub advance_label: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            languages: vec!["English".to_owned()],
            advance_label: "Next".to_owned(),
        }
    }
}
