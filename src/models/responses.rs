use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Response for the matching endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MatchingResponse<'a> {
    pub matches: Vec<MatchResult<'a>>,
    pub metadata: MatchingMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingMetadata {
    pub total_neighborhoods: usize,
    pub algorithm_version: String,
    /// Milliseconds spent scoring and ranking
    pub processing_time: f64,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub neighborhoods: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl ToString) -> Self {
        Self {
            error: error.into(),
            details: Some(details.to_string()),
        }
    }
}
