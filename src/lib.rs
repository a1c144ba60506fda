//! NeighborFit - neighborhood matching service
//!
//! Scores a fixed set of neighborhoods against a short preference
//! questionnaire and explains each recommendation. Scoring is a pure
//! function of the request's preferences and a read-only dataset.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, RankedMatches, normalize, browse};
pub use crate::models::{UserPreferences, NeighborhoodRecord, MatchResult, ScoringParams, MatchingRequest, MatchingResponse};
pub use crate::services::NeighborhoodDataset;
