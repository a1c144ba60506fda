// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Category, Scores, Lifestyle, Priority, UserPreferences, NeighborhoodRecord, Demographics, Housing, MatchResult, ScoringParams};
pub use requests::{MatchingRequest, PreferencesPayload, PreferencesError, SliderInput, BrowseQuery, SortBy};
pub use responses::{MatchingResponse, MatchingMetadata, HealthResponse, ErrorResponse};
