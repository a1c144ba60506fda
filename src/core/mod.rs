// Core algorithm exports
pub mod browse;
pub mod matcher;
pub mod normalizer;
pub mod scoring;

pub use browse::browse;
pub use matcher::{Matcher, RankedMatches};
pub use normalizer::{normalize, affordability_weight, lifestyle_multipliers, Normalized};
pub use scoring::{score_neighborhood, confidence_score, ScoringError};
