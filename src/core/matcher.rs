use crate::models::{UserPreferences, NeighborhoodRecord, MatchResult, ScoringParams};
use crate::core::{
    normalizer::normalize,
    scoring::{score_neighborhood, ScoringError},
};

/// Result of ranking a dataset
#[derive(Debug)]
pub struct RankedMatches<'a> {
    pub matches: Vec<MatchResult<'a>>,
    pub total_neighborhoods: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Normalize preferences into weights and lifestyle multipliers (once per request)
/// 2. Score every neighborhood independently
/// 3. Rank by overall score and apply the result cap
#[derive(Debug, Clone)]
pub struct Matcher {
    params: ScoringParams,
}

impl Matcher {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self {
            params: ScoringParams::default(),
        }
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Score a single neighborhood
    pub fn score<'a>(
        &self,
        preferences: &UserPreferences,
        neighborhood: &'a NeighborhoodRecord,
    ) -> Result<MatchResult<'a>, ScoringError> {
        let normalized = normalize(preferences, &self.params);
        score_neighborhood(neighborhood, preferences, &normalized, &self.params)
    }

    /// Rank neighborhoods for a user's preferences
    ///
    /// # Arguments
    /// * `preferences` - Validated questionnaire answers
    /// * `neighborhoods` - The read-only dataset
    /// * `limit` - Maximum number of matches to return, `None` for all
    ///
    /// # Returns
    /// Matches sorted by overall score (descending). Ties keep dataset
    /// order. Any scoring failure fails the whole ranking.
    pub fn rank<'a>(
        &self,
        preferences: &UserPreferences,
        neighborhoods: &'a [NeighborhoodRecord],
        limit: Option<usize>,
    ) -> Result<RankedMatches<'a>, ScoringError> {
        let normalized = normalize(preferences, &self.params);

        let mut matches = neighborhoods
            .iter()
            .map(|record| score_neighborhood(record, preferences, &normalized, &self.params))
            .collect::<Result<Vec<_>, _>>()?;

        // sort_by is stable, so equal scores stay in dataset order
        matches.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));

        if let Some(limit) = limit {
            matches.truncate(limit);
        }

        Ok(RankedMatches {
            matches,
            total_neighborhoods: neighborhoods.len(),
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_params()
    }
}
