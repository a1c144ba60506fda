use thiserror::Error;
use crate::core::normalizer::Normalized;
use crate::models::{Category, Lifestyle, MatchResult, NeighborhoodRecord, Priority, ScoringParams, Scores, UserPreferences};

/// Errors that can occur while scoring a neighborhood
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("non-finite {stage} score for neighborhood {neighborhood_id}")]
    NonFinite {
        neighborhood_id: String,
        stage: &'static str,
    },
}

/// Score one neighborhood against a request's preferences
///
/// Scoring formula:
/// overall = round(min(
///     sum(rating[c] * weight[c] * multiplier[c]) / 6   # weighted average
///     + sum(rating[priority category] * 0.1),          # priority bonus
///     100))
pub fn score_neighborhood<'a>(
    record: &'a NeighborhoodRecord,
    preferences: &UserPreferences,
    normalized: &Normalized,
    params: &ScoringParams,
) -> Result<MatchResult<'a>, ScoringError> {
    // Stage 1: weighted category scores
    let weighted = weighted_scores(record, normalized);

    // Stage 2: weighted average across categories
    let total = ensure_finite(weighted.iter().map(|(_, v)| v).sum(), record, "category")?;
    let base = total / Category::ALL.len() as f64;

    // Stage 3: bonus for selected priorities
    let bonus = priority_bonus(record, &preferences.priorities, params);

    let overall = ensure_finite(base + bonus, record, "overall")?.min(100.0);
    let category_scores = Scores::from_fn(|c| weighted[c].round().max(0.0) as u32);

    Ok(MatchResult {
        neighborhood: record,
        overall_score: overall.round().max(0.0) as u8,
        match_reasons: match_reasons(record, preferences, &category_scores, params),
        category_scores,
        confidence_score: confidence_score(preferences, params),
    })
}

fn ensure_finite(value: f64, record: &NeighborhoodRecord, stage: &'static str) -> Result<f64, ScoringError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::NonFinite {
            neighborhood_id: record.id.clone(),
            stage,
        })
    }
}

/// Rating times weight times lifestyle multiplier, per category
#[inline]
pub fn weighted_scores(record: &NeighborhoodRecord, normalized: &Normalized) -> Scores<f64> {
    Scores::from_fn(|c| f64::from(record.scores[c]) * normalized.factor(c))
}

/// Bonus points for priorities backed by a category rating
///
/// Catalog entries without a category ("Short commute" and friends)
/// contribute nothing.
#[inline]
pub fn priority_bonus(record: &NeighborhoodRecord, priorities: &[Priority], params: &ScoringParams) -> f64 {
    priorities
        .iter()
        .filter_map(|p| p.category())
        .map(|c| f64::from(record.scores[c]) * params.priority_bonus)
        .sum()
}

/// Up to `max_reasons` explanations, strongest categories first
pub fn match_reasons(
    record: &NeighborhoodRecord,
    preferences: &UserPreferences,
    category_scores: &Scores<u32>,
    params: &ScoringParams,
) -> Vec<String> {
    let mut reasons: Vec<String> = category_scores
        .iter()
        .filter(|(_, score)| **score >= params.excellent_threshold)
        .map(|(category, score)| format!("Excellent {} ({}% match)", category.label(), score))
        .collect();

    let rent = record.housing.average_rent;
    if f64::from(rent) <= preferences.budget * params.budget_tolerance {
        reasons.push(format!("Within your budget range (${}/month)", rent));
    }

    if let Some((category, reason)) = preferences.lifestyle.and_then(lifestyle_reason) {
        if u32::from(record.scores[category]) >= params.excellent_threshold {
            reasons.push(reason.to_string());
        }
    }

    reasons.truncate(params.max_reasons);
    reasons
}

/// Category a lifestyle cares most about and the reason shown when it is rated highly
///
/// Only young professionals and families get a lifestyle reason.
fn lifestyle_reason(lifestyle: Lifestyle) -> Option<(Category, &'static str)> {
    match lifestyle {
        Lifestyle::YoungProfessional => Some((
            Category::Nightlife,
            "Perfect for young professionals with vibrant social scene",
        )),
        Lifestyle::Family => Some((
            Category::FamilyFriendly,
            "Excellent family-friendly environment with good schools and parks",
        )),
        Lifestyle::Student | Lifestyle::Retiree | Lifestyle::RemoteWorker => None,
    }
}

/// Confidence in a recommendation, 0 to `confidence_cap`
///
/// Decisive answers (far from the neutral 5) raise confidence.
pub fn confidence_score(preferences: &UserPreferences, params: &ScoringParams) -> u8 {
    let importance = preferences.importance();
    let decisiveness = importance.iter().map(|v| (v - 5.0).abs()).sum::<f64>() / importance.len() as f64;

    let confidence = params.confidence_base
        + decisiveness * params.decisiveness_factor
        + params.data_quality_bonus;

    confidence.round().min(params.confidence_cap).clamp(0.0, f64::from(u8::MAX)) as u8
}
