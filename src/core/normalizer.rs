use crate::models::{Category, Lifestyle, ScoringParams, Scores, UserPreferences};

/// Per-category weights and lifestyle multipliers for one request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    /// Importance of each category, 0-1
    pub weights: Scores<f64>,
    pub multipliers: Scores<f64>,
}

impl Normalized {
    /// Combined factor applied to a neighborhood's rating in `category`
    #[inline]
    pub fn factor(&self, category: Category) -> f64 {
        self.weights[category] * self.multipliers[category]
    }
}

/// Turn questionnaire answers into scoring weights
///
/// Slider answers map linearly onto 0.1-1.0. Affordability has no slider
/// and is derived from the budget instead, see [`affordability_weight`].
pub fn normalize(preferences: &UserPreferences, params: &ScoringParams) -> Normalized {
    let weights = Scores {
        walkability: preferences.walkability / 10.0,
        safety: preferences.safety / 10.0,
        affordability: affordability_weight(preferences.budget, params),
        nightlife: preferences.nightlife / 10.0,
        family_friendly: preferences.family_friendly / 10.0,
        transit: preferences.public_transit / 10.0,
    };

    Normalized {
        weights,
        multipliers: lifestyle_multipliers(preferences.lifestyle),
    }
}

/// Higher budget means affordability matters less, never below the floor
#[inline]
pub fn affordability_weight(budget: f64, params: &ScoringParams) -> f64 {
    let normalized_budget = (budget / params.budget_ceiling).min(1.0);
    (1.0 - normalized_budget * params.affordability_slope).max(params.affordability_floor)
}

/// Multipliers for a lifestyle; 1.0 everywhere when unset
pub fn lifestyle_multipliers(lifestyle: Option<Lifestyle>) -> Scores<f64> {
    let mut multipliers = Scores::splat(1.0);
    if let Some(lifestyle) = lifestyle {
        for &(category, factor) in adjustments(lifestyle) {
            multipliers[category] = factor;
        }
    }
    multipliers
}

fn adjustments(lifestyle: Lifestyle) -> &'static [(Category, f64)] {
    match lifestyle {
        Lifestyle::YoungProfessional => &[
            (Category::Nightlife, 1.2),
            (Category::Transit, 1.1),
            (Category::FamilyFriendly, 0.8),
        ],
        Lifestyle::Family => &[
            (Category::FamilyFriendly, 1.3),
            (Category::Safety, 1.2),
            (Category::Nightlife, 0.7),
        ],
        Lifestyle::Student => &[
            (Category::Affordability, 1.4),
            (Category::Transit, 1.2),
            (Category::Nightlife, 1.1),
        ],
        Lifestyle::Retiree => &[
            (Category::Safety, 1.3),
            (Category::Walkability, 1.1),
            (Category::Nightlife, 0.6),
        ],
        Lifestyle::RemoteWorker => &[
            (Category::Affordability, 1.1),
            (Category::Walkability, 1.2),
        ],
    }
}
