use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};
use crate::models::domain::{Lifestyle, Priority, UserPreferences};

/// Questionnaire defaults for sliders the client left out
pub const DEFAULT_SAFETY: f64 = 8.0;
pub const DEFAULT_NIGHTLIFE: f64 = 5.0;
pub const DEFAULT_FAMILY_FRIENDLY: f64 = 5.0;
pub const DEFAULT_PUBLIC_TRANSIT: f64 = 6.0;

const SLIDER_MIN: f64 = 1.0;
const SLIDER_MAX: f64 = 10.0;

/// Reasons a preference payload is rejected
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("preferences are required")]
    MissingPreferences,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("budget must be a positive number, got {0}")]
    InvalidBudget(f64),

    #[error("`{field}` must be a finite number, got {value}")]
    InvalidSlider { field: &'static str, value: f64 },

    #[error("unknown lifestyle `{0}`")]
    UnknownLifestyle(String),

    #[error("unknown priority `{0}`")]
    UnknownPriority(String),

    #[error("{0}")]
    Invalid(#[from] ValidationErrors),
}

/// Slider value as the questionnaire sends it: `[7]` or a bare `7`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliderInput {
    Single(f64),
    Multi(Vec<f64>),
}

impl SliderInput {
    pub fn first(&self) -> Option<f64> {
        match self {
            SliderInput::Single(v) => Some(*v),
            SliderInput::Multi(values) => values.first().copied(),
        }
    }
}

impl From<f64> for SliderInput {
    fn from(value: f64) -> Self {
        SliderInput::Multi(vec![value])
    }
}

/// Raw questionnaire answers
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPayload {
    #[serde(default)]
    pub budget: Option<SliderInput>,
    #[serde(default)]
    pub walkability: Option<SliderInput>,
    #[serde(default)]
    pub safety: Option<SliderInput>,
    #[serde(default)]
    pub nightlife: Option<SliderInput>,
    #[serde(default)]
    pub family_friendly: Option<SliderInput>,
    #[serde(default)]
    pub public_transit: Option<SliderInput>,
    #[serde(default)]
    pub lifestyle: Option<String>,
    #[serde(default)]
    #[validate(length(max = 3, message = "select at most 3 priorities"))]
    pub priorities: Vec<String>,
}

impl PreferencesPayload {
    /// Validate the payload and turn it into [`UserPreferences`]
    ///
    /// Budget and walkability are required; the other sliders fall back to
    /// the questionnaire defaults. Sliders are clamped to 1-10.
    pub fn into_preferences(self) -> Result<UserPreferences, PreferencesError> {
        self.validate()?;

        let budget = required(self.budget.as_ref(), "budget")?;
        if !budget.is_finite() || budget <= 0.0 {
            return Err(PreferencesError::InvalidBudget(budget));
        }

        let walkability = clamp_slider(required(self.walkability.as_ref(), "walkability")?, "walkability")?;
        let safety = slider(self.safety.as_ref().and_then(SliderInput::first), "safety", DEFAULT_SAFETY)?;
        let nightlife = slider(self.nightlife.as_ref().and_then(SliderInput::first), "nightlife", DEFAULT_NIGHTLIFE)?;
        let family_friendly = slider(
            self.family_friendly.as_ref().and_then(SliderInput::first),
            "familyFriendly",
            DEFAULT_FAMILY_FRIENDLY,
        )?;
        let public_transit = slider(
            self.public_transit.as_ref().and_then(SliderInput::first),
            "publicTransit",
            DEFAULT_PUBLIC_TRANSIT,
        )?;

        let lifestyle = match self.lifestyle.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<Lifestyle>()
                    .map_err(PreferencesError::UnknownLifestyle)?,
            ),
        };

        let mut priorities: Vec<Priority> = Vec::with_capacity(self.priorities.len());
        for raw in &self.priorities {
            let priority = raw
                .parse::<Priority>()
                .map_err(PreferencesError::UnknownPriority)?;
            if !priorities.contains(&priority) {
                priorities.push(priority);
            }
        }

        Ok(UserPreferences {
            budget,
            walkability,
            safety,
            nightlife,
            family_friendly,
            public_transit,
            lifestyle,
            priorities,
        })
    }
}

fn required(input: Option<&SliderInput>, field: &'static str) -> Result<f64, PreferencesError> {
    input
        .and_then(SliderInput::first)
        .ok_or(PreferencesError::MissingField(field))
}

fn slider(value: Option<f64>, field: &'static str, default: f64) -> Result<f64, PreferencesError> {
    value.map_or(Ok(default), |v| clamp_slider(v, field))
}

fn clamp_slider(value: f64, field: &'static str) -> Result<f64, PreferencesError> {
    if !value.is_finite() {
        return Err(PreferencesError::InvalidSlider { field, value });
    }
    Ok(value.clamp(SLIDER_MIN, SLIDER_MAX))
}

/// Body of both scoring endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingRequest {
    #[serde(default)]
    pub preferences: Option<PreferencesPayload>,
}

impl MatchingRequest {
    pub fn into_preferences(self) -> Result<UserPreferences, PreferencesError> {
        self.preferences
            .ok_or(PreferencesError::MissingPreferences)?
            .into_preferences()
    }
}

/// Ordering for the browse view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Name,
    Walkability,
    Safety,
    Affordability,
    /// Cheapest first
    Rent,
}

/// Query string of `GET /neighborhoods`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseQuery {
    pub id: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
}
