use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the six dimensions every neighborhood is rated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Walkability,
    Safety,
    Affordability,
    Nightlife,
    FamilyFriendly,
    Transit,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Category; 6] = [
        Category::Walkability,
        Category::Safety,
        Category::Affordability,
        Category::Nightlife,
        Category::FamilyFriendly,
        Category::Transit,
    ];

    /// Label used when explaining a match to the user
    pub fn label(self) -> &'static str {
        match self {
            Category::Walkability => "walkability",
            Category::Safety => "safety",
            Category::Affordability => "affordability",
            Category::Nightlife => "nightlife and dining",
            Category::FamilyFriendly => "family-friendly amenities",
            Category::Transit => "public transportation",
        }
    }
}

/// A value per category, serialized with the category names as keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores<T> {
    pub walkability: T,
    pub safety: T,
    pub affordability: T,
    pub nightlife: T,
    pub family_friendly: T,
    pub transit: T,
}

impl<T> Scores<T> {
    /// Build a score set by evaluating `f` for every category
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            walkability: f(Category::Walkability),
            safety: f(Category::Safety),
            affordability: f(Category::Affordability),
            nightlife: f(Category::Nightlife),
            family_friendly: f(Category::FamilyFriendly),
            transit: f(Category::Transit),
        }
    }

    /// Same value for every category
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|_| value)
    }

    /// Iterate `(category, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().map(move |c| (c, &self[c]))
    }
}

impl<T> Index<Category> for Scores<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        match category {
            Category::Walkability => &self.walkability,
            Category::Safety => &self.safety,
            Category::Affordability => &self.affordability,
            Category::Nightlife => &self.nightlife,
            Category::FamilyFriendly => &self.family_friendly,
            Category::Transit => &self.transit,
        }
    }
}

impl<T> IndexMut<Category> for Scores<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Walkability => &mut self.walkability,
            Category::Safety => &mut self.safety,
            Category::Affordability => &mut self.affordability,
            Category::Nightlife => &mut self.nightlife,
            Category::FamilyFriendly => &mut self.family_friendly,
            Category::Transit => &mut self.transit,
        }
    }
}

/// Lifestyle archetype picked in the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lifestyle {
    YoungProfessional,
    Family,
    Student,
    Retiree,
    RemoteWorker,
}

impl Lifestyle {
    pub const ALL: [Lifestyle; 5] = [
        Lifestyle::YoungProfessional,
        Lifestyle::Family,
        Lifestyle::Student,
        Lifestyle::Retiree,
        Lifestyle::RemoteWorker,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Lifestyle::YoungProfessional => "young-professional",
            Lifestyle::Family => "family",
            Lifestyle::Student => "student",
            Lifestyle::Retiree => "retiree",
            Lifestyle::RemoteWorker => "remote-worker",
        }
    }
}

impl fmt::Display for Lifestyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lifestyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lifestyle::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Entry from the fixed "top priorities" catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Low cost of living")]
    LowCostOfLiving,
    #[serde(rename = "Short commute")]
    ShortCommute,
    #[serde(rename = "Walkable amenities")]
    WalkableAmenities,
    #[serde(rename = "Safe neighborhood")]
    SafeNeighborhood,
    #[serde(rename = "Good schools")]
    GoodSchools,
    #[serde(rename = "Nightlife & dining")]
    NightlifeAndDining,
    #[serde(rename = "Public transportation")]
    PublicTransportation,
    #[serde(rename = "Parks & recreation")]
    ParksAndRecreation,
    #[serde(rename = "Cultural activities")]
    CulturalActivities,
    #[serde(rename = "Diverse community")]
    DiverseCommunity,
}

impl Priority {
    pub const CATALOG: [Priority; 10] = [
        Priority::LowCostOfLiving,
        Priority::ShortCommute,
        Priority::WalkableAmenities,
        Priority::SafeNeighborhood,
        Priority::GoodSchools,
        Priority::NightlifeAndDining,
        Priority::PublicTransportation,
        Priority::ParksAndRecreation,
        Priority::CulturalActivities,
        Priority::DiverseCommunity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Priority::LowCostOfLiving => "Low cost of living",
            Priority::ShortCommute => "Short commute",
            Priority::WalkableAmenities => "Walkable amenities",
            Priority::SafeNeighborhood => "Safe neighborhood",
            Priority::GoodSchools => "Good schools",
            Priority::NightlifeAndDining => "Nightlife & dining",
            Priority::PublicTransportation => "Public transportation",
            Priority::ParksAndRecreation => "Parks & recreation",
            Priority::CulturalActivities => "Cultural activities",
            Priority::DiverseCommunity => "Diverse community",
        }
    }

    /// Category whose rating earns a bonus when this priority is selected
    pub fn category(self) -> Option<Category> {
        match self {
            Priority::LowCostOfLiving => Some(Category::Affordability),
            Priority::WalkableAmenities => Some(Category::Walkability),
            Priority::SafeNeighborhood => Some(Category::Safety),
            Priority::GoodSchools => Some(Category::FamilyFriendly),
            Priority::NightlifeAndDining => Some(Category::Nightlife),
            Priority::PublicTransportation => Some(Category::Transit),
            Priority::ShortCommute
            | Priority::ParksAndRecreation
            | Priority::CulturalActivities
            | Priority::DiverseCommunity => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::CATALOG
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Validated questionnaire answers
///
/// Built from a [`PreferencesPayload`](crate::models::PreferencesPayload);
/// every importance slider is already clamped to 1-10.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    /// Monthly housing budget, always positive
    pub budget: f64,
    pub walkability: f64,
    pub safety: f64,
    pub nightlife: f64,
    pub family_friendly: f64,
    pub public_transit: f64,
    pub lifestyle: Option<Lifestyle>,
    /// At most three, no duplicates, in submission order
    pub priorities: Vec<Priority>,
}

impl UserPreferences {
    /// The five 1-10 importance answers
    pub fn importance(&self) -> [f64; 5] {
        [
            self.walkability,
            self.safety,
            self.nightlife,
            self.family_friendly,
            self.public_transit,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub median_age: u32,
    pub median_income: u32,
    pub population: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Housing {
    pub average_rent: u32,
    pub home_price: u32,
}

/// Reference data for one neighborhood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub description: String,
    /// 0-100 rating per category
    pub scores: Scores<u8>,
    pub demographics: Demographics,
    pub housing: Housing,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Scored neighborhood, serialized with the record's fields inlined
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    #[serde(flatten)]
    pub neighborhood: &'a NeighborhoodRecord,
    pub overall_score: u8,
    pub category_scores: Scores<u32>,
    pub match_reasons: Vec<String>,
    pub confidence_score: u8,
}

/// Constants of the match formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Budget at which affordability stops mattering more
    pub budget_ceiling: f64,
    pub affordability_slope: f64,
    pub affordability_floor: f64,
    /// Fraction of a category rating added per matching priority
    pub priority_bonus: f64,
    /// Rent may exceed the budget by this factor and still fit
    pub budget_tolerance: f64,
    pub excellent_threshold: u32,
    pub max_reasons: usize,
    pub confidence_base: f64,
    pub decisiveness_factor: f64,
    pub data_quality_bonus: f64,
    pub confidence_cap: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            budget_ceiling: 5000.0,
            affordability_slope: 0.7,
            affordability_floor: 0.3,
            priority_bonus: 0.1,
            budget_tolerance: 1.1,
            excellent_threshold: 80,
            max_reasons: 4,
            confidence_base: 85.0,
            decisiveness_factor: 2.0,
            data_quality_bonus: 10.0,
            confidence_cap: 95.0,
        }
    }
}
