use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::Priority;

/// Life stage of a recommendation card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Active,
    Applied,
    Dismissed,
}

/// Topic bucket a recommendation belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    TimeManagement,
    StudyHabits,
    Prioritization,
    Wellness,
}

impl RecommendationCategory {
    /// Label shown on the card badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TimeManagement => "Time management",
            Self::StudyHabits => "Study habits",
            Self::Prioritization => "Prioritization",
            Self::Wellness => "Wellness",
        }
    }
}

/// An AI-generated suggestion, rendered as a card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Server-assigned identifier.
    pub id: String,
    /// Card headline.
    pub title: String,
    /// Body text of the suggestion.
    pub description: String,
    /// Topic bucket.
    pub category: RecommendationCategory,
    /// Urgency bucket.
    pub priority: Priority,
    /// Whether the card is still actionable.
    pub status: RecommendationStatus,
    /// When the suggestion was generated.
    pub created_at: DateTime<Utc>,
}

/// `GET /ai-recommendations` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationsResponse {
    /// Current recommendations, newest first.
    pub recommendations: Vec<Recommendation>,
}

/// `POST /ai-recommendations/generate` body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateRecommendationsResponse {
    /// How many new recommendations were produced.
    pub generated: u32,
}

/// Body of the apply/dismiss endpoints: the card as it now stands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationActionResponse {
    /// Updated recommendation.
    pub recommendation: Recommendation,
}
