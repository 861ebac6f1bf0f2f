//! Core types for the devotional generation API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DevotionalError, MISSING_AGE_GROUP_MESSAGE};

/// Audience category driving the tone and content of a devotional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// Ages 5 to 12.
    Children,
    /// Ages 13 to 17.
    Teens,
    /// Ages 18 to 25.
    YoungAdults,
    /// Ages 26 and up.
    Adults,
}

impl AgeGroup {
    /// All age groups, in display order.
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Children,
        AgeGroup::Teens,
        AgeGroup::YoungAdults,
        AgeGroup::Adults,
    ];

    /// The wire code sent to and returned by the service.
    pub fn code(&self) -> &'static str {
        match self {
            AgeGroup::Children => "children",
            AgeGroup::Teens => "teens",
            AgeGroup::YoungAdults => "young_adults",
            AgeGroup::Adults => "adults",
        }
    }

    /// Human readable label including the age range.
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Children => "Children (5-12 years)",
            AgeGroup::Teens => "Teens (13-17 years)",
            AgeGroup::YoungAdults => "Young Adults (18-25 years)",
            AgeGroup::Adults => "Adults (26+ years)",
        }
    }

    /// The next group in display order, wrapping around.
    pub fn next(&self) -> AgeGroup {
        let idx = Self::ALL.iter().position(|g| g == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous group in display order, wrapping around.
    pub fn previous(&self) -> AgeGroup {
        let idx = Self::ALL.iter().position(|g| g == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AgeGroup {
    type Err = DevotionalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.code() == s)
            .ok_or_else(|| {
                DevotionalError::validation(format!(
                    "Age group must be one of: children, teens, young_adults, adults (got '{s}')"
                ))
            })
    }
}

/// Body of `POST /generate-devotional`.
///
/// `topic` is always serialized, as `null` when no topic was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub age_group: AgeGroup,
    pub topic: Option<String>,
}

impl GenerationRequest {
    /// Create a request. A blank topic is treated as no topic; any other
    /// topic is sent exactly as typed.
    pub fn new(age_group: AgeGroup, topic: Option<&str>) -> Self {
        let topic = topic
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string);

        Self { age_group, topic }
    }

    /// Build a request from raw form input, rejecting a missing age group.
    pub fn from_form(age_group: Option<AgeGroup>, topic: &str) -> Result<Self, DevotionalError> {
        match age_group {
            Some(age_group) => Ok(Self::new(age_group, Some(topic))),
            None => Err(DevotionalError::validation(MISSING_AGE_GROUP_MESSAGE)),
        }
    }
}

/// A generated devotional as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Devotional {
    pub title: String,
    pub question_of_day: String,
    /// Scripture reference for the Listen section, when the service provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listen_scripture: Option<String>,
    pub listen_content: String,
    pub learn_content: String,
    pub live_content: String,
    pub prayer: String,
    /// Raw age group code. Kept as text so unknown values can still be displayed.
    pub age_group: String,
    #[serde(default)]
    pub topic: Option<String>,
}

impl Devotional {
    /// The topic, if present and non-empty.
    pub fn display_topic(&self) -> Option<&str> {
        self.topic.as_deref().filter(|t| !t.is_empty())
    }
}

/// Body of `GET /topics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}
