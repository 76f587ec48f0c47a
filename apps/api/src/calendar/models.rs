use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::llm_client::ModelId;

pub const MIN_HEADLINES: u8 = 5;
pub const MAX_HEADLINES: u8 = 20;
pub const DEFAULT_HEADLINES: u8 = 12;

/// Who the calendar is written for. Held only for one generation request.
/// Missing fields deserialize as empty so validation can name them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub bio: String,
    pub sample_post: String,
    pub industry: String,
}

/// Overall voice of the generated posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    #[serde(rename = "Professional + Engaging")]
    ProfessionalEngaging,
    #[serde(rename = "Bold + Thought-Provoking")]
    BoldThoughtProvoking,
    #[serde(rename = "Authentic + Vulnerable")]
    AuthenticVulnerable,
    #[serde(rename = "Data-Driven + Analytical")]
    DataDrivenAnalytical,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::ProfessionalEngaging,
        Tone::BoldThoughtProvoking,
        Tone::AuthenticVulnerable,
        Tone::DataDrivenAnalytical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::ProfessionalEngaging => "Professional + Engaging",
            Tone::BoldThoughtProvoking => "Bold + Thought-Provoking",
            Tone::AuthenticVulnerable => "Authentic + Vulnerable",
            Tone::DataDrivenAnalytical => "Data-Driven + Analytical",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported tone '{s}'"))
    }
}

/// Themes the user wants the week's mix to lean on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentFocus {
    #[serde(rename = "Leadership insights")]
    LeadershipInsights,
    #[serde(rename = "Industry predictions")]
    IndustryPredictions,
    #[serde(rename = "Personal stories")]
    PersonalStories,
    #[serde(rename = "Contrarian takes")]
    ContrarianTakes,
    #[serde(rename = "Behind-the-scenes")]
    BehindTheScenes,
    #[serde(rename = "Data-driven analysis")]
    DataDrivenAnalysis,
    #[serde(rename = "Future trends")]
    FutureTrends,
}

impl ContentFocus {
    pub const ALL: [ContentFocus; 7] = [
        ContentFocus::LeadershipInsights,
        ContentFocus::IndustryPredictions,
        ContentFocus::PersonalStories,
        ContentFocus::ContrarianTakes,
        ContentFocus::BehindTheScenes,
        ContentFocus::DataDrivenAnalysis,
        ContentFocus::FutureTrends,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentFocus::LeadershipInsights => "Leadership insights",
            ContentFocus::IndustryPredictions => "Industry predictions",
            ContentFocus::PersonalStories => "Personal stories",
            ContentFocus::ContrarianTakes => "Contrarian takes",
            ContentFocus::BehindTheScenes => "Behind-the-scenes",
            ContentFocus::DataDrivenAnalysis => "Data-driven analysis",
            ContentFocus::FutureTrends => "Future trends",
        }
    }

    pub fn defaults() -> Vec<ContentFocus> {
        vec![
            ContentFocus::LeadershipInsights,
            ContentFocus::IndustryPredictions,
            ContentFocus::PersonalStories,
        ]
    }
}

impl FromStr for ContentFocus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentFocus::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported content focus '{s}'"))
    }
}

/// Optional knobs from the advanced settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model: ModelId,
    pub headline_count: u8,
    pub tone: Tone,
    pub focus: Vec<ContentFocus>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: ModelId::default(),
            headline_count: DEFAULT_HEADLINES,
            tone: Tone::default(),
            focus: ContentFocus::defaults(),
        }
    }
}

/// Everything one "generate" click submits.
/// `api_key` is never logged or persisted, so `Debug` redacts it.
#[derive(Clone, Deserialize)]
pub struct CalendarRequest {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub settings: Settings,
}

impl fmt::Debug for CalendarRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarRequest")
            .field("profile", &self.profile)
            .field("api_key", &"<redacted>")
            .field("settings", &self.settings)
            .finish()
    }
}

/// One day of the calendar as split out of the model's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPost {
    pub day: u32,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub model: ModelId,
    pub headlines: Vec<String>,
    /// True when the feed gave nothing and generic topics were substituted.
    pub used_fallback_headlines: bool,
    /// Empty when the model output had no day markers; `raw` is then the only content.
    pub days: Vec<DayPost>,
    pub raw: String,
}
