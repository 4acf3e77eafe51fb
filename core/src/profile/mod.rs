//! Brand sound profiles: what a brand should sound like in each period.

pub mod generated;
pub mod heuristic;
pub mod lexicon;

pub use generated::{ProfileParseError, build_prompt, parse_generated_profile, strip_code_fences};
pub use heuristic::classify_brand;
pub use lexicon::fallback_profile;

use crate::period::Period;
use serde::{Deserialize, Serialize};

/// Highest BPM a profile range may carry
pub const MAX_BPM: u32 = 250;

/// Audience age range used when nothing better is known
pub const DEFAULT_AGE_RANGE: &str = "25-45";

/// What the classifier knows about a brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInput {
    pub name: String,
    pub sector: Option<String>,
    pub description: Option<String>,
}

impl BrandInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BpmRange {
    pub min: u32,
    pub max: u32,
    pub genres: Vec<String>,
}

impl BpmRange {
    pub fn new(min: u32, max: u32, genres: &[&str]) -> Self {
        Self {
            min,
            max,
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    /// Display form used in playlist responses, e.g. `80-110`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BpmRanges {
    pub morning: BpmRange,
    pub afternoon: BpmRange,
    pub evening: BpmRange,
    pub night: BpmRange,
}

impl BpmRanges {
    pub fn get(&self, period: Period) -> &BpmRange {
        match period {
            Period::Morning => &self.morning,
            Period::Afternoon => &self.afternoon,
            Period::Evening => &self.evening,
            Period::Night => &self.night,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Period, &BpmRange)> {
        Period::ALL.into_iter().map(move |period| (period, self.get(period)))
    }

    /// Every genre across all periods, first occurrence wins.
    pub fn all_genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = Vec::new();
        for (_, range) in self.iter() {
            for genre in &range.genres {
                if !genres.iter().any(|g| g.eq_ignore_ascii_case(genre)) {
                    genres.push(genre.clone());
                }
            }
        }
        genres
    }
}

/// Casting guidance for voice-overs and spots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceGuidance {
    pub gender: String,
    pub age_range: String,
    pub style: String,
}

/// Who the brand's stores play for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetAudience {
    /// e.g. "25-35"
    #[serde(default)]
    pub age_range: String,
    /// e.g. "Classe A/B"
    #[serde(default)]
    pub social_class: String,
    #[serde(default)]
    pub lifestyle: Vec<String>,
    #[serde(default)]
    pub preferred_genres: Vec<String>,
}

/// Instrument families the soundtrack leans on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundPalette {
    #[serde(default)]
    pub electronic: Vec<String>,
    #[serde(default)]
    pub organic: Vec<String>,
    #[serde(default)]
    pub rhythmic: Vec<String>,
    #[serde(default)]
    pub vocal: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandIdentity {
    #[serde(default)]
    pub essence: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub sound_palette: SoundPalette,
}

/// Social class implied by a positioning tier.
pub fn social_class_for(positioning: &str) -> &'static str {
    match positioning {
        "Premium" => "Classe A/B",
        "Popular" => "Classe C/D",
        _ => "Classe B/C",
    }
}

pub(crate) fn is_age_range(value: &str) -> bool {
    let Some((low, high)) = value.split_once('-') else {
        return false;
    };
    match (low.trim().parse::<u32>(), high.trim().parse::<u32>()) {
        (Ok(low), Ok(high)) => low <= high && high <= 120,
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSuggestion {
    pub name: String,
    pub period: Period,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    #[default]
    Heuristic,
    Generative,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandProfile {
    /// Business segment, e.g. "Cafeteria"
    pub segment: String,
    /// Positioning tier, e.g. "Premium"
    #[serde(default)]
    pub positioning: String,
    /// Emotional tone, e.g. "Acolhedor"
    pub tone: String,
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub bpm_ranges: BpmRanges,
    #[serde(default)]
    pub voice: VoiceGuidance,
    #[serde(default)]
    pub audience: TargetAudience,
    #[serde(default)]
    pub identity: BrandIdentity,
    /// One-line description of the in-store atmosphere
    #[serde(default)]
    pub atmosphere: String,
    #[serde(default)]
    pub playlist_suggestions: Vec<PlaylistSuggestion>,
    #[serde(default)]
    pub source: ProfileSource,
}

impl BrandProfile {
    /// Checks the invariants every stored profile must satisfy.
    pub fn validate(&self) -> Result<(), ProfileParseError> {
        if self.segment.trim().is_empty() {
            return Err(ProfileParseError::Invalid("segment is empty".to_string()));
        }
        if self.tone.trim().is_empty() {
            return Err(ProfileParseError::Invalid("tone is empty".to_string()));
        }

        for (period, range) in self.bpm_ranges.iter() {
            if range.min == 0 || range.min > range.max || range.max > MAX_BPM {
                return Err(ProfileParseError::Invalid(format!(
                    "{} BPM range {}-{} is out of bounds",
                    period,
                    range.min,
                    range.max
                )));
            }
            if range.genres.iter().all(|genre| genre.trim().is_empty()) {
                return Err(ProfileParseError::Invalid(format!(
                    "{} has no genres",
                    period
                )));
            }
        }

        if !is_age_range(&self.audience.age_range) {
            return Err(ProfileParseError::Invalid(format!(
                "audience age range '{}' is not of the form MIN-MAX",
                self.audience.age_range
            )));
        }
        if self.audience.social_class.trim().is_empty() {
            return Err(ProfileParseError::Invalid("audience social class is empty".to_string()));
        }
        if self.audience.preferred_genres.iter().all(|genre| genre.trim().is_empty()) {
            return Err(ProfileParseError::Invalid("audience has no preferred genres".to_string()));
        }

        Ok(())
    }
}
