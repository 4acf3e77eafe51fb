use crate::gemini::{GeminiClient, GenerativeError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};
use vibecurate_core::profile::build_prompt;
use vibecurate_core::{
    BrandInput, BrandProfile, ProfileParseError, classify_brand, fallback_profile,
    parse_generated_profile,
};

/// How brand profiles are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileStrategy {
    /// Keyword lexicon, no network
    #[default]
    Heuristic,
    /// Generative model, falling back to the generic profile on any failure
    Generative,
}

impl ProfileStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStrategy::Heuristic => "heuristic",
            ProfileStrategy::Generative => "generative",
        }
    }
}

impl fmt::Display for ProfileStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" => Ok(ProfileStrategy::Heuristic),
            "generative" | "gemini" => Ok(ProfileStrategy::Generative),
            other => Err(format!("unknown profile strategy: {}", other)),
        }
    }
}

#[derive(Debug, Error)]
enum CurationError {
    #[error("generative API key is not configured")]
    MissingCredential,

    #[error(transparent)]
    Generative(#[from] GenerativeError),

    #[error(transparent)]
    Parse(#[from] ProfileParseError),
}

pub struct Curator {
    strategy: ProfileStrategy,
    gemini: Option<GeminiClient>,
}

impl Curator {
    pub fn new(strategy: ProfileStrategy, gemini: Option<GeminiClient>) -> Self {
        Self { strategy, gemini }
    }

    pub fn heuristic() -> Self {
        Self::new(ProfileStrategy::Heuristic, None)
    }

    /// Produces a profile for `input`. Never fails.
    pub async fn profile(&self, input: &BrandInput) -> BrandProfile {
        match self.strategy {
            ProfileStrategy::Heuristic => classify_brand(input),
            ProfileStrategy::Generative => match self.generate(input).await {
                Ok(profile) => {
                    info!(brand = %input.name, segment = %profile.segment, "Generated brand profile");
                    profile
                }
                Err(error) => {
                    warn!(brand = %input.name, %error, "Generative profile failed, using generic profile");
                    fallback_profile()
                }
            },
        }
    }

    async fn generate(&self, input: &BrandInput) -> Result<BrandProfile, CurationError> {
        let client = self.gemini.as_ref().ok_or(CurationError::MissingCredential)?;
        let text = client.generate(&build_prompt(input)).await?;
        Ok(parse_generated_profile(&text)?)
    }
}
