use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Onboarding status of a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BrandStatus {
    #[default]
    Draft,
    Analyzing,
    WaitingApproval,
    Completed,
}

impl BrandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrandStatus::Draft => "draft",
            BrandStatus::Analyzing => "analyzing",
            BrandStatus::WaitingApproval => "waiting_approval",
            BrandStatus::Completed => "completed",
        }
    }

    /// Whether a brand in this status may be moved to `next`.
    ///
    /// The flow is draft -> analyzing -> waiting_approval -> completed. Generation
    /// may complete an analyzing brand directly, re-curation restarts analysis
    /// from any status, and every status can fall back to draft.
    pub fn can_transition_to(&self, next: BrandStatus) -> bool {
        use BrandStatus::*;

        if *self == next {
            return true;
        }

        matches!(
            (self, next),
            (_, Draft)
                | (_, Analyzing)
                | (Analyzing, WaitingApproval)
                | (Analyzing, Completed)
                | (WaitingApproval, Completed)
        )
    }
}

impl fmt::Display for BrandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(BrandStatus::Draft),
            "analyzing" => Ok(BrandStatus::Analyzing),
            "waiting_approval" => Ok(BrandStatus::WaitingApproval),
            "completed" => Ok(BrandStatus::Completed),
            other => Err(format!("Unknown brand status '{}'", other)),
        }
    }
}
