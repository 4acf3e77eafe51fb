use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time-of-day bucket a playlist (or a profile BPM range) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Period {
    /// Periods that receive a generated playlist, in generation order.
    pub const SCHEDULED: [Period; 3] = [Period::Morning, Period::Afternoon, Period::Evening];

    /// Every period a brand profile carries a BPM range for.
    pub const ALL: [Period; 4] = [
        Period::Morning,
        Period::Afternoon,
        Period::Evening,
        Period::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Evening => "evening",
            Period::Night => "night",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" | "manha" => Ok(Period::Morning),
            "afternoon" | "tarde" => Ok(Period::Afternoon),
            "evening" | "noite" => Ok(Period::Evening),
            "night" | "madrugada" => Ok(Period::Night),
            other => Err(format!("Unknown period '{}'", other)),
        }
    }
}
