use crate::period::Period;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    #[error("time distribution must sum to 100, got {0}")]
    InvalidTotal(u32),
}

/// Percentage of a brand's tracks scheduled for each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDistribution {
    pub morning: u32,
    pub afternoon: u32,
    pub evening: u32,
}

impl Default for TimeDistribution {
    fn default() -> Self {
        Self {
            morning: 33,
            afternoon: 34,
            evening: 33,
        }
    }
}

/// Number of tracks to assemble for each scheduled period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PeriodCounts {
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
}

impl PeriodCounts {
    pub fn get(&self, period: Period) -> usize {
        match period {
            Period::Morning => self.morning,
            Period::Afternoon => self.afternoon,
            Period::Evening => self.evening,
            Period::Night => 0,
        }
    }

    fn get_mut(&mut self, period: Period) -> Option<&mut usize> {
        match period {
            Period::Morning => Some(&mut self.morning),
            Period::Afternoon => Some(&mut self.afternoon),
            Period::Evening => Some(&mut self.evening),
            Period::Night => None,
        }
    }

    pub fn total(&self) -> usize {
        self.morning + self.afternoon + self.evening
    }
}

impl TimeDistribution {
    pub fn share(&self, period: Period) -> u32 {
        match period {
            Period::Morning => self.morning,
            Period::Afternoon => self.afternoon,
            Period::Evening => self.evening,
            Period::Night => 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.morning
            .saturating_add(self.afternoon)
            .saturating_add(self.evening)
    }

    pub fn validate(&self) -> Result<(), DistributionError> {
        match self.total() {
            100 => Ok(()),
            other => Err(DistributionError::InvalidTotal(other)),
        }
    }

    /// Splits `track_count` across the scheduled periods.
    ///
    /// Each period gets the floor of its exact share; the rounding drift left
    /// over (at most two tracks) goes to the periods with the largest fractional
    /// remainders, so the counts always add up to `track_count`.
    pub fn tracks_per_period(&self, track_count: usize) -> Result<PeriodCounts, DistributionError> {
        self.validate()?;

        // Afternoon first so it wins remainder ties, matching the 33/34/33 default
        let order = [Period::Afternoon, Period::Morning, Period::Evening];

        let mut counts = PeriodCounts::default();
        let mut remainders: Vec<(Period, usize)> = Vec::with_capacity(order.len());

        for period in order {
            let exact = track_count * self.share(period) as usize;
            if let Some(slot) = counts.get_mut(period) {
                *slot = exact / 100;
            }
            remainders.push((period, exact % 100));
        }

        // Stable sort keeps the tie order above
        remainders.sort_by(|a, b| b.1.cmp(&a.1));

        let mut drift = track_count - counts.total();
        for (period, _) in remainders.iter().cycle() {
            if drift == 0 {
                break;
            }
            if let Some(slot) = counts.get_mut(*period) {
                *slot += 1;
            }
            drift -= 1;
        }

        Ok(counts)
    }
}
