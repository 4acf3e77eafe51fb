pub mod assembly;
pub mod brand;
pub mod catalog;
pub mod distribution;
pub mod period;
pub mod profile;
pub mod string_normalization;

// Re-export commonly used items
pub use assembly::{AssemblyConfig, AssemblyError, AssemblyOutcome, FillTier, assemble_period};
pub use brand::BrandStatus;
pub use catalog::{CatalogTrack, PopularQuery, SearchOrder, TagQuery, TrackCatalog};
pub use distribution::{DistributionError, PeriodCounts, TimeDistribution};
pub use period::Period;
pub use profile::{
    BpmRange, BpmRanges, BrandIdentity, BrandInput, BrandProfile, PlaylistSuggestion,
    ProfileParseError, ProfileSource, SoundPalette, TargetAudience, VoiceGuidance, classify_brand,
    fallback_profile, parse_generated_profile,
};
