use crate::store::{Brand, Track};
use serde::{Deserialize, Deserializer, Serialize, de};
use vibecurate_core::{BrandProfile, BrandStatus, CatalogTrack, TimeDistribution};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Query-string id where an empty value (`?id=`) counts as absent.
fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid id `{}`", value))),
    }
}

#[derive(Deserialize, Default)]
pub struct BrandQuery {
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreateBrandRequest {
    #[serde(default)]
    pub name: String,
    pub track_count: Option<u32>,
    pub description: Option<String>,
    pub sector: Option<String>,
    pub time_distribution: Option<TimeDistribution>,
}

#[derive(Deserialize, Default)]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sector: Option<String>,
    pub track_count: Option<u32>,
    pub time_distribution: Option<TimeDistribution>,
    pub status: Option<BrandStatus>,
}

#[derive(Serialize)]
pub struct BrandResponse {
    pub brand: Brand,
}

#[derive(Serialize)]
pub struct BrandsResponse {
    pub brands: Vec<Brand>,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[derive(Deserialize)]
pub struct CurateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "brandId")]
    pub brand_id: Option<i64>,
    pub sector: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct CurateResponse {
    pub analysis: Analysis,
}

#[derive(Serialize)]
pub struct Analysis {
    pub brand_profile: BrandProfile,
    pub brand_id: Option<i64>,
    pub status: Option<BrandStatus>,
}

#[derive(Deserialize)]
pub struct GeneratePlaylistsRequest {
    #[serde(rename = "brandId")]
    pub brand_id: Option<i64>,
}

#[derive(Deserialize, Default)]
pub struct PlaylistsQuery {
    #[serde(rename = "brandId", default, deserialize_with = "optional_id")]
    pub brand_id: Option<i64>,
}

/// One period's playlist with its tracks resolved, in play order.
#[derive(Serialize)]
pub struct PeriodPlaylist {
    pub id: i64,
    pub period: String,
    pub bpm_range: String,
    pub genres: Vec<String>,
    pub track_count: usize,
    pub tracks: Vec<Track>,
}

#[derive(Serialize)]
pub struct PlaylistsResponse {
    pub playlists: Vec<PeriodPlaylist>,
}

#[derive(Serialize)]
pub struct TracksResponse {
    pub tracks: Vec<Track>,
}

#[derive(Deserialize)]
pub struct PlayLogRequest {
    pub company: Option<String>,
    /// Players send either the local numeric id or the catalog id string
    pub track_id: Option<serde_json::Value>,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
}

#[derive(Serialize)]
pub struct PlayLogResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize, Default)]
pub struct MusicQuery {
    pub tags: Option<String>,
}

#[derive(Serialize)]
pub struct MusicResponse {
    pub tracks: Vec<CatalogTrack>,
}
