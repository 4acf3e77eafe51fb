use super::Store;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::Serialize;
use sqlx::FromRow;
use sqlx::types::Json;
use vibecurate_core::{CatalogTrack, Period};

const COLUMNS: &str = "id, external_id, title, artist, genre, url, duration, image, license, \
    bpm, tags, time_period, source, created_at";

pub const TRACK_SOURCE: &str = "jamendo";
pub const DEFAULT_LICENSE: &str = "Creative Commons";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Track {
    pub id: i64,
    pub external_id: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub url: String,
    pub duration: u32,
    pub image: Option<String>,
    pub license: Option<String>,
    pub bpm: u32,
    pub tags: Json<Vec<String>>,
    pub time_period: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl Store {
    pub async fn find_track_id(&self, external_id: &str) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM tracks WHERE external_id = ?")
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Inserts a catalog track, returning its local id. A row that already
    /// exists for the same `external_id` is kept as is and its id returned.
    pub async fn insert_track(
        &self,
        track: &CatalogTrack,
        bpm: u32,
        period: Period,
    ) -> Result<i64, sqlx::Error> {
        let license = track.license_url.as_deref().unwrap_or(DEFAULT_LICENSE);

        sqlx::query_scalar(
            "INSERT INTO tracks \
                (external_id, title, artist, genre, url, duration, image, license, bpm, tags, time_period, source, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(external_id) DO UPDATE SET external_id = excluded.external_id \
             RETURNING id",
        )
        .bind(&track.external_id)
        .bind(&track.title)
        .bind(&track.artist)
        .bind(&track.genre)
        .bind(&track.audio_url)
        .bind(track.duration)
        .bind(&track.image)
        .bind(license)
        .bind(bpm)
        .bind(Json(&track.tags))
        .bind(period.as_str())
        .bind(TRACK_SOURCE)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    /// All stored tracks, newest first.
    pub async fn list_tracks(&self) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY id DESC");
        sqlx::query_as::<_, Track>(&query)
            .fetch_all(&self.pool)
            .await
    }

    /// Resolves ids in the given order; ids without a stored track are skipped.
    pub async fn tracks_by_ids(&self, ids: &[i64]) -> Result<Vec<Track>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id IN ({placeholders})");
        let mut select = sqlx::query_as::<_, Track>(&query);
        for id in ids {
            select = select.bind(id);
        }

        let mut by_id: FxHashMap<i64, Track> = select
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|track| (track.id, track))
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }
}
