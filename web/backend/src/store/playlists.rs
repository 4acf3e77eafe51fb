use super::Store;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use sqlx::types::Json;
use vibecurate_core::{BpmRange, Period};

const COLUMNS: &str = "id, company_id, time_period, bpm_min, bpm_max, genres, track_ids, created_at";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Playlist {
    pub id: i64,
    pub company_id: i64,
    pub time_period: String,
    pub bpm_min: u32,
    pub bpm_max: u32,
    pub genres: Json<Vec<String>>,
    /// Local track ids in play order
    pub track_ids: Json<Vec<i64>>,
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    pub fn period(&self) -> Option<Period> {
        self.time_period.parse().ok()
    }
}

impl Store {
    pub async fn insert_playlist(
        &self,
        company_id: i64,
        period: Period,
        range: &BpmRange,
        track_ids: &[i64],
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO playlists \
                (company_id, time_period, bpm_min, bpm_max, genres, track_ids, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING id",
        )
        .bind(company_id)
        .bind(period.as_str())
        .bind(range.min)
        .bind(range.max)
        .bind(Json(&range.genres))
        .bind(Json(track_ids))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    /// Most recent playlist of each period for a brand, in period order.
    pub async fn latest_playlists(&self, company_id: i64) -> Result<Vec<Playlist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM playlists p \
             WHERE company_id = ? \
               AND id = (SELECT MAX(id) FROM playlists \
                         WHERE company_id = p.company_id AND time_period = p.time_period)"
        );
        let mut playlists = sqlx::query_as::<_, Playlist>(&query)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;

        playlists.sort_by_key(|playlist| {
            playlist
                .period()
                .and_then(|period| Period::ALL.iter().position(|p| *p == period))
                .unwrap_or(Period::ALL.len())
        });
        Ok(playlists)
    }
}
