use super::Store;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use sqlx::types::Json;
use vibecurate_core::{BpmRanges, BrandProfile, BrandStatus, TimeDistribution};

const COLUMNS: &str = "id, name, description, sector, business_type, vibe, tone, positioning, \
    genres, bpm_ranges, profile, time_distribution, track_count, status, created_at, updated_at";

#[derive(Debug, Clone, Serialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub sector: Option<String>,
    /// Segment from the profile, e.g. "Cafeteria"
    pub business_type: Option<String>,
    pub vibe: Option<String>,
    pub tone: Option<String>,
    pub positioning: Option<String>,
    pub genres: Vec<String>,
    pub bpm_ranges: Option<BpmRanges>,
    pub profile: Option<BrandProfile>,
    pub time_distribution: TimeDistribution,
    pub track_count: u32,
    pub status: BrandStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct BrandRow {
    id: i64,
    name: String,
    description: Option<String>,
    sector: Option<String>,
    business_type: Option<String>,
    vibe: Option<String>,
    tone: Option<String>,
    positioning: Option<String>,
    genres: Json<Vec<String>>,
    bpm_ranges: Option<Json<BpmRanges>>,
    profile: Option<Json<BrandProfile>>,
    time_distribution: Json<TimeDistribution>,
    track_count: u32,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BrandRow> for Brand {
    type Error = sqlx::Error;

    fn try_from(row: BrandRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse()
            .map_err(|err: String| sqlx::Error::Decode(err.into()))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            sector: row.sector,
            business_type: row.business_type,
            vibe: row.vibe,
            tone: row.tone,
            positioning: row.positioning,
            genres: row.genres.0,
            bpm_ranges: row.bpm_ranges.map(|ranges| ranges.0),
            profile: row.profile.map(|profile| profile.0),
            time_distribution: row.time_distribution.0,
            track_count: row.track_count,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewBrand {
    pub name: String,
    pub description: Option<String>,
    pub sector: Option<String>,
    pub track_count: u32,
    pub time_distribution: TimeDistribution,
}

/// Editable brand fields; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sector: Option<String>,
    pub track_count: Option<u32>,
    pub time_distribution: Option<TimeDistribution>,
    pub status: Option<BrandStatus>,
}

impl Store {
    /// Inserts a brand in `draft` status.
    pub async fn create_brand(&self, input: &NewBrand) -> Result<Brand, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO companies \
                (name, description, sector, genres, time_distribution, track_count, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, BrandRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.sector)
            .bind(Json(Vec::<String>::new()))
            .bind(Json(input.time_distribution))
            .bind(input.track_count)
            .bind(BrandStatus::Draft.as_str())
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        row.try_into()
    }

    pub async fn find_brand(&self, id: i64) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = ?");
        sqlx::query_as::<_, BrandRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Brand::try_from)
            .transpose()
    }

    pub async fn find_brand_by_name(&self, name: &str) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE name = ?");
        sqlx::query_as::<_, BrandRow>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .map(Brand::try_from)
            .transpose()
    }

    /// All brands, newest first.
    pub async fn list_brands(&self) -> Result<Vec<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY id DESC");
        sqlx::query_as::<_, BrandRow>(&query)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Brand::try_from)
            .collect()
    }

    /// Applies `update` and returns the stored brand, or `None` if it does not exist.
    pub async fn update_brand(
        &self,
        id: i64,
        update: &BrandUpdate,
    ) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET \
                name = COALESCE(?, name), \
                description = COALESCE(?, description), \
                sector = COALESCE(?, sector), \
                track_count = COALESCE(?, track_count), \
                time_distribution = COALESCE(?, time_distribution), \
                status = COALESCE(?, status), \
                updated_at = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BrandRow>(&query)
            .bind(&update.name)
            .bind(&update.description)
            .bind(&update.sector)
            .bind(update.track_count)
            .bind(update.time_distribution.map(Json))
            .bind(update.status.map(|status| status.as_str()))
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Brand::try_from)
            .transpose()
    }

    /// Stores a generated profile on the brand together with its new status.
    pub async fn save_profile(
        &self,
        id: i64,
        profile: &BrandProfile,
        status: BrandStatus,
    ) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET \
                business_type = ?, vibe = ?, tone = ?, positioning = ?, genres = ?, \
                bpm_ranges = ?, profile = ?, status = ?, updated_at = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BrandRow>(&query)
            .bind(&profile.segment)
            .bind(&profile.vibe)
            .bind(&profile.tone)
            .bind(&profile.positioning)
            .bind(Json(&profile.genres))
            .bind(Json(&profile.bpm_ranges))
            .bind(Json(profile))
            .bind(status.as_str())
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Brand::try_from)
            .transpose()
    }

    pub async fn set_brand_status(&self, id: i64, status: BrandStatus) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE companies SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the brand and, through the foreign key, its playlists.
    pub async fn delete_brand(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
