//! SQLite persistence for brands, tracks, playlists and play logs.

mod brands;
mod play_logs;
mod playlists;
mod tracks;

pub use brands::{Brand, BrandUpdate, NewBrand};
pub use play_logs::NewPlayLog;
pub use playlists::Playlist;
pub use tracks::Track;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if needed) the database at `url` and creates missing tables.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        if let Some(parent) = database_file(url).and_then(|path| path.parent()) {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        info!(url, "Opened database");
        Self::with_pool(pool).await
    }

    /// Private in-memory database on a single connection.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        create_companies_table(&pool).await?;
        create_tracks_table(&pool).await?;
        create_playlists_table(&pool).await?;
        create_play_logs_table(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn database_file(url: &str) -> Option<&Path> {
    let path = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(Path::new(path))
}

async fn create_companies_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            sector TEXT,
            business_type TEXT,
            vibe TEXT,
            tone TEXT,
            positioning TEXT,
            genres TEXT NOT NULL DEFAULT '[]',
            bpm_ranges TEXT,
            profile TEXT,
            time_distribution TEXT NOT NULL,
            track_count INTEGER NOT NULL CHECK (track_count > 0),
            status TEXT NOT NULL DEFAULT 'draft',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_tracks_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tracks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            external_id TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            artist TEXT NOT NULL,
            genre TEXT NOT NULL,
            url TEXT NOT NULL,
            duration INTEGER NOT NULL DEFAULT 0,
            image TEXT,
            license TEXT,
            bpm INTEGER NOT NULL,
            tags TEXT NOT NULL DEFAULT '[]',
            time_period TEXT NOT NULL,
            source TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_playlists_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS playlists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id INTEGER NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
            time_period TEXT NOT NULL,
            bpm_min INTEGER NOT NULL,
            bpm_max INTEGER NOT NULL,
            genres TEXT NOT NULL DEFAULT '[]',
            track_ids TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_playlists_company ON playlists(company_id, time_period)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_play_logs_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS play_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            company TEXT NOT NULL,
            track_id TEXT NOT NULL,
            started_at TEXT NOT NULL,
            ended_at TEXT,
            logged_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
