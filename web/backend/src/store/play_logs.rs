use super::Store;
use chrono::Utc;

#[derive(Debug, Clone)]
pub struct NewPlayLog {
    pub company: String,
    pub track_id: String,
    pub started_at: String,
    pub ended_at: Option<String>,
}

impl Store {
    pub async fn insert_play_log(&self, log: &NewPlayLog) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO play_logs (company, track_id, started_at, ended_at, logged_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING id",
        )
        .bind(&log.company)
        .bind(&log.track_id)
        .bind(&log.started_at)
        .bind(&log.ended_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    pub async fn count_play_logs(&self, company: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM play_logs WHERE company = ?")
            .bind(company)
            .fetch_one(&self.pool)
            .await
    }
}
