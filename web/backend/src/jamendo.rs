use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use vibecurate_core::{CatalogTrack, PopularQuery, TagQuery, TrackCatalog};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("catalog rejected the request: {0}")]
    Api(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JamendoResponse {
    pub headers: JamendoHeaders,
    #[serde(default)]
    pub results: Vec<JamendoTrack>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JamendoHeaders {
    pub status: String,
    #[serde(default)]
    pub error_message: String,
}

/// Jamendo sends ids as strings on most endpoints and as numbers on some.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum JamendoId {
    Text(String),
    Number(u64),
}

impl JamendoId {
    fn into_string(self) -> String {
        match self {
            JamendoId::Text(id) => id,
            JamendoId::Number(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JamendoTrack {
    pub id: JamendoId,
    pub name: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub audio: String,
    #[serde(default)]
    pub duration: u32,
    pub image: Option<String>,
    pub license_ccurl: Option<String>,
    pub musicinfo: Option<JamendoMusicInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JamendoMusicInfo {
    pub tags: Option<JamendoTags>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct JamendoTags {
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub vartags: Vec<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<JamendoTrack> for CatalogTrack {
    fn from(track: JamendoTrack) -> Self {
        let tags = track
            .musicinfo
            .and_then(|info| info.tags)
            .unwrap_or_default();

        CatalogTrack {
            external_id: track.id.into_string(),
            title: track.name,
            artist: track.artist_name,
            audio_url: track.audio,
            duration: track.duration,
            image: non_empty(track.image),
            license_url: non_empty(track.license_ccurl),
            genre: tags
                .genres
                .into_iter()
                .next()
                .unwrap_or_else(|| "Music".to_string()),
            tags: tags.vartags,
        }
    }
}

/// Jamendo v3.0 client. Every request bypasses HTTP caches so repeated
/// generations see fresh results.
#[derive(Clone)]
pub struct JamendoClient {
    client: Client,
    client_id: String,
    base_url: String,
}

impl JamendoClient {
    pub fn new(client_id: impl Into<String>, base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            client_id: client_id.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str, params: &str) -> String {
        format!(
            "{}/{}/?client_id={}&format=json&include=musicinfo&audioformat=mp32&{}",
            self.base_url,
            path,
            urlencoding::encode(&self.client_id),
            params
        )
    }

    async fn fetch(&self, url: &str) -> Result<Vec<CatalogTrack>, CatalogError> {
        debug!(url, "Jamendo request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: JamendoResponse = response.json().await?;
        if parsed.headers.status != "success" {
            return Err(CatalogError::Api(parsed.headers.error_message));
        }

        Ok(parsed.results.into_iter().map(CatalogTrack::from).collect())
    }
}

impl TrackCatalog for JamendoClient {
    type Error = CatalogError;

    async fn search_by_tag(&self, query: &TagQuery) -> Result<Vec<CatalogTrack>, CatalogError> {
        let url = self.url(
            "tracks",
            &format!(
                "tags={}&limit={}&order={}&offset={}",
                urlencoding::encode(&query.tag),
                query.limit,
                query.order,
                query.offset
            ),
        );
        self.fetch(&url).await
    }

    async fn search_similar(&self, seed_id: &str, limit: usize) -> Result<Vec<CatalogTrack>, CatalogError> {
        let url = self.url(
            "tracks/similar",
            &format!(
                "id={}&limit={}&dedup_artist=1",
                urlencoding::encode(seed_id),
                limit
            ),
        );
        self.fetch(&url).await
    }

    async fn search_popular(&self, query: &PopularQuery) -> Result<Vec<CatalogTrack>, CatalogError> {
        let url = self.url(
            "tracks",
            &format!(
                "order={}&limit={}&offset={}",
                query.order, query.limit, query.offset
            ),
        );
        self.fetch(&url).await
    }
}
