use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// A track record as returned by the external music catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTrack {
    /// The catalog's own stable identifier; used as the local dedup key
    pub external_id: String,
    pub title: String,
    pub artist: String,
    pub audio_url: String,
    /// Seconds
    pub duration: u32,
    pub image: Option<String>,
    pub license_url: Option<String>,
    pub genre: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Result orderings the catalog supports for tag and popularity searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOrder {
    PopularityMonth,
    ReleaseDate,
    Relevance,
    PopularityTotal,
}

impl SearchOrder {
    pub const ALL: [SearchOrder; 4] = [
        SearchOrder::PopularityMonth,
        SearchOrder::ReleaseDate,
        SearchOrder::Relevance,
        SearchOrder::PopularityTotal,
    ];

    /// Value of the catalog's `order` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::PopularityMonth => "popularity_month",
            SearchOrder::ReleaseDate => "releasedate",
            SearchOrder::Relevance => "relevance",
            SearchOrder::PopularityTotal => "popularity_total",
        }
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery {
    pub tag: String,
    pub limit: usize,
    pub order: SearchOrder,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularQuery {
    pub limit: usize,
    pub order: SearchOrder,
    pub offset: usize,
}

/// The three query shapes the playlist heuristic needs from a music catalog.
///
/// Implementations return an empty vector when nothing matches and an error
/// for transport or protocol failures; they must not retry on their own.
pub trait TrackCatalog {
    type Error: fmt::Display + Send;

    fn search_by_tag(
        &self,
        query: &TagQuery,
    ) -> impl Future<Output = Result<Vec<CatalogTrack>, Self::Error>> + Send;

    /// Tracks similar to `seed_id`, excluding tracks by the seed's artist.
    fn search_similar(
        &self,
        seed_id: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<CatalogTrack>, Self::Error>> + Send;

    fn search_popular(
        &self,
        query: &PopularQuery,
    ) -> impl Future<Output = Result<Vec<CatalogTrack>, Self::Error>> + Send;
}
