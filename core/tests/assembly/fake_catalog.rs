use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;
use vibecurate_core::{CatalogTrack, PopularQuery, TagQuery, TrackCatalog};

#[derive(Debug, Clone, PartialEq)]
pub struct FakeError(pub String);

impl fmt::Display for FakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fake catalog error: {}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Tag(TagQuery),
    Similar(String, usize),
    Popular(PopularQuery),
}

pub type Response = Result<Vec<CatalogTrack>, FakeError>;

/// Catalog replaying scripted responses in call order; an exhausted script answers with no tracks.
#[derive(Default)]
pub struct FakeCatalog {
    tag_responses: Mutex<VecDeque<Response>>,
    similar_responses: Mutex<VecDeque<Response>>,
    popular_responses: Mutex<VecDeque<Response>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tag(self, response: Response) -> Self {
        self.tag_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn on_similar(self, response: Response) -> Self {
        self.similar_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn on_popular(self, response: Response) -> Self {
        self.popular_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, script: &Mutex<VecDeque<Response>>, call: Call) -> Response {
        self.calls.lock().unwrap().push(call);
        script.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()))
    }
}

impl TrackCatalog for FakeCatalog {
    type Error = FakeError;

    async fn search_by_tag(&self, query: &TagQuery) -> Response {
        self.next(&self.tag_responses, Call::Tag(query.clone()))
    }

    async fn search_similar(&self, seed_id: &str, limit: usize) -> Response {
        self.next(
            &self.similar_responses,
            Call::Similar(seed_id.to_string(), limit),
        )
    }

    async fn search_popular(&self, query: &PopularQuery) -> Response {
        self.next(&self.popular_responses, Call::Popular(query.clone()))
    }
}

pub fn track(id: &str) -> CatalogTrack {
    CatalogTrack {
        external_id: id.to_string(),
        title: format!("Track {}", id),
        artist: format!("Artist {}", id),
        audio_url: format!("https://cdn.example.test/{}.mp3", id),
        duration: 180,
        image: None,
        license_url: Some("https://creativecommons.org/licenses/by/3.0/".to_string()),
        genre: "jazz".to_string(),
        tags: vec!["jazz".to_string()],
    }
}

pub fn tracks(prefix: &str, n: usize) -> Vec<CatalogTrack> {
    (0..n).map(|i| track(&format!("{}{}", prefix, i))).collect()
}

pub fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
