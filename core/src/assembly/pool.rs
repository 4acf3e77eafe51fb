use crate::catalog::CatalogTrack;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

/// Ordered candidate set, deduplicated by catalog track id.
#[derive(Debug, Default)]
pub struct CandidatePool {
    tracks: Vec<CatalogTrack>,
    seen: FxHashSet<String>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the track unless one with the same `external_id` is already present.
    pub fn push(&mut self, track: CatalogTrack) -> bool {
        if self.seen.contains(&track.external_id) {
            return false;
        }
        self.seen.insert(track.external_id.clone());
        self.tracks.push(track);
        true
    }

    /// Merges a batch, returning how many tracks were new.
    pub fn extend(&mut self, tracks: impl IntoIterator<Item = CatalogTrack>) -> usize {
        tracks
            .into_iter()
            .map(|track| self.push(track))
            .filter(|added| *added)
            .count()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[CatalogTrack] {
        &self.tracks
    }

    /// Shuffles the whole pool (Fisher-Yates) and keeps the first `count` tracks.
    pub fn into_playlist<R: Rng + ?Sized>(self, count: usize, rng: &mut R) -> Vec<CatalogTrack> {
        let mut tracks = self.tracks;
        tracks.shuffle(rng);
        tracks.truncate(count);
        tracks
    }
}
