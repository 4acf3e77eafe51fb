use crate::store::Store;
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::warn;
use vibecurate_core::{BpmRange, CatalogTrack, Period};

/// BPM assigned to a newly stored track: uniform in `[min, max)`, `min` when the range is empty.
pub fn random_bpm<R: Rng>(range: &BpmRange, rng: &mut R) -> u32 {
    if range.max > range.min {
        rng.random_range(range.min..range.max)
    } else {
        range.min
    }
}

/// Stores assembled tracks, reusing rows that already exist for the same
/// `external_id`. Returns local ids in input order without duplicates; a track
/// that cannot be stored is logged and left out.
pub async fn ingest_tracks<R: Rng + Send>(
    store: &Store,
    tracks: &[CatalogTrack],
    period: Period,
    range: &BpmRange,
    rng: &mut R,
) -> Vec<i64> {
    let mut ids = Vec::with_capacity(tracks.len());
    let mut seen = FxHashSet::default();

    for track in tracks {
        let existing = match store.find_track_id(&track.external_id).await {
            Ok(existing) => existing,
            Err(error) => {
                warn!(external_id = %track.external_id, %error, "Track lookup failed, skipping");
                continue;
            }
        };

        let id = match existing {
            Some(id) => id,
            None => {
                let bpm = random_bpm(range, rng);
                match store.insert_track(track, bpm, period).await {
                    Ok(id) => id,
                    Err(error) => {
                        warn!(external_id = %track.external_id, %error, "Track insert failed, skipping");
                        continue;
                    }
                }
            }
        };

        if seen.insert(id) {
            ids.push(id);
        }
    }

    ids
}
