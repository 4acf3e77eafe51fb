//! Best-effort playlist assembly for a single period.
//!
//! One tag is drawn from the period's candidates (multi-tag AND queries rarely
//! match anything in the catalog), a seed track anchors a similarity search, and
//! a ladder of ever broader searches fills the pool when that is not enough:
//!
//! 1. seed: tag search, limit 1, random order and offset
//! 2. similar: tracks similar to the seed
//! 3. tag: tag search at full pool size, same order and offset
//! 4. tag retry: only when 3 found nothing at a large offset, small offset
//! 5. popular: popularity search with a fresh order and a wide offset
//!
//! The merged pool is shuffled and truncated to the requested count.

pub mod config;
pub mod pool;

pub use config::AssemblyConfig;
pub use pool::CandidatePool;

use crate::catalog::{CatalogTrack, PopularQuery, SearchOrder, TagQuery, TrackCatalog};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum AssemblyError<E: fmt::Display> {
    #[error("every catalog request failed, last error: {0}")]
    CatalogUnavailable(E),
}

/// Which step of the ladder contributed tracks to the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillTier {
    Seed,
    Similar,
    Tag,
    TagRetry,
    Popular,
}

#[derive(Debug, Default)]
pub struct AssemblyOutcome {
    /// Final playlist, in shuffled order
    pub tracks: Vec<CatalogTrack>,
    pub tag: Option<String>,
    pub seed_id: Option<String>,
    pub tiers: Vec<FillTier>,
    /// Candidates available before truncation
    pub pool_len: usize,
}

struct Attempts<E> {
    succeeded: usize,
    last_error: Option<E>,
}

impl<E: fmt::Display> Attempts<E> {
    fn new() -> Self {
        Self {
            succeeded: 0,
            last_error: None,
        }
    }

    /// Failed requests count as empty results so the ladder keeps going.
    fn settle(&mut self, step: &str, result: Result<Vec<CatalogTrack>, E>) -> Vec<CatalogTrack> {
        match result {
            Ok(tracks) => {
                self.succeeded += 1;
                debug!(step, found = tracks.len(), "catalog request finished");
                tracks
            }
            Err(error) => {
                warn!(step, %error, "catalog request failed");
                self.last_error = Some(error);
                Vec::new()
            }
        }
    }
}

fn random_order<R: Rng>(rng: &mut R) -> SearchOrder {
    *SearchOrder::ALL
        .choose(rng)
        .unwrap_or(&SearchOrder::PopularityTotal)
}

/// Assembles up to `count` tracks for one period from `tags`.
///
/// The result is shorter than `count` when the catalog cannot supply enough
/// tracks. It is an error only when every request made to the catalog failed.
pub async fn assemble_period<C, R>(
    catalog: &C,
    tags: &[String],
    count: usize,
    config: &AssemblyConfig,
    rng: &mut R,
) -> Result<AssemblyOutcome, AssemblyError<C::Error>>
where
    C: TrackCatalog + Sync,
    R: Rng + Send,
{
    if count == 0 {
        return Ok(AssemblyOutcome::default());
    }

    let limit = config.pool_size(count);
    let mut pool = CandidatePool::new();
    let mut attempts = Attempts::new();
    let mut tiers = Vec::new();
    let mut seed_id = None;
    let mut needs_popular = true;

    let candidates: Vec<&str> = tags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect();
    let tag = candidates.choose(rng).map(|tag| tag.to_string());

    if let Some(tag) = &tag {
        let seed_query = TagQuery {
            tag: tag.clone(),
            limit: 1,
            order: random_order(rng),
            offset: rng.random_range(0..=config.max_offset),
        };

        let seed = attempts
            .settle("seed", catalog.search_by_tag(&seed_query).await)
            .into_iter()
            .next();

        if let Some(seed) = seed {
            let id = seed.external_id.clone();
            pool.push(seed);
            tiers.push(FillTier::Seed);

            let similar = attempts.settle("similar", catalog.search_similar(&id, limit).await);
            if pool.extend(similar) > 0 {
                tiers.push(FillTier::Similar);
            }
            seed_id = Some(id);
        }

        if pool.len() >= count {
            needs_popular = false;
        } else {
            let fill_query = TagQuery {
                limit,
                ..seed_query
            };
            let found = attempts.settle("tag", catalog.search_by_tag(&fill_query).await);

            if !found.is_empty() {
                needs_popular = false;
                pool.extend(found);
                tiers.push(FillTier::Tag);
            } else if fill_query.offset > config.retry_offset {
                let retry_query = TagQuery {
                    offset: rng.random_range(0..=config.retry_offset),
                    ..fill_query
                };
                let found = attempts.settle("tag_retry", catalog.search_by_tag(&retry_query).await);

                if !found.is_empty() {
                    needs_popular = false;
                    pool.extend(found);
                    tiers.push(FillTier::TagRetry);
                }
            }
        }
    }

    if needs_popular {
        let popular_query = PopularQuery {
            limit,
            order: random_order(rng),
            offset: rng.random_range(0..=config.popular_max_offset),
        };
        let found = attempts.settle("popular", catalog.search_popular(&popular_query).await);
        if pool.extend(found) > 0 {
            tiers.push(FillTier::Popular);
        }
    }

    if attempts.succeeded == 0 {
        if let Some(error) = attempts.last_error {
            return Err(AssemblyError::CatalogUnavailable(error));
        }
    }

    let pool_len = pool.len();
    let tracks = pool.into_playlist(count, rng);

    Ok(AssemblyOutcome {
        tracks,
        tag,
        seed_id,
        tiers,
        pool_len,
    })
}
