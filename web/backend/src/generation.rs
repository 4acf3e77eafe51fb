use crate::error::{AppError, AppResult};
use crate::ingestion::ingest_tracks;
use crate::models::PeriodPlaylist;
use crate::store::{Brand, Store};
use rand::Rng;
use tracing::info;
use vibecurate_core::{AssemblyConfig, BrandStatus, Period, TrackCatalog, assemble_period};

/// Assembles, stores and returns one playlist per scheduled period, then marks
/// the brand `completed`. Periods run one after another.
pub async fn generate_playlists<C, R>(
    store: &Store,
    catalog: &C,
    brand: &Brand,
    config: &AssemblyConfig,
    rng: &mut R,
) -> AppResult<Vec<PeriodPlaylist>>
where
    C: TrackCatalog + Sync,
    R: Rng + Send,
{
    let ranges = brand
        .bpm_ranges
        .as_ref()
        .or(brand.profile.as_ref().map(|profile| &profile.bpm_ranges))
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "brand {} has no sound profile yet, curate it first",
                brand.id
            ))
        })?;

    let counts = brand
        .time_distribution
        .tracks_per_period(brand.track_count as usize)?;

    let mut playlists = Vec::with_capacity(Period::SCHEDULED.len());

    for period in Period::SCHEDULED {
        let range = ranges.get(period);
        let count = counts.get(period);

        let outcome = assemble_period(catalog, &range.genres, count, config, rng)
            .await
            .map_err(|err| AppError::CatalogUnavailable(format!("{} playlist: {}", period, err)))?;

        info!(
            brand_id = brand.id,
            %period,
            requested = count,
            pool = outcome.pool_len,
            found = outcome.tracks.len(),
            tag = outcome.tag.as_deref().unwrap_or("-"),
            tiers = ?outcome.tiers,
            "Assembled period playlist"
        );

        let ids = ingest_tracks(store, &outcome.tracks, period, range, rng).await;
        let playlist_id = store.insert_playlist(brand.id, period, range, &ids).await?;
        let tracks = store.tracks_by_ids(&ids).await?;

        playlists.push(PeriodPlaylist {
            id: playlist_id,
            period: period.as_str().to_string(),
            bpm_range: range.label(),
            genres: range.genres.clone(),
            track_count: tracks.len(),
            tracks,
        });
    }

    store.set_brand_status(brand.id, BrandStatus::Completed).await?;
    Ok(playlists)
}
