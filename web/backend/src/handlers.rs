use crate::error::{AppError, AppResult};
use crate::generation::generate_playlists;
use crate::models::{
    Analysis, BrandQuery, BrandResponse, BrandsResponse, CreateBrandRequest, CurateRequest,
    CurateResponse, DeleteResponse, GeneratePlaylistsRequest, HealthResponse, MusicQuery,
    MusicResponse, PeriodPlaylist, PlayLogRequest, PlayLogResponse, PlaylistsQuery,
    PlaylistsResponse, TracksResponse, UpdateBrandRequest,
};
use crate::state::AppState;
use crate::store::{BrandUpdate, NewBrand, NewPlayLog};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;
use tracing::{info, warn};
use vibecurate_core::{
    BrandInput, BrandStatus, PopularQuery, SearchOrder, TagQuery, TimeDistribution, TrackCatalog,
};

const MUSIC_LIMIT: usize = 20;

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text())))
}

fn query<T>(params: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    params
        .map(|Query(value)| value)
        .map_err(|rejection| AppError::BadRequest(format!("Invalid query string: {}", rejection.body_text())))
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_distribution(distribution: &TimeDistribution) -> AppResult<()> {
    distribution.validate()?;
    Ok(())
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Vibecurate API is running".to_string(),
    })
}

pub async fn create_brand(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBrandRequest>, JsonRejection>,
) -> AppResult<Json<BrandResponse>> {
    let request = body(payload)?;

    let name = request.name.trim().to_string();
    let track_count = request.track_count.filter(|count| *count > 0);
    let Some(track_count) = track_count.filter(|_| !name.is_empty()) else {
        return Err(AppError::BadRequest("Name and track_count required".to_string()));
    };

    let time_distribution = request.time_distribution.unwrap_or_default();
    validate_distribution(&time_distribution)?;

    if state.store.find_brand_by_name(&name).await?.is_some() {
        return Err(AppError::Conflict(format!("Brand {} already exists", name)));
    }

    let brand = state
        .store
        .create_brand(&NewBrand {
            name,
            description: trimmed(request.description),
            sector: trimmed(request.sector),
            track_count,
            time_distribution,
        })
        .await?;

    info!(brand_id = brand.id, name = %brand.name, "Brand created");
    Ok(Json(BrandResponse { brand }))
}

/// `GET /brands` lists every brand; `GET /brands?id=` returns one.
pub async fn get_brands(
    State(state): State<Arc<AppState>>,
    params: Result<Query<BrandQuery>, QueryRejection>,
) -> AppResult<Response> {
    match query(params)?.id {
        Some(id) => {
            let brand = state
                .store
                .find_brand(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Brand {} not found", id)))?;
            Ok(Json(BrandResponse { brand }).into_response())
        }
        None => {
            let brands = state.store.list_brands().await?;
            Ok(Json(BrandsResponse { brands }).into_response())
        }
    }
}

pub async fn update_brand(
    State(state): State<Arc<AppState>>,
    params: Result<Query<BrandQuery>, QueryRejection>,
    payload: Result<Json<UpdateBrandRequest>, JsonRejection>,
) -> AppResult<Json<BrandResponse>> {
    let id = query(params)?
        .id
        .ok_or_else(|| AppError::BadRequest("Brand ID required".to_string()))?;
    let request = body(payload)?;

    let current = state
        .store
        .find_brand(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Brand {} not found", id)))?;

    let name = match request.name {
        Some(name) if name.trim().is_empty() => {
            return Err(AppError::BadRequest("Name cannot be empty".to_string()));
        }
        Some(name) => Some(name.trim().to_string()),
        None => None,
    };
    if request.track_count == Some(0) {
        return Err(AppError::BadRequest("track_count must be positive".to_string()));
    }
    if let Some(distribution) = &request.time_distribution {
        validate_distribution(distribution)?;
    }
    if let Some(status) = request.status {
        if !current.status.can_transition_to(status) {
            return Err(AppError::BadRequest(format!(
                "Cannot move brand from {} to {}",
                current.status, status
            )));
        }
    }

    let update = BrandUpdate {
        name,
        description: request.description,
        sector: request.sector,
        track_count: request.track_count,
        time_distribution: request.time_distribution,
        status: request.status,
    };

    let brand = state
        .store
        .update_brand(id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Brand {} not found", id)))?;

    Ok(Json(BrandResponse { brand }))
}

pub async fn delete_brand(
    State(state): State<Arc<AppState>>,
    params: Result<Query<BrandQuery>, QueryRejection>,
) -> AppResult<Json<DeleteResponse>> {
    let id = query(params)?
        .id
        .ok_or_else(|| AppError::BadRequest("Brand ID required".to_string()))?;

    if !state.store.delete_brand(id).await? {
        return Err(AppError::NotFound(format!("Brand {} not found", id)));
    }

    info!(brand_id = id, "Brand deleted");
    Ok(Json(DeleteResponse { success: true }))
}

pub async fn curate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CurateRequest>, JsonRejection>,
) -> AppResult<Json<CurateResponse>> {
    let request = body(payload)?;

    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Company name required".to_string()));
    }

    // Unknown brands fail before the profile call
    let brand = match request.brand_id {
        Some(id) => Some(
            state
                .store
                .find_brand(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Brand {} not found", id)))?,
        ),
        None => None,
    };

    let mut input = BrandInput::new(name);
    input.sector = trimmed(request.sector).or_else(|| brand.as_ref().and_then(|b| b.sector.clone()));
    input.description =
        trimmed(request.description).or_else(|| brand.as_ref().and_then(|b| b.description.clone()));

    let profile = state.curator.profile(&input).await;

    let status = match &brand {
        Some(brand) => {
            let saved = state
                .store
                .save_profile(brand.id, &profile, BrandStatus::Analyzing)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Brand {} not found", brand.id)))?;
            info!(brand_id = saved.id, segment = %profile.segment, source = ?profile.source, "Brand profile saved");
            Some(saved.status)
        }
        None => None,
    };

    Ok(Json(CurateResponse {
        analysis: Analysis {
            brand_profile: profile,
            brand_id: brand.map(|b| b.id),
            status,
        },
    }))
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GeneratePlaylistsRequest>, JsonRejection>,
) -> AppResult<Json<PlaylistsResponse>> {
    let request = body(payload)?;
    let id = request
        .brand_id
        .ok_or_else(|| AppError::BadRequest("Brand ID required".to_string()))?;

    let brand = state
        .store
        .find_brand(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Brand {} not found", id)))?;

    let catalog = state
        .catalog
        .as_ref()
        .ok_or_else(|| AppError::Config("JAMENDO_CLIENT_ID is not configured".to_string()))?;

    let mut rng = state.rng();
    let playlists =
        generate_playlists(&state.store, catalog, &brand, &state.assembly, &mut rng).await?;

    info!(
        brand_id = id,
        tracks = playlists.iter().map(|p| p.track_count).sum::<usize>(),
        "Playlists generated"
    );
    Ok(Json(PlaylistsResponse { playlists }))
}

pub async fn get_playlists(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PlaylistsQuery>, QueryRejection>,
) -> AppResult<Json<PlaylistsResponse>> {
    let id = query(params)?
        .brand_id
        .ok_or_else(|| AppError::BadRequest("Brand ID required".to_string()))?;

    let mut playlists = Vec::new();
    for stored in state.store.latest_playlists(id).await? {
        let tracks = state.store.tracks_by_ids(&stored.track_ids).await?;
        playlists.push(PeriodPlaylist {
            id: stored.id,
            bpm_range: format!("{}-{}", stored.bpm_min, stored.bpm_max),
            period: stored.time_period,
            genres: stored.genres.0,
            track_count: tracks.len(),
            tracks,
        });
    }

    Ok(Json(PlaylistsResponse { playlists }))
}

pub async fn get_tracks(State(state): State<Arc<AppState>>) -> AppResult<Json<TracksResponse>> {
    let tracks = state.store.list_tracks().await?;
    Ok(Json(TracksResponse { tracks }))
}

pub async fn play_log(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PlayLogRequest>, JsonRejection>,
) -> AppResult<Json<PlayLogResponse>> {
    let request = payload.map_err(|_| AppError::BadRequest("Invalid JSON data".to_string()))?.0;

    let track_id = match request.track_id {
        Some(serde_json::Value::String(id)) => Some(id),
        Some(serde_json::Value::Number(id)) => Some(id.to_string()),
        _ => None,
    };
    let (Some(company), Some(track_id), Some(started_at)) = (
        trimmed(request.company),
        trimmed(track_id),
        trimmed(request.started_at),
    ) else {
        return Err(AppError::BadRequest(
            "Missing required fields: company, track_id, started_at".to_string(),
        ));
    };

    state
        .store
        .insert_play_log(&NewPlayLog {
            company,
            track_id,
            started_at,
            ended_at: trimmed(request.ended_at),
        })
        .await?;

    Ok(Json(PlayLogResponse {
        success: true,
        message: "Log recorded successfully".to_string(),
    }))
}

/// Ad-hoc catalog lookup by the first tag, falling back to popular tracks.
pub async fn search_music(
    State(state): State<Arc<AppState>>,
    params: Result<Query<MusicQuery>, QueryRejection>,
) -> AppResult<Json<MusicResponse>> {
    let tag = query(params)?
        .tags
        .as_deref()
        .and_then(|tags| tags.split(',').map(str::trim).find(|tag| !tag.is_empty()))
        .ok_or_else(|| AppError::BadRequest("Tags required".to_string()))?
        .to_string();

    let catalog = state
        .catalog
        .as_ref()
        .ok_or_else(|| AppError::Config("JAMENDO_CLIENT_ID is not configured".to_string()))?;

    let query = TagQuery {
        tag,
        limit: MUSIC_LIMIT,
        order: SearchOrder::Relevance,
        offset: 0,
    };
    let mut tracks = catalog
        .search_by_tag(&query)
        .await
        .map_err(|err| AppError::CatalogUnavailable(err.to_string()))?;

    if tracks.is_empty() {
        warn!(tag = %query.tag, "No tracks for tag, falling back to popular tracks");
        let popular = PopularQuery {
            limit: MUSIC_LIMIT,
            order: SearchOrder::PopularityTotal,
            offset: 0,
        };
        tracks = catalog
            .search_popular(&popular)
            .await
            .map_err(|err| AppError::CatalogUnavailable(err.to_string()))?;
    }

    Ok(Json(MusicResponse { tracks }))
}
