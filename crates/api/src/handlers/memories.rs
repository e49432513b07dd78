//! Handlers for the memory resources.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hapipath_core::error::CoreError;
use hapipath_core::geo::{location_matches, require_location_id, validate_location_id};
use hapipath_core::memory::{CreateMemoryInput, Memory, UpdateMemoryInput};
use hapipath_core::pagination::{normalize_cursor, parse_limit, Page};
use hapipath_core::types::{new_id, now_iso};
use hapipath_db::repositories::MemoryRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::identity::Caller;
use crate::query::ListMemoriesParams;
use crate::state::AppState;

const ENTITY: &str = "Memory";

/// GET /locations/{locationId}/memories
pub async fn list_for_location(
    State(state): State<AppState>,
    AppPath(location_id): AppPath<String>,
    AppQuery(params): AppQuery<ListMemoriesParams>,
) -> AppResult<Json<Page<Memory>>> {
    validate_location_id(&location_id)?;

    let limit = parse_limit(params.limit.as_deref());
    let cursor = normalize_cursor(params.cursor);

    let rows =
        MemoryRepo::list_by_location(&state.pool, &location_id, cursor.as_deref(), limit).await?;
    let memories = rows.into_iter().map(Memory::from).collect();
    Ok(Json(Page::from_items(memories, limit)))
}

/// POST /locations/{locationId}/memories
pub async fn create_at_location(
    State(state): State<AppState>,
    caller: Caller,
    AppPath(location_id): AppPath<String>,
    AppJson(input): AppJson<CreateMemoryInput>,
) -> AppResult<(StatusCode, Json<Memory>)> {
    input.check()?;
    validate_location_id(&location_id)?;
    insert(&state, caller, location_id, input).await
}

/// POST /memories
///
/// Same as [`create_at_location`] with the location key in the body.
pub async fn create(
    State(state): State<AppState>,
    caller: Caller,
    AppJson(input): AppJson<CreateMemoryInput>,
) -> AppResult<(StatusCode, Json<Memory>)> {
    input.check()?;
    let location_id = require_location_id(input.location_id.as_deref())?.to_string();
    insert(&state, caller, location_id, input).await
}

async fn insert(
    state: &AppState,
    caller: Caller,
    location_id: String,
    input: CreateMemoryInput,
) -> AppResult<(StatusCode, Json<Memory>)> {
    let memory = input.into_memory(new_id(), caller.user_id, location_id, now_iso())?;

    if !location_matches(&memory.location_id, memory.lat, memory.lon) {
        tracing::warn!(
            location_id = %memory.location_id,
            lat = memory.lat,
            lon = memory.lon,
            "Location ID does not match the coordinates' geohash cell",
        );
    }

    let row = MemoryRepo::create(&state.pool, &memory).await?;
    tracing::info!(memory_id = %row.id, location_id = %row.location_id, "Memory created");
    Ok((StatusCode::CREATED, Json(Memory::from(row))))
}

/// GET /memories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<Memory>> {
    let row = MemoryRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(Memory::from(row)))
}

/// PATCH /memories/{id}
///
/// Absent or empty fields keep their stored values; `updatedAt` is always
/// refreshed.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(input): AppJson<UpdateMemoryInput>,
) -> AppResult<Json<Memory>> {
    let input = input.normalized()?;
    let row = MemoryRepo::update(&state.pool, &id, &input, &now_iso())
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(memory_id = %row.id, "Memory updated");
    Ok(Json(Memory::from(row)))
}

/// DELETE /memories/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<StatusCode> {
    if MemoryRepo::delete(&state.pool, &id).await? {
        tracing::info!(memory_id = %id, "Memory deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
