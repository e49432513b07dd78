//! Handlers for the `/flowers` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hapipath_core::error::CoreError;
use hapipath_core::flower::{CreateFlowerInput, Flower, FlowerFilter};
use hapipath_core::geo::parse_bbox;
use hapipath_core::pagination::{normalize_cursor, parse_limit, Page};
use hapipath_core::types::{new_id, now_iso};
use hapipath_db::models::flower::into_flowers;
use hapipath_db::repositories::FlowerRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::identity::Caller;
use crate::query::ListFlowersParams;
use crate::state::AppState;

const ENTITY: &str = "Flower";

/// GET /flowers
///
/// At most one filter applies, chosen by [`FlowerFilter::select`].
pub async fn list(
    State(state): State<AppState>,
    caller: Caller,
    AppQuery(params): AppQuery<ListFlowersParams>,
) -> AppResult<Json<Page<Flower>>> {
    let bbox = match params.bbox.as_deref() {
        Some(raw) if !raw.is_empty() => Some(parse_bbox(raw)?),
        _ => None,
    };
    let filter = FlowerFilter::select(
        bbox,
        params.owner.as_deref(),
        params.flower_type.as_deref(),
        &caller.user_id,
    );
    let limit = parse_limit(params.limit.as_deref());
    let cursor = normalize_cursor(params.cursor);
    tracing::debug!(?filter, limit, cursor = ?cursor, "Listing flowers");

    let rows = FlowerRepo::list(&state.pool, &filter, cursor.as_deref(), limit).await?;
    Ok(Json(Page::from_items(into_flowers(rows)?, limit)))
}

/// POST /flowers
pub async fn create(
    State(state): State<AppState>,
    caller: Caller,
    AppJson(input): AppJson<CreateFlowerInput>,
) -> AppResult<(StatusCode, Json<Flower>)> {
    let flower = input.into_flower(new_id(), caller.user_id, now_iso())?;
    let row = FlowerRepo::create(&state.pool, &flower).await?;
    tracing::info!(flower_id = %row.id, "Flower planted");
    Ok((StatusCode::CREATED, Json(Flower::try_from(row)?)))
}

/// GET /flowers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<Flower>> {
    let row = FlowerRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(Flower::try_from(row)?))
}

/// DELETE /flowers/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<StatusCode> {
    if FlowerRepo::delete(&state.pool, &id).await? {
        tracing::info!(flower_id = %id, "Flower deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
