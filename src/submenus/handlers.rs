use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::dto::{SubmenuAnswer, SubmenuCreate, SubmenuUpdate};
use super::services;
use crate::{
    dto::{DeletedAnswer, ErrorDetail},
    error::AppError,
    extractors::{ApiJson, ApiPath},
    state::AppState,
};

pub fn submenu_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/menus/:menu_id/submenus",
            get(list_submenus).post(create_submenu),
        )
        .route(
            "/menus/:menu_id/submenus/:submenu_id",
            get(get_submenu).patch(update_submenu).delete(delete_submenu),
        )
}

#[utoipa::path(
    get, path = "/api/v1/menus/{menu_id}/submenus", tag = "submenus",
    params(("menu_id" = i64, Path, description = "Menu id")),
    responses(
        (status = 200, description = "Submenus of the menu", body = [SubmenuAnswer]),
        (status = 404, description = "menu not found", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn list_submenus(
    State(state): State<AppState>,
    ApiPath(menu_id): ApiPath<i64>,
) -> Result<Json<Vec<SubmenuAnswer>>, AppError> {
    let submenus = services::get_submenus(&state, menu_id).await?;
    Ok(Json(submenus))
}

#[utoipa::path(
    post, path = "/api/v1/menus/{menu_id}/submenus", tag = "submenus",
    params(("menu_id" = i64, Path, description = "Menu id")),
    request_body = SubmenuCreate,
    responses(
        (status = 201, description = "Submenu created", body = SubmenuAnswer),
        (status = 404, description = "menu not found", body = ErrorDetail),
        (status = 422, description = "Invalid body", body = ErrorDetail)
    )
)]
#[instrument(skip(state, body))]
pub async fn create_submenu(
    State(state): State<AppState>,
    ApiPath(menu_id): ApiPath<i64>,
    ApiJson(body): ApiJson<SubmenuCreate>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<SubmenuAnswer>), AppError> {
    let submenu = services::create_submenu(&state, menu_id, body).await?;
    let location = format!("/api/v1/menus/{}/submenus/{}", menu_id, submenu.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(submenu)))
}

#[utoipa::path(
    get, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}", tag = "submenus",
    params(
        ("menu_id" = i64, Path, description = "Menu id"),
        ("submenu_id" = i64, Path, description = "Submenu id")
    ),
    responses(
        (status = 200, description = "Submenu with dish count", body = SubmenuAnswer),
        (status = 404, description = "submenu not found", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn get_submenu(
    State(state): State<AppState>,
    ApiPath((menu_id, submenu_id)): ApiPath<(i64, i64)>,
) -> Result<Json<SubmenuAnswer>, AppError> {
    let submenu = services::get_submenu(&state, menu_id, submenu_id).await?;
    Ok(Json(submenu))
}

#[utoipa::path(
    patch, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}", tag = "submenus",
    params(
        ("menu_id" = i64, Path, description = "Menu id"),
        ("submenu_id" = i64, Path, description = "Submenu id")
    ),
    request_body = SubmenuUpdate,
    responses(
        (status = 200, description = "Submenu updated", body = SubmenuAnswer),
        (status = 404, description = "submenu not found", body = ErrorDetail)
    )
)]
#[instrument(skip(state, body))]
pub async fn update_submenu(
    State(state): State<AppState>,
    ApiPath((menu_id, submenu_id)): ApiPath<(i64, i64)>,
    ApiJson(body): ApiJson<SubmenuUpdate>,
) -> Result<Json<SubmenuAnswer>, AppError> {
    let submenu = services::update_submenu(&state, menu_id, submenu_id, body).await?;
    Ok(Json(submenu))
}

#[utoipa::path(
    delete, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}", tag = "submenus",
    params(
        ("menu_id" = i64, Path, description = "Menu id"),
        ("submenu_id" = i64, Path, description = "Submenu id")
    ),
    responses(
        (status = 200, description = "Submenu and its dishes deleted", body = DeletedAnswer),
        (status = 404, description = "submenu not found", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn delete_submenu(
    State(state): State<AppState>,
    ApiPath((menu_id, submenu_id)): ApiPath<(i64, i64)>,
) -> Result<Json<DeletedAnswer>, AppError> {
    services::delete_submenu(&state, menu_id, submenu_id).await?;
    Ok(Json(DeletedAnswer::new("submenu")))
}
