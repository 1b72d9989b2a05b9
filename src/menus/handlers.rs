use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::dto::{MenuAnswer, MenuCreate, MenuUpdate};
use super::services;
use crate::{
    dto::{DeletedAnswer, ErrorDetail},
    error::AppError,
    extractors::{ApiJson, ApiPath},
    state::AppState,
};

pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menus", get(list_menus).post(create_menu))
        .route(
            "/menus/:menu_id",
            get(get_menu).patch(update_menu).delete(delete_menu),
        )
}

#[utoipa::path(
    get, path = "/api/v1/menus", tag = "menus",
    responses((status = 200, description = "All menus", body = [MenuAnswer]))
)]
#[instrument(skip(state))]
pub async fn list_menus(State(state): State<AppState>) -> Result<Json<Vec<MenuAnswer>>, AppError> {
    let menus = services::get_menu_list(&state).await?;
    Ok(Json(menus))
}

#[utoipa::path(
    post, path = "/api/v1/menus", tag = "menus",
    request_body = MenuCreate,
    responses(
        (status = 201, description = "Menu created", body = MenuAnswer),
        (status = 409, description = "Title already taken", body = ErrorDetail),
        (status = 422, description = "Invalid body", body = ErrorDetail)
    )
)]
#[instrument(skip(state, body))]
pub async fn create_menu(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MenuCreate>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<MenuAnswer>), AppError> {
    let menu = services::create_menu(&state, body).await?;
    let location = format!("/api/v1/menus/{}", menu.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(menu)))
}

#[utoipa::path(
    get, path = "/api/v1/menus/{menu_id}", tag = "menus",
    params(("menu_id" = i64, Path, description = "Menu id")),
    responses(
        (status = 200, description = "Menu with child counts", body = MenuAnswer),
        (status = 404, description = "menu not found", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn get_menu(
    State(state): State<AppState>,
    ApiPath(menu_id): ApiPath<i64>,
) -> Result<Json<MenuAnswer>, AppError> {
    let menu = services::get_menu(&state, menu_id).await?;
    Ok(Json(menu))
}

#[utoipa::path(
    patch, path = "/api/v1/menus/{menu_id}", tag = "menus",
    params(("menu_id" = i64, Path, description = "Menu id")),
    request_body = MenuUpdate,
    responses(
        (status = 200, description = "Menu updated", body = MenuAnswer),
        (status = 404, description = "menu not found", body = ErrorDetail),
        (status = 409, description = "Title already taken", body = ErrorDetail)
    )
)]
#[instrument(skip(state, body))]
pub async fn update_menu(
    State(state): State<AppState>,
    ApiPath(menu_id): ApiPath<i64>,
    ApiJson(body): ApiJson<MenuUpdate>,
) -> Result<Json<MenuAnswer>, AppError> {
    let menu = services::update_menu(&state, menu_id, body).await?;
    Ok(Json(menu))
}

#[utoipa::path(
    delete, path = "/api/v1/menus/{menu_id}", tag = "menus",
    params(("menu_id" = i64, Path, description = "Menu id")),
    responses(
        (status = 200, description = "Menu and its children deleted", body = DeletedAnswer),
        (status = 404, description = "menu not found", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn delete_menu(
    State(state): State<AppState>,
    ApiPath(menu_id): ApiPath<i64>,
) -> Result<Json<DeletedAnswer>, AppError> {
    services::delete_menu(&state, menu_id).await?;
    Ok(Json(DeletedAnswer::new("menu")))
}
