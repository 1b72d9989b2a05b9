use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::dto::{DishAnswer, DishCreate, DishUpdate};
use super::services;
use crate::{
    dto::{DeletedAnswer, ErrorDetail},
    error::AppError,
    extractors::{ApiJson, ApiPath},
    state::AppState,
};

pub fn dish_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/menus/:menu_id/submenus/:submenu_id/dishes",
            get(list_dishes).post(create_dish),
        )
        .route(
            "/menus/:menu_id/submenus/:submenu_id/dishes/:dish_id",
            get(get_dish).patch(update_dish).delete(delete_dish),
        )
}

#[utoipa::path(
    get, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes", tag = "dishes",
    params(
        ("menu_id" = i64, Path, description = "Menu id"),
        ("submenu_id" = i64, Path, description = "Submenu id")
    ),
    responses(
        (status = 200, description = "Dishes of the submenu", body = [DishAnswer]),
        (status = 404, description = "submenu not found", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn list_dishes(
    State(state): State<AppState>,
    ApiPath((menu_id, submenu_id)): ApiPath<(i64, i64)>,
) -> Result<Json<Vec<DishAnswer>>, AppError> {
    let dishes = services::get_dishes(&state, menu_id, submenu_id).await?;
    Ok(Json(dishes))
}

#[utoipa::path(
    post, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes", tag = "dishes",
    params(
        ("menu_id" = i64, Path, description = "Menu id"),
        ("submenu_id" = i64, Path, description = "Submenu id")
    ),
    request_body = DishCreate,
    responses(
        (status = 201, description = "Dish created", body = DishAnswer),
        (status = 404, description = "submenu not found", body = ErrorDetail),
        (status = 422, description = "Invalid body or price", body = ErrorDetail)
    )
)]
#[instrument(skip(state, body))]
pub async fn create_dish(
    State(state): State<AppState>,
    ApiPath((menu_id, submenu_id)): ApiPath<(i64, i64)>,
    ApiJson(body): ApiJson<DishCreate>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<DishAnswer>), AppError> {
    let dish = services::create_dish(&state, menu_id, submenu_id, body).await?;
    let location = format!(
        "/api/v1/menus/{}/submenus/{}/dishes/{}",
        menu_id, submenu_id, dish.id
    );
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dish)))
}

#[utoipa::path(
    get, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}", tag = "dishes",
    params(
        ("menu_id" = i64, Path, description = "Menu id"),
        ("submenu_id" = i64, Path, description = "Submenu id"),
        ("dish_id" = i64, Path, description = "Dish id")
    ),
    responses(
        (status = 200, description = "Dish", body = DishAnswer),
        (status = 404, description = "dish not found", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn get_dish(
    State(state): State<AppState>,
    ApiPath((menu_id, submenu_id, dish_id)): ApiPath<(i64, i64, i64)>,
) -> Result<Json<DishAnswer>, AppError> {
    let dish = services::get_dish(&state, menu_id, submenu_id, dish_id).await?;
    Ok(Json(dish))
}

#[utoipa::path(
    patch, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}", tag = "dishes",
    params(
        ("menu_id" = i64, Path, description = "Menu id"),
        ("submenu_id" = i64, Path, description = "Submenu id"),
        ("dish_id" = i64, Path, description = "Dish id")
    ),
    request_body = DishUpdate,
    responses(
        (status = 200, description = "Dish updated", body = DishAnswer),
        (status = 404, description = "dish not found", body = ErrorDetail),
        (status = 422, description = "Invalid body or price", body = ErrorDetail)
    )
)]
#[instrument(skip(state, body))]
pub async fn update_dish(
    State(state): State<AppState>,
    ApiPath((menu_id, submenu_id, dish_id)): ApiPath<(i64, i64, i64)>,
    ApiJson(body): ApiJson<DishUpdate>,
) -> Result<Json<DishAnswer>, AppError> {
    let dish = services::update_dish(&state, menu_id, submenu_id, dish_id, body).await?;
    Ok(Json(dish))
}

#[utoipa::path(
    delete, path = "/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}", tag = "dishes",
    params(
        ("menu_id" = i64, Path, description = "Menu id"),
        ("submenu_id" = i64, Path, description = "Submenu id"),
        ("dish_id" = i64, Path, description = "Dish id")
    ),
    responses(
        (status = 200, description = "Dish deleted", body = DeletedAnswer),
        (status = 404, description = "dish not found", body = ErrorDetail)
    )
)]
#[instrument(skip(state))]
pub async fn delete_dish(
    State(state): State<AppState>,
    ApiPath((menu_id, submenu_id, dish_id)): ApiPath<(i64, i64, i64)>,
) -> Result<Json<DeletedAnswer>, AppError> {
    services::delete_dish(&state, menu_id, submenu_id, dish_id).await?;
    Ok(Json(DeletedAnswer::new("dish")))
}
