use anyhow::Context;
use tracing::{info, warn};

use super::dto::{DishAnswer, DishCreate, DishUpdate};
use super::repo::{self, DishChanges, NewDish};
use crate::error::AppError;
use crate::state::AppState;
use crate::submenus::services::ensure_submenu_tx;
use crate::validation::{normalize_optional_title, normalize_title, parse_price};

pub async fn create_dish(
    st: &AppState,
    menu_id: i64,
    submenu_id: i64,
    body: DishCreate,
) -> Result<DishAnswer, AppError> {
    let title = normalize_title(&body.title)?;
    let price = parse_price(&body.price)?;
    let new_dish = NewDish {
        submenu_id,
        title: &title,
        description: &body.description,
        price,
    };

    let mut tx = st.db.begin().await.context("begin tx")?;
    ensure_submenu_tx(&mut tx, menu_id, submenu_id).await?;
    let id = repo::insert_dish_tx(&mut tx, &new_dish)
        .await
        .map_err(|e| AppError::parent_missing_on_foreign_key(e, "submenu"))?;
    let dish = repo::get_dish_by_id_tx(&mut tx, menu_id, submenu_id, id)
        .await?
        .ok_or(AppError::NotFound("dish"))?;
    tx.commit().await.context("commit tx")?;

    info!(dish_id = id, submenu_id = dish.submenu_id, price = %dish.price, "dish created");
    Ok(dish.into())
}

pub async fn get_dish(
    st: &AppState,
    menu_id: i64,
    submenu_id: i64,
    dish_id: i64,
) -> Result<DishAnswer, AppError> {
    let mut tx = st.db.begin().await.context("begin tx")?;
    let dish = repo::get_dish_by_id_tx(&mut tx, menu_id, submenu_id, dish_id).await?;
    tx.commit().await.context("commit tx")?;

    match dish {
        Some(d) => Ok(d.into()),
        None => {
            warn!(menu_id, submenu_id, dish_id, "dish not found");
            Err(AppError::NotFound("dish"))
        }
    }
}

pub async fn get_dishes(
    st: &AppState,
    menu_id: i64,
    submenu_id: i64,
) -> Result<Vec<DishAnswer>, AppError> {
    let mut tx = st.db.begin().await.context("begin tx")?;
    ensure_submenu_tx(&mut tx, menu_id, submenu_id).await?;
    let dishes = repo::list_dishes_tx(&mut tx, menu_id, submenu_id).await?;
    tx.commit().await.context("commit tx")?;

    Ok(dishes.into_iter().map(DishAnswer::from).collect())
}

pub async fn update_dish(
    st: &AppState,
    menu_id: i64,
    submenu_id: i64,
    dish_id: i64,
    body: DishUpdate,
) -> Result<DishAnswer, AppError> {
    let title = normalize_optional_title(body.title.as_deref())?;
    let price = body.price.as_ref().map(parse_price).transpose()?;
    let changes = DishChanges {
        title: title.as_deref(),
        description: body.description.as_deref(),
        price,
    };

    let mut tx = st.db.begin().await.context("begin tx")?;
    let updated = repo::update_dish_tx(&mut tx, menu_id, submenu_id, dish_id, &changes).await?;
    if !updated {
        warn!(menu_id, submenu_id, dish_id, "update of missing dish");
        return Err(AppError::NotFound("dish"));
    }
    let dish = repo::get_dish_by_id_tx(&mut tx, menu_id, submenu_id, dish_id)
        .await?
        .ok_or(AppError::NotFound("dish"))?;
    tx.commit().await.context("commit tx")?;

    info!(dish_id, "dish updated");
    Ok(dish.into())
}

pub async fn delete_dish(
    st: &AppState,
    menu_id: i64,
    submenu_id: i64,
    dish_id: i64,
) -> Result<(), AppError> {
    let mut tx = st.db.begin().await.context("begin tx")?;
    let deleted = repo::delete_dish_by_id_tx(&mut tx, menu_id, submenu_id, dish_id).await?;
    tx.commit().await.context("commit tx")?;

    if !deleted {
        warn!(menu_id, submenu_id, dish_id, "delete of missing dish");
        return Err(AppError::NotFound("dish"));
    }
    info!(dish_id, "dish deleted");
    Ok(())
}
