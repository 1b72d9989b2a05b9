use anyhow::Context;
use tracing::{info, warn};

use super::dto::{SubmenuAnswer, SubmenuCreate, SubmenuUpdate};
use super::repo;
use crate::error::AppError;
use crate::menus::services::ensure_menu_tx;
use crate::state::AppState;
use crate::validation::{normalize_optional_title, normalize_title};

pub async fn create_submenu(
    st: &AppState,
    menu_id: i64,
    body: SubmenuCreate,
) -> Result<SubmenuAnswer, AppError> {
    let title = normalize_title(&body.title)?;

    let mut tx = st.db.begin().await.context("begin tx")?;
    ensure_menu_tx(&mut tx, menu_id).await?;
    let id = repo::insert_submenu_tx(&mut tx, menu_id, &title, &body.description)
        .await
        .map_err(|e| AppError::parent_missing_on_foreign_key(e, "menu"))?;
    let submenu = repo::get_submenu_by_id_tx(&mut tx, menu_id, id)
        .await?
        .ok_or(AppError::NotFound("submenu"))?;
    tx.commit().await.context("commit tx")?;

    info!(submenu_id = id, menu_id = submenu.menu_id, "submenu created");
    Ok(submenu.into())
}

pub async fn get_submenu(
    st: &AppState,
    menu_id: i64,
    submenu_id: i64,
) -> Result<SubmenuAnswer, AppError> {
    let mut tx = st.db.begin().await.context("begin tx")?;
    let submenu = repo::get_submenu_by_id_tx(&mut tx, menu_id, submenu_id).await?;
    tx.commit().await.context("commit tx")?;

    match submenu {
        Some(s) => Ok(s.into()),
        None => {
            warn!(menu_id, submenu_id, "submenu not found");
            Err(AppError::NotFound("submenu"))
        }
    }
}

pub async fn get_submenus(st: &AppState, menu_id: i64) -> Result<Vec<SubmenuAnswer>, AppError> {
    let mut tx = st.db.begin().await.context("begin tx")?;
    ensure_menu_tx(&mut tx, menu_id).await?;
    let submenus = repo::list_submenus_tx(&mut tx, menu_id).await?;
    tx.commit().await.context("commit tx")?;

    Ok(submenus.into_iter().map(SubmenuAnswer::from).collect())
}

pub async fn update_submenu(
    st: &AppState,
    menu_id: i64,
    submenu_id: i64,
    body: SubmenuUpdate,
) -> Result<SubmenuAnswer, AppError> {
    let title = normalize_optional_title(body.title.as_deref())?;

    let mut tx = st.db.begin().await.context("begin tx")?;
    let updated = repo::update_submenu_tx(
        &mut tx,
        menu_id,
        submenu_id,
        title.as_deref(),
        body.description.as_deref(),
    )
    .await?;
    if !updated {
        warn!(menu_id, submenu_id, "update of missing submenu");
        return Err(AppError::NotFound("submenu"));
    }
    let submenu = repo::get_submenu_by_id_tx(&mut tx, menu_id, submenu_id)
        .await?
        .ok_or(AppError::NotFound("submenu"))?;
    tx.commit().await.context("commit tx")?;

    info!(menu_id, submenu_id, "submenu updated");
    Ok(submenu.into())
}

pub async fn delete_submenu(st: &AppState, menu_id: i64, submenu_id: i64) -> Result<(), AppError> {
    let mut tx = st.db.begin().await.context("begin tx")?;
    let deleted = repo::delete_submenu_by_id_tx(&mut tx, menu_id, submenu_id).await?;
    tx.commit().await.context("commit tx")?;

    if !deleted {
        warn!(menu_id, submenu_id, "delete of missing submenu");
        return Err(AppError::NotFound("submenu"));
    }
    info!(menu_id, submenu_id, "submenu deleted");
    Ok(())
}

pub(crate) async fn ensure_submenu_tx(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    menu_id: i64,
    submenu_id: i64,
) -> Result<(), AppError> {
    if repo::submenu_exists_tx(tx, menu_id, submenu_id).await? {
        Ok(())
    } else {
        warn!(menu_id, submenu_id, "submenu not found");
        Err(AppError::NotFound("submenu"))
    }
}
