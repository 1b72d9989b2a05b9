use anyhow::Context;
use tracing::{info, warn};

use super::dto::{MenuAnswer, MenuCreate, MenuUpdate};
use super::repo;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation::{normalize_optional_title, normalize_title};

fn duplicate_title(title: &str) -> String {
    format!("menu with title {:?} already exists", title)
}

pub async fn create_menu(st: &AppState, body: MenuCreate) -> Result<MenuAnswer, AppError> {
    let title = normalize_title(&body.title)?;

    let mut tx = st.db.begin().await.context("begin tx")?;
    let id = repo::insert_menu_tx(&mut tx, &title, &body.description)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, duplicate_title(&title)))?;
    let menu = repo::get_menu_by_id_tx(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound("menu"))?;
    tx.commit().await.context("commit tx")?;

    info!(menu_id = id, title = %menu.title, "menu created");
    Ok(menu.into())
}

pub async fn get_menu(st: &AppState, menu_id: i64) -> Result<MenuAnswer, AppError> {
    let mut tx = st.db.begin().await.context("begin tx")?;
    let menu = repo::get_menu_by_id_tx(&mut tx, menu_id).await?;
    tx.commit().await.context("commit tx")?;

    match menu {
        Some(m) => Ok(m.into()),
        None => {
            warn!(menu_id, "menu not found");
            Err(AppError::NotFound("menu"))
        }
    }
}

pub async fn get_menu_list(st: &AppState) -> Result<Vec<MenuAnswer>, AppError> {
    let mut tx = st.db.begin().await.context("begin tx")?;
    let menus = repo::list_menus_tx(&mut tx).await?;
    tx.commit().await.context("commit tx")?;

    Ok(menus.into_iter().map(MenuAnswer::from).collect())
}

pub async fn update_menu(
    st: &AppState,
    menu_id: i64,
    body: MenuUpdate,
) -> Result<MenuAnswer, AppError> {
    let title = normalize_optional_title(body.title.as_deref())?;

    let mut tx = st.db.begin().await.context("begin tx")?;
    let updated = repo::update_menu_tx(
        &mut tx,
        menu_id,
        title.as_deref(),
        body.description.as_deref(),
    )
    .await
    .map_err(|e| {
        AppError::conflict_on_unique(e, duplicate_title(title.as_deref().unwrap_or_default()))
    })?;
    if !updated {
        warn!(menu_id, "update of missing menu");
        return Err(AppError::NotFound("menu"));
    }
    let menu = repo::get_menu_by_id_tx(&mut tx, menu_id)
        .await?
        .ok_or(AppError::NotFound("menu"))?;
    tx.commit().await.context("commit tx")?;

    info!(menu_id, "menu updated");
    Ok(menu.into())
}

pub async fn delete_menu(st: &AppState, menu_id: i64) -> Result<(), AppError> {
    let mut tx = st.db.begin().await.context("begin tx")?;
    let deleted = repo::delete_menu_by_id_tx(&mut tx, menu_id).await?;
    tx.commit().await.context("commit tx")?;

    if !deleted {
        warn!(menu_id, "delete of missing menu");
        return Err(AppError::NotFound("menu"));
    }
    info!(menu_id, "menu deleted");
    Ok(())
}

/// Parent check shared by the submenu and dish services.
pub(crate) async fn ensure_menu_tx(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    menu_id: i64,
) -> Result<(), AppError> {
    if repo::menu_exists_tx(tx, menu_id).await? {
        Ok(())
    } else {
        warn!(menu_id, "menu not found");
        Err(AppError::NotFound("menu"))
    }
}
