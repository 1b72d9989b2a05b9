//! Submenu accessor. Lookups are always scoped to the owning menu.

use anyhow::Context;
use sqlx::{Postgres, Transaction};

use super::repo_types::SubmenuRow;

const SELECT_SUBMENU: &str = r#"
    SELECT s.id, s.menu_id, s.title, s.description,
           (SELECT COUNT(*) FROM dish d WHERE d.submenu_id = s.id) AS dishes_count
      FROM submenu s
"#;

pub async fn insert_submenu_tx(
    tx: &mut Transaction<'_, Postgres>,
    menu_id: i64,
    title: &str,
    description: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO submenu (menu_id, title, description)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(menu_id)
    .bind(title)
    .bind(description)
    .fetch_one(&mut **tx)
    .await
}

pub async fn get_submenu_by_id_tx(
    tx: &mut Transaction<'_, Postgres>,
    menu_id: i64,
    id: i64,
) -> anyhow::Result<Option<SubmenuRow>> {
    let row = sqlx::query_as::<_, SubmenuRow>(&format!(
        "{SELECT_SUBMENU} WHERE s.id = $1 AND s.menu_id = $2"
    ))
    .bind(id)
    .bind(menu_id)
    .fetch_optional(&mut **tx)
    .await
    .context("get submenu by id")?;
    Ok(row)
}

pub async fn list_submenus_tx(
    tx: &mut Transaction<'_, Postgres>,
    menu_id: i64,
) -> anyhow::Result<Vec<SubmenuRow>> {
    let rows = sqlx::query_as::<_, SubmenuRow>(&format!(
        "{SELECT_SUBMENU} WHERE s.menu_id = $1 ORDER BY s.id ASC"
    ))
    .bind(menu_id)
    .fetch_all(&mut **tx)
    .await
    .context("list submenus")?;
    Ok(rows)
}

pub async fn submenu_exists_tx(
    tx: &mut Transaction<'_, Postgres>,
    menu_id: i64,
    id: i64,
) -> anyhow::Result<bool> {
    let exists: bool = sqlx::query_scalar(
        r#"SELECT EXISTS (SELECT 1 FROM submenu WHERE id = $1 AND menu_id = $2)"#,
    )
    .bind(id)
    .bind(menu_id)
    .fetch_one(&mut **tx)
    .await
    .context("check submenu exists")?;
    Ok(exists)
}

pub async fn update_submenu_tx(
    tx: &mut Transaction<'_, Postgres>,
    menu_id: i64,
    id: i64,
    title: Option<&str>,
    description: Option<&str>,
) -> anyhow::Result<bool> {
    let res = sqlx::query(
        r#"
        UPDATE submenu
           SET title = COALESCE($3, title),
               description = COALESCE($4, description)
         WHERE id = $1 AND menu_id = $2
        "#,
    )
    .bind(id)
    .bind(menu_id)
    .bind(title)
    .bind(description)
    .execute(&mut **tx)
    .await
    .context("update submenu")?;
    Ok(res.rows_affected() > 0)
}

pub async fn delete_submenu_by_id_tx(
    tx: &mut Transaction<'_, Postgres>,
    menu_id: i64,
    id: i64,
) -> anyhow::Result<bool> {
    let res = sqlx::query(r#"DELETE FROM submenu WHERE id = $1 AND menu_id = $2"#)
        .bind(id)
        .bind(menu_id)
        .execute(&mut **tx)
        .await
        .context("delete submenu")?;
    Ok(res.rows_affected() > 0)
}
