//! Menu accessor. Every function runs on a transaction owned by the caller.

use anyhow::Context;
use sqlx::{Postgres, Transaction};

use super::repo_types::MenuRow;

const SELECT_MENU: &str = r#"
    SELECT m.id, m.title, m.description,
           (SELECT COUNT(*) FROM submenu s WHERE s.menu_id = m.id) AS submenus_count,
           (SELECT COUNT(*)
              FROM dish d
              JOIN submenu s ON s.id = d.submenu_id
             WHERE s.menu_id = m.id) AS dishes_count
      FROM menu m
"#;

/// Returns the id assigned by the database.
pub async fn insert_menu_tx(
    tx: &mut Transaction<'_, Postgres>,
    title: &str,
    description: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO menu (title, description)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(description)
    .fetch_one(&mut **tx)
    .await
}

pub async fn get_menu_by_id_tx(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
) -> anyhow::Result<Option<MenuRow>> {
    let row = sqlx::query_as::<_, MenuRow>(&format!("{SELECT_MENU} WHERE m.id = $1"))
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .context("get menu by id")?;
    Ok(row)
}

pub async fn list_menus_tx(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<Vec<MenuRow>> {
    let rows = sqlx::query_as::<_, MenuRow>(&format!("{SELECT_MENU} ORDER BY m.id ASC"))
        .fetch_all(&mut **tx)
        .await
        .context("list menus")?;
    Ok(rows)
}

pub async fn menu_exists_tx(tx: &mut Transaction<'_, Postgres>, id: i64) -> anyhow::Result<bool> {
    let exists: bool = sqlx::query_scalar(r#"SELECT EXISTS (SELECT 1 FROM menu WHERE id = $1)"#)
        .bind(id)
        .fetch_one(&mut **tx)
        .await
        .context("check menu exists")?;
    Ok(exists)
}

/// Absent fields keep their stored value. Returns false when no row matched.
pub async fn update_menu_tx(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let res = sqlx::query(
        r#"
        UPDATE menu
           SET title = COALESCE($2, title),
               description = COALESCE($3, description)
         WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .execute(&mut **tx)
    .await?;
    Ok(res.rows_affected() > 0)
}

/// Submenus and dishes go with it through `ON DELETE CASCADE`.
pub async fn delete_menu_by_id_tx(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
) -> anyhow::Result<bool> {
    let res = sqlx::query(r#"DELETE FROM menu WHERE id = $1"#)
        .bind(id)
        .execute(&mut **tx)
        .await
        .context("delete menu")?;
    Ok(res.rows_affected() > 0)
}
