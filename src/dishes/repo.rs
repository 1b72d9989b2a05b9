//! Dish accessor. A dish is addressed by its full path: menu, submenu, dish.

use anyhow::Context;
use sqlx::{types::Decimal, Postgres, Transaction};

use super::repo_types::DishRow;

const SELECT_DISH: &str = r#"
    SELECT d.id, d.submenu_id, d.title, d.description, d.price
      FROM dish d
      JOIN submenu s ON s.id = d.submenu_id
"#;

pub struct NewDish<'a> {
    pub submenu_id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub price: Decimal,
}

pub struct DishChanges<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub price: Option<Decimal>,
}

pub async fn insert_dish_tx(
    tx: &mut Transaction<'_, Postgres>,
    dish: &NewDish<'_>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO dish (submenu_id, title, description, price)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(dish.submenu_id)
    .bind(dish.title)
    .bind(dish.description)
    .bind(dish.price)
    .fetch_one(&mut **tx)
    .await
}

pub async fn get_dish_by_id_tx(
    tx: &mut Transaction<'_, Postgres>,
    menu_id: i64,
    submenu_id: i64,
    id: i64,
) -> anyhow::Result<Option<DishRow>> {
    let row = sqlx::query_as::<_, DishRow>(&format!(
        "{SELECT_DISH} WHERE d.id = $1 AND d.submenu_id = $2 AND s.menu_id = $3"
    ))
    .bind(id)
    .bind(submenu_id)
    .bind(menu_id)
    .fetch_optional(&mut **tx)
    .await
    .context("get dish by id")?;
    Ok(row)
}

pub async fn list_dishes_tx(
    tx: &mut Transaction<'_, Postgres>,
    menu_id: i64,
    submenu_id: i64,
) -> anyhow::Result<Vec<DishRow>> {
    let rows = sqlx::query_as::<_, DishRow>(&format!(
        "{SELECT_DISH} WHERE d.submenu_id = $1 AND s.menu_id = $2 ORDER BY d.id ASC"
    ))
    .bind(submenu_id)
    .bind(menu_id)
    .fetch_all(&mut **tx)
    .await
    .context("list dishes")?;
    Ok(rows)
}

pub async fn update_dish_tx(
    tx: &mut Transaction<'_, Postgres>,
    menu_id: i64,
    submenu_id: i64,
    id: i64,
    changes: &DishChanges<'_>,
) -> anyhow::Result<bool> {
    let res = sqlx::query(
        r#"
        UPDATE dish d
           SET title = COALESCE($4, d.title),
               description = COALESCE($5, d.description),
               price = COALESCE($6, d.price)
          FROM submenu s
         WHERE d.id = $1
           AND d.submenu_id = $2
           AND s.id = d.submenu_id
           AND s.menu_id = $3
        "#,
    )
    .bind(id)
    .bind(submenu_id)
    .bind(menu_id)
    .bind(changes.title)
    .bind(changes.description)
    .bind(changes.price)
    .execute(&mut **tx)
    .await
    .context("update dish")?;
    Ok(res.rows_affected() > 0)
}

pub async fn delete_dish_by_id_tx(
    tx: &mut Transaction<'_, Postgres>,
    menu_id: i64,
    submenu_id: i64,
    id: i64,
) -> anyhow::Result<bool> {
    let res = sqlx::query(
        r#"
        DELETE FROM dish d
         USING submenu s
         WHERE d.id = $1
           AND d.submenu_id = $2
           AND s.id = d.submenu_id
           AND s.menu_id = $3
        "#,
    )
    .bind(id)
    .bind(submenu_id)
    .bind(menu_id)
    .execute(&mut **tx)
    .await
    .context("delete dish")?;
    Ok(res.rows_affected() > 0)
}
