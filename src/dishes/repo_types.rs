use sqlx::{types::Decimal, FromRow};

#[derive(Debug, Clone, FromRow)]
pub struct DishRow {
    pub id: i64,
    pub submenu_id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
}
