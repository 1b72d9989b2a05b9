use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct SubmenuRow {
    pub id: i64,
    pub menu_id: i64,
    pub title: String,
    pub description: String,
    pub dishes_count: i64,
}
