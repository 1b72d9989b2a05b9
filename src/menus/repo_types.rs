use sqlx::FromRow;

/// Menu row with child counts computed by the query.
#[derive(Debug, Clone, FromRow)]
pub struct MenuRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub submenus_count: i64,
    pub dishes_count: i64,
}
