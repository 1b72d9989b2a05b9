use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::repo_types::MenuRow;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuCreate {
    #[schema(example = "Main menu", max_length = 60)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MenuUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuAnswer {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub submenus_count: i64,
    pub dishes_count: i64,
}

impl From<MenuRow> for MenuAnswer {
    fn from(r: MenuRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            submenus_count: r.submenus_count,
            dishes_count: r.dishes_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_defaults_to_empty() {
        let body: MenuCreate = serde_json::from_str(r#"{"title": "Breakfast"}"#).unwrap();
        assert_eq!(body.title, "Breakfast");
        assert_eq!(body.description, "");
    }

    #[test]
    fn update_fields_are_optional() {
        let body: MenuUpdate = serde_json::from_str(r#"{"description": "new"}"#).unwrap();
        assert!(body.title.is_none());
        assert_eq!(body.description.as_deref(), Some("new"));
    }

    #[test]
    fn answer_carries_counts() {
        let answer = MenuAnswer::from(MenuRow {
            id: 7,
            title: "Dinner".into(),
            description: "evening".into(),
            submenus_count: 2,
            dishes_count: 5,
        });
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["submenus_count"], 2);
        assert_eq!(json["dishes_count"], 5);
    }
}
