use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::repo_types::SubmenuRow;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmenuCreate {
    #[schema(example = "Soups", max_length = 60)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubmenuUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmenuAnswer {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub dishes_count: i64,
}

impl From<SubmenuRow> for SubmenuAnswer {
    fn from(r: SubmenuRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            dishes_count: r.dishes_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_omits_parent_id() {
        let answer = SubmenuAnswer::from(SubmenuRow {
            id: 3,
            menu_id: 1,
            title: "Soups".into(),
            description: String::new(),
            dishes_count: 3,
        });
        let json = serde_json::to_value(&answer).unwrap();
        assert!(json.get("menu_id").is_none());
        assert_eq!(json["id"], 3);
        assert_eq!(json["dishes_count"], 3);
        assert_eq!(json["title"], "Soups");
    }
}
