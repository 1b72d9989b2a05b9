use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::repo_types::DishRow;
use crate::validation::{format_price, PriceInput};

#[derive(Debug, Deserialize, ToSchema)]
pub struct DishCreate {
    #[schema(example = "Borscht", max_length = 60)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// String or number, at most two decimals.
    #[schema(value_type = String, example = "12.50")]
    pub price: PriceInput,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DishUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, example = "14.00")]
    pub price: Option<PriceInput>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DishAnswer {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Always two decimals, e.g. `"12.50"`.
    pub price: String,
}

impl From<DishRow> for DishAnswer {
    fn from(r: DishRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            price: format_price(r.price),
        }
    }
}
