use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedAnswer {
    pub status: bool,
    #[schema(example = "The menu has been deleted")]
    pub message: String,
}

impl DeletedAnswer {
    pub fn new(entity: &str) -> Self {
        Self {
            status: true,
            message: format!("The {} has been deleted", entity),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "menu not found")]
    pub detail: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
}
