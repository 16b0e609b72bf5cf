use crate::models::Item;
use serde::{Deserialize, Serialize};

/// Body of `POST /items`. `name` decodes as optional so the handler can
/// check presence explicitly.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub name: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self { name: item.name }
    }
}
