use serde::{Deserialize, Serialize};

/// An item in the `items` collection.
///
/// MongoDB assigns an internal `_id` on insert; it is never exposed to
/// clients and reads exclude it by projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
}
