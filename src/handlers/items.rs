use crate::dtos::{CreateItemRequest, ItemResponse};
use crate::error::AppError;
use crate::models::Item;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;

/// List every item, excluding the storage-assigned `_id` field.
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let find_options = FindOptions::builder()
        .projection(doc! { "_id": 0 })
        .build();

    let mut cursor = state
        .db
        .items()
        .find(doc! {}, find_options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to query items collection: {}", e);
            AppError::from(e)
        })?;

    let mut items = Vec::new();
    while let Some(item) = cursor.try_next().await.map_err(AppError::from)? {
        items.push(ItemResponse::from(item));
    }

    Ok(Json(items))
}

/// Create an item. The body must be JSON with a non-empty `name`; anything
/// else gets the single client error this service produces. An empty string
/// counts as absent.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), AppError> {
    let name = payload
        .ok()
        .and_then(|Json(req)| req.name)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("name required")))?;

    let item = Item { name };

    state.db.items().insert_one(&item, None).await.map_err(|e| {
        tracing::error!("Failed to insert item into database: {}", e);
        AppError::from(e)
    })?;

    metrics::counter!("items_created_total").increment(1);
    tracing::info!(name = %item.name, "Item created");

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}
