//! Sweets API endpoints

use api_types::{
    Category as ApiCategory, Message,
    sweet::{StockChange, SweetNew, SweetSearch, SweetView},
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};
use engine::{EngineError, NewSweet, PriceCents, SweetFilter};

fn map_category(category: engine::Category) -> ApiCategory {
    match category {
        engine::Category::Chocolate => ApiCategory::Chocolate,
        engine::Category::Candy => ApiCategory::Candy,
        engine::Category::Pastry => ApiCategory::Pastry,
        engine::Category::NutBased => ApiCategory::NutBased,
        engine::Category::MilkBased => ApiCategory::MilkBased,
    }
}

fn sweet_view(sweet: engine::Sweet) -> SweetView {
    SweetView {
        id: sweet.id,
        name: sweet.name,
        category: map_category(sweet.category),
        price: sweet.price.major(),
        quantity: sweet.quantity,
        created_at: sweet.created_at,
        updated_at: sweet.updated_at,
    }
}

// A malformed id can never name a stored sweet.
fn parse_sweet_id(raw: &str) -> Result<Uuid, ServerError> {
    Uuid::parse_str(raw)
        .map_err(|_| ServerError::Engine(EngineError::KeyNotFound("sweet not found".to_string())))
}

/// Decodes a JSON request body, treating an absent body as the empty payload.
///
/// Decoding by hand keeps malformed bodies on the service's own error shape
/// instead of the framework's rejection responses.
fn decode_body<T>(body: &Bytes) -> Result<T, ServerError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if body.is_empty() {
        return Ok(T::default());
    }

    serde_json::from_slice(body)
        .map_err(|err| ServerError::Generic(format!("invalid request body: {err}")))
}

fn parse_price_param(name: &str, raw: Option<&str>) -> Result<Option<PriceCents>, ServerError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let price = trimmed
        .parse::<PriceCents>()
        .map_err(|_| ServerError::Generic(format!("invalid {name}: {raw}")))?;
    Ok(Some(price))
}

pub async fn home() -> &'static str {
    "Sweet shop inventory service is running"
}

pub async fn create(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SweetView>), ServerError> {
    let payload: SweetNew = decode_body(&body)?;

    let sweet = state
        .engine
        .create_sweet(NewSweet {
            name: payload.name,
            category: payload.category,
            price: payload.price,
            quantity: payload.quantity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(sweet_view(sweet))))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<SweetView>>, ServerError> {
    let sweets = state.engine.sweets().await?;

    Ok(Json(sweets.into_iter().map(sweet_view).collect()))
}

pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SweetSearch>,
) -> Result<Json<Vec<SweetView>>, ServerError> {
    let filter = SweetFilter {
        name: query.name,
        category: query.category,
        min_price: parse_price_param("minPrice", query.min_price.as_deref())?,
        max_price: parse_price_param("maxPrice", query.max_price.as_deref())?,
    };

    let sweets = state.engine.search_sweets(&filter).await?;

    Ok(Json(sweets.into_iter().map(sweet_view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<SweetView>, ServerError> {
    let id = parse_sweet_id(&id)?;
    let sweet = state.engine.sweet(id).await?;

    Ok(Json(sweet_view(sweet)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ServerError> {
    let id = parse_sweet_id(&id)?;
    state.engine.delete_sweet(id).await?;

    Ok(Json(Message {
        message: "sweet removed".to_string(),
    }))
}

pub async fn purchase(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SweetView>, ServerError> {
    let id = parse_sweet_id(&id)?;
    let payload: StockChange = decode_body(&body)?;

    let sweet = state.engine.purchase_sweet(id, payload.quantity).await?;

    Ok(Json(sweet_view(sweet)))
}

pub async fn restock(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SweetView>, ServerError> {
    let id = parse_sweet_id(&id)?;
    let payload: StockChange = decode_body(&body)?;

    let sweet = state.engine.restock_sweet(id, payload.quantity).await?;

    Ok(Json(sweet_view(sweet)))
}
