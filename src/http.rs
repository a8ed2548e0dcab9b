//! Shipping quote API

use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use validator::Validate;
use crate::domain::catalog::{BoxCatalog, ShippingBox};
use crate::domain::services::quote::{QuoteService, ShippingQuote};
use crate::domain::value_objects::{Money, ProductDimensions, ServiceLevel};
use crate::ShippingError;

#[derive(Clone)] pub struct AppState { pub quotes: QuoteService }

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "opensase-shipping"})) }))
        .route("/api/v1/shipping/boxes", get(list_boxes))
        .route("/api/v1/shipping/boxes/suitable", post(suitable_boxes))
        .route("/api/v1/shipping/price", post(price))
        .route("/api/v1/shipping/quote", post(quote))
        .layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()).with_state(state)
}

type ApiError = (StatusCode, String);

fn api_error(e: ShippingError) -> ApiError {
    let status = match e {
        ShippingError::InvalidDimensions { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ShippingError::BoxNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() { tracing::error!(error = %e, "shipping request failed"); }
    (status, e.to_string())
}

fn check(r: &impl Validate) -> Result<(), ApiError> {
    r.validate().map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
}

// Dimensions and weight are checked by the domain (finite and > 0); anything
// larger than every parcel is a custom-shipping outcome, not a bad request.
#[derive(Debug, Deserialize)]
pub struct ItemRequest { pub length: f64, pub width: f64, pub height: f64, pub weight: f64 }

impl ItemRequest {
    fn product(&self) -> ProductDimensions { ProductDimensions::new(self.length, self.width, self.height, self.weight) }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    #[serde(default)] pub express_post: bool,
}

impl QuoteRequest {
    fn product(&self) -> ProductDimensions { ProductDimensions::new(self.length, self.width, self.height, self.weight) }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    #[validate(length(min = 1))] pub box_id: String,
    pub weight: f64,
    #[serde(default)] pub express_post: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse { pub box_id: String, pub service_level: ServiceLevel, pub price: Money }

async fn list_boxes(State(s): State<AppState>) -> Json<BoxCatalog> { Json(s.quotes.catalog().clone()) }

async fn suitable_boxes(State(s): State<AppState>, Json(r): Json<ItemRequest>) -> Result<Json<Vec<ShippingBox>>, ApiError> {
    s.quotes.selector().find_suitable_boxes(&r.product()).map(Json).map_err(api_error)
}

async fn price(State(s): State<AppState>, Json(r): Json<PriceRequest>) -> Result<Json<PriceResponse>, ApiError> {
    check(&r)?;
    let parcel = s.quotes.catalog().get(&r.box_id).ok_or_else(|| api_error(ShippingError::BoxNotFound(r.box_id.clone())))?;
    let level = ServiceLevel::from_express(r.express_post);
    let amount = s.quotes.rate_card().price(parcel, r.weight, level).map_err(api_error)?;
    let price = Money::aud_from_f64(amount).map_err(api_error)?;
    Ok(Json(PriceResponse { box_id: r.box_id, service_level: level, price }))
}

async fn quote(State(s): State<AppState>, Json(r): Json<QuoteRequest>) -> Result<Json<ShippingQuote>, ApiError> {
    s.quotes.quote(&r.product(), ServiceLevel::from_express(r.express_post)).map(Json).map_err(api_error)
}
