//! OpenSASE Shipping
//!
//! Parcel selection and shipping quotes for the storefront checkout.
//!
//! ## Features
//! - Static carrier box catalog (Australia Post satchels and boxes)
//! - Smallest-first box selection for a product's dimensions and weight
//! - Satchel flat pricing and weight-based box pricing
//! - Shipping quotes over HTTP

pub mod config;
pub mod domain;
pub mod http;

use thiserror::Error;

pub use domain::catalog::{BoxCatalog, ShippingBox};
pub use domain::services::pricing::{get_shipping_price, Rate, RateCard};
pub use domain::services::quote::{QuoteOption, QuoteOutcome, QuoteService, ShippingQuote};
pub use domain::services::selector::{find_suitable_boxes, BoxSelector, FitPolicy};
pub use domain::value_objects::{BoxType, Dimensions, Money, ProductDimensions, ServiceLevel};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum ShippingError {
    #[error("Invalid {field}: {value} (must be a finite number greater than zero)")]
    InvalidDimensions { field: &'static str, value: f64 },

    #[error("Box not found: {0}")]
    BoxNotFound(String),

    #[error("Invalid catalog entry {id}: {reason}")]
    InvalidCatalog { id: String, reason: String },

    #[error("Price not representable: {0}")]
    InvalidPrice(f64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShippingError>;
