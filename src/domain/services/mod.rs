//! Domain services: box selection, pricing and quotes
pub mod pricing;
pub mod quote;
pub mod selector;
