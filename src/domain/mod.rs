//! Shipping domain
pub mod catalog;
pub mod services;
pub mod value_objects;
