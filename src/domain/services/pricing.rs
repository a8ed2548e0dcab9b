//! Shipping price estimation
//!
//! Satchels are a flat lookup by service level. Boxes are priced from weight
//! with one rate card for every box tier; the card stands in for weight-banded
//! carrier rates until those are wired up.

use serde::{Deserialize, Serialize};
use crate::domain::catalog::ShippingBox;
use crate::domain::value_objects::{ensure_positive, BoxType, ServiceLevel};
use crate::Result;

/// Minimum charge plus per-kilogram rate, in AUD.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rate { pub base: f64, pub per_kg: f64 }

impl Rate {
    /// The base rate is a floor: heavier parcels pay by weight alone.
    pub fn charge(&self, weight: f64) -> f64 { self.base.max(weight * self.per_kg) }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateCard { pub parcel_post: Rate, pub express_post: Rate }

impl Default for RateCard {
    fn default() -> Self { Self::standard() }
}

impl RateCard {
    pub const fn standard() -> Self {
        Self {
            parcel_post: Rate { base: 8.0, per_kg: 3.0 },
            express_post: Rate { base: 12.0, per_kg: 5.0 },
        }
    }

    pub fn rate(&self, level: ServiceLevel) -> Rate {
        match level { ServiceLevel::ParcelPost => self.parcel_post, ServiceLevel::ExpressPost => self.express_post }
    }

    pub fn price(&self, parcel: &ShippingBox, weight: f64, level: ServiceLevel) -> Result<f64> {
        ensure_positive("weight", weight)?;
        let price = match (parcel.box_type, level) {
            (BoxType::Satchel, ServiceLevel::ParcelPost) => parcel.parcel_post_price,
            (BoxType::Satchel, ServiceLevel::ExpressPost) => parcel.express_post_price,
            (BoxType::Box, level) => self.rate(level).charge(weight),
        };
        Ok(price)
    }
}

/// Price for `weight` kg in `parcel` on the standard rate card.
pub fn get_shipping_price(parcel: &ShippingBox, weight: f64, express_post: bool) -> Result<f64> {
    RateCard::standard().price(parcel, weight, ServiceLevel::from_express(express_post))
}
