//! Value Objects for shipping

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{Result, ShippingError};

/// Outer extents of a parcel or product, in centimetres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions { pub length: f64, pub width: f64, pub height: f64 }

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self { Self { length, width, height } }
    pub fn volume(&self) -> f64 { self.length * self.width * self.height }

    /// Carrier girth: `length + 2 * width + 2 * height`.
    pub fn girth(&self) -> f64 { self.length + 2.0 * self.width + 2.0 * self.height }

    /// Extents ordered largest first.
    pub fn sorted_desc(&self) -> [f64; 3] {
        let mut sides = [self.length, self.width, self.height];
        sides.sort_by(|a, b| b.total_cmp(a));
        sides
    }
}

/// Size and weight (kg) of a single item to ship.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDimensions { pub length: f64, pub width: f64, pub height: f64, pub weight: f64 }

impl ProductDimensions {
    pub fn new(length: f64, width: f64, height: f64, weight: f64) -> Self { Self { length, width, height, weight } }
    pub fn dimensions(&self) -> Dimensions { Dimensions::new(self.length, self.width, self.height) }

    /// Every extent and the weight must be finite and greater than zero.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("length", self.length)?;
        ensure_positive("width", self.width)?;
        ensure_positive("height", self.height)?;
        ensure_positive("weight", self.weight)
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 { Ok(()) } else { Err(ShippingError::InvalidDimensions { field, value }) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxType { Satchel, Box }

impl fmt::Display for BoxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Self::Satchel => write!(f, "satchel"), Self::Box => write!(f, "box") }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceLevel { #[default] ParcelPost, ExpressPost }

impl ServiceLevel {
    pub fn from_express(express: bool) -> Self { if express { Self::ExpressPost } else { Self::ParcelPost } }
    pub fn is_express(&self) -> bool { matches!(self, Self::ExpressPost) }
}

/// Money value object
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money { amount: Decimal, currency: String }

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Self { Self { amount, currency: currency.to_string() } }
    pub fn aud(amount: Decimal) -> Self { Self::new(amount, "AUD") }

    /// Rounds a computed price to cents.
    pub fn aud_from_f64(amount: f64) -> Result<Self> {
        let mut cents = Decimal::from_f64(amount).ok_or(ShippingError::InvalidPrice(amount))?.round_dp(2);
        cents.rescale(2);
        Ok(Self::aud(cents))
    }

    pub fn amount(&self) -> Decimal { self.amount }
    pub fn currency(&self) -> &str { &self.currency }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{} {:.2}", self.currency, self.amount) }
}
