//! Box selection
//!
//! A product fits a box when each of its extents is within the box's extent
//! and its weight is within the box's weight cap. With the default
//! [`FitPolicy::FixedAxis`] the product is never turned: length goes against
//! length, width against width, height against height, so an item that would
//! only fit on its side is reported as not fitting.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::domain::catalog::{BoxCatalog, ShippingBox};
use crate::domain::value_objects::ProductDimensions;
use crate::{Result, ShippingError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitPolicy {
    /// Compare axes as given.
    #[default]
    FixedAxis,
    /// Allow any of the six axis-aligned orientations.
    AnyOrientation,
}

impl FromStr for FitPolicy {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "fixed_axis" => Ok(Self::FixedAxis),
            "any" | "any_orientation" => Ok(Self::AnyOrientation),
            other => Err(ShippingError::Config(format!("unknown fit policy '{other}' (expected 'fixed' or 'any')"))),
        }
    }
}

impl FitPolicy {
    pub fn fits(&self, product: &ProductDimensions, parcel: &ShippingBox) -> bool {
        if product.weight > parcel.max_weight { return false; }
        match self {
            Self::FixedAxis => {
                let d = &parcel.dimensions;
                product.length <= d.length && product.width <= d.width && product.height <= d.height
            }
            // Sorting both sides largest-first is equivalent to trying every permutation.
            Self::AnyOrientation => {
                let p = product.dimensions().sorted_desc();
                let b = parcel.dimensions.sorted_desc();
                p.iter().zip(b.iter()).all(|(p, b)| p <= b)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct BoxSelector<'a> {
    catalog: &'a BoxCatalog,
    policy: FitPolicy,
}

impl<'a> BoxSelector<'a> {
    pub fn new(catalog: &'a BoxCatalog, policy: FitPolicy) -> Self { Self { catalog, policy } }

    /// Boxes the product fits in, smallest volume first. Equal volumes keep
    /// catalog order. An empty result means custom shipping is required.
    pub fn find_suitable_boxes(&self, product: &ProductDimensions) -> Result<Vec<ShippingBox>> {
        product.validate()?;
        let mut suitable: Vec<ShippingBox> = self.catalog.iter().filter(|b| self.policy.fits(product, b)).cloned().collect();
        suitable.sort_by(|a, b| a.volume().total_cmp(&b.volume()));
        tracing::debug!(candidates = suitable.len(), policy = ?self.policy, "selected shipping boxes");
        Ok(suitable)
    }
}

/// Selection against the standard catalog with same-axis fitting.
pub fn find_suitable_boxes(product: &ProductDimensions) -> Result<Vec<ShippingBox>> {
    BoxSelector::new(BoxCatalog::standard(), FitPolicy::FixedAxis).find_suitable_boxes(product)
}
