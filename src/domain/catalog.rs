//! Carrier box catalog
//!
//! The catalog is data: satchels and boxes are table rows, never branches in
//! the selection code. [`BoxCatalog::standard`] is the built-in Australia Post
//! table; operators can load their own through [`BoxCatalog::from_json_file`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use crate::domain::value_objects::{BoxType, Dimensions};
use crate::{Result, ShippingError};

/// A carrier parcel. Satchels carry flat prices; boxes have both prices at zero
/// and are priced from weight on demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingBox {
    pub id: String,
    pub name: String,
    pub dimensions: Dimensions,
    pub max_weight: f64,
    #[serde(default)]
    pub parcel_post_price: f64,
    #[serde(default)]
    pub express_post_price: f64,
    #[serde(rename = "type")]
    pub box_type: BoxType,
}

impl ShippingBox {
    pub fn satchel(id: &str, name: &str, dimensions: Dimensions, max_weight: f64, parcel_post_price: f64, express_post_price: f64) -> Self {
        Self { id: id.into(), name: name.into(), dimensions, max_weight, parcel_post_price, express_post_price, box_type: BoxType::Satchel }
    }

    pub fn rigid(id: &str, name: &str, dimensions: Dimensions, max_weight: f64) -> Self {
        Self { id: id.into(), name: name.into(), dimensions, max_weight, parcel_post_price: 0.0, express_post_price: 0.0, box_type: BoxType::Box }
    }

    pub fn volume(&self) -> f64 { self.dimensions.volume() }
    pub fn is_satchel(&self) -> bool { self.box_type == BoxType::Satchel }

    fn check(&self) -> std::result::Result<(), String> {
        if self.id.trim().is_empty() { return Err("empty id".into()); }
        let d = &self.dimensions;
        for (field, value) in [("length", d.length), ("width", d.width), ("height", d.height), ("maxWeight", self.max_weight)] {
            if !(value.is_finite() && value > 0.0) { return Err(format!("{field} must be positive, got {value}")); }
        }
        for (field, value) in [("parcelPostPrice", self.parcel_post_price), ("expressPostPrice", self.express_post_price)] {
            if !(value.is_finite() && value >= 0.0) { return Err(format!("{field} must be non-negative, got {value}")); }
        }
        if self.box_type == BoxType::Box && (self.parcel_post_price != 0.0 || self.express_post_price != 0.0) {
            return Err("box entries are priced by weight and must not carry flat prices".into());
        }
        Ok(())
    }
}

static STANDARD: LazyLock<BoxCatalog> = LazyLock::new(|| BoxCatalog {
    boxes: vec![
        ShippingBox::satchel("small-satchel", "Small Satchel", Dimensions::new(35.0, 22.0, 2.0), 5.0, 11.30, 12.95),
        ShippingBox::satchel("medium-satchel", "Medium Satchel", Dimensions::new(38.5, 29.0, 2.0), 5.0, 15.35, 19.45),
        ShippingBox::satchel("large-satchel", "Large Satchel", Dimensions::new(40.5, 31.0, 2.0), 5.0, 19.35, 25.40),
        ShippingBox::rigid("small-box", "Small Box", Dimensions::new(20.0, 15.0, 10.0), 22.0),
        ShippingBox::rigid("medium-box", "Medium Box", Dimensions::new(30.0, 25.0, 15.0), 22.0),
        ShippingBox::rigid("large-box", "Large Box", Dimensions::new(40.0, 30.0, 20.0), 22.0),
    ],
});

/// Read-only table of carrier parcels, in catalog order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BoxCatalog { boxes: Vec<ShippingBox> }

impl BoxCatalog {
    pub fn new(boxes: Vec<ShippingBox>) -> Result<Self> {
        let mut seen = HashSet::new();
        for b in &boxes {
            b.check().map_err(|reason| ShippingError::InvalidCatalog { id: b.id.clone(), reason })?;
            if !seen.insert(b.id.as_str()) {
                return Err(ShippingError::InvalidCatalog { id: b.id.clone(), reason: "duplicate id".into() });
            }
        }
        Ok(Self { boxes })
    }

    pub fn standard() -> &'static BoxCatalog { &STANDARD }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let boxes: Vec<ShippingBox> = serde_json::from_str(json)?;
        Self::new(boxes)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        tracing::info!(path = %path.display(), boxes = catalog.len(), "loaded shipping box catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&ShippingBox> { self.boxes.iter().find(|b| b.id == id) }
    pub fn iter(&self) -> impl Iterator<Item = &ShippingBox> { self.boxes.iter() }
    pub fn boxes(&self) -> &[ShippingBox] { &self.boxes }
    pub fn len(&self) -> usize { self.boxes.len() }
    pub fn is_empty(&self) -> bool { self.boxes.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_standard_catalog() {
        let catalog = BoxCatalog::standard();
        assert_eq!(catalog.len(), 6);
        let small = catalog.get("small-satchel").unwrap();
        assert_eq!(small.name, "Small Satchel");
        assert_eq!(small.max_weight, 5.0);
        assert_eq!(small.parcel_post_price, 11.30);
        assert_eq!(small.express_post_price, 12.95);
        assert!(catalog.get("pallet").is_none());
        // the standard table passes its own validation
        assert_eq!(&BoxCatalog::new(catalog.boxes().to_vec()).unwrap(), catalog);
    }

    #[test]
    fn test_rigid_boxes_carry_no_price() {
        for b in BoxCatalog::standard().iter().filter(|b| !b.is_satchel()) {
            assert_eq!(b.parcel_post_price, 0.0);
            assert_eq!(b.express_post_price, 0.0);
        }
        let mut priced = ShippingBox::rigid("odd", "Odd Box", Dimensions::new(10.0, 10.0, 10.0), 5.0);
        priced.express_post_price = 9.0;
        let err = BoxCatalog::new(vec![priced]).unwrap_err();
        assert!(matches!(err, ShippingError::InvalidCatalog { ref id, .. } if id == "odd"));
    }

    #[test]
    fn test_rejects_bad_entries() {
        let flat = ShippingBox::rigid("flat", "Flat", Dimensions::new(10.0, 10.0, 0.0), 5.0);
        assert!(BoxCatalog::new(vec![flat]).is_err());
        let a = ShippingBox::rigid("dup", "A", Dimensions::new(10.0, 10.0, 10.0), 5.0);
        assert!(BoxCatalog::new(vec![a.clone(), a]).is_err());
        let blank = ShippingBox::rigid(" ", "Blank", Dimensions::new(10.0, 10.0, 10.0), 5.0);
        assert!(BoxCatalog::new(vec![blank]).is_err());
    }

    #[test]
    fn test_json_round_trip_uses_camel_case() {
        let json = serde_json::to_value(BoxCatalog::standard()).unwrap();
        assert_eq!(json[0]["maxWeight"], 5.0);
        assert_eq!(json[0]["type"], "satchel");
        assert_eq!(json[3]["parcelPostPrice"], 0.0);

        let parsed = BoxCatalog::from_json_str(&json.to_string()).unwrap();
        assert_eq!(&parsed, BoxCatalog::standard());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":"tube","name":"Poster Tube","dimensions":{{"length":90,"width":8,"height":8}},"maxWeight":3,"type":"box"}}]"#).unwrap();
        let catalog = BoxCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("tube").unwrap().box_type, BoxType::Box);

        assert!(matches!(BoxCatalog::from_json_file("/nonexistent/boxes.json"), Err(ShippingError::Io(_))));
        assert!(matches!(BoxCatalog::from_json_str("{"), Err(ShippingError::Serialization(_))));
    }
}
