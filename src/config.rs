//! Service configuration from environment variables (`.env` is honoured).

use std::path::PathBuf;
use std::sync::Arc;
use crate::domain::catalog::BoxCatalog;
use crate::domain::services::pricing::RateCard;
use crate::domain::services::quote::QuoteService;
use crate::domain::services::selector::FitPolicy;
use crate::{Result, ShippingError};

pub const DEFAULT_PORT: u16 = 8084;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub port: u16,
    /// JSON box table replacing the built-in Australia Post catalog.
    pub catalog_path: Option<PathBuf>,
    pub fit_policy: FitPolicy,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, catalog_path: None, fit_policy: FitPolicy::FixedAxis, log_filter: "info".to_string() }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let port = match var("PORT") {
            Some(p) => p.trim().parse::<u16>().map_err(|_| ShippingError::Config(format!("invalid PORT '{p}'")))?,
            None => defaults.port,
        };
        let fit_policy = match var("SHIPPING_FIT_POLICY") {
            Some(p) => p.parse::<FitPolicy>()?,
            None => defaults.fit_policy,
        };
        Ok(Self {
            port,
            catalog_path: var("SHIPPING_CATALOG_PATH").filter(|p| !p.trim().is_empty()).map(PathBuf::from),
            fit_policy,
            log_filter: var("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    pub fn load_catalog(&self) -> Result<BoxCatalog> {
        match &self.catalog_path {
            Some(path) => BoxCatalog::from_json_file(path),
            None => Ok(BoxCatalog::standard().clone()),
        }
    }

    pub fn quote_service(&self) -> Result<QuoteService> {
        Ok(QuoteService::new(Arc::new(self.load_catalog()?), self.fit_policy, RateCard::standard()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ProductDimensions, ServiceLevel};
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.load_catalog().unwrap().len(), 6);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[("PORT", "9000"), ("SHIPPING_FIT_POLICY", "any"), ("SHIPPING_CATALOG_PATH", "/etc/boxes.json"), ("RUST_LOG", "debug")])).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.fit_policy, FitPolicy::AnyOrientation);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/boxes.json")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(Config::from_vars(vars(&[("PORT", "eighty")])), Err(ShippingError::Config(_))));
        assert!(matches!(Config::from_vars(vars(&[("SHIPPING_FIT_POLICY", "diagonal")])), Err(ShippingError::Config(_))));
    }

    #[test]
    fn test_missing_catalog_file_fails() {
        let config = Config { catalog_path: Some(PathBuf::from("/nonexistent/boxes.json")), ..Config::default() };
        assert!(config.quote_service().is_err());
    }

    #[test]
    fn test_operator_catalog_reaches_quote_service() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":"tube","name":"Poster Tube","dimensions":{{"length":90,"width":8,"height":8}},"maxWeight":3,"type":"box"}}]"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let config = Config::from_vars(vars(&[("SHIPPING_CATALOG_PATH", path.as_str())])).unwrap();

        let service = config.quote_service().unwrap();
        assert_eq!(service.catalog().len(), 1);
        let quote = service.quote(&ProductDimensions::new(80.0, 6.0, 6.0, 1.0), ServiceLevel::ParcelPost).unwrap();
        assert_eq!(quote.options().len(), 1);
        assert_eq!(quote.options()[0].parcel.id, "tube");
        // the standard small box would have matched this item
        assert!(service.quote(&ProductDimensions::new(15.0, 10.0, 8.0, 0.25), ServiceLevel::ParcelPost).unwrap().requires_custom_shipping());
    }
}
