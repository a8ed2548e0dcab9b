//! Shipping quotes: every suitable parcel with its price.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;
use crate::domain::catalog::{BoxCatalog, ShippingBox};
use crate::domain::services::pricing::RateCard;
use crate::domain::services::selector::{BoxSelector, FitPolicy};
use crate::domain::value_objects::{Money, ProductDimensions, ServiceLevel};
use crate::Result;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOption {
    #[serde(rename = "box")]
    pub parcel: ShippingBox,
    pub price: Money,
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "snake_case")]
pub enum QuoteOutcome {
    Options(Vec<QuoteOption>),
    /// No standard parcel fits; the order needs a manual shipping quote.
    CustomShippingRequired,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    pub id: Uuid,
    pub quoted_at: DateTime<Utc>,
    pub service_level: ServiceLevel,
    pub outcome: QuoteOutcome,
}

impl ShippingQuote {
    pub fn options(&self) -> &[QuoteOption] {
        match &self.outcome { QuoteOutcome::Options(o) => o.as_slice(), QuoteOutcome::CustomShippingRequired => &[] }
    }

    pub fn requires_custom_shipping(&self) -> bool { matches!(self.outcome, QuoteOutcome::CustomShippingRequired) }

    /// Lowest price; the smaller parcel wins a tie.
    pub fn cheapest(&self) -> Option<&QuoteOption> {
        self.options().iter().reduce(|best, o| if o.price.amount() < best.price.amount() { o } else { best })
    }
}

#[derive(Clone, Debug)]
pub struct QuoteService {
    catalog: Arc<BoxCatalog>,
    policy: FitPolicy,
    rate_card: RateCard,
}

impl QuoteService {
    pub fn new(catalog: Arc<BoxCatalog>, policy: FitPolicy, rate_card: RateCard) -> Self { Self { catalog, policy, rate_card } }

    pub fn standard() -> Self { Self::new(Arc::new(BoxCatalog::standard().clone()), FitPolicy::default(), RateCard::standard()) }

    pub fn catalog(&self) -> &BoxCatalog { &self.catalog }
    pub fn rate_card(&self) -> &RateCard { &self.rate_card }
    pub fn selector(&self) -> BoxSelector<'_> { BoxSelector::new(&self.catalog, self.policy) }

    pub fn quote(&self, product: &ProductDimensions, level: ServiceLevel) -> Result<ShippingQuote> {
        let boxes = self.selector().find_suitable_boxes(product)?;
        let outcome = if boxes.is_empty() {
            tracing::info!(?product, girth = product.dimensions().girth(), "no standard parcel fits, custom shipping required");
            QuoteOutcome::CustomShippingRequired
        } else {
            let options = boxes
                .into_iter()
                .map(|parcel| -> Result<QuoteOption> {
                    let price = Money::aud_from_f64(self.rate_card.price(&parcel, product.weight, level)?)?;
                    Ok(QuoteOption { parcel, price })
                })
                .collect::<Result<Vec<_>>>()?;
            QuoteOutcome::Options(options)
        };
        Ok(ShippingQuote { id: Uuid::now_v7(), quoted_at: Utc::now(), service_level: level, outcome })
    }
}
