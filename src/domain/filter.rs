// src/domain/filter.rs

use crate::domain::property::{Operation, Property};
use std::collections::HashMap;

/// The listing page's filter form. Every field is optional; `None` means the
/// predicate is inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub district: Option<String>,
    pub operation: Option<Operation>,
    pub kind: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub min_area: Option<f64>,
    /// Free-text search over title, district and address.
    pub text: Option<String>,
}

impl PropertyFilter {
    /// Build a filter from decoded query-string pairs. Blank values and
    /// numbers that don't parse leave the predicate inactive.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let text = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            district: text("district"),
            operation: text("operation").as_deref().and_then(Operation::parse),
            kind: text("type"),
            min_price: number(params, "minPrice"),
            max_price: number(params, "maxPrice"),
            min_bedrooms: number(params, "bedrooms"),
            min_bathrooms: number(params, "bathrooms"),
            min_area: number(params, "minArea").filter(|v: &f64| v.is_finite()),
            text: text("q"),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == PropertyFilter::default()
    }

    pub fn matches(&self, p: &Property) -> bool {
        if let Some(district) = &self.district {
            if &p.district != district {
                return false;
            }
        }
        if let Some(op) = self.operation {
            if p.operation != op {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if &p.kind != kind {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| p.price_pen < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| p.price_pen > max) {
            return false;
        }
        if self.min_bedrooms.is_some_and(|min| p.bedrooms < min) {
            return false;
        }
        if self.min_bathrooms.is_some_and(|min| p.bathrooms < min) {
            return false;
        }
        if self.min_area.is_some_and(|min| p.area_m2 < min) {
            return false;
        }
        if let Some(needle) = &self.text {
            let needle = needle.to_lowercase();
            let hit = [&p.title, &p.district, &p.address_approx]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        true
    }

    /// Matching records, in input order.
    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }

    /// Active predicates as `(key, value)` pairs, using the form's field names.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.district {
            pairs.push(("district", v.clone()));
        }
        if let Some(v) = self.operation {
            pairs.push(("operation", v.label().to_string()));
        }
        if let Some(v) = &self.kind {
            pairs.push(("type", v.clone()));
        }
        if let Some(v) = self.min_price {
            pairs.push(("minPrice", v.to_string()));
        }
        if let Some(v) = self.max_price {
            pairs.push(("maxPrice", v.to_string()));
        }
        if let Some(v) = self.min_bedrooms {
            pairs.push(("bedrooms", v.to_string()));
        }
        if let Some(v) = self.min_bathrooms {
            pairs.push(("bathrooms", v.to_string()));
        }
        if let Some(v) = self.min_area {
            pairs.push(("minArea", v.to_string()));
        }
        if let Some(v) = &self.text {
            pairs.push(("q", v.clone()));
        }
        pairs
    }
}

fn number<T: std::str::FromStr>(params: &HashMap<String, String>, key: &str) -> Option<T> {
    params.get(key).and_then(|v| v.trim().parse().ok())
}
