// src/catalog.rs

use crate::db::admin_properties::admin_properties;
use crate::db::Database;
use crate::domain::format::DEFAULT_USD_RATE;
use crate::domain::property::Property;
use crate::errors::ServerError;
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::fs;

/// The static listings document, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub properties: Vec<Property>,
    pub usd_rate: f64,
}

/// Either `{ "usd_rate": 3.75, "properties": [...] }` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped {
        #[serde(default)]
        usd_rate: Option<f64>,
        #[serde(default)]
        properties: Vec<Property>,
    },
    Bare(Vec<Property>),
}

impl Catalog {
    pub fn load(path: &str) -> Result<Self, ServerError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ServerError::DataError(format!("read {path} failed: {e}")))?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            path,
            properties = catalog.properties.len(),
            usd_rate = catalog.usd_rate,
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, ServerError> {
        let doc: CatalogDocument = serde_json::from_str(raw)
            .map_err(|e| ServerError::DataError(format!("parse catalog failed: {e}")))?;

        Ok(match doc {
            CatalogDocument::Wrapped {
                usd_rate,
                properties,
            } => Catalog {
                properties,
                usd_rate: usd_rate.filter(|r| *r > 0.0).unwrap_or(DEFAULT_USD_RATE),
            },
            CatalogDocument::Bare(properties) => Catalog {
                properties,
                usd_rate: DEFAULT_USD_RATE,
            },
        })
    }

    /// Admin records (newest first) followed by the catalog, first id wins.
    pub fn all(&self, db: &Database) -> Result<Vec<Property>, ServerError> {
        let admin = admin_properties(db)?;
        Ok(merge(admin, self.properties.iter().cloned()))
    }
}

pub fn merge(
    admin: Vec<Property>,
    base: impl IntoIterator<Item = Property>,
) -> Vec<Property> {
    let mut seen = HashSet::new();
    admin
        .into_iter()
        .chain(base)
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}

pub fn find<'a>(properties: &'a [Property], id: &str) -> Option<&'a Property> {
    properties.iter().find(|p| p.id == id)
}

/// Sorted, unique districts for the filter form.
pub fn districts(properties: &[Property]) -> Vec<String> {
    properties
        .iter()
        .map(|p| p.district.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn types(properties: &[Property]) -> Vec<String> {
    properties
        .iter()
        .map(|p| p.kind.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
