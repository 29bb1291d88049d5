// src/domain/property.rs

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1494526585095-c41746248156?auto=format&fit=crop&w=1200&q=80";

/// Center of Lima, used when a listing has no coordinates of its own.
pub const DEFAULT_LAT: f64 = -12.097;
pub const DEFAULT_LNG: f64 = -77.037;

/// Sale vs. rental classification of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Operation {
    #[default]
    #[serde(rename = "Venta")]
    Sale,
    #[serde(rename = "Alquiler")]
    Rent,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Sale, Operation::Rent];

    /// Label used in the catalog file, the filter form and the cards.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Sale => "Venta",
            Operation::Rent => "Alquiler",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "venta" | "sale" => Some(Operation::Sale),
            "alquiler" | "rent" => Some(Operation::Rent),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Catalog,
    Admin,
}

/// A single real-estate listing, as published on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub district: String,
    pub operation: Operation,
    #[serde(rename = "type")]
    pub kind: String,
    pub price_pen: i64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub parking: u32,
    #[serde(default)]
    pub area_m2: f64,
    #[serde(default)]
    pub maintenance: i64,
    #[serde(default)]
    pub address_approx: String,
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lng")]
    pub lng: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub image_labels: Vec<String>,
    #[serde(default)]
    pub source: Source,
}

impl Property {
    /// First gallery image, or the stock photo when the listing has none.
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_IMAGE)
    }

    /// Relative link to the detail page.
    pub fn href(&self) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(self.id.as_bytes()).collect();
        format!("/propiedad?id={encoded}")
    }

    /// Label for gallery image `index`, falling back to the title.
    pub fn image_label(&self, index: usize) -> &str {
        self.image_labels
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.title)
    }
}

fn default_lat() -> f64 {
    DEFAULT_LAT
}

fn default_lng() -> f64 {
    DEFAULT_LNG
}

/// Catalog files written by hand use both `"id": 3` and `"id": "lm-003"`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}

/// A loosely-typed record entered outside the catalog file.
/// Every field is optional; `normalize` fills the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub district: Option<String>,
    pub operation: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub price_pen: Option<i64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub parking: Option<u32>,
    pub area_m2: Option<f64>,
    pub maintenance: Option<i64>,
    pub address_approx: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub image_labels: Vec<String>,
}

impl PropertyDraft {
    /// Turn a draft into a publishable listing. `now_millis` seeds the
    /// generated id when the draft has none.
    pub fn normalize(self, now_millis: i64) -> Property {
        let text = |value: Option<String>, fallback: &str| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        // A zero coordinate is as good as missing for a Lima listing.
        let coord = |value: Option<f64>, fallback: f64| {
            value.filter(|v| v.is_finite() && *v != 0.0).unwrap_or(fallback)
        };

        let images: Vec<String> = self
            .images
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();

        Property {
            id: text(self.id, &format!("adm-{now_millis}")),
            title: text(self.title, "Departamento sin título"),
            district: text(self.district, "Miraflores"),
            operation: self
                .operation
                .as_deref()
                .and_then(Operation::parse)
                .unwrap_or_default(),
            kind: text(self.kind, "Departamento"),
            price_pen: self.price_pen.unwrap_or(0).max(0),
            bedrooms: self.bedrooms.unwrap_or(0),
            bathrooms: self.bathrooms.unwrap_or(0),
            parking: self.parking.unwrap_or(0),
            area_m2: self.area_m2.filter(|a| a.is_finite()).unwrap_or(0.0).max(0.0),
            maintenance: self.maintenance.unwrap_or(0).max(0),
            address_approx: text(self.address_approx, "Ubicación referencial pendiente"),
            lat: coord(self.lat, DEFAULT_LAT),
            lng: coord(self.lng, DEFAULT_LNG),
            description: text(self.description, "Sin descripción."),
            features: self.features,
            images: if images.is_empty() {
                vec![FALLBACK_IMAGE.to_string()]
            } else {
                images
            },
            image_labels: self.image_labels,
            source: Source::Admin,
        }
    }
}
