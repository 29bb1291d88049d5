// src/domain/markers.rs

use crate::domain::format::format_pen;
use crate::domain::property::Property;
use serde::Serialize;

/// What the front-end map needs to drop a pin for a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub title: String,
    pub district: String,
    pub lat: f64,
    pub lng: f64,
    pub price_label: String,
    pub href: String,
}

impl From<&Property> for MapMarker {
    fn from(p: &Property) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            district: p.district.clone(),
            lat: p.lat,
            lng: p.lng,
            price_label: format_pen(p.price_pen),
            href: p.href(),
        }
    }
}

/// South-west and north-east corners, `[lat, lng]` each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: [f64; 2],
    pub north_east: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSet {
    pub markers: Vec<MapMarker>,
    pub bounds: Option<Bounds>,
}

pub fn project(properties: &[&Property]) -> MarkerSet {
    let markers: Vec<MapMarker> = properties.iter().map(|p| MapMarker::from(*p)).collect();
    let bounds = bounds(&markers);
    MarkerSet { markers, bounds }
}

/// Only worth fitting the map to when there is more than one pin.
pub fn bounds(markers: &[MapMarker]) -> Option<Bounds> {
    if markers.len() < 2 {
        return None;
    }
    let mut sw = [f64::INFINITY, f64::INFINITY];
    let mut ne = [f64::NEG_INFINITY, f64::NEG_INFINITY];
    for m in markers {
        sw[0] = sw[0].min(m.lat);
        sw[1] = sw[1].min(m.lng);
        ne[0] = ne[0].max(m.lat);
        ne[1] = ne[1].max(m.lng);
    }
    Some(Bounds {
        south_west: sw,
        north_east: ne,
    })
}
