// src/domain/sort.rs

use crate::domain::property::Property;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    AreaDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Relevance,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::AreaDesc,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "price_asc" => SortOrder::PriceAsc,
            "price_desc" => SortOrder::PriceDesc,
            "area_desc" => SortOrder::AreaDesc,
            _ => SortOrder::Relevance,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::PriceDesc => "price_desc",
            SortOrder::AreaDesc => "area_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevancia",
            SortOrder::PriceAsc => "Precio: menor a mayor",
            SortOrder::PriceDesc => "Precio: mayor a menor",
            SortOrder::AreaDesc => "Área: mayor a menor",
        }
    }

    /// Sort in place. `sort_by` is stable, so ties keep catalog order.
    pub fn apply(self, items: &mut [&Property]) {
        match self {
            SortOrder::Relevance => {}
            SortOrder::PriceAsc => items.sort_by(|a, b| a.price_pen.cmp(&b.price_pen)),
            SortOrder::PriceDesc => items.sort_by(|a, b| b.price_pen.cmp(&a.price_pen)),
            SortOrder::AreaDesc => items.sort_by(|a, b| {
                b.area_m2
                    .partial_cmp(&a.area_m2)
                    .unwrap_or(Ordering::Equal)
            }),
        }
    }
}
