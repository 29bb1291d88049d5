// src/domain/listing.rs

use crate::domain::filter::PropertyFilter;
use crate::domain::pagination::{paginate, Page};
use crate::domain::property::Property;
use crate::domain::sort::SortOrder;
use std::collections::HashMap;

/// Everything the listing page reads from its query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub filter: PropertyFilter,
    pub sort: SortOrder,
    pub page: usize,
}

impl ListingQuery {
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        Self {
            filter: PropertyFilter::from_query(params),
            sort: params
                .get("sort")
                .map(|s| SortOrder::parse(s))
                .unwrap_or_default(),
            page: params
                .get("page")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(1)
                .max(1),
        }
    }

    /// Filtered and sorted, not paginated. Feeds the map markers.
    pub fn matching<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        let mut items = self.filter.apply(properties);
        self.sort.apply(&mut items);
        items
    }

    /// filter → sort → paginate.
    pub fn run<'a>(&self, properties: &'a [Property], per_page: usize) -> Page<&'a Property> {
        paginate(self.matching(properties), self.page, per_page)
    }

    /// Query string for the same filters and sort on another page.
    pub fn href_for_page(&self, base: &str, page: usize) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.filter.to_pairs() {
            ser.append_pair(key, &value);
        }
        if self.sort != SortOrder::Relevance {
            ser.append_pair("sort", self.sort.key());
        }
        ser.append_pair("page", &page.to_string());
        format!("{base}?{}", ser.finish())
    }
}
