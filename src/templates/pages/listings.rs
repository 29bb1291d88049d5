use crate::domain::listing::ListingQuery;
use crate::domain::markers::MarkerSet;
use crate::domain::pagination::Page;
use crate::domain::property::Property;
use crate::templates::components::{
    empty_state, filters_form, pagination, property_card, FilterOptions,
};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub query: ListingQuery,
    pub page: Page<&'a Property>,
    pub markers: MarkerSet,
    pub options: FilterOptions,
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "Propiedades",
        Nav::Listings,
        html! {
            main class="container listings" {
                h1 { "Propiedades en venta y alquiler" }
                aside class="filters-panel" {
                    (filters_form(&vm.query, &vm.options))
                }
                (results_block(vm))
                section class="map-panel" data-map-panel {
                    div id="propertiesMap" class="map-wrapper" {}
                }
            }
        },
    )
}

/// Count, cards, pagination and marker data. Swapped as a whole by htmx.
pub fn results_block(vm: &ListingsVm) -> Markup {
    let markers_json = serde_json::to_string(&vm.markers).unwrap_or_else(|_| "{}".to_string());

    html! {
        section id="results" class="results" data-markers=(markers_json) {
            p class="results-count" data-results-count {
                (vm.page.total) " propiedades encontradas"
            }
            div class="property-grid" data-property-cards {
                @if vm.page.total == 0 {
                    (empty_state())
                } @else if vm.page.items.is_empty() {
                    (past_last_page(&vm.query))
                } @else {
                    @for p in &vm.page.items {
                        (property_card(p))
                    }
                }
            }
            (pagination(&vm.page, &vm.query))
        }
    }
}

/// Matches exist, but the requested page is beyond the last one.
fn past_last_page(query: &ListingQuery) -> Markup {
    html! {
        div class="empty-state" {
            h3 { "Esta página no tiene resultados." }
            a class="btn btn-primary" href=(query.href_for_page("/propiedades", 1)) {
                "Volver a la página 1"
            }
        }
    }
}
