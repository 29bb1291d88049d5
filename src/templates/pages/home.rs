// templates/pages/home.rs

use crate::domain::lead::LeadKind;
use crate::domain::property::Property;
use crate::templates::components::{lead_form, property_card};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub const FEATURED_COUNT: usize = 3;

pub struct HomeVm<'a> {
    pub featured: Vec<&'a Property>,
    pub districts: Vec<String>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Inicio",
        Nav::Home,
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Encuentra tu próximo hogar en Lima" }
                    p { "Departamentos, casas y oficinas seleccionadas por asesores de AGP." }
                    a class="btn btn-primary" href="/propiedades" { "Ver propiedades" }
                }

                @if !vm.districts.is_empty() {
                    section class="districts" {
                        h2 { "Explora por distrito" }
                        ul class="chips" {
                            @for d in &vm.districts {
                                li { a href=(district_href(d)) { (d) } }
                            }
                        }
                    }
                }

                section class="featured" {
                    h2 { "Destacadas" }
                    div class="property-grid" {
                        @for p in &vm.featured {
                            (property_card(p))
                        }
                    }
                }

                section class="card" id="tasacion" {
                    (lead_form(LeadKind::Valuation, None))
                }
            }
        },
    )
}

fn district_href(district: &str) -> String {
    let q: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("district", district)
        .finish();
    format!("/propiedades?{q}")
}
