use crate::domain::format::{format_area, format_pen, format_usd};
use crate::domain::lead::LeadKind;
use crate::domain::property::Property;
use crate::templates::components::{lead_form, similar_card};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub struct DetailVm<'a> {
    pub property: &'a Property,
    pub similar: Vec<&'a Property>,
    pub usd_rate: f64,
}

pub fn detail_page(vm: &DetailVm) -> Markup {
    let p = vm.property;

    desktop_layout(
        &p.title,
        Nav::Detail,
        html! {
            main class="container property-detail" data-property-detail {
                section class="card gallery" {
                    div class="gallery-main" {
                        img src=(p.cover_image()) alt=(p.image_label(0)) data-gallery-main;
                    }
                    @if p.images.len() > 1 {
                        div class="gallery-thumbs" {
                            @for (i, img) in p.images.iter().enumerate() {
                                button type="button" data-index=(i) {
                                    img src=(img) alt=(p.image_label(i)) loading="lazy"
                                        class=[(i == 0).then_some("active")];
                                }
                            }
                        }
                    }
                }

                section class="card" {
                    span class="badge" { (p.operation.label()) }
                    span class="badge" { (p.kind) }
                    h1 { (p.title) }
                    p class="property-price" {
                        (format_pen(p.price_pen))
                        " "
                        small { "(USD " (format_usd(p.price_pen, vm.usd_rate)) ")" }
                    }
                    p { (p.district) " · " (p.address_approx) }
                    div class="tags" {
                        span { (format_area(p.area_m2)) }
                        span { (p.bedrooms) " dormitorios" }
                        span { (p.bathrooms) " baños" }
                        span { (p.parking) " estacionamientos" }
                    }
                    p class="description" { (p.description) }
                    @if !p.features.is_empty() {
                        ul class="features" {
                            @for feature in &p.features {
                                li { (feature) }
                            }
                        }
                    }
                    table class="table" {
                        tr { td { "Operación" } td { (p.operation.label()) } }
                        tr { td { "Tipo" } td { (p.kind) } }
                        tr { td { "Dormitorios" } td { (p.bedrooms) } }
                        tr { td { "Baños" } td { (p.bathrooms) } }
                        tr { td { "Estacionamientos" } td { (p.parking) } }
                        tr { td { "Área" } td { (format_area(p.area_m2)) } }
                        @if p.maintenance > 0 {
                            tr { td { "Mantenimiento" } td { (format_pen(p.maintenance)) } }
                        }
                        tr { td { "Distrito" } td { (p.district) } }
                        tr { td { "ID" } td { (p.id) } }
                    }
                }

                section class="card" {
                    h2 { "Ubicación en " (p.district) }
                    div id="propertyMap" class="map-wrapper" data-lat=(p.lat) data-lng=(p.lng) {}
                }

                section class="card" id="contacto" {
                    (lead_form(LeadKind::Contact, Some(&p.id)))
                }

                @if !vm.similar.is_empty() {
                    section class="similar" {
                        h2 { "Propiedades similares" }
                        div class="property-grid" data-similar {
                            @for s in &vm.similar {
                                (similar_card(s))
                            }
                        }
                    }
                }
            }
        },
    )
}
