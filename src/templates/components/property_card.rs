use crate::domain::format::{format_area, format_pen};
use crate::domain::property::Property;
use maud::{html, Markup, PreEscaped};

pub fn property_card(p: &Property) -> Markup {
    html! {
        article class="property-card" data-card-id=(p.id) {
            img src=(p.cover_image()) alt=(p.title) loading="lazy";
            div class="property-body" {
                span class="badge" { (p.operation.label()) }
                h3 { (p.title) }
                p class="property-price" { (format_pen(p.price_pen)) }
                p { (p.district) " · " (p.address_approx) }
                div class="property-meta" {
                    span { (icon("area")) (format_area(p.area_m2)) }
                    span { (icon("bed")) (p.bedrooms) " dorm." }
                    span { (icon("bath")) (p.bathrooms) " baños" }
                    span { (icon("parking")) (p.parking) " est." }
                }
            }
            div class="card-actions" {
                a class="btn btn-outline" href=(p.href()) { "Ver detalle" }
                span class="badge" { (p.kind) }
            }
        }
    }
}

/// Compact card for the "similar listings" strip on the detail page.
pub fn similar_card(p: &Property) -> Markup {
    html! {
        article class="property-card property-card--compact" {
            img src=(p.cover_image()) alt=(p.title) loading="lazy";
            div class="property-body" {
                span class="badge" { (p.operation.label()) }
                h3 { (p.title) }
                p class="property-price" { (format_pen(p.price_pen)) }
                p { (p.district) }
                div class="property-meta" {
                    span { (format_area(p.area_m2)) " · " (p.bedrooms) " hab" }
                }
            }
            div class="card-actions" {
                a class="btn btn-outline" href=(p.href()) { "Ver detalle" }
            }
        }
    }
}

pub fn empty_state() -> Markup {
    html! {
        div class="empty-state" {
            h3 { "No encontramos propiedades con esos filtros." }
            p { "Prueba ajustar los rangos o limpiar filtros para ver más opciones." }
            a class="btn btn-primary" href="/propiedades" data-clear-filters { "Limpiar filtros" }
        }
    }
}

fn icon(name: &str) -> Markup {
    html! {
        svg class="icon" aria-hidden="true" fill="currentColor" {
            (PreEscaped(format!(r##"<use href="#icon-{name}"></use>"##)))
        }
    }
}
