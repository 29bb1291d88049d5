use crate::domain::listing::ListingQuery;
use crate::domain::property::Operation;
use crate::domain::sort::SortOrder;
use maud::{html, Markup};

/// Select options, derived from the current catalog.
pub struct FilterOptions {
    pub districts: Vec<String>,
    pub types: Vec<String>,
}

/// The listing filter form. Every input change re-queries the results block;
/// page is left out so a change always lands back on page 1.
pub fn filters_form(query: &ListingQuery, options: &FilterOptions) -> Markup {
    let f = &query.filter;

    html! {
        form
            id="filters"
            class="filters"
            data-filters
            method="get"
            action="/propiedades"
            hx-get="/propiedades/resultados"
            hx-trigger="input changed delay:250ms, submit"
            hx-target="#results"
            hx-swap="outerHTML"
        {
            label for="q" { "Buscar" }
            input type="search" id="q" name="q" placeholder="Título, distrito o dirección" value=[f.text.as_deref()];

            label for="district" { "Distrito" }
            select id="district" name="district" {
                option value="" { "Todos" }
                @for d in &options.districts {
                    option value=(d) selected[f.district.as_deref() == Some(d.as_str())] { (d) }
                }
            }

            label for="operation" { "Operación" }
            select id="operation" name="operation" {
                option value="" { "Todas" }
                @for op in Operation::ALL {
                    option value=(op.label()) selected[f.operation == Some(op)] { (op.label()) }
                }
            }

            label for="type" { "Tipo" }
            select id="type" name="type" {
                option value="" { "Todos" }
                @for t in &options.types {
                    option value=(t) selected[f.kind.as_deref() == Some(t.as_str())] { (t) }
                }
            }

            label for="minPrice" { "Precio mín. (S/)" }
            input type="number" id="minPrice" name="minPrice" min="0" value=[f.min_price];
            label for="maxPrice" { "Precio máx. (S/)" }
            input type="number" id="maxPrice" name="maxPrice" min="0" value=[f.max_price];

            label for="bedrooms" { "Dormitorios (mín.)" }
            input type="number" id="bedrooms" name="bedrooms" min="0" value=[f.min_bedrooms];
            label for="bathrooms" { "Baños (mín.)" }
            input type="number" id="bathrooms" name="bathrooms" min="0" value=[f.min_bathrooms];
            label for="minArea" { "Área mín. (m²)" }
            input type="number" id="minArea" name="minArea" min="0" value=[f.min_area];

            label for="sort" { "Ordenar por" }
            select id="sort" name="sort" {
                @for s in SortOrder::ALL {
                    option value=(s.key()) selected[query.sort == s] { (s.label()) }
                }
            }

            div class="filters-actions" {
                button type="submit" class="btn btn-primary" { "Buscar" }
                a href="/propiedades" class="btn btn-outline" data-clear-filters { "Limpiar filtros" }
            }
        }
    }
}
