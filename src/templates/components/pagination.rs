use crate::domain::listing::ListingQuery;
use crate::domain::pagination::Page;
use maud::{html, Markup};

pub fn pagination<T>(page: &Page<T>, query: &ListingQuery) -> Markup {
    html! {
        @if page.total_pages > 1 {
            nav class="pagination" data-pagination aria-label="Paginación" {
                @if page.has_prev() {
                    (page_link(query, page.page - 1, "Anterior", false))
                }
                @for n in 1..=page.total_pages {
                    (page_link(query, n, &n.to_string(), n == page.page))
                }
                @if page.has_next() {
                    (page_link(query, page.page + 1, "Siguiente", false))
                }
            }
        }
    }
}

fn page_link(query: &ListingQuery, n: usize, label: &str, active: bool) -> Markup {
    html! {
        a
            href=(query.href_for_page("/propiedades", n))
            hx-get=(query.href_for_page("/propiedades/resultados", n))
            hx-target="#results"
            hx-swap="outerHTML"
            class=[active.then_some("active")]
            aria-current=[active.then_some("page")]
        { (label) }
    }
}
