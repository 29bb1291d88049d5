use maud::{html, Markup, DOCTYPE};

/// Which top-level section is highlighted in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Listings,
    Detail,
}

pub fn desktop_layout(title: &str, active: Nav, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | AGP Inmobiliaria" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body data-page=(nav_key(active)) {
                header class="site-header" {
                    a href="/" class="brand" { "AGP Inmobiliaria" }
                    nav {
                        ul {
                            li { a href="/" class=[active_class(active, Nav::Home)] { "Inicio" } }
                            li {
                                a href="/propiedades" class=[active_class(active, Nav::Listings)] { "Propiedades" }
                            }
                            li { a href="/#tasacion" { "Tasación gratuita" } }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "AGP Inmobiliaria · Lima, Perú" }
                }
            }
        }
    }
}

fn nav_key(nav: Nav) -> &'static str {
    match nav {
        Nav::Home => "home",
        Nav::Listings => "propiedades",
        Nav::Detail => "propiedad",
    }
}

fn active_class(current: Nav, link: Nav) -> Option<&'static str> {
    (current == link).then_some("active")
}
