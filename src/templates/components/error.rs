use crate::errors::ServerError;
use crate::templates::{desktop_layout, Nav};
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Página no encontrada.".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        // Don't leak storage details to visitors.
        ServerError::DbError(_)
        | ServerError::DataError(_)
        | ServerError::Config(_)
        | ServerError::InternalError => {
            "Ocurrió un error interno. Inténtalo nuevamente.".to_string()
        }
    };

    if status >= 500 {
        tracing::error!(%err, status, "request failed");
    } else {
        tracing::debug!(%err, status, "request rejected");
    }

    render_error(status, &message)
}

/// Build a basic HTML error page
pub fn render_error(status: u16, message: &str) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        Nav::Home,
        html! {
            main class="container error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/propiedades" { "← Volver al listado" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
