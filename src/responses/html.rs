use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// Full page, 200.
pub fn html_response(markup: Markup) -> ResultResp {
    html_with_status(200, markup)
}

/// Fragment meant to be swapped in by htmx. Same content type, no layout.
pub fn html_partial(status: u16, markup: Markup) -> ResultResp {
    html_with_status(status, markup)
}

fn html_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
