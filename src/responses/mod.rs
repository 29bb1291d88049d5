pub mod errors;
pub mod html;
pub mod json;

pub use errors::ResultResp;

// Normal HTML response
pub use html::{html_partial, html_response};
pub use json::json_response;
