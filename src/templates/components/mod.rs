pub mod error;
pub mod filters;
pub mod lead_form;
pub mod pagination;
pub mod property_card;

pub use error::html_error_response;
pub use filters::{filters_form, FilterOptions};
pub use lead_form::{lead_form, lead_result};
pub use pagination::pagination;
pub use property_card::{empty_state, property_card, similar_card};
