pub mod detail;
pub mod home;
pub mod listings;

pub use detail::{detail_page, DetailVm};
pub use home::{home_page, HomeVm, FEATURED_COUNT};
pub use listings::{listings_page, results_block, ListingsVm};
