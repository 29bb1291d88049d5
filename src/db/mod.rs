pub mod admin_properties;
pub mod connection;
pub mod leads;

pub use connection::Database;
