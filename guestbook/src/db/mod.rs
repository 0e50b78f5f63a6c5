pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema;

pub use connection::Database;
pub use error::InsertError;
