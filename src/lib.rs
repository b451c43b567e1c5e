pub mod cli;
pub mod persistence;
pub mod store;

pub use cli::Cli;
pub use persistence::PersistenceError;
pub use store::{CdRecord, Inventory};
