pub mod display;
pub mod interface;

pub use interface::Cli;
