mod command;
pub(crate) mod repository;
mod types;

pub use command::*;
pub use types::*;
