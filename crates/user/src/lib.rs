mod command;
pub mod password;
pub(crate) mod repository;

pub use command::*;
