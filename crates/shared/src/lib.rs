mod error;
mod ownership;

pub use error::*;
pub use ownership::*;
