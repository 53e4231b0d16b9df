pub mod converter;
pub mod error;

pub use converter::*;
pub use error::*;
