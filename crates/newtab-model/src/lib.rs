pub mod advice;
pub mod error;
pub mod normalize;

pub use advice::*;
pub use error::*;
