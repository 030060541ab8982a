pub mod fetch;
pub mod sources;

pub use fetch::*;
pub use sources::*;
