pub mod loader;
pub mod render;
pub mod surface;

pub use loader::*;
pub use render::*;
pub use surface::*;
