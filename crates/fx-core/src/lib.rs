pub mod constants;
pub mod frame;
pub mod loader;
pub mod particles;
pub mod reveal;

pub use constants::*;
pub use frame::*;
pub use loader::*;
pub use particles::*;
pub use reveal::*;
