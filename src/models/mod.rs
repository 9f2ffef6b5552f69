pub mod catalog;
pub mod tryon;
pub mod wire;

pub use catalog::*;
pub use tryon::*;
pub use wire::*;
