// Data models (structs)
pub mod plan;
pub mod purchase;
pub mod settings;

pub use plan::*;
pub use purchase::*;
pub use settings::*;
