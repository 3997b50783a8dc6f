pub mod engine;
pub mod plan;
pub mod wiring;

mod merge;
mod metadata;
mod prompt;

pub use engine::*;
pub use plan::*;
pub use wiring::EdgePolicy;
