pub mod io;
pub mod model;

pub use io::*;
pub use model::*;
