mod control;
mod graph;
mod settings;

pub use control::*;
pub use graph::*;
pub use settings::*;
