pub mod control_handle;
pub mod graph_handle;
pub mod setting_handle;

pub use control_handle::*;
pub use graph_handle::*;
pub use setting_handle::*;
