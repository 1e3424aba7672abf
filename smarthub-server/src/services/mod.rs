pub mod actuator_service;
pub mod clock;
pub mod duration;
pub mod setting_service;
pub mod sunset_service;

pub use actuator_service::*;
pub use clock::*;
pub use duration::*;
pub use setting_service::*;
pub use sunset_service::*;
