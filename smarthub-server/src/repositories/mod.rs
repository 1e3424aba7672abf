mod sensor_log;
mod setting;

pub use sensor_log::SensorLogRepository;
pub use setting::SettingRepository;
