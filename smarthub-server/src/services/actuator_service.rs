use smarthub_api::models::ControlResponse;
use time::Time;

use crate::errors::ControlError;
use crate::models::Setting;
use crate::services::clock::parse_time_of_day;

/// Inclusive time-of-day window during which the light may be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightWindow {
    pub on: Time,
    pub off: Time,
}

impl LightWindow {
    /// An `off` earlier than `on` means the window runs through midnight.
    pub fn contains(&self, now: Time) -> bool {
        if self.on <= self.off {
            self.on <= now && now <= self.off
        } else {
            now >= self.on || now <= self.off
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorState {
    pub fan_on: bool,
    pub light_on: bool,
}

impl From<ActuatorState> for ControlResponse {
    fn from(state: ActuatorState) -> Self {
        Self {
            fan: state.fan_on,
            light: state.light_on,
        }
    }
}

pub struct ActuatorService;

impl ActuatorService {
    pub fn fan_on(setting: &Setting, temperature: f64, motion: bool) -> bool {
        motion && temperature > setting.user_temp
    }

    pub fn light_window(setting: &Setting) -> Result<LightWindow, ControlError> {
        let on = parse_time_of_day(&setting.user_light)
            .ok_or_else(|| ControlError::CorruptSetting(setting.user_light.clone()))?;
        let off = parse_time_of_day(&setting.light_time_off)
            .ok_or_else(|| ControlError::CorruptSetting(setting.light_time_off.clone()))?;

        Ok(LightWindow { on, off })
    }

    /// Derives fan and light states for one sensor report.
    pub fn evaluate(
        setting: &Setting,
        temperature: f64,
        motion: bool,
        current_time: &str,
    ) -> Result<ActuatorState, ControlError> {
        let now = parse_time_of_day(current_time)
            .ok_or_else(|| ControlError::InvalidCurrentTime(current_time.to_string()))?;
        let window = Self::light_window(setting)?;

        Ok(ActuatorState {
            fan_on: Self::fan_on(setting, temperature, motion),
            light_on: motion && window.contains(now),
        })
    }
}
