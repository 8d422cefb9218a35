// Bird avoidance control panel settings
use crate::domain::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ControlMode {
    #[default]
    Auto,
    Remote,
}

impl FromStr for ControlMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AUTO" => Ok(ControlMode::Auto),
            "REMOTE" => Ok(ControlMode::Remote),
            _ => Err(DashboardError::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlPanel {
    pub mode: ControlMode,
    pub sound_deterrent: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            mode: ControlMode::Auto,
            sound_deterrent: true,
        }
    }
}
