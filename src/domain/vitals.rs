// Vitals domain model - simulator inputs and generated series
use crate::domain::error::DashboardError;
use serde::{Deserialize, Serialize};

pub const SAMPLE_COUNT: usize = 100;
pub const TIME_SPAN_SECS: f64 = 10.0;

pub const HEART_RATE_RANGE: (u32, u32) = (40, 140);
pub const ECG_NOISE_RANGE: (f64, f64) = (0.0, 0.05);
pub const SPO2_RANGE: (u32, u32) = (85, 100);
pub const TEMP_RANGE: (f64, f64) = (35.0, 40.0);

/// Slider values for one vitals render
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalsConfig {
    pub heart_rate: u32,
    pub ecg_noise: f64,
    pub spo2_baseline: u32,
    pub temp_baseline: f64,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            heart_rate: 78,
            ecg_noise: 0.01,
            spo2_baseline: 98,
            temp_baseline: 36.7,
        }
    }
}

impl VitalsConfig {
    pub fn validate(self) -> Result<Self, DashboardError> {
        let (min, max) = HEART_RATE_RANGE;
        if !(min..=max).contains(&self.heart_rate) {
            return Err(DashboardError::out_of_range("heart_rate", self.heart_rate, min, max));
        }

        let (min, max) = ECG_NOISE_RANGE;
        if !(min..=max).contains(&self.ecg_noise) {
            return Err(DashboardError::out_of_range("ecg_noise", self.ecg_noise, min, max));
        }

        let (min, max) = SPO2_RANGE;
        if !(min..=max).contains(&self.spo2_baseline) {
            return Err(DashboardError::out_of_range("spo2", self.spo2_baseline, min, max));
        }

        let (min, max) = TEMP_RANGE;
        if !(min..=max).contains(&self.temp_baseline) {
            return Err(DashboardError::out_of_range("temp", self.temp_baseline, min, max));
        }

        Ok(self)
    }
}

/// Standard deviations of the Gaussian noise added to each vital
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseProfile {
    pub ecg: f64,
    pub spo2: f64,
    pub temperature: f64,
}

impl NoiseProfile {
    pub const SPO2_STD_DEV: f64 = 0.5;
    pub const TEMPERATURE_STD_DEV: f64 = 0.1;

    pub fn for_config(config: &VitalsConfig) -> Self {
        Self {
            ecg: config.ecg_noise,
            spo2: Self::SPO2_STD_DEV,
            temperature: Self::TEMPERATURE_STD_DEV,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsSeries {
    pub time: Vec<f64>,
    pub ecg: Vec<f64>,
    pub spo2: Vec<f64>,
    pub temperature: Vec<f64>,
}
