// Telemetry domain model - synthetic drone position readings

pub const TELEMETRY_LOG_LEN: u32 = 5;

const BASE_LATITUDE: f64 = 12.97;
const BASE_LONGITUDE: f64 = 77.59;
const COORDINATE_STEP: f64 = 0.001;
const BASE_ALTITUDE_M: f64 = 100.0;
const ALTITUDE_STEP_M: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TelemetrySample {
    pub index: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl TelemetrySample {
    /// Reading for a 1-based position in the log
    pub fn at(index: u32) -> Self {
        let step = f64::from(index);
        Self {
            index,
            latitude: BASE_LATITUDE + step * COORDINATE_STEP,
            longitude: BASE_LONGITUDE + step * COORDINATE_STEP,
            altitude: BASE_ALTITUDE_M + step * ALTITUDE_STEP_M,
        }
    }

    pub fn log_line(&self) -> String {
        format!(
            "Drone position {}: Lat {}, Lon {}, Altitude {}m",
            self.index, self.latitude, self.longitude, self.altitude
        )
    }
}

/// Lazy log of readings 1..=5. Clone or build a new one to restart.
#[derive(Debug, Clone)]
pub struct TelemetryLog {
    next: u32,
}

impl TelemetryLog {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for TelemetryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TelemetryLog {
    type Item = TelemetrySample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > TELEMETRY_LOG_LEN {
            return None;
        }
        let sample = TelemetrySample::at(self.next);
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (TELEMETRY_LOG_LEN + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TelemetryLog {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_pure() {
        for index in 1..=TELEMETRY_LOG_LEN {
            assert_eq!(TelemetrySample::at(index), TelemetrySample::at(index));
        }
    }

    #[test]
    fn test_sample_values() {
        let sample = TelemetrySample::at(3);
        assert!((sample.latitude - 12.973).abs() < 1e-9);
        assert!((sample.longitude - 77.593).abs() < 1e-9);
        assert_eq!(sample.altitude, 115.0);
        assert!(sample.log_line().starts_with("Drone position 3: Lat 12.973"));
        assert!(sample.log_line().ends_with("Altitude 115m"));
    }

    #[test]
    fn test_log_is_finite_and_restartable() {
        let log = TelemetryLog::new();
        assert_eq!(log.len(), 5);

        let first: Vec<u32> = log.clone().map(|s| s.index).collect();
        let second: Vec<u32> = log.map(|s| s.index).collect();
        assert_eq!(first, vec![1, 2, 3, 4, 5]);
        assert_eq!(first, second);
    }
}
