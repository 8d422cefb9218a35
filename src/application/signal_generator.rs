// Signal generator - synthetic ECG, SpO2 and temperature series
use crate::domain::error::DashboardError;
use crate::domain::vitals::{NoiseProfile, SAMPLE_COUNT, TIME_SPAN_SECS, VitalsConfig, VitalsSeries};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

const ECG_FREQUENCY_HZ: f64 = 1.0;

/// Draws fresh noise per render, or replays the same noise when seeded
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalGenerator {
    seed: Option<u64>,
}

impl SignalGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn generate(&self, config: &VitalsConfig) -> Result<VitalsSeries, DashboardError> {
        let config = config.validate()?;
        let mut rng = self.rng();
        generate_series(&config, NoiseProfile::for_config(&config), &mut rng)
    }
}

/// Evenly spaced samples over [start, stop], both ends included
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}

pub fn ecg_waveform(t: f64) -> f64 {
    (2.0 * PI * ECG_FREQUENCY_HZ * t).sin()
}

fn gaussian(std_dev: f64, field: &'static str) -> Result<Normal<f64>, DashboardError> {
    Normal::new(0.0, std_dev).map_err(|e| DashboardError::Render {
        panel: "vitals-monitoring",
        reason: format!("{} noise: {}", field, e),
    })
}

pub fn generate_series<R: Rng + ?Sized>(
    config: &VitalsConfig,
    noise: NoiseProfile,
    rng: &mut R,
) -> Result<VitalsSeries, DashboardError> {
    let ecg_noise = gaussian(noise.ecg, "ecg")?;
    let spo2_noise = gaussian(noise.spo2, "spo2")?;
    let temp_noise = gaussian(noise.temperature, "temperature")?;

    let time = linspace(0.0, TIME_SPAN_SECS, SAMPLE_COUNT);

    let ecg = time
        .iter()
        .map(|&t| ecg_waveform(t) + ecg_noise.sample(&mut *rng))
        .collect();

    let spo2_baseline = f64::from(config.spo2_baseline);
    let spo2 = (0..SAMPLE_COUNT)
        .map(|_| spo2_baseline + spo2_noise.sample(&mut *rng))
        .collect();

    let temperature = (0..SAMPLE_COUNT)
        .map(|_| config.temp_baseline + temp_noise.sample(&mut *rng))
        .collect();

    Ok(VitalsSeries {
        time,
        ecg,
        spo2,
        temperature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_linspace_endpoints() {
        let t = linspace(0.0, 10.0, 100);
        assert_eq!(t.len(), 100);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[99], 10.0);
        assert!((t[1] - 10.0 / 99.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_silent_noise_is_exact() {
        let config = VitalsConfig::default();
        let silent = NoiseProfile {
            ecg: 0.0,
            spo2: 0.0,
            temperature: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let series = generate_series(&config, silent, &mut rng).unwrap();

        assert_eq!(series.ecg.len(), SAMPLE_COUNT);
        for (t, ecg) in series.time.iter().zip(&series.ecg) {
            assert!((ecg - (2.0 * PI * t).sin()).abs() < TOLERANCE);
        }
        assert!(series.spo2.iter().all(|&v| v == 98.0));
        assert!(series.temperature.iter().all(|&v| v == 36.7));
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let generator = SignalGenerator::new(Some(42));
        let config = VitalsConfig::default();
        assert_eq!(generator.generate(&config).unwrap(), generator.generate(&config).unwrap());
    }

    #[test]
    fn test_noise_stays_near_baseline() {
        let generator = SignalGenerator::new(Some(3));
        let config = VitalsConfig {
            spo2_baseline: 95,
            temp_baseline: 37.5,
            ..Default::default()
        };
        let series = generator.generate(&config).unwrap();

        let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
        assert!((mean(&series.spo2) - 95.0).abs() < 0.5);
        assert!((mean(&series.temperature) - 37.5).abs() < 0.1);
        assert!(series.ecg.iter().all(|v| v.abs() < 1.5));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = VitalsConfig {
            ecg_noise: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            SignalGenerator::default().generate(&config),
            Err(DashboardError::InvalidConfiguration { field: "ecg_noise", .. })
        ));
    }
}
