// Domain errors raised while building a panel view
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("invalid configuration: {field}={value} is outside {range}")]
    InvalidConfiguration {
        field: &'static str,
        value: String,
        range: String,
    },

    #[error("unknown panel: {0}")]
    UnknownPanel(String),

    #[error("unknown severity: {0}")]
    UnknownSeverity(String),

    #[error("unknown control mode: {0}")]
    UnknownMode(String),

    #[error("unknown medicine: {0}")]
    UnknownMedicine(String),

    #[error("failed to render panel {panel}: {reason}")]
    Render { panel: &'static str, reason: String },
}

impl DashboardError {
    pub fn out_of_range<T: std::fmt::Display>(field: &'static str, value: T, min: T, max: T) -> Self {
        DashboardError::InvalidConfiguration {
            field,
            value: value.to_string(),
            range: format!("[{}, {}]", min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = DashboardError::out_of_range("heart_rate", 200, 40, 140);
        assert_eq!(
            err.to_string(),
            "invalid configuration: heart_rate=200 is outside [40, 140]"
        );
    }
}
