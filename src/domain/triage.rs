// Triage domain model - severity levels and the priority they map to
use crate::domain::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeverityLevel {
    #[default]
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityLabel {
    Normal,
    High,
    Critical,
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 3] = [SeverityLevel::Low, SeverityLevel::Medium, SeverityLevel::High];

    /// Priority assigned to a patient of this severity
    pub fn priority(self) -> PriorityLabel {
        match self {
            SeverityLevel::Low => PriorityLabel::Normal,
            SeverityLevel::Medium => PriorityLabel::High,
            SeverityLevel::High => PriorityLabel::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::Low => "Low",
            SeverityLevel::Medium => "Medium",
            SeverityLevel::High => "High",
        }
    }
}

impl PriorityLabel {
    pub fn label(self) -> &'static str {
        match self {
            PriorityLabel::Normal => "Normal Priority",
            PriorityLabel::High => "High Priority",
            PriorityLabel::Critical => "Critical Priority",
        }
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeverityLevel {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeverityLevel::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownSeverity(s.to_string()))
    }
}
