// Dashboard domain model - menu entries, panel inputs and rendered views
use super::chart::ChartData;
use super::control::ControlPanel;
use super::error::DashboardError;
use super::flight::RouteMap;
use super::telemetry::TelemetrySample;
use super::triage::SeverityLevel;
use super::vitals::{VitalsConfig, VitalsSeries};
use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "🩺 MediDrone Control Center";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    AiTriage,
    BirdAvoidance,
    Teleconsultation,
    VitalsMonitoring,
    MedicineDispenser,
}

impl Panel {
    /// Menu entries in sidebar order
    pub const MENU: [Panel; 5] = [
        Panel::AiTriage,
        Panel::BirdAvoidance,
        Panel::Teleconsultation,
        Panel::VitalsMonitoring,
        Panel::MedicineDispenser,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Panel::AiTriage => "AI Triage & Drone Simulation",
            Panel::BirdAvoidance => "Bird Avoidance",
            Panel::Teleconsultation => "Teleconsultation",
            Panel::VitalsMonitoring => "Vitals Monitoring",
            Panel::MedicineDispenser => "Medicine Dispenser",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Panel::AiTriage => "ai-triage",
            Panel::BirdAvoidance => "bird-avoidance",
            Panel::Teleconsultation => "teleconsultation",
            Panel::VitalsMonitoring => "vitals-monitoring",
            Panel::MedicineDispenser => "medicine-dispenser",
        }
    }

    pub fn subheading(self) -> &'static str {
        match self {
            Panel::AiTriage => "AI Triage System & Drone Simulation",
            Panel::BirdAvoidance => "🚁 Drone Bird Avoidance Simulation",
            Panel::Teleconsultation => "Telecommunication Module: Doctor–Patient Interaction",
            Panel::VitalsMonitoring => "Vitals Monitoring Simulator — ECG, SpO₂, Body Temperature",
            Panel::MedicineDispenser => "💊 Smart Medicine Dispenser",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self, DashboardError> {
        Panel::MENU
            .into_iter()
            .find(|panel| panel.slug() == slug || panel.label() == slug)
            .ok_or_else(|| DashboardError::UnknownPanel(slug.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    pub label: &'static str,
    pub slug: &'static str,
}

/// One render request: the selected panel together with that panel's inputs
#[derive(Debug, Clone, PartialEq)]
pub enum PanelRequest {
    AiTriage { severity: SeverityLevel },
    BirdAvoidance { control: ControlPanel },
    Teleconsultation,
    VitalsMonitoring { config: VitalsConfig },
    MedicineDispenser,
}

impl PanelRequest {
    pub fn panel(&self) -> Panel {
        match self {
            PanelRequest::AiTriage { .. } => Panel::AiTriage,
            PanelRequest::BirdAvoidance { .. } => Panel::BirdAvoidance,
            PanelRequest::Teleconsultation => Panel::Teleconsultation,
            PanelRequest::VitalsMonitoring { .. } => Panel::VitalsMonitoring,
            PanelRequest::MedicineDispenser => Panel::MedicineDispenser,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TriageView {
    pub subheading: &'static str,
    pub severity: SeverityLevel,
    pub assigned_priority: String,
    pub route: RouteMap,
    pub statuses: Vec<&'static str>,
    pub final_status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BirdAvoidanceView {
    pub subheading: &'static str,
    pub telemetry: Vec<TelemetrySample>,
    pub log: Vec<String>,
    pub control: ControlPanel,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeleconsultationView {
    pub subheading: &'static str,
    pub actions: Vec<&'static str>,
    pub chat_prompt: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct VitalsView {
    pub subheading: &'static str,
    pub config: VitalsConfig,
    pub series: VitalsSeries,
    pub charts: Vec<ChartData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DispenserView {
    pub subheading: &'static str,
    pub medicines: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum PanelView {
    AiTriage(TriageView),
    BirdAvoidance(BirdAvoidanceView),
    Teleconsultation(TeleconsultationView),
    VitalsMonitoring(VitalsView),
    MedicineDispenser(DispenserView),
}

impl PanelView {
    pub fn panel(&self) -> Panel {
        match self {
            PanelView::AiTriage(_) => Panel::AiTriage,
            PanelView::BirdAvoidance(_) => Panel::BirdAvoidance,
            PanelView::Teleconsultation(_) => Panel::Teleconsultation,
            PanelView::VitalsMonitoring(_) => Panel::VitalsMonitoring,
            PanelView::MedicineDispenser(_) => Panel::MedicineDispenser,
        }
    }
}

/// Banner shown after a button press
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct Confirmation {
    pub action: String,
    pub message: String,
}

impl Confirmation {
    pub fn new(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_lookup() {
        for panel in Panel::MENU {
            assert_eq!(Panel::from_slug(panel.slug()).unwrap(), panel);
            assert_eq!(Panel::from_slug(panel.label()).unwrap(), panel);
        }
        assert_eq!(
            Panel::from_slug("flight-control"),
            Err(DashboardError::UnknownPanel("flight-control".to_string()))
        );
    }

    #[test]
    fn test_request_panel() {
        let request = PanelRequest::AiTriage {
            severity: SeverityLevel::High,
        };
        assert_eq!(request.panel(), Panel::AiTriage);
        assert_eq!(PanelRequest::MedicineDispenser.panel(), Panel::MedicineDispenser);
    }
}
