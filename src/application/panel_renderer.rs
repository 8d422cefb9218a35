// Renderer trait - one method per panel, injected into the dashboard service
use crate::application::panels;
use crate::application::signal_generator::SignalGenerator;
use crate::domain::control::ControlPanel;
use crate::domain::dashboard::{
    BirdAvoidanceView, DispenserView, TeleconsultationView, TriageView, VitalsView,
};
use crate::domain::error::DashboardError;
use crate::domain::triage::SeverityLevel;
use crate::domain::vitals::VitalsConfig;

pub trait PanelRenderer: Send + Sync {
    fn triage(&self, severity: SeverityLevel) -> TriageView;

    fn bird_avoidance(&self, control: ControlPanel) -> BirdAvoidanceView;

    fn teleconsultation(&self) -> TeleconsultationView;

    /// Fails only for an out-of-range config
    fn vitals(&self, config: VitalsConfig) -> Result<VitalsView, DashboardError>;

    fn dispenser(&self) -> DispenserView;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRenderer {
    generator: SignalGenerator,
}

impl StandardRenderer {
    pub fn new(generator: SignalGenerator) -> Self {
        Self { generator }
    }
}

impl PanelRenderer for StandardRenderer {
    fn triage(&self, severity: SeverityLevel) -> TriageView {
        panels::render_triage(severity)
    }

    fn bird_avoidance(&self, control: ControlPanel) -> BirdAvoidanceView {
        panels::render_bird_avoidance(control)
    }

    fn teleconsultation(&self) -> TeleconsultationView {
        panels::render_teleconsultation()
    }

    fn vitals(&self, config: VitalsConfig) -> Result<VitalsView, DashboardError> {
        panels::render_vitals(config, &self.generator)
    }

    fn dispenser(&self) -> DispenserView {
        panels::render_dispenser()
    }
}
