// Dashboard service - routes a panel request to exactly one renderer
use crate::application::panel_renderer::PanelRenderer;
use crate::application::panels;
use crate::domain::dashboard::{Confirmation, MenuEntry, Panel, PanelRequest, PanelView};
use crate::domain::error::DashboardError;
use crate::domain::medicine::MedicineItem;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    renderer: Arc<dyn PanelRenderer>,
}

impl DashboardService {
    pub fn new(renderer: Arc<dyn PanelRenderer>) -> Self {
        Self { renderer }
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        Panel::MENU
            .iter()
            .map(|panel| MenuEntry {
                label: panel.label(),
                slug: panel.slug(),
            })
            .collect()
    }

    pub fn render(&self, request: PanelRequest) -> Result<PanelView, DashboardError> {
        let panel = request.panel();
        tracing::debug!("Rendering panel {}", panel.slug());

        let view = match request {
            PanelRequest::AiTriage { severity } => PanelView::AiTriage(self.renderer.triage(severity)),
            PanelRequest::BirdAvoidance { control } => {
                PanelView::BirdAvoidance(self.renderer.bird_avoidance(control))
            }
            PanelRequest::Teleconsultation => {
                PanelView::Teleconsultation(self.renderer.teleconsultation())
            }
            PanelRequest::VitalsMonitoring { config } => {
                PanelView::VitalsMonitoring(self.renderer.vitals(config)?)
            }
            PanelRequest::MedicineDispenser => {
                PanelView::MedicineDispenser(self.renderer.dispenser())
            }
        };

        debug_assert_eq!(view.panel(), panel);
        Ok(view)
    }

    pub fn start_video_consultation(&self) -> Confirmation {
        panels::start_video_consultation()
    }

    pub fn send_message(&self, message: &str) -> Confirmation {
        tracing::debug!("Chat message received ({} chars)", message.chars().count());
        panels::send_message(message)
    }

    pub fn dispense(&self, medicine: &str) -> Result<Confirmation, DashboardError> {
        let item: MedicineItem = medicine.parse()?;
        tracing::info!("Dispensing {}", item.name());
        Ok(panels::dispense(item))
    }
}
