// Panel renderers - one stateless function per menu entry
use crate::application::signal_generator::SignalGenerator;
use crate::domain::chart::{ChartData, SeriesData};
use crate::domain::control::ControlPanel;
use crate::domain::dashboard::{
    BirdAvoidanceView, Confirmation, DispenserView, Panel, TeleconsultationView, TriageView,
    VitalsView,
};
use crate::domain::error::DashboardError;
use crate::domain::flight::{FlightStatus, RouteMap};
use crate::domain::medicine::MedicineItem;
use crate::domain::telemetry::{TelemetryLog, TelemetrySample};
use crate::domain::triage::SeverityLevel;
use crate::domain::vitals::VitalsConfig;

pub const START_VIDEO_ACTION: &str = "Start Video Consultation";
pub const SEND_MESSAGE_ACTION: &str = "Send Message";

pub fn render_triage(severity: SeverityLevel) -> TriageView {
    let statuses: Vec<&'static str> = FlightStatus::SEQUENCE.iter().map(|s| s.label()).collect();
    let final_status = FlightStatus::SEQUENCE
        .iter()
        .find(|s| s.is_terminal())
        .map_or("", |s| s.label());

    TriageView {
        subheading: Panel::AiTriage.subheading(),
        severity,
        assigned_priority: severity.priority().to_string(),
        route: RouteMap::delivery_route(),
        statuses,
        final_status,
    }
}

pub fn render_bird_avoidance(control: ControlPanel) -> BirdAvoidanceView {
    let telemetry: Vec<TelemetrySample> = TelemetryLog::new().collect();
    let log = telemetry.iter().map(TelemetrySample::log_line).collect();

    BirdAvoidanceView {
        subheading: Panel::BirdAvoidance.subheading(),
        telemetry,
        log,
        control,
    }
}

pub fn render_teleconsultation() -> TeleconsultationView {
    TeleconsultationView {
        subheading: Panel::Teleconsultation.subheading(),
        actions: vec![START_VIDEO_ACTION, SEND_MESSAGE_ACTION],
        chat_prompt: "Type your message here:",
    }
}

pub fn render_vitals(
    config: VitalsConfig,
    generator: &SignalGenerator,
) -> Result<VitalsView, DashboardError> {
    let series = generator.generate(&config)?;

    let charts = vec![
        ChartData::line(
            "ecg",
            "ECG Signal",
            "Time (s)",
            "ECG Signal",
            SeriesData::from_samples("ecg", "ECG", &series.time, &series.ecg),
        ),
        ChartData::line(
            "spo2",
            "SpO₂",
            "Time (s)",
            "SpO₂ (%)",
            SeriesData::from_samples("spo2", "SpO₂", &series.time, &series.spo2),
        ),
        ChartData::line(
            "temperature",
            "Body Temperature",
            "Time (s)",
            "Temperature (°C)",
            SeriesData::from_samples("temperature", "Temperature", &series.time, &series.temperature),
        ),
    ];

    Ok(VitalsView {
        subheading: Panel::VitalsMonitoring.subheading(),
        config,
        series,
        charts,
    })
}

pub fn render_dispenser() -> DispenserView {
    DispenserView {
        subheading: Panel::MedicineDispenser.subheading(),
        medicines: MedicineItem::ALL.iter().map(|m| m.name()).collect(),
    }
}

pub fn start_video_consultation() -> Confirmation {
    Confirmation::new(START_VIDEO_ACTION, "Video Consultation Started!")
}

/// The message body is accepted as-is; nothing is delivered anywhere
pub fn send_message(_message: &str) -> Confirmation {
    Confirmation::new(SEND_MESSAGE_ACTION, "Message sent! AI will prescribe accordingly.")
}

pub fn dispense(item: MedicineItem) -> Confirmation {
    Confirmation::new(item.name(), item.confirmation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triage_high_severity() {
        let view = render_triage(SeverityLevel::High);
        assert_eq!(view.assigned_priority, "Critical Priority");
        assert_eq!(view.final_status, "Completed ✅");
        assert_eq!(view.statuses.len(), 5);
    }

    #[test]
    fn test_bird_avoidance_log() {
        let view = render_bird_avoidance(ControlPanel::default());
        assert_eq!(view.telemetry.len(), 5);
        assert_eq!(view.log.len(), 5);
        assert!(view.log[0].starts_with("Drone position 1: Lat 12.971"));
        assert!(view.log[4].ends_with("Altitude 125m"));
    }

    #[test]
    fn test_vitals_charts() {
        let view = render_vitals(VitalsConfig::default(), &SignalGenerator::new(Some(1))).unwrap();
        assert_eq!(view.charts.len(), 3);
        assert_eq!(view.charts[0].title, "ECG Signal");
        assert_eq!(view.charts[0].x_label, "Time (s)");
        assert_eq!(view.charts[0].series[0].points.len(), 100);
    }

    #[test]
    fn test_dispense_only_confirms_pressed_item() {
        let confirmation = dispense(MedicineItem::Ibuprofen);
        assert_eq!(confirmation.message, "Ibuprofen dispensed successfully! ✅");
        for other in MedicineItem::ALL.iter().filter(|m| **m != MedicineItem::Ibuprofen) {
            assert!(!confirmation.message.contains(other.name()));
        }
    }

    #[test]
    fn test_teleconsultation_actions() {
        assert_eq!(start_video_consultation().message, "Video Consultation Started!");
        assert_eq!(
            send_message("").message,
            "Message sent! AI will prescribe accordingly."
        );
        assert_eq!(render_teleconsultation().actions.len(), 2);
    }
}
