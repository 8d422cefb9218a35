// Streaming service - paced status and telemetry feeds
use crate::application::pacing::{TimedEvent, paced, status_events, telemetry_events};
use crate::domain::flight::FlightStatus;
use crate::domain::telemetry::TelemetrySample;
use crate::infrastructure::config::PacingSettings;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamMessage {
    Status {
        seq: u32,
        status: FlightStatus,
        text: String,
    },
    Telemetry {
        seq: u32,
        sample: TelemetrySample,
        text: String,
    },
    Complete {
        total: u32,
        duration_ms: i64,
        finished_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone)]
pub struct StreamingService {
    pacing: PacingSettings,
}

impl StreamingService {
    pub fn new(pacing: PacingSettings) -> Self {
        Self { pacing }
    }

    /// Drone status updates for the triage panel, one per pacing interval
    pub fn stream_flight_status(&self) -> mpsc::Receiver<StreamMessage> {
        let events = status_events(self.pacing.status_delay());
        spawn_feed(events, |seq, status: FlightStatus| StreamMessage::Status {
            seq,
            status,
            text: status.display_line(),
        })
    }

    pub fn stream_telemetry(&self) -> mpsc::Receiver<StreamMessage> {
        let events = telemetry_events(self.pacing.telemetry_delay());
        spawn_feed(events, |seq, sample: TelemetrySample| StreamMessage::Telemetry {
            seq,
            text: sample.log_line(),
            sample,
        })
    }
}

fn spawn_feed<I, T, F>(events: I, to_message: F) -> mpsc::Receiver<StreamMessage>
where
    I: Iterator<Item = TimedEvent<T>> + Send + 'static,
    T: Send + 'static,
    F: Fn(u32, T) -> StreamMessage + Send + 'static,
{
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let start_time = Instant::now();

    tokio::spawn(async move {
        let stream = paced(events);
        futures::pin_mut!(stream);

        let mut total = 0u32;
        while let Some(item) = stream.next().await {
            total += 1;
            if tx.send(to_message(total, item)).await.is_err() {
                tracing::debug!("Feed receiver dropped after {} events", total);
                return;
            }
        }

        let complete = StreamMessage::Complete {
            total,
            duration_ms: start_time.elapsed().as_millis() as i64,
            finished_at: Utc::now(),
        };
        let _ = tx.send(complete).await;
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn drain(mut rx: mpsc::Receiver<StreamMessage>) -> Vec<StreamMessage> {
        let mut messages = Vec::new();
        while let Some(msg) = rx.recv().await {
            messages.push(msg);
        }
        messages
    }

    #[tokio::test(start_paused = true)]
    async fn test_flight_status_feed() {
        let service = StreamingService::new(PacingSettings::default());
        let messages = drain(service.stream_flight_status()).await;

        assert_eq!(messages.len(), 6);
        let statuses: Vec<FlightStatus> = messages
            .iter()
            .filter_map(|m| match m {
                StreamMessage::Status { status, .. } => Some(*status),
                _ => None,
            })
            .collect();
        assert_eq!(statuses, FlightStatus::SEQUENCE.to_vec());

        match &messages[4] {
            StreamMessage::Status { seq, text, .. } => {
                assert_eq!(*seq, 5);
                assert_eq!(text, "Drone Status: Completed ✅");
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert!(matches!(messages[5], StreamMessage::Complete { total: 5, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_telemetry_feed() {
        let service = StreamingService::new(PacingSettings::default());
        let messages = drain(service.stream_telemetry()).await;

        assert_eq!(messages.len(), 6);
        match &messages[0] {
            StreamMessage::Telemetry { seq, sample, .. } => {
                assert_eq!(*seq, 1);
                assert_eq!(sample.altitude, 105.0);
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert!(matches!(messages[5], StreamMessage::Complete { total: 5, .. }));
    }
}
