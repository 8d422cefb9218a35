// Pacing - sequences of timed events, decoupled from the clock that waits on them
use crate::domain::flight::FlightStatus;
use crate::domain::telemetry::{TelemetryLog, TelemetrySample};
use futures::stream::Stream;
use std::time::Duration;

/// An item to show and how long it stays on screen before the next one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedEvent<T> {
    pub delay: Duration,
    pub item: T,
}

pub fn status_events(delay: Duration) -> impl Iterator<Item = TimedEvent<FlightStatus>> + Clone {
    FlightStatus::SEQUENCE
        .into_iter()
        .map(move |item| TimedEvent { delay, item })
}

pub fn telemetry_events(delay: Duration) -> impl Iterator<Item = TimedEvent<TelemetrySample>> + Clone {
    TelemetryLog::new().map(move |item| TimedEvent { delay, item })
}

/// Yields each item as soon as it is due, then holds it for its delay
pub fn paced<I, T>(events: I) -> impl Stream<Item = T>
where
    I: IntoIterator<Item = TimedEvent<T>>,
{
    let events = events.into_iter();
    async_stream::stream! {
        for event in events {
            yield event.item;
            tokio::time::sleep(event.delay).await;
        }
    }
}
