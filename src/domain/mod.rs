// Domain layer - Panel inputs, generated data and views
pub mod chart;
pub mod control;
pub mod dashboard;
pub mod error;
pub mod flight;
pub mod medicine;
pub mod telemetry;
pub mod triage;
pub mod vitals;
