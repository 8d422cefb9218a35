// Application layer - Panel rendering, dispatch and paced feeds
pub mod dashboard_service;
pub mod pacing;
pub mod panel_renderer;
pub mod panels;
pub mod signal_generator;
pub mod streaming_service;
