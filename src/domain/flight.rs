// Flight domain model - delivery lifecycle and the static route map
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    TakingOff,
    EnRoute,
    Delivered,
    Returning,
    Completed,
}

impl FlightStatus {
    /// Delivery lifecycle in the order it is shown
    pub const SEQUENCE: [FlightStatus; 5] = [
        FlightStatus::TakingOff,
        FlightStatus::EnRoute,
        FlightStatus::Delivered,
        FlightStatus::Returning,
        FlightStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FlightStatus::TakingOff => "Taking off",
            FlightStatus::EnRoute => "En route",
            FlightStatus::Delivered => "Delivered",
            FlightStatus::Returning => "Returning",
            FlightStatus::Completed => "Completed ✅",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == FlightStatus::Completed
    }

    pub fn display_line(self) -> String {
        format!("Drone Status: {}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: GeoPoint,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolyLine {
    pub points: Vec<GeoPoint>,
    pub color: String,
    pub weight: u32,
}

/// Map shown on the triage panel: two markers joined by one line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMap {
    pub center: GeoPoint,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub route: PolyLine,
}

pub const ROUTE_START: GeoPoint = GeoPoint::new(12.9716, 77.5946);
pub const ROUTE_DESTINATION: GeoPoint = GeoPoint::new(12.9816, 77.6046);

impl RouteMap {
    pub fn delivery_route() -> Self {
        Self {
            center: ROUTE_START,
            zoom: 13,
            markers: vec![
                Marker {
                    position: ROUTE_START,
                    popup: "Start Point".to_string(),
                },
                Marker {
                    position: ROUTE_DESTINATION,
                    popup: "Destination".to_string(),
                },
            ],
            route: PolyLine {
                points: vec![ROUTE_START, ROUTE_DESTINATION],
                color: "blue".to_string(),
                weight: 3,
            },
        }
    }
}
