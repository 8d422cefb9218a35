// Medicine dispenser domain model
use crate::domain::error::DashboardError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MedicineItem {
    Paracetamol,
    Amoxicillin,
    Ibuprofen,
    Cetirizine,
    Metformin,
}

impl MedicineItem {
    /// Buttons in the order they appear on the dispenser
    pub const ALL: [MedicineItem; 5] = [
        MedicineItem::Paracetamol,
        MedicineItem::Amoxicillin,
        MedicineItem::Ibuprofen,
        MedicineItem::Cetirizine,
        MedicineItem::Metformin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MedicineItem::Paracetamol => "Paracetamol",
            MedicineItem::Amoxicillin => "Amoxicillin",
            MedicineItem::Ibuprofen => "Ibuprofen",
            MedicineItem::Cetirizine => "Cetirizine",
            MedicineItem::Metformin => "Metformin",
        }
    }

    pub fn confirmation(self) -> String {
        format!("{} dispensed successfully! ✅", self.name())
    }
}

impl FromStr for MedicineItem {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MedicineItem::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownMedicine(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_text() {
        assert_eq!(
            MedicineItem::Ibuprofen.confirmation(),
            "Ibuprofen dispensed successfully! ✅"
        );
    }

    #[test]
    fn test_parse_medicine() {
        assert_eq!("ibuprofen".parse::<MedicineItem>().unwrap(), MedicineItem::Ibuprofen);
        assert_eq!(
            "Aspirin".parse::<MedicineItem>(),
            Err(DashboardError::UnknownMedicine("Aspirin".to_string()))
        );
    }
}
