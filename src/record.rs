//! Domain types for vacancy monitoring
//!
//! A [`VacancyRecord`] is the single entity the whole pipeline produces,
//! compares, persists, and notifies about. It is built fresh from live page
//! content on every run; the previously persisted record is only consulted
//! for change detection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single room listed as available
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomEntry {
    /// Room identifier (number, name, or code as listed on the page)
    pub room: String,

    /// Free-text details (type, price, move-in date, ...)
    pub details: String,
}

/// Structured vacancy state extracted from the monitored page
///
/// `vacancy_count` and `rooms` are independent fields: both originate from
/// an AI extraction that may miscount, so neither is derived from the other
/// and change detection compares them separately. `has_vacancies` is taken
/// verbatim from the extraction, never derived from `rooms`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VacancyRecord {
    /// Whether any room is currently available
    pub has_vacancies: bool,

    /// Number of available rooms reported
    pub vacancy_count: u32,

    /// Human-readable summary of the page
    pub summary: String,

    /// Rooms listed as available
    pub rooms: Vec<RoomEntry>,

    /// Supplementary information (requirements, caveats, parse markers)
    pub notes: String,

    /// When this record was persisted; stamped at save time and not
    /// meaningful for comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_check: Option<DateTime<Utc>>,
}

impl VacancyRecord {
    /// Identifiers of the listed rooms, for set-wise comparison
    pub fn room_ids(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|r| r.room.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_roundtrips_snapshot_shape() {
        let json = r#"{
            "has_vacancies": true,
            "vacancy_count": 2,
            "summary": "Two studios open",
            "rooms": [
                {"room": "304", "details": "Studio, $1200"},
                {"room": "305", "details": "Studio, $1250"}
            ],
            "notes": "Move-in from March",
            "last_check": "2024-03-01T12:00:00Z"
        }"#;

        let record: VacancyRecord = serde_json::from_str(json).unwrap();
        assert!(record.has_vacancies);
        assert_eq!(record.vacancy_count, 2);
        assert_eq!(record.rooms.len(), 2);
        assert!(record.last_check.is_some());
    }

    #[test]
    fn test_missing_fields_default() {
        let record: VacancyRecord =
            serde_json::from_str(r#"{"has_vacancies": false}"#).unwrap();
        assert!(!record.has_vacancies);
        assert_eq!(record.vacancy_count, 0);
        assert!(record.rooms.is_empty());
        assert!(record.last_check.is_none());
    }
}
