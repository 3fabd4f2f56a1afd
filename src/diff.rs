//! Change detection between vacancy snapshots
//!
//! Four ordered checks, short-circuiting on the first hit. Free-text
//! fields (`summary`, room `details`, `notes`) and `last_check` are
//! deliberately ignored: the AI rewords them on every run.

use std::collections::HashSet;

use tracing::info;

use crate::record::VacancyRecord;

/// Decide whether `current` differs from `previous` enough to notify
///
/// Room lists are compared as sets of identifiers, order-independent.
/// The room check is asymmetric by construction: beyond the size
/// comparison, only identifiers present in `current` are looked up in
/// `previous`, so a disappeared room is detected solely through the size
/// mismatch. Whether that asymmetry is intended is an open product
/// question; the behavior is kept as-is.
pub fn has_changes(current: &VacancyRecord, previous: Option<&VacancyRecord>) -> bool {
    let Some(previous) = previous else {
        info!("No previous state - treating as change");
        return true;
    };

    if current.has_vacancies != previous.has_vacancies {
        info!("Vacancy status changed");
        return true;
    }

    if current.vacancy_count != previous.vacancy_count {
        info!("Vacancy count changed");
        return true;
    }

    let current_rooms: HashSet<&str> = current.room_ids().collect();
    let previous_rooms: HashSet<&str> = previous.room_ids().collect();
    if current_rooms.len() != previous_rooms.len()
        || current_rooms
            .iter()
            .any(|room| !previous_rooms.contains(room))
    {
        info!("Room list changed");
        return true;
    }

    info!("No significant changes detected");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RoomEntry;

    fn record(has_vacancies: bool, vacancy_count: u32, rooms: &[(&str, &str)]) -> VacancyRecord {
        VacancyRecord {
            has_vacancies,
            vacancy_count,
            summary: "summary".to_string(),
            rooms: rooms
                .iter()
                .map(|(room, details)| RoomEntry {
                    room: room.to_string(),
                    details: details.to_string(),
                })
                .collect(),
            notes: String::new(),
            last_check: None,
        }
    }

    #[test]
    fn test_absent_previous_is_always_a_change() {
        let current = record(false, 0, &[]);
        assert!(has_changes(&current, None));
    }

    #[test]
    fn test_vacancy_status_flip_is_a_change() {
        let previous = record(false, 0, &[]);
        let current = record(true, 1, &[("304", "Studio, $1200")]);
        assert!(has_changes(&current, Some(&previous)));
    }

    #[test]
    fn test_count_only_difference_is_a_change() {
        let previous = record(true, 2, &[("A", ""), ("B", "")]);
        let current = record(true, 3, &[("A", ""), ("B", "")]);
        assert!(has_changes(&current, Some(&previous)));
    }

    #[test]
    fn test_room_order_is_irrelevant() {
        let previous = record(true, 2, &[("A", ""), ("B", "")]);
        let current = record(true, 2, &[("B", ""), ("A", "")]);
        assert!(!has_changes(&current, Some(&previous)));
    }

    #[test]
    fn test_new_room_id_is_a_change() {
        let previous = record(true, 2, &[("A", ""), ("B", "")]);
        let current = record(true, 2, &[("A", ""), ("C", "")]);
        assert!(has_changes(&current, Some(&previous)));
    }

    #[test]
    fn test_removed_room_detected_via_size() {
        let previous = record(true, 2, &[("A", ""), ("B", "")]);
        let current = record(true, 2, &[("A", "")]);
        assert!(has_changes(&current, Some(&previous)));
    }

    #[test]
    fn test_text_only_differences_are_ignored() {
        let previous = record(true, 1, &[("304", "Studio, $1200")]);
        let mut current = record(true, 1, &[("304", "Studio, now $1250!")]);
        current.summary = "completely reworded".to_string();
        current.notes = "new notes".to_string();
        assert!(!has_changes(&current, Some(&previous)));
    }

    #[test]
    fn test_duplicate_room_ids_compare_as_a_set() {
        let previous = record(true, 2, &[("A", ""), ("A", "")]);
        let current = record(true, 2, &[("A", "")]);
        assert!(!has_changes(&current, Some(&previous)));
    }
}
