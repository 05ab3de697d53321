#[cfg(test)]
mod tests {
    use crate::logic::*;
    use chrono::NaiveDate;
    use chrono_tz::{Pacific, UTC};
    use gymbook_common::{Reservation, ReservationStatus, Role, User};

    fn user(id: &str) -> User {
        User::new(
            id.to_string(),
            format!("User {id}"),
            String::new(),
            String::new(),
            Role::Trainee,
        )
    }

    fn reservation(id: &str, owner: &str, date: &str, slot: &str) -> Reservation {
        Reservation::new(id.to_string(), &user(owner), date.to_string(), slot.to_string())
    }

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_default_opening_hours_give_thirteen_slots() {
        let labels: Vec<String> = generate_time_slots(9, 22)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(labels.len(), 13);
        assert_eq!(labels.first().unwrap(), "09:00-10:00");
        assert_eq!(labels.last().unwrap(), "21:00-22:00");
    }

    #[test]
    fn test_empty_opening_range() {
        assert!(generate_time_slots(10, 10).is_empty());
        assert!(generate_time_slots(12, 9).is_empty());
    }

    #[test]
    fn test_parse_date_is_strict() {
        assert_eq!(parse_date("2030-01-15"), Some(date("2030-01-15")));
        for bad in ["2030-1-15", "2030/01/15", "2030-02-30", "15-01-2030", "", "2030-01-15T00"] {
            assert!(parse_date(bad).is_none(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_bookable_slot_range() {
        assert!(is_bookable_slot("09:00-10:00", 9, 22));
        assert!(is_bookable_slot("21:00-22:00", 9, 22));
        assert!(!is_bookable_slot("08:00-09:00", 9, 22));
        assert!(!is_bookable_slot("22:00-23:00", 9, 22));
        assert!(!is_bookable_slot("morning", 9, 22));
    }

    #[test]
    fn test_past_and_deadline() {
        let today = date("2030-01-15");

        assert!(is_past(date("2030-01-14"), today));
        assert!(!is_past(today, today));

        assert!(deadline_passed(today, today));
        assert!(!deadline_passed(date("2030-01-16"), today));
    }

    #[test]
    fn test_today_follows_time_zone() {
        // UTC+14 and UTC-11 are 25 hours apart, so their dates always differ
        let east = today_in(Pacific::Kiritimati);
        let utc = today_in(UTC);
        let west = today_in(Pacific::Pago_Pago);

        let spread = (east - west).num_days();
        assert!(spread == 1 || spread == 2, "spread was {spread}");
        assert!(east >= utc && utc >= west);
        assert!((east - utc).num_days() <= 1);
    }

    #[test]
    fn test_availability_marks_active_holders_only() {
        let slots = generate_time_slots(9, 12);
        let mut cancelled = reservation("r2", "u2", "2030-01-15", "11:00-12:00");
        cancelled.status = ReservationStatus::Cancelled;
        let reservations = vec![
            reservation("r1", "u1", "2030-01-15", "10:00-11:00"),
            cancelled,
            reservation("r3", "u1", "2030-01-16", "09:00-10:00"),
        ];

        let availability = compute_availability(&slots, &reservations, "2030-01-15", Some("u1"));

        assert_eq!(availability.len(), 3);
        assert!(availability[0].available);
        assert_eq!(availability[0].reservation_id, None);

        assert!(!availability[1].available);
        assert_eq!(availability[1].reservation_id.as_deref(), Some("r1"));
        assert!(availability[1].is_my_reservation);

        assert!(availability[2].available);
        assert!(!availability[2].is_my_reservation);
    }

    #[test]
    fn test_availability_without_user() {
        let slots = generate_time_slots(10, 11);
        let reservations = vec![reservation("r1", "u1", "2030-01-15", "10:00-11:00")];

        let availability = compute_availability(&slots, &reservations, "2030-01-15", None);

        assert!(!availability[0].available);
        assert!(!availability[0].is_my_reservation);
    }

    #[test]
    fn test_active_reservations_filter() {
        let mut cancelled = reservation("r2", "u1", "2030-01-15", "11:00-12:00");
        cancelled.status = ReservationStatus::Cancelled;
        let all = vec![
            reservation("r1", "u1", "2030-01-15", "10:00-11:00"),
            cancelled,
            reservation("r3", "u2", "2030-01-15", "12:00-13:00"),
        ];

        let ids = |list: Vec<Reservation>| list.into_iter().map(|r| r.id).collect::<Vec<_>>();

        assert_eq!(ids(active_reservations(all.clone(), None)), vec!["r1", "r3"]);
        assert_eq!(ids(active_reservations(all, Some("u1"))), vec!["r1"]);
    }
}
