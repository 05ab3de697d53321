#[cfg(test)]
mod tests {
    use crate::logic::{compute_availability, generate_time_slots, is_bookable_slot};
    use gymbook_common::{Reservation, Role, User};
    use proptest::prelude::*;

    proptest! {
        // Slots are consecutive hourly buckets covering exactly the opening hours
        #[test]
        fn test_slots_cover_opening_hours(open in 0u32..24, close in 0u32..=24) {
            let slots = generate_time_slots(open, close);

            prop_assert_eq!(slots.len() as u32, close.saturating_sub(open));
            for (i, slot) in slots.iter().enumerate() {
                prop_assert_eq!(slot.start_hour(), open + i as u32);
                prop_assert!(is_bookable_slot(&slot.to_string(), open, close));
            }
        }

        // A booked slot is reported as taken and every other slot stays free
        #[test]
        fn test_single_booking_blocks_one_slot(
            open in 0u32..12,
            len in 1u32..12,
            pick in 0u32..12,
        ) {
            let close = open + len;
            let slots = generate_time_slots(open, close);
            let booked = &slots[(pick % len) as usize];
            let user = User::new(
                "u1".into(),
                "A".into(),
                String::new(),
                String::new(),
                Role::Trainee,
            );
            let reservations = vec![Reservation::new(
                "r1".into(),
                &user,
                "2030-01-15".into(),
                booked.to_string(),
            )];

            let availability = compute_availability(&slots, &reservations, "2030-01-15", None);

            prop_assert_eq!(availability.iter().filter(|a| !a.available).count(), 1);
            for entry in availability {
                prop_assert_eq!(entry.available, entry.slot != booked.to_string());
            }
        }
    }
}
