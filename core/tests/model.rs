//! Data-model basics: week anchoring, day codes, availability
//! defaults, and role-title parsing.

use chrono::NaiveDate;
use rosterly_core::{
    availability::AvailabilityMap,
    employee::RoleTag,
    error::ScheduleError,
    types::{WeekStart, Weekday},
};

#[test]
fn week_start_must_be_a_sunday() {
    let sunday = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    assert!(WeekStart::new(sunday).is_ok());

    let wednesday = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let err = WeekStart::new(wednesday).expect_err("wednesday is not a week anchor");
    assert!(matches!(err, ScheduleError::WeekStartNotSunday { .. }));
}

#[test]
fn containing_snaps_back_to_sunday() {
    let wednesday = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
    let week = WeekStart::containing(wednesday);
    assert_eq!(week.date(), NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());

    // A Sunday snaps to itself.
    let sunday = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
    assert_eq!(WeekStart::containing(sunday).date(), sunday);
}

#[test]
fn date_for_walks_the_week_sunday_first() {
    let week = WeekStart::containing(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    assert_eq!(
        week.date_for(Weekday::Sun),
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    );
    assert_eq!(
        week.date_for(Weekday::Sat),
        NaiveDate::from_ymd_opt(2025, 1, 11).unwrap()
    );
}

#[test]
fn day_codes_round_trip() {
    for day in Weekday::ALL {
        assert_eq!(Weekday::from_code(day.code()), Some(day));
    }
    assert_eq!(Weekday::from_code("xyz"), None);
    assert_eq!(Weekday::Sun.index(), 0);
    assert_eq!(Weekday::Sat.index(), 6);
}

#[test]
fn absent_availability_defaults_to_available() {
    let mut map = AvailabilityMap::new();
    assert_eq!(map.submitted_count(), 0);
    map.mark_unavailable("e-1", Weekday::Mon);
    map.set("e-1", Weekday::Tue, false);
    assert_eq!(map.submitted_count(), 1, "two days, one submitter");
    // Resubmission flips the entry in place.
    map.set("e-1", Weekday::Tue, true);
    assert!(map.is_available("e-1", Weekday::Tue));

    // Explicit entry wins.
    assert!(!map.is_available("e-1", Weekday::Mon));
    // Same employee, day with no entry: available.
    assert!(map.is_available("e-1", Weekday::Wed));
    // Unknown employee: open availability.
    assert!(map.is_available("e-9", Weekday::Mon));
}

#[test]
fn role_titles_parse_to_capability_tags() {
    assert_eq!(RoleTag::from_title("Key Holder"), RoleTag::KeyHolder);
    assert_eq!(RoleTag::from_title("senior keyholder"), RoleTag::KeyHolder);
    assert_eq!(RoleTag::from_title("KEY HOLDER / shift lead"), RoleTag::KeyHolder);
    assert_eq!(RoleTag::from_title("cashier"), RoleTag::Staff);
    assert_eq!(RoleTag::from_title("holder of opinions"), RoleTag::Staff);
    assert_eq!(RoleTag::from_code(RoleTag::KeyHolder.code()), RoleTag::KeyHolder);
}
