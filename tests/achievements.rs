// tests/achievements.rs

use chrono::{Duration, TimeZone, Utc};
use questlog::achievement::{AchievementRecord, Level, next_boundary_after};
use questlog::errors::QuestlogError;
use questlog::types::{DisplayOption, Period};
use questlog_test_utils::{init_tracing, reference_now};

#[test]
fn recording_feeds_every_counter() {
    init_tracing();
    let now = reference_now();
    let mut record = AchievementRecord::new(now);

    record.record_xp(60, now);
    record.record_xp(45, now + Duration::hours(1));

    assert_eq!(record.cumulative_xp(), 105);
    assert_eq!(record.tasks_completed(), 2);
    assert_eq!(record.windowed_xp(Period::Day, now), 105);
    assert_eq!(record.windowed_xp(Period::Week, now), 105);
    assert_eq!(record.windowed_completed_count(Period::Day, now), 2);
    assert_eq!(record.windowed_completed_count(Period::Week, now), 2);
}

#[test]
fn day_window_resets_at_midnight() {
    let now = reference_now(); // Wednesday 12:00
    let mut record = AchievementRecord::new(now);
    record.record_xp(60, now);

    let just_before = now + Duration::hours(12) - Duration::seconds(1);
    assert_eq!(record.windowed_xp(Period::Day, just_before), 60);

    let midnight = now + Duration::hours(12);
    assert_eq!(record.windowed_xp(Period::Day, midnight), 0);
    assert_eq!(record.windowed_completed_count(Period::Day, midnight), 0);

    // The week and the all-time totals are untouched.
    assert_eq!(record.windowed_xp(Period::Week, midnight), 60);
    assert_eq!(record.cumulative_xp(), 60);
}

#[test]
fn week_window_resets_on_monday() {
    let now = reference_now();
    let mut record = AchievementRecord::new(now);
    record.record_xp(30, now);

    let monday = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    assert_eq!(record.next_boundary(Period::Week), monday);

    let sunday_night = monday - Duration::minutes(1);
    assert_eq!(record.windowed_xp(Period::Week, sunday_night), 30);
    assert_eq!(record.windowed_xp(Period::Week, monday), 0);
    assert_eq!(record.next_boundary(Period::Week), monday + Duration::days(7));
}

#[test]
fn rollover_skips_idle_periods() {
    let now = reference_now();
    let mut record = AchievementRecord::new(now);
    record.record_xp(10, now);

    let much_later = now + Duration::days(10);
    record.record_xp(20, much_later);

    assert_eq!(record.windowed_xp(Period::Day, much_later), 20);
    assert!(record.next_boundary(Period::Day) > much_later);
    assert_eq!(record.cumulative_xp(), 30);
}

#[test]
fn next_boundary_from_a_monday_is_the_following_monday() {
    let monday_noon = Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap();
    assert_eq!(
        next_boundary_after(Period::Week, monday_noon),
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    );
    assert_eq!(
        next_boundary_after(Period::Day, monday_noon),
        Utc.with_ymd_and_hms(2024, 1, 9, 0, 0, 0).unwrap()
    );
}

#[test]
fn level_bands_include_their_lower_bound() {
    assert_eq!(Level::from_xp(0), Level::Level1);
    assert_eq!(Level::from_xp(499), Level::Level1);
    assert_eq!(Level::from_xp(500), Level::Level2);
    assert_eq!(Level::from_xp(999), Level::Level2);
    assert_eq!(Level::from_xp(1000), Level::Level3);
    assert_eq!(Level::from_xp(3999), Level::Level4);
    assert_eq!(Level::from_xp(4000), Level::Level5);
    assert_eq!(Level::from_xp(u32::MAX), Level::Level5);
}

#[test]
fn level_names_round_trip() {
    assert_eq!("lvl.3".parse::<Level>().unwrap(), Level::Level3);
    assert_eq!(Level::Level3.to_string(), "lvl.3");
    assert_eq!(Level::Level3.number(), 3);
    assert_eq!(Level::Level3.max_xp(), 2000);
    assert_eq!(Level::Level4.min_xp(), 2000);

    assert!(matches!(
        "lvl.6".parse::<Level>(),
        Err(QuestlogError::InvalidArgument(_))
    ));
    assert!("level 1".parse::<Level>().is_err());
}

#[test]
fn level_follows_cumulative_xp() {
    let now = reference_now();
    let mut record = AchievementRecord::new(now);
    assert_eq!(record.level(), Level::Level1);
    assert_eq!(record.level_max_xp(), 500);

    record.record_xp(500, now);
    assert_eq!(record.level(), Level::Level2);
    assert_eq!(record.level_max_xp(), 1000);
}

#[test]
fn display_option_maps_to_periods() {
    let mut record = AchievementRecord::new(reference_now());
    assert_eq!(record.display_option(), DisplayOption::AllTime);
    assert_eq!(DisplayOption::AllTime.period(), None);

    record.set_display_option(DisplayOption::ThisWeek);
    assert_eq!(record.display_option().period(), Some(Period::Week));
    assert_eq!(DisplayOption::Today.period(), Some(Period::Day));
}
