use presensi::{
    client::{controller::today, store::notice::LOAD_ATTENDANCE_FAILED},
    model::attendance::AttendanceStatus,
};
use presensi_test_utils::{fixtures::factory::date, prelude::*};

use super::two_class_builder;

/// Tests that moving to the next day with a class selected fetches only that
/// day's attendance.
///
/// Expected: exactly one attendance request for 2024-05-02, no roster request
#[tokio::test]
async fn test_next_day_fetches_attendance_only() {
    let test = two_class_builder().on_date(date(2024, 5, 1)).build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.api.clear_calls();

    test.controller.next_day().await;

    assert_eq!(test.state.borrow().date(), date(2024, 5, 2));
    assert_eq!(
        test.api.calls(),
        vec![ApiCall::GetAttendanceByClass {
            class_id: TEST_CLASS_ID.to_string(),
            date: date(2024, 5, 2),
        }]
    );
}

/// Tests that the new date's response replaces the previous date's statuses.
#[tokio::test]
async fn test_previous_day_replaces_status_map() {
    let test = two_class_builder()
        .on_date(date(2024, 5, 2))
        .with_record(TEST_CLASS_ID, date(2024, 5, 1), "ana", AttendanceStatus::Sick)
        .with_record(TEST_CLASS_ID, date(2024, 5, 2), "budi", AttendanceStatus::Absent)
        .build();
    test.controller.select_class(TEST_CLASS_ID).await;
    assert_eq!(test.state.borrow().status_of("budi"), Some(AttendanceStatus::Absent));

    test.controller.previous_day().await;

    let statuses = test.statuses();
    assert_eq!(test.state.borrow().date(), date(2024, 5, 1));
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses.get("ana"), Some(&AttendanceStatus::Sick));
}

/// Tests that navigating without a selected class only moves the date.
#[tokio::test]
async fn test_navigation_without_class_sends_nothing() {
    let test = two_class_builder().on_date(date(2024, 5, 31)).build();

    test.controller.next_day().await;
    test.controller.go_to_date(date(2024, 1, 15)).await;

    assert_eq!(test.state.borrow().date(), date(2024, 1, 15));
    assert!(test.api.calls().is_empty());
}

/// Tests that the today action resets the date to the current day.
#[tokio::test]
async fn test_today_resets_date() {
    let test = two_class_builder().on_date(date(2020, 1, 1)).build();

    test.controller.today().await;

    assert_eq!(test.state.borrow().date(), today());
}

/// Tests that a failed attendance fetch leaves the previous date's statuses visible.
///
/// The date label moves but the map is only replaced by a successful response.
#[tokio::test]
async fn test_failed_fetch_keeps_previous_statuses() {
    let test = two_class_builder()
        .with_record(TEST_CLASS_ID, date(2024, 5, 1), "ana", AttendanceStatus::Present)
        .build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.api.fail(Endpoint::AttendanceByClass);

    test.controller.next_day().await;

    assert_eq!(test.state.borrow().date(), date(2024, 5, 2));
    assert_eq!(test.state.borrow().status_of("ana"), Some(AttendanceStatus::Present));
    assert_eq!(test.notice_message().as_deref(), Some(LOAD_ATTENDANCE_FAILED));
}

/// Tests that a slow response for a date the user already left is discarded.
#[tokio::test]
async fn test_late_response_for_previous_date_is_dropped() {
    let test = two_class_builder()
        .with_record(TEST_CLASS_ID, date(2024, 5, 2), "ana", AttendanceStatus::Sick)
        .with_record(TEST_CLASS_ID, date(2024, 5, 3), "budi", AttendanceStatus::Permission)
        .build();
    test.controller.select_class(TEST_CLASS_ID).await;
    let release = test.api.hold(Endpoint::AttendanceByClass);

    futures::join!(test.controller.go_to_date(date(2024, 5, 2)), async {
        test.controller.go_to_date(date(2024, 5, 3)).await;
        let _ = release.send(());
    });

    let statuses = test.statuses();
    assert_eq!(test.state.borrow().date(), date(2024, 5, 3));
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses.get("budi"), Some(&AttendanceStatus::Permission));
}
