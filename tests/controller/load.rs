use presensi::{
    client::store::notice::{LOAD_CLASSES_FAILED, LOAD_RECORDS_FAILED, LOAD_STUDENTS_FAILED},
    model::attendance::AttendanceStatus,
};
use presensi_test_utils::{fixtures::factory::date, prelude::*};

use super::two_class_builder;

/// Tests that mounting the view loads classes and the full record list.
///
/// Expected: one request to each endpoint and both lists in state
#[tokio::test]
async fn test_initialize_loads_classes_and_records() {
    let test = two_class_builder()
        .with_record(TEST_CLASS_ID, date(2024, 4, 30), "ana", AttendanceStatus::Present)
        .build();

    test.controller.initialize().await;

    assert_eq!(test.api.call_count(Endpoint::Classes), 1);
    assert_eq!(test.api.call_count(Endpoint::AllAttendance), 1);
    assert_eq!(test.api.call_count(Endpoint::Students), 0);

    let state = test.state.borrow();
    assert_eq!(state.classes().len(), 2);
    assert_eq!(state.class_name(TEST_OTHER_CLASS_ID), Some(TEST_OTHER_CLASS_NAME));
    assert_eq!(state.records().len(), 1);
    assert!(state.notice().is_none());
}

/// Tests that a failed class load keeps the previously loaded list.
///
/// Expected: class list unchanged, generic error notice shown
#[tokio::test]
async fn test_load_classes_failure_keeps_prior_list() {
    let test = two_class_builder().build();
    test.controller.load_classes().await;

    test.api.fail(Endpoint::Classes);
    test.controller.load_classes().await;

    assert_eq!(test.state.borrow().classes().len(), 2);
    assert_eq!(test.notice_message().as_deref(), Some(LOAD_CLASSES_FAILED));
}

/// Tests that a failed record load on mount does not block the class list.
#[tokio::test]
async fn test_initialize_with_failing_records_still_loads_classes() {
    let test = two_class_builder()
        .with_failing(Endpoint::AllAttendance)
        .build();

    test.controller.initialize().await;

    assert_eq!(test.state.borrow().classes().len(), 2);
    assert!(test.state.borrow().records().is_empty());
    assert_eq!(test.notice_message().as_deref(), Some(LOAD_RECORDS_FAILED));
}

/// Tests that selecting a class fetches all students, keeps only that class's
/// roster, and loads its attendance for the selected date.
#[tokio::test]
async fn test_select_class_loads_roster_and_attendance() {
    let test = two_class_builder()
        .with_record(TEST_CLASS_ID, date(2024, 5, 1), "budi", AttendanceStatus::Sick)
        .with_record(TEST_CLASS_ID, date(2024, 5, 2), "ana", AttendanceStatus::Absent)
        .build();

    test.controller.select_class(TEST_CLASS_ID).await;

    assert_eq!(test.roster_logins(), vec!["ana", "budi"]);
    assert_eq!(test.statuses().len(), 1);
    assert_eq!(
        test.state.borrow().status_of("budi"),
        Some(AttendanceStatus::Sick)
    );
    assert_eq!(
        test.api.calls(),
        vec![
            ApiCall::GetStudents,
            ApiCall::GetAttendanceByClass {
                class_id: TEST_CLASS_ID.to_string(),
                date: date(2024, 5, 1),
            },
        ]
    );
}

/// Tests that switching class replaces the DailyStatusMap wholesale.
///
/// Expected: every key afterwards belongs to the new roster
#[tokio::test]
async fn test_switching_class_replaces_status_map() {
    let test = two_class_builder()
        .with_record(TEST_OTHER_CLASS_ID, date(2024, 5, 1), "citra", AttendanceStatus::Permission)
        .build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.controller.mark_all_present();
    assert_eq!(test.statuses().len(), 2);

    test.controller.select_class(TEST_OTHER_CLASS_ID).await;

    let roster = test.roster_logins();
    let statuses = test.statuses();
    assert!(statuses.keys().all(|login| roster.contains(login)));
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses.get("citra"), Some(&AttendanceStatus::Permission));
}

/// Tests that choosing the blank class option sends nothing and clears the view.
#[tokio::test]
async fn test_blank_class_selection_is_noop() {
    let test = two_class_builder().build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.api.clear_calls();

    test.controller.select_class("").await;
    test.controller.load_students_and_attendance("   ").await;

    assert!(test.api.calls().is_empty());
    assert_eq!(test.state.borrow().selected_class(), None);
    assert!(test.roster_logins().is_empty());
}

/// Tests that a failed student load stops before fetching attendance.
#[tokio::test]
async fn test_student_load_failure_skips_attendance_fetch() {
    let test = two_class_builder()
        .with_failing(Endpoint::Students)
        .build();

    test.controller.select_class(TEST_CLASS_ID).await;

    assert_eq!(test.api.call_count(Endpoint::AttendanceByClass), 0);
    assert_eq!(test.notice_message().as_deref(), Some(LOAD_STUDENTS_FAILED));
}

/// Tests that refresh reloads everything, including the selected class.
#[tokio::test]
async fn test_refresh_reloads_selected_class() {
    let test = two_class_builder().build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.api.clear_calls();

    test.controller.refresh().await;

    assert_eq!(test.api.call_count(Endpoint::Classes), 1);
    assert_eq!(test.api.call_count(Endpoint::AllAttendance), 1);
    assert_eq!(test.api.call_count(Endpoint::Students), 1);
    assert_eq!(test.api.call_count(Endpoint::AttendanceByClass), 1);
}

/// Tests that a roster response arriving after the user picked another class is dropped.
#[tokio::test]
async fn test_late_roster_for_previous_class_is_dropped() {
    let test = two_class_builder().build();
    let release = test.api.hold(Endpoint::Students);

    futures::join!(test.controller.select_class(TEST_CLASS_ID), async {
        test.controller.select_class(TEST_OTHER_CLASS_ID).await;
        let _ = release.send(());
    });

    assert_eq!(test.state.borrow().selected_class(), Some(TEST_OTHER_CLASS_ID));
    assert_eq!(test.roster_logins(), vec!["citra", "dedi"]);
    // The dropped roster never triggers an attendance fetch for the old class
    assert_eq!(test.api.call_count(Endpoint::AttendanceByClass), 1);
}
