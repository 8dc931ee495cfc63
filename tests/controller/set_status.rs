use presensi::{
    client::store::notice::SAVE_STATUS_FAILED,
    model::attendance::{AttendanceStatus, DailyStatusMap},
};
use presensi_test_utils::{fixtures::factory::date, prelude::*};

use super::two_class_builder;

/// Tests the single-edit scenario on a roster with nothing fetched yet.
///
/// Expected: one present, no sick, one upsert sent
#[tokio::test]
async fn test_set_status_updates_stats_and_upserts() {
    let test = two_class_builder().build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.api.clear_calls();

    test.controller
        .set_status("ana", AttendanceStatus::Present)
        .await;

    let stats = test.stats();
    assert_eq!(stats.present, 1);
    assert_eq!(stats.sick, 0);
    assert_eq!(
        test.api.calls(),
        vec![ApiCall::AddAttendance {
            class_id: TEST_CLASS_ID.to_string(),
            date: date(2024, 5, 1),
            student_login: "ana".to_string(),
            status: AttendanceStatus::Present,
        }]
    );
    assert_eq!(test.api.stored_records().len(), 1);
}

/// Tests that edits to different students commute.
#[tokio::test]
async fn test_set_status_disjoint_students_in_any_order() {
    let forward = two_class_builder().build();
    forward.controller.select_class(TEST_CLASS_ID).await;
    forward.controller.set_status("ana", AttendanceStatus::Sick).await;
    forward.controller.set_status("budi", AttendanceStatus::Permission).await;

    let backward = two_class_builder().build();
    backward.controller.select_class(TEST_CLASS_ID).await;
    backward.controller.set_status("budi", AttendanceStatus::Permission).await;
    backward.controller.set_status("ana", AttendanceStatus::Sick).await;

    let mut expected = DailyStatusMap::new();
    expected.insert("ana".to_string(), AttendanceStatus::Sick);
    expected.insert("budi".to_string(), AttendanceStatus::Permission);
    assert_eq!(forward.statuses(), expected);
    assert_eq!(backward.statuses(), expected);
}

/// Tests that a failed upsert does not roll back the local edit.
///
/// Expected: local status kept, backend unchanged, error notice shown
#[tokio::test]
async fn test_set_status_failure_keeps_optimistic_value() {
    let test = two_class_builder()
        .with_failing(Endpoint::AddAttendance)
        .build();
    test.controller.select_class(TEST_CLASS_ID).await;

    test.controller
        .set_status("budi", AttendanceStatus::Absent)
        .await;

    assert_eq!(test.state.borrow().status_of("budi"), Some(AttendanceStatus::Absent));
    assert!(test.api.stored_records().is_empty());
    assert_eq!(test.notice_message().as_deref(), Some(SAVE_STATUS_FAILED));
}

/// Tests that the local write is visible before the upsert completes.
#[tokio::test]
async fn test_set_status_writes_locally_before_request_completes() {
    let test = two_class_builder().build();
    test.controller.select_class(TEST_CLASS_ID).await;
    let release = test.api.hold(Endpoint::AddAttendance);

    futures::join!(
        test.controller.set_status("ana", AttendanceStatus::Sick),
        async {
            assert_eq!(test.state.borrow().status_of("ana"), Some(AttendanceStatus::Sick));
            assert!(test.api.stored_records().is_empty());
            let _ = release.send(());
        }
    );

    assert_eq!(test.api.stored_records().len(), 1);
}

/// Tests that edits without a selected class or for unknown students send nothing.
#[tokio::test]
async fn test_set_status_outside_roster_is_ignored() {
    let test = two_class_builder().build();

    test.controller.set_status("ana", AttendanceStatus::Present).await;
    test.controller.select_class(TEST_CLASS_ID).await;
    test.controller.set_status("citra", AttendanceStatus::Present).await;

    assert_eq!(test.api.call_count(Endpoint::AddAttendance), 0);
    assert!(test.statuses().is_empty());
}

/// Tests that marking everyone present is local only and covers the roster.
#[tokio::test]
async fn test_mark_all_present_is_local() {
    let test = two_class_builder().build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.api.clear_calls();

    test.controller.mark_all_present();

    let stats = test.stats();
    assert_eq!(stats.present, 2);
    assert_eq!(stats.sick + stats.permission + stats.absent, 0);
    assert!(test.api.calls().is_empty());
}
