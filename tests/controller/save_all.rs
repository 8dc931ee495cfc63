use presensi::{
    client::{
        controller::SaveOutcome,
        store::notice::{SAVE_ALL_FAILED, SAVE_ALL_SUCCEEDED},
    },
    model::attendance::AttendanceStatus,
};
use presensi_test_utils::{fixtures::factory::date, prelude::*};

use super::two_class_builder;

/// Tests that a bulk save sends the whole map and refreshes the record list.
#[tokio::test]
async fn test_save_all_sends_map_and_refreshes_records() {
    let test = two_class_builder().build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.controller.mark_all_present();
    test.state.borrow_mut().set_status("budi", AttendanceStatus::Sick);
    test.api.clear_calls();

    let outcome = test.controller.save_all().await;

    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(
        test.api.calls(),
        vec![
            ApiCall::UpdateAttendance {
                class_id: TEST_CLASS_ID.to_string(),
                date: date(2024, 5, 1),
                statuses: test.statuses(),
            },
            ApiCall::GetAllAttendance,
        ]
    );
    assert_eq!(test.state.borrow().records().len(), 2);
    assert!(!test.state.borrow().is_saving());
    assert_eq!(test.notice_message().as_deref(), Some(SAVE_ALL_SUCCEEDED));
}

/// Tests that a second bulk save while the first is outstanding sends nothing.
///
/// Expected: one bulk request; the second call reports Skipped
#[tokio::test]
async fn test_save_all_in_flight_guard() {
    let test = two_class_builder().build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.controller.mark_all_present();
    let release = test.api.hold(Endpoint::UpdateAttendance);

    let (first, second) = futures::join!(test.controller.save_all(), async {
        let outcome = test.controller.save_all().await;
        let _ = release.send(());
        outcome
    });

    assert_eq!(first, SaveOutcome::Saved);
    assert_eq!(second, SaveOutcome::Skipped);
    assert_eq!(test.api.call_count(Endpoint::UpdateAttendance), 1);
}

/// Tests that a failed bulk save clears the in-flight flag so it can be retried.
#[tokio::test]
async fn test_save_all_failure_allows_retry() {
    let test = two_class_builder()
        .with_failing(Endpoint::UpdateAttendance)
        .build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.controller.mark_all_present();

    let outcome = test.controller.save_all().await;

    assert_eq!(outcome, SaveOutcome::Failed);
    assert!(!test.state.borrow().is_saving());
    assert_eq!(test.notice_message().as_deref(), Some(SAVE_ALL_FAILED));
    assert_eq!(test.api.call_count(Endpoint::AllAttendance), 0);

    test.api.recover(Endpoint::UpdateAttendance);
    let retry = test.controller.save_all().await;

    assert_eq!(retry, SaveOutcome::Saved);
    assert_eq!(test.api.stored_records().len(), 2);
}

/// Tests that a bulk save without a selected class is skipped.
#[tokio::test]
async fn test_save_all_without_class_is_skipped() {
    let test = two_class_builder().build();

    let outcome = test.controller.save_all().await;

    assert_eq!(outcome, SaveOutcome::Skipped);
    assert!(test.api.calls().is_empty());
}

/// Tests that a bulk save overwrites what a failed single edit left diverged.
#[tokio::test]
async fn test_save_all_reconciles_failed_single_edit() {
    let test = two_class_builder()
        .with_failing(Endpoint::AddAttendance)
        .build();
    test.controller.select_class(TEST_CLASS_ID).await;
    test.controller.set_status("ana", AttendanceStatus::Sick).await;
    assert!(test.api.stored_records().is_empty());

    test.controller.save_all().await;

    let stored = test.api.stored_records();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].student_login, "ana");
    assert_eq!(stored[0].status.known(), Some(AttendanceStatus::Sick));
}
