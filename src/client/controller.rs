//! Fetch/sync controller for the attendance view.
//!
//! Keeps [`AttendanceState`] in step with the backend. Every remote failure is
//! caught here, logged, and turned into a notice; nothing is propagated to the
//! renderer and nothing is retried automatically.
//!
//! A status edit is written locally before its upsert is sent and is not
//! reverted if the upsert fails. The next attendance load or bulk save
//! reconciles the two sides.

use chrono::{Days, Local, NaiveDate};
use dioxus_logger::tracing;

use crate::client::{
    api::AttendanceApi,
    store::{
        notice::{
            NoticeKind, LOAD_ATTENDANCE_FAILED, LOAD_CLASSES_FAILED, LOAD_RECORDS_FAILED,
            LOAD_STUDENTS_FAILED, SAVE_ALL_FAILED, SAVE_ALL_SUCCEEDED, SAVE_STATUS_FAILED,
        },
        AttendanceState, StateHandle,
    },
};
use crate::model::attendance::AttendanceStatus;

/// Result of a [`AttendanceController::save_all`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The bulk upsert succeeded and the record list was refreshed
    Saved,
    /// The bulk upsert failed; a notice was raised
    Failed,
    /// Nothing was sent: a bulk save was already in flight or no class is selected
    Skipped,
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Clone)]
pub struct AttendanceController<A, S> {
    api: A,
    state: S,
}

impl<A, S> AttendanceController<A, S>
where
    A: AttendanceApi,
    S: StateHandle,
{
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    /// Mount sequence: classes and the full record list, fetched concurrently
    pub async fn initialize(&self) {
        futures::join!(self.load_classes(), self.load_records());
    }

    /// Explicit retry after a load failure
    pub async fn refresh(&self) {
        self.initialize().await;

        if let Some(class_id) = self.selected_class() {
            self.load_students_and_attendance(&class_id).await;
        }
    }

    pub async fn load_classes(&self) {
        match self.api.get_classes().await {
            Ok(classes) => {
                tracing::info!("Loaded {} classes", classes.len());
                self.state.with_mut(|s| s.set_classes(classes));
            }
            Err(err) => {
                tracing::error!("Failed to load classes: {err}");
                self.notify(NoticeKind::Error, LOAD_CLASSES_FAILED);
            }
        }
    }

    pub async fn load_records(&self) {
        match self.api.get_all_attendance().await {
            Ok(records) => {
                tracing::info!("Loaded {} attendance records", records.len());
                self.state.with_mut(|s| s.set_records(records));
            }
            Err(err) => {
                tracing::error!("Failed to load attendance records: {err}");
                self.notify(NoticeKind::Error, LOAD_RECORDS_FAILED);
            }
        }
    }

    /// Selects a class and loads its roster and attendance for the current date.
    ///
    /// A blank id clears the selection without fetching anything.
    pub async fn select_class(&self, class_id: &str) {
        let Some(class_id) = self.state.with_mut(|s| s.select_class(class_id)) else {
            tracing::debug!("Class selection cleared");
            return;
        };

        self.load_students_and_attendance(&class_id).await;
    }

    pub async fn load_students_and_attendance(&self, class_id: &str) {
        if class_id.trim().is_empty() {
            return;
        }

        let students = match self.api.get_students().await {
            Ok(students) => students,
            Err(err) => {
                tracing::error!("Failed to load students: {err}");
                self.notify(NoticeKind::Error, LOAD_STUDENTS_FAILED);
                return;
            }
        };

        if !self.state.with_mut(|s| s.set_roster(class_id, students)) {
            return;
        }
        tracing::debug!(
            "Roster for class {class_id} has {} students",
            self.state.with(|s| s.roster().len())
        );

        let date = self.state.with(AttendanceState::date);
        self.load_attendance_for_date(class_id, date).await;
    }

    /// Re-fetches attendance only; the roster is left as is
    pub async fn load_attendance_for_date(&self, class_id: &str, date: NaiveDate) {
        match self.api.get_attendance_by_class(class_id, date).await {
            Ok(records) => {
                let applied = self
                    .state
                    .with_mut(|s| s.apply_daily_attendance(class_id, date, &records));
                if applied {
                    tracing::debug!(
                        "Applied {} attendance records for class {class_id} on {date}",
                        records.len()
                    );
                }
            }
            Err(err) => {
                tracing::error!("Failed to load attendance for class {class_id} on {date}: {err}");
                self.notify(NoticeKind::Error, LOAD_ATTENDANCE_FAILED);
            }
        }
    }

    /// Sets a student's status locally, then upserts it.
    ///
    /// The local value stays even if the upsert fails.
    pub async fn set_status(&self, student_login: &str, status: AttendanceStatus) {
        let Some((class_id, date)) = self
            .state
            .with_mut(|s| s.set_status(student_login, status))
        else {
            return;
        };

        match self
            .api
            .add_attendance(&class_id, date, student_login, status)
            .await
        {
            Ok(()) => tracing::debug!("Saved {student_login} as {} on {date}", status.code()),
            Err(err) => {
                tracing::error!("Failed to save status of {student_login}: {err}");
                self.notify(NoticeKind::Error, SAVE_STATUS_FAILED);
            }
        }
    }

    /// Marks the whole roster present locally; call [`Self::save_all`] to persist
    pub fn mark_all_present(&self) {
        self.state.with_mut(AttendanceState::mark_all_present);
    }

    /// Persists the whole DailyStatusMap in one bulk upsert.
    ///
    /// Calls made while a bulk save is in flight return [`SaveOutcome::Skipped`]
    /// without sending anything.
    pub async fn save_all(&self) -> SaveOutcome {
        let Some(request) = self.state.with_mut(AttendanceState::begin_bulk_save) else {
            return SaveOutcome::Skipped;
        };

        tracing::info!(
            "Saving {} statuses for class {} on {}",
            request.statuses.len(),
            request.class_id,
            request.date
        );
        let result = self
            .api
            .update_attendance(&request.class_id, request.date, &request.statuses)
            .await;
        self.state.with_mut(AttendanceState::finish_bulk_save);

        match result {
            Ok(()) => {
                self.notify(NoticeKind::Success, SAVE_ALL_SUCCEEDED);
                self.load_records().await;
                SaveOutcome::Saved
            }
            Err(err) => {
                tracing::error!("Failed to save attendance: {err}");
                self.notify(NoticeKind::Error, SAVE_ALL_FAILED);
                SaveOutcome::Failed
            }
        }
    }

    pub async fn previous_day(&self) {
        let date = self.state.with(AttendanceState::date);
        if let Some(date) = date.checked_sub_days(Days::new(1)) {
            self.go_to_date(date).await;
        }
    }

    pub async fn next_day(&self) {
        let date = self.state.with(AttendanceState::date);
        if let Some(date) = date.checked_add_days(Days::new(1)) {
            self.go_to_date(date).await;
        }
    }

    pub async fn today(&self) {
        self.go_to_date(today()).await;
    }

    /// Moves the selected date and, if a class is selected, reloads its attendance.
    ///
    /// The previous date's statuses stay visible until the new ones arrive.
    pub async fn go_to_date(&self, date: NaiveDate) {
        self.state.with_mut(|s| s.set_date(date));

        if let Some(class_id) = self.selected_class() {
            self.load_attendance_for_date(&class_id, date).await;
        }
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.state.with_mut(|s| s.dismiss_notice(id));
    }

    pub fn notify(&self, kind: NoticeKind, message: &str) -> u64 {
        self.state.with_mut(|s| s.notify(kind, message))
    }

    fn selected_class(&self) -> Option<String> {
        self.state.with(|s| s.selected_class().map(str::to_string))
    }
}
