//! Local state of the attendance view.
//!
//! All mutation happens through the reducer methods below so the rules about
//! what a response may overwrite live in one place and can be tested without
//! a renderer. The controller calls them; components only read.

use std::collections::HashSet;

use chrono::NaiveDate;
use dioxus_logger::tracing;

use crate::{
    client::store::{
        notice::{Notice, NoticeKind},
        stats::AttendanceStats,
    },
    model::{
        attendance::{AttendanceRecordDto, AttendanceStatus, DailyStatusMap},
        class::ClassGroupDto,
        student::StudentDto,
    },
};

/// Everything a bulk save needs, captured when the save starts
#[derive(Debug, Clone, PartialEq)]
pub struct BulkSaveRequest {
    pub class_id: String,
    pub date: NaiveDate,
    pub statuses: DailyStatusMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceState {
    classes: Vec<ClassGroupDto>,
    selected_class: Option<String>,
    date: NaiveDate,
    roster: Vec<StudentDto>,
    statuses: DailyStatusMap,
    records: Vec<AttendanceRecordDto>,
    saving: bool,
    notice: Option<Notice>,
    next_notice_id: u64,
}

impl AttendanceState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            classes: Vec::new(),
            selected_class: None,
            date,
            roster: Vec::new(),
            statuses: DailyStatusMap::new(),
            records: Vec::new(),
            saving: false,
            notice: None,
            next_notice_id: 1,
        }
    }

    pub fn classes(&self) -> &[ClassGroupDto] {
        &self.classes
    }

    pub fn class_name(&self, class_id: &str) -> Option<&str> {
        self.classes
            .iter()
            .find(|c| c.id == class_id)
            .map(|c| c.name.as_str())
    }

    pub fn selected_class(&self) -> Option<&str> {
        self.selected_class.as_deref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn roster(&self) -> &[StudentDto] {
        &self.roster
    }

    pub fn statuses(&self) -> &DailyStatusMap {
        &self.statuses
    }

    pub fn status_of(&self, student_login: &str) -> Option<AttendanceStatus> {
        self.statuses.get(student_login).copied()
    }

    pub fn records(&self) -> &[AttendanceRecordDto] {
        &self.records
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Statistics for the selected class and date
    pub fn stats(&self) -> AttendanceStats {
        AttendanceStats::from_map(&self.statuses)
    }

    /// Historical records matching the optional class and date filters, in held order
    pub fn filtered_records(
        &self,
        class_id: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Vec<&AttendanceRecordDto> {
        self.records
            .iter()
            .filter(|r| class_id.is_none_or(|id| r.class_id == id))
            .filter(|r| date.is_none_or(|d| r.date == d))
            .collect()
    }

    pub fn set_classes(&mut self, classes: Vec<ClassGroupDto>) {
        self.classes = classes;
    }

    pub fn set_records(&mut self, records: Vec<AttendanceRecordDto>) {
        self.records = records;
    }

    /// Changes the selected class, dropping the previous roster and statuses.
    ///
    /// A blank id clears the selection. Returns the id to load, if any.
    pub fn select_class(&mut self, class_id: &str) -> Option<String> {
        let class_id = class_id.trim();
        self.roster.clear();
        self.statuses.clear();

        if class_id.is_empty() {
            self.selected_class = None;
            None
        } else {
            self.selected_class = Some(class_id.to_string());
            Some(class_id.to_string())
        }
    }

    /// Moves the selected date. Statuses stay until the new date's response lands.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Replaces the roster with the students of `class_id`.
    ///
    /// Returns false and leaves state untouched when the class is no longer selected.
    pub fn set_roster(&mut self, class_id: &str, students: Vec<StudentDto>) -> bool {
        if self.selected_class() != Some(class_id) {
            tracing::debug!("Dropping roster for class {class_id}, selection has changed");
            return false;
        }

        self.roster = students
            .into_iter()
            .filter(|s| s.class_id == class_id)
            .collect();
        true
    }

    /// Replaces the DailyStatusMap with the attendance fetched for `class_id` on `date`.
    ///
    /// Only records of roster members with a recognised status are kept. Returns
    /// false and leaves state untouched when the response no longer matches the
    /// selection.
    pub fn apply_daily_attendance(
        &mut self,
        class_id: &str,
        date: NaiveDate,
        records: &[AttendanceRecordDto],
    ) -> bool {
        if self.selected_class() != Some(class_id) || self.date != date {
            tracing::debug!(
                "Dropping attendance for class {class_id} on {date}, selection has changed"
            );
            return false;
        }

        let roster: HashSet<&str> = self.roster.iter().map(|s| s.login.as_str()).collect();
        let mut statuses = DailyStatusMap::new();
        for record in records {
            if record.class_id != class_id || record.date != date {
                continue;
            }
            if !roster.contains(record.student_login.as_str()) {
                continue;
            }
            match record.status.known() {
                Some(status) => {
                    statuses.insert(record.student_login.clone(), status);
                }
                None => tracing::warn!(
                    "Ignoring unknown status {:?} for student {}",
                    record.status.label(),
                    record.student_login
                ),
            }
        }

        self.statuses = statuses;
        true
    }

    /// Optimistically records a status for a roster member.
    ///
    /// Returns the (class, date) the status belongs to so it can be persisted,
    /// or `None` when nothing is selected or the student is not on the roster.
    pub fn set_status(
        &mut self,
        student_login: &str,
        status: AttendanceStatus,
    ) -> Option<(String, NaiveDate)> {
        let class_id = self.selected_class.clone()?;

        if !self.roster.iter().any(|s| s.login == student_login) {
            tracing::warn!("Student {student_login} is not on the roster of class {class_id}");
            return None;
        }

        self.statuses.insert(student_login.to_string(), status);
        Some((class_id, self.date))
    }

    /// Marks every roster member present locally; persisted only by a bulk save
    pub fn mark_all_present(&mut self) {
        for student in &self.roster {
            self.statuses
                .insert(student.login.clone(), AttendanceStatus::Present);
        }
    }

    /// Raises the in-flight flag and captures the payload of a bulk save.
    ///
    /// Returns `None` if a bulk save is already running or no class is selected.
    pub fn begin_bulk_save(&mut self) -> Option<BulkSaveRequest> {
        if self.saving {
            tracing::debug!("Bulk save already in flight");
            return None;
        }
        let class_id = self.selected_class.clone()?;

        self.saving = true;
        Some(BulkSaveRequest {
            class_id,
            date: self.date,
            statuses: self.statuses.clone(),
        })
    }

    pub fn finish_bulk_save(&mut self) {
        self.saving = false;
    }

    /// Shows a notice, replacing any current one, and returns its id
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notice = Some(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Clears the notice only if it is still the one with `id`
    pub fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }
}
