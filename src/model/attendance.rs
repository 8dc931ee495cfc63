use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Working set of statuses for one class on one date, keyed by student login.
///
/// A student without an entry is unset; unset is never persisted.
pub type DailyStatusMap = BTreeMap<String, AttendanceStatus>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Sick,
    Permission,
    Absent,
}

impl AttendanceStatus {
    /// Every status, in the order the view shows them
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Sick,
        AttendanceStatus::Permission,
        AttendanceStatus::Absent,
    ];

    /// Localized label shown in the view and written to exports
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Hadir",
            AttendanceStatus::Sick => "Sakit",
            AttendanceStatus::Permission => "Izin",
            AttendanceStatus::Absent => "Alpha",
        }
    }

    /// Value sent over the wire
    pub fn code(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Sick => "sick",
            AttendanceStatus::Permission => "permission",
            AttendanceStatus::Absent => "absent",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "badge-success",
            AttendanceStatus::Sick => "badge-warning",
            AttendanceStatus::Permission => "badge-info",
            AttendanceStatus::Absent => "badge-error",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "btn-success",
            AttendanceStatus::Sick => "btn-warning",
            AttendanceStatus::Permission => "btn-info",
            AttendanceStatus::Absent => "btn-error",
        }
    }
}

/// Status as stored on a historical record.
///
/// The backend may hold values this view does not know about; those are kept
/// verbatim instead of failing the whole record list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordStatus {
    Known(AttendanceStatus),
    Other(String),
}

impl RecordStatus {
    pub fn known(&self) -> Option<AttendanceStatus> {
        match self {
            RecordStatus::Known(status) => Some(*status),
            RecordStatus::Other(_) => None,
        }
    }

    /// Localized label, or the raw value for unmapped statuses
    pub fn label(&self) -> &str {
        match self {
            RecordStatus::Known(status) => status.label(),
            RecordStatus::Other(raw) => raw,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            RecordStatus::Known(status) => status.badge_class(),
            RecordStatus::Other(_) => "badge-ghost",
        }
    }
}

impl From<AttendanceStatus> for RecordStatus {
    fn from(status: AttendanceStatus) -> Self {
        RecordStatus::Known(status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordDto {
    pub id: String,
    pub class_id: String,
    pub date: NaiveDate,
    pub student_login: String,
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub note: String,
}

/// Body of the single-record upsert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAttendanceDto {
    pub class_id: String,
    pub date: NaiveDate,
    pub student_login: String,
    pub status: AttendanceStatus,
}

/// Body of the bulk upsert for one class and date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAttendanceDto {
    pub date: NaiveDate,
    pub attendance: DailyStatusMap,
}
