//! Data-fetch layer for the attendance backend.
//!
//! [`AttendanceApi`] is the seam between the controller and the network: the
//! view talks to the backend through [`HttpAttendanceApi`], tests substitute
//! a recording fake.

pub mod http;

use chrono::NaiveDate;

use crate::{
    error::Error,
    model::{
        attendance::{AttendanceRecordDto, AttendanceStatus, DailyStatusMap},
        class::ClassGroupDto,
        student::StudentDto,
    },
};

pub use http::HttpAttendanceApi;

/// Operations the attendance backend exposes.
///
/// Futures are not required to be `Send`; the view runs on a single-threaded
/// browser executor.
#[allow(async_fn_in_trait)]
pub trait AttendanceApi {
    /// All classes known to the backend
    async fn get_classes(&self) -> Result<Vec<ClassGroupDto>, Error>;

    /// All students of every class; there is no server-side class filter
    async fn get_students(&self) -> Result<Vec<StudentDto>, Error>;

    /// Attendance records of one class on one date
    async fn get_attendance_by_class(
        &self,
        class_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecordDto>, Error>;

    /// Every attendance record held by the backend
    async fn get_all_attendance(&self) -> Result<Vec<AttendanceRecordDto>, Error>;

    /// Upsert the status of a single student
    async fn add_attendance(
        &self,
        class_id: &str,
        date: NaiveDate,
        student_login: &str,
        status: AttendanceStatus,
    ) -> Result<(), Error>;

    /// Upsert the statuses of a whole class on one date in a single request
    async fn update_attendance(
        &self,
        class_id: &str,
        date: NaiveDate,
        statuses: &DailyStatusMap,
    ) -> Result<(), Error>;
}
