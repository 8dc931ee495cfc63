use serde::{Deserialize, Serialize};

use crate::model::{attendance::AttendanceRecordDto, class::ClassGroupDto, student::StudentDto};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Envelope returned by every attendance backend endpoint.
///
/// `success: false` is a rejection even when the HTTP status is 2xx, in which
/// case `message` carries the backend's explanation if it sent one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassesPayload {
    #[serde(default)]
    pub classes: Vec<ClassGroupDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentsPayload {
    #[serde(default)]
    pub students: Vec<StudentDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendancePayload {
    #[serde(default)]
    pub attendance: Vec<AttendanceRecordDto>,
}

/// Write endpoints return no data besides the envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Empty {}
