use chrono::NaiveDate;
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{api::AttendanceApi, config::ClientConfig},
    error::Error,
    model::{
        api::{ApiResponse, AttendancePayload, ClassesPayload, Empty, ErrorDto, StudentsPayload},
        attendance::{
            AddAttendanceDto, AttendanceRecordDto, AttendanceStatus, DailyStatusMap,
            UpdateAttendanceDto,
        },
        class::ClassGroupDto,
        student::StudentDto,
    },
};

/// Browser HTTP client for the attendance backend
#[derive(Debug, Clone, PartialEq)]
pub struct HttpAttendanceApi {
    base_url: String,
}

impl HttpAttendanceApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| Error::RequestError(e.to_string()))?;

        read_envelope(response).await
    }

    async fn send<B: Serialize>(&self, request: Request, body: &B) -> Result<(), Error> {
        let body = serde_json::to_string(body).map_err(|e| Error::ParseError(e.to_string()))?;

        let response = request
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::RequestError(e.to_string()))?;

        read_envelope::<Empty>(response).await.map(|_| ())
    }
}

/// Decodes the `{success, message, ...}` envelope of a response.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    match response.status() {
        200..=299 => {
            let envelope = response
                .json::<ApiResponse<T>>()
                .await
                .map_err(|e| Error::ParseError(e.to_string()))?;

            if envelope.success {
                Ok(envelope.data)
            } else {
                Err(Error::Rejected(
                    envelope
                        .message
                        .unwrap_or_else(|| "no reason given".to_string()),
                ))
            }
        }
        status => {
            let message = match response.text().await {
                Ok(body) => error_message(&body),
                Err(_) => "Unknown error".to_string(),
            };

            Err(Error::StatusError { status, message })
        }
    }
}

/// Message for a non-success body: the `ErrorDto` error, else the plain text
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorDto>(body) {
        Ok(error_dto) => error_dto.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

fn attendance_by_class_path(class_id: &str, date: NaiveDate) -> String {
    format!(
        "/attendance/class/{}?date={}",
        urlencoding::encode(class_id),
        date.format("%Y-%m-%d")
    )
}

fn class_attendance_path(class_id: &str) -> String {
    format!("/attendance/class/{}", urlencoding::encode(class_id))
}

impl AttendanceApi for HttpAttendanceApi {
    async fn get_classes(&self) -> Result<Vec<ClassGroupDto>, Error> {
        let payload: ClassesPayload = self.get("/classes").await?;
        Ok(payload.classes)
    }

    async fn get_students(&self) -> Result<Vec<StudentDto>, Error> {
        let payload: StudentsPayload = self.get("/students").await?;
        Ok(payload.students)
    }

    async fn get_attendance_by_class(
        &self,
        class_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecordDto>, Error> {
        let payload: AttendancePayload = self
            .get(&attendance_by_class_path(class_id, date))
            .await?;
        Ok(payload.attendance)
    }

    async fn get_all_attendance(&self) -> Result<Vec<AttendanceRecordDto>, Error> {
        let payload: AttendancePayload = self.get("/attendance").await?;
        Ok(payload.attendance)
    }

    async fn add_attendance(
        &self,
        class_id: &str,
        date: NaiveDate,
        student_login: &str,
        status: AttendanceStatus,
    ) -> Result<(), Error> {
        let body = AddAttendanceDto {
            class_id: class_id.to_string(),
            date,
            student_login: student_login.to_string(),
            status,
        };

        self.send(Request::post(&self.url("/attendance")), &body)
            .await
    }

    async fn update_attendance(
        &self,
        class_id: &str,
        date: NaiveDate,
        statuses: &DailyStatusMap,
    ) -> Result<(), Error> {
        let body = UpdateAttendanceDto {
            date,
            attendance: statuses.clone(),
        };

        self.send(Request::put(&self.url(&class_attendance_path(class_id))), &body)
            .await
    }
}
