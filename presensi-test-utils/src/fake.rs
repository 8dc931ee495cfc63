//! In-memory stand-in for the attendance backend.
//!
//! Behaves like an upserting store keyed by (class, date, student), records
//! every call in order, and can be told to fail an endpoint or to hold a call
//! open until the test releases it.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use chrono::NaiveDate;
use futures::channel::oneshot;
use presensi::{
    client::api::AttendanceApi,
    error::Error,
    model::{
        attendance::{AttendanceRecordDto, AttendanceStatus, DailyStatusMap},
        class::ClassGroupDto,
        student::StudentDto,
    },
};

use crate::{constant::INJECTED_FAILURE, fixtures::factory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Classes,
    Students,
    AttendanceByClass,
    AllAttendance,
    AddAttendance,
    UpdateAttendance,
}

/// A request the fake received, with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    GetClasses,
    GetStudents,
    GetAttendanceByClass {
        class_id: String,
        date: NaiveDate,
    },
    GetAllAttendance,
    AddAttendance {
        class_id: String,
        date: NaiveDate,
        student_login: String,
        status: AttendanceStatus,
    },
    UpdateAttendance {
        class_id: String,
        date: NaiveDate,
        statuses: DailyStatusMap,
    },
}

impl ApiCall {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            ApiCall::GetClasses => Endpoint::Classes,
            ApiCall::GetStudents => Endpoint::Students,
            ApiCall::GetAttendanceByClass { .. } => Endpoint::AttendanceByClass,
            ApiCall::GetAllAttendance => Endpoint::AllAttendance,
            ApiCall::AddAttendance { .. } => Endpoint::AddAttendance,
            ApiCall::UpdateAttendance { .. } => Endpoint::UpdateAttendance,
        }
    }
}

#[derive(Default)]
struct Backend {
    classes: Vec<ClassGroupDto>,
    students: Vec<StudentDto>,
    records: Vec<AttendanceRecordDto>,
    failing: HashSet<Endpoint>,
    calls: Vec<ApiCall>,
    gates: HashMap<Endpoint, oneshot::Receiver<()>>,
}

impl Backend {
    fn upsert(&mut self, class_id: &str, date: NaiveDate, login: &str, status: AttendanceStatus) {
        let existing = self.records.iter_mut().find(|r| {
            r.class_id == class_id && r.date == date && r.student_login == login
        });

        match existing {
            Some(record) => record.status = status.into(),
            None => self
                .records
                .push(factory::record(class_id, date, login, status)),
        }
    }
}

/// Cheap to clone; clones share the same backend
#[derive(Clone, Default)]
pub struct FakeAttendanceApi {
    backend: Rc<RefCell<Backend>>,
}

impl FakeAttendanceApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&self, class: ClassGroupDto) {
        self.backend.borrow_mut().classes.push(class);
    }

    pub fn add_student(&self, student: StudentDto) {
        self.backend.borrow_mut().students.push(student);
    }

    pub fn add_record(&self, record: AttendanceRecordDto) {
        self.backend.borrow_mut().records.push(record);
    }

    /// Every record the fake backend currently stores
    pub fn stored_records(&self) -> Vec<AttendanceRecordDto> {
        self.backend.borrow().records.clone()
    }

    /// Makes every later call to `endpoint` fail
    pub fn fail(&self, endpoint: Endpoint) {
        self.backend.borrow_mut().failing.insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.backend.borrow_mut().failing.remove(&endpoint);
    }

    /// Holds the next call to `endpoint` open until the returned sender fires or is dropped.
    ///
    /// The call is recorded as soon as it arrives, before it is held.
    pub fn hold(&self, endpoint: Endpoint) -> oneshot::Sender<()> {
        let (sender, receiver) = oneshot::channel();
        self.backend.borrow_mut().gates.insert(endpoint, receiver);
        sender
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.backend.borrow().calls.clone()
    }

    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.backend
            .borrow()
            .calls
            .iter()
            .filter(|c| c.endpoint() == endpoint)
            .count()
    }

    pub fn clear_calls(&self) {
        self.backend.borrow_mut().calls.clear();
    }

    /// Records the call, waits on its gate if one is set, then applies failure injection
    async fn receive(&self, call: ApiCall) -> Result<(), Error> {
        let endpoint = call.endpoint();
        let gate = {
            let mut backend = self.backend.borrow_mut();
            backend.calls.push(call);
            backend.gates.remove(&endpoint)
        };

        if let Some(gate) = gate {
            // A dropped sender releases the call as well
            let _ = gate.await;
        }

        if self.backend.borrow().failing.contains(&endpoint) {
            return Err(Error::StatusError {
                status: 500,
                message: INJECTED_FAILURE.to_string(),
            });
        }

        Ok(())
    }
}

impl AttendanceApi for FakeAttendanceApi {
    async fn get_classes(&self) -> Result<Vec<ClassGroupDto>, Error> {
        self.receive(ApiCall::GetClasses).await?;
        Ok(self.backend.borrow().classes.clone())
    }

    async fn get_students(&self) -> Result<Vec<StudentDto>, Error> {
        self.receive(ApiCall::GetStudents).await?;
        Ok(self.backend.borrow().students.clone())
    }

    async fn get_attendance_by_class(
        &self,
        class_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecordDto>, Error> {
        self.receive(ApiCall::GetAttendanceByClass {
            class_id: class_id.to_string(),
            date,
        })
        .await?;

        Ok(self
            .backend
            .borrow()
            .records
            .iter()
            .filter(|r| r.class_id == class_id && r.date == date)
            .cloned()
            .collect())
    }

    async fn get_all_attendance(&self) -> Result<Vec<AttendanceRecordDto>, Error> {
        self.receive(ApiCall::GetAllAttendance).await?;
        Ok(self.backend.borrow().records.clone())
    }

    async fn add_attendance(
        &self,
        class_id: &str,
        date: NaiveDate,
        student_login: &str,
        status: AttendanceStatus,
    ) -> Result<(), Error> {
        self.receive(ApiCall::AddAttendance {
            class_id: class_id.to_string(),
            date,
            student_login: student_login.to_string(),
            status,
        })
        .await?;

        self.backend
            .borrow_mut()
            .upsert(class_id, date, student_login, status);
        Ok(())
    }

    async fn update_attendance(
        &self,
        class_id: &str,
        date: NaiveDate,
        statuses: &DailyStatusMap,
    ) -> Result<(), Error> {
        self.receive(ApiCall::UpdateAttendance {
            class_id: class_id.to_string(),
            date,
            statuses: statuses.clone(),
        })
        .await?;

        let mut backend = self.backend.borrow_mut();
        for (login, status) in statuses {
            backend.upsert(class_id, date, login, *status);
        }
        Ok(())
    }
}
