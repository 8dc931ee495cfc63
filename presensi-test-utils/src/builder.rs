//! Declarative setup for controller tests.
//!
//! Fixtures are queued on the builder and loaded into a fresh
//! [`FakeAttendanceApi`] by `build()`.

use chrono::NaiveDate;
use presensi::{
    client::store::AttendanceState,
    model::{
        attendance::{AttendanceRecordDto, RecordStatus},
        class::ClassGroupDto,
        student::StudentDto,
    },
};

use crate::{
    fake::{Endpoint, FakeAttendanceApi},
    fixtures::factory,
    setup::TestSetup,
};

pub struct TestBuilder {
    date: NaiveDate,
    classes: Vec<ClassGroupDto>,
    students: Vec<StudentDto>,
    records: Vec<AttendanceRecordDto>,
    failing: Vec<Endpoint>,
}

impl TestBuilder {
    /// Starts on 2024-05-01 with an empty backend
    pub fn new() -> Self {
        Self {
            date: factory::date(2024, 5, 1),
            classes: Vec::new(),
            students: Vec::new(),
            records: Vec::new(),
            failing: Vec::new(),
        }
    }

    /// Date the view state starts on
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_class(mut self, id: &str, name: &str) -> Self {
        self.classes.push(factory::class_group(id, name));
        self
    }

    /// Adds one student per login to `class_id`
    pub fn with_roster(mut self, class_id: &str, logins: &[&str]) -> Self {
        self.students
            .extend(logins.iter().map(|login| factory::student(login, class_id)));
        self
    }

    pub fn with_record(
        mut self,
        class_id: &str,
        date: NaiveDate,
        login: &str,
        status: impl Into<RecordStatus>,
    ) -> Self {
        self.records
            .push(factory::record(class_id, date, login, status));
        self
    }

    /// Makes every call to `endpoint` fail from the start
    pub fn with_failing(mut self, endpoint: Endpoint) -> Self {
        self.failing.push(endpoint);
        self
    }

    pub fn build(self) -> TestSetup {
        let api = FakeAttendanceApi::new();
        for class in self.classes {
            api.add_class(class);
        }
        for student in self.students {
            api.add_student(student);
        }
        for record in self.records {
            api.add_record(record);
        }
        for endpoint in self.failing {
            api.fail(endpoint);
        }

        TestSetup::new(api, AttendanceState::new(self.date))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
