use std::{cell::RefCell, rc::Rc};

use presensi::{
    client::{
        controller::AttendanceController,
        store::{AttendanceState, AttendanceStats},
    },
    model::attendance::DailyStatusMap,
};

use crate::fake::FakeAttendanceApi;

pub type TestController = AttendanceController<FakeAttendanceApi, Rc<RefCell<AttendanceState>>>;

/// A controller wired to a fake backend, with direct handles to both sides
pub struct TestSetup {
    pub api: FakeAttendanceApi,
    pub state: Rc<RefCell<AttendanceState>>,
    pub controller: TestController,
}

impl TestSetup {
    pub fn new(api: FakeAttendanceApi, state: AttendanceState) -> Self {
        let state = Rc::new(RefCell::new(state));
        let controller = AttendanceController::new(api.clone(), state.clone());

        Self {
            api,
            state,
            controller,
        }
    }

    pub fn stats(&self) -> AttendanceStats {
        self.state.borrow().stats()
    }

    pub fn statuses(&self) -> DailyStatusMap {
        self.state.borrow().statuses().clone()
    }

    pub fn roster_logins(&self) -> Vec<String> {
        self.state
            .borrow()
            .roster()
            .iter()
            .map(|s| s.login.clone())
            .collect()
    }

    /// Message of the notice currently shown, if any
    pub fn notice_message(&self) -> Option<String> {
        self.state.borrow().notice().map(|n| n.message.clone())
    }
}
