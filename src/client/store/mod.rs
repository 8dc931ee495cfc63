pub mod attendance;
pub mod notice;
pub mod stats;

use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

pub use attendance::{AttendanceState, BulkSaveRequest};
pub use notice::{Notice, NoticeKind};
pub use stats::AttendanceStats;

/// Shared access to the view's [`AttendanceState`].
///
/// The controller never holds a borrow across an `.await`; every access goes
/// through one of these closures.
pub trait StateHandle: Clone {
    fn with<R>(&self, f: impl FnOnce(&AttendanceState) -> R) -> R;

    fn with_mut<R>(&self, f: impl FnOnce(&mut AttendanceState) -> R) -> R;
}

impl StateHandle for Signal<AttendanceState> {
    fn with<R>(&self, f: impl FnOnce(&AttendanceState) -> R) -> R {
        f(&self.read())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut AttendanceState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}

impl StateHandle for Rc<RefCell<AttendanceState>> {
    fn with<R>(&self, f: impl FnOnce(&AttendanceState) -> R) -> R {
        f(&self.borrow())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut AttendanceState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
