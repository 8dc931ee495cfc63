use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::HttpAttendanceApi,
    config::ClientConfig,
    controller::{today, AttendanceController},
    router::Route,
    store::AttendanceState,
};

/// Controller type the view components share through context
pub type ViewController = AttendanceController<HttpAttendanceApi, Signal<AttendanceState>>;

pub fn use_controller() -> ViewController {
    use_context::<ViewController>()
}

pub fn use_attendance_state() -> Signal<AttendanceState> {
    use_context::<Signal<AttendanceState>>()
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| {
        ClientConfig::from_build_env().unwrap_or_else(|err| {
            tracing::error!("Invalid client configuration, using defaults: {err}");
            ClientConfig::default()
        })
    });
    let state = use_context_provider(|| Signal::new(AttendanceState::new(today())));
    let controller = use_context_provider(|| {
        AttendanceController::new(HttpAttendanceApi::new(&config), state)
    });

    // Classes and the record list are fetched once on mount
    use_future(move || {
        let controller = controller.clone();
        async move { controller.initialize().await }
    });

    rsx!(Router::<Route> {})
}
