use dioxus::prelude::*;

use crate::client::{
    app::{use_attendance_state, use_controller},
    config::ClientConfig,
    util::timer::sleep,
};

/// Shows the current notice and dismisses it after the configured timeout
#[component]
pub fn NoticeBanner() -> Element {
    let state = use_attendance_state();
    let controller = use_controller();
    let timeout = use_context::<ClientConfig>().notice_timeout;

    // Only a new notice id restarts the timer, not every state change
    let notice_id = use_memo(move || state.read().notice().map(|n| n.id));

    {
        let controller = controller.clone();
        use_effect(move || {
            let Some(id) = notice_id() else {
                return;
            };
            let controller = controller.clone();
            spawn(async move {
                sleep(timeout).await;
                controller.dismiss_notice(id);
            });
        });
    }

    let Some(notice) = state.read().notice().cloned() else {
        return rsx! {};
    };
    let alert_class = notice.kind.alert_class();
    let id = notice.id;

    rsx!(
        div { class: "toast toast-top toast-center z-20 pt-[64px]",
            div {
                role: "alert",
                class: "alert {alert_class}",
                span { "{notice.message}" }
                button {
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| controller.dismiss_notice(id),
                    "✕"
                }
            }
        }
    )
}
