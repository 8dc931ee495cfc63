use dioxus::prelude::*;

use crate::client::app::{use_attendance_state, use_controller};

#[component]
pub fn ClassSelector() -> Element {
    let state = use_attendance_state();
    let controller = use_controller();

    let state = state.read();
    let selected = state.selected_class().unwrap_or_default().to_string();

    rsx!(
        select {
            class: "select select-bordered w-full max-w-xs",
            value: "{selected}",
            onchange: move |evt: Event<FormData>| {
                let controller = controller.clone();
                let class_id = evt.value();
                spawn(async move { controller.select_class(&class_id).await });
            },
            option { value: "", "Pilih kelas" }
            for class in state.classes() {
                option {
                    key: "{class.id}",
                    value: "{class.id}",
                    selected: class.id == selected,
                    if let Some(count) = class.student_count {
                        "{class.name} ({count} siswa)"
                    } else {
                        "{class.name}"
                    }
                }
            }
        }
    )
}
