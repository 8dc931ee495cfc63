use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::client::app::{use_attendance_state, use_controller};

#[component]
pub fn DateNavigator() -> Element {
    let state = use_attendance_state();
    let controller = use_controller();

    let date = state.read().date();
    let label = date.format("%d/%m/%Y").to_string();
    let value = date.format("%Y-%m-%d").to_string();

    let on_previous = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let controller = controller.clone();
            spawn(async move { controller.previous_day().await });
        }
    };
    let on_next = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let controller = controller.clone();
            spawn(async move { controller.next_day().await });
        }
    };
    let on_today = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let controller = controller.clone();
            spawn(async move { controller.today().await });
        }
    };
    let on_pick = move |evt: Event<FormData>| {
        let Ok(date) = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d") else {
            return;
        };
        let controller = controller.clone();
        spawn(async move { controller.go_to_date(date).await });
    };

    rsx!(
        div { class: "flex items-center gap-2",
            button {
                class: "btn btn-square btn-sm",
                title: "Hari sebelumnya",
                onclick: on_previous,
                Icon { width: 14, height: 14, icon: FaChevronLeft }
            }
            input {
                r#type: "date",
                class: "input input-bordered input-sm",
                value: "{value}",
                onchange: on_pick,
            }
            button {
                class: "btn btn-square btn-sm",
                title: "Hari berikutnya",
                onclick: on_next,
                Icon { width: 14, height: 14, icon: FaChevronRight }
            }
            button {
                class: "btn btn-ghost btn-sm",
                onclick: on_today,
                "Hari ini"
            }
            span { class: "text-sm opacity-70", "{label}" }
        }
    )
}
