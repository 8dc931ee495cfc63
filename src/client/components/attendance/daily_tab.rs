use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaFloppyDisk};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        app::{use_attendance_state, use_controller},
        components::attendance::{ClassSelector, DateNavigator, StatsCards},
    },
    model::attendance::AttendanceStatus,
};

#[component]
pub fn DailyTab() -> Element {
    let state = use_attendance_state();
    let controller = use_controller();

    let state = state.read();
    let stats = state.stats();
    let saving = state.is_saving();
    let has_class = state.selected_class().is_some();
    let roster_empty = state.roster().is_empty();

    let on_mark_all = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.mark_all_present()
    };
    let on_save_all = move |_: MouseEvent| {
        let controller = controller.clone();
        spawn(async move {
            controller.save_all().await;
        });
    };

    rsx!(
        div { class: "card shadow-sm w-full",
            div { class: "card-body gap-4",
                div { class: "flex flex-wrap items-center justify-between gap-2",
                    ClassSelector {}
                    DateNavigator {}
                }
                StatsCards { stats }
                if !has_class {
                    p { class: "text-center opacity-70 py-8", "Pilih kelas untuk mulai mengisi presensi." }
                } else if roster_empty {
                    p { class: "text-center opacity-70 py-8", "Belum ada siswa di kelas ini." }
                } else {
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "No" }
                                    th { "Siswa" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for (index, student) in state.roster().iter().enumerate() {
                                    StudentRow {
                                        key: "{student.login}",
                                        number: index + 1,
                                        login: student.login.clone(),
                                        name: student.name.clone(),
                                        status: state.status_of(&student.login),
                                    }
                                }
                            }
                        }
                    }
                    div { class: "card-actions justify-end",
                        button {
                            class: "btn btn-outline flex gap-2",
                            onclick: on_mark_all,
                            Icon { width: 16, height: 16, icon: FaCheck }
                            "Hadir Semua"
                        }
                        button {
                            class: "btn btn-primary flex gap-2",
                            disabled: saving,
                            onclick: on_save_all,
                            if saving {
                                span { class: "loading loading-spinner loading-sm" }
                                "Menyimpan..."
                            } else {
                                Icon { width: 16, height: 16, icon: FaFloppyDisk }
                                "Simpan Semua"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn StudentRow(
    number: usize,
    login: String,
    name: String,
    #[props(!optional)] status: Option<AttendanceStatus>,
) -> Element {
    rsx!(
        tr {
            td { "{number}" }
            td {
                div { class: "flex flex-col",
                    span { class: "font-semibold", "{name}" }
                    span { class: "text-xs opacity-60", "{login}" }
                }
            }
            td {
                div { class: "join",
                    for option in AttendanceStatus::ALL {
                        StatusButton {
                            login: login.clone(),
                            status: option,
                            selected: status == Some(option),
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn StatusButton(login: String, status: AttendanceStatus, selected: bool) -> Element {
    let controller = use_controller();

    let class = if selected {
        format!("btn btn-sm join-item {}", status.button_class())
    } else {
        "btn btn-sm btn-outline join-item".to_string()
    };
    let label = status.label();

    rsx!(
        button {
            class: "{class}",
            onclick: move |_| {
                let controller = controller.clone();
                let login = login.clone();
                spawn(async move { controller.set_status(&login, status).await });
            },
            "{label}"
        }
    )
}
