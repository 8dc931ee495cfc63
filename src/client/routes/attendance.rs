use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowsRotate, FaFileExcel};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    app::{use_attendance_state, use_controller},
    components::{
        attendance::{DailyTab, RecordsTab},
        ConfirmDialog, Page,
    },
    controller::today,
    export::{build_export, export_notice, XLSX_MIME},
    util::download::trigger_download,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Daily,
    Records,
}

#[component]
pub fn Attendance() -> Element {
    let mut tab = use_signal(|| Tab::Daily);
    let mut confirm_export = use_signal(|| false);
    let state = use_attendance_state();
    let controller = use_controller();

    let record_count = state.read().records().len();
    let daily_tab_class = if tab() == Tab::Daily { "tab tab-active" } else { "tab" };
    let records_tab_class = if tab() == Tab::Records { "tab tab-active" } else { "tab" };

    let on_refresh = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            let controller = controller.clone();
            spawn(async move { controller.refresh().await });
        }
    };

    let on_export = move |()| {
        confirm_export.set(false);

        let export = {
            let state = state.read();
            build_export(state.records(), state.classes(), today())
        };

        let controller = controller.clone();
        spawn(async move {
            let result = match export {
                Ok(file) => trigger_download(&file.filename, XLSX_MIME, &file.bytes).await,
                Err(err) => Err(err),
            };
            if let Err(err) = &result {
                tracing::error!("Failed to export attendance records: {err}");
            }

            let (kind, message) = export_notice(&result);
            controller.notify(kind, message);
        });
    };

    rsx!(
        Title { "Presensi" }
        Meta {
            name: "description",
            content: "Pencatatan dan rekap presensi siswa per kelas."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1200px] flex flex-col gap-4",
                div { class: "flex flex-wrap items-center justify-between gap-2",
                    div { role: "tablist", class: "tabs tabs-boxed",
                        a {
                            role: "tab",
                            class: daily_tab_class,
                            onclick: move |_| tab.set(Tab::Daily),
                            "Input Harian"
                        }
                        a {
                            role: "tab",
                            class: records_tab_class,
                            onclick: move |_| tab.set(Tab::Records),
                            "Riwayat Presensi"
                        }
                    }
                    div { class: "flex gap-2",
                        button {
                            class: "btn btn-outline btn-sm flex gap-2",
                            onclick: on_refresh,
                            Icon { width: 16, height: 16, icon: FaArrowsRotate }
                            "Muat Ulang"
                        }
                        button {
                            class: "btn btn-outline btn-sm flex gap-2",
                            onclick: move |_| confirm_export.set(true),
                            Icon { width: 16, height: 16, icon: FaFileExcel }
                            "Ekspor Excel"
                        }
                    }
                }
                if tab() == Tab::Daily {
                    DailyTab {}
                } else {
                    RecordsTab {}
                }
            }
        }
        if confirm_export() {
            ConfirmDialog {
                title: "Ekspor presensi".to_string(),
                message: format!("{record_count} data presensi akan diekspor ke file Excel."),
                confirm_label: "Ekspor",
                on_confirm: on_export,
                on_cancel: move |()| confirm_export.set(false),
            }
        }
    )
}
