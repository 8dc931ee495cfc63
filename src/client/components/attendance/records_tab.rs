use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::client::{
    app::use_attendance_state,
    components::attendance::StatsCards,
    config::ClientConfig,
    store::AttendanceStats,
};

struct RecordRow {
    id: String,
    day: String,
    class_name: String,
    student: String,
    badge: &'static str,
    label: String,
    note: String,
}

/// Historical records with optional class and date filters.
///
/// Only the first few matches are rendered; export always covers every held record.
#[component]
pub fn RecordsTab() -> Element {
    let state = use_attendance_state();
    let limit = use_context::<ClientConfig>().records_display_limit;
    let mut class_filter = use_signal(String::new);
    let mut date_filter = use_signal(|| None::<NaiveDate>);

    let state = state.read();
    let class_id = class_filter.read().clone();
    let class_id = (!class_id.is_empty()).then_some(class_id);
    let date = date_filter();

    let filtered = state.filtered_records(class_id.as_deref(), date);
    let total = filtered.len();
    let stats = (class_id.is_some() && date.is_some())
        .then(|| AttendanceStats::from_records(filtered.iter().copied()));
    let date_value = date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let rows: Vec<RecordRow> = filtered
        .iter()
        .take(limit)
        .map(|r| RecordRow {
            id: r.id.clone(),
            day: r.date.format("%d/%m/%Y").to_string(),
            class_name: state.class_name(&r.class_id).unwrap_or("-").to_string(),
            student: r.student_login.clone(),
            badge: r.status.badge_class(),
            label: r.status.label().to_string(),
            note: r.note.clone(),
        })
        .collect();

    rsx!(
        div { class: "card shadow-sm w-full",
            div { class: "card-body gap-4",
                div { class: "flex flex-wrap items-center gap-2",
                    select {
                        class: "select select-bordered select-sm",
                        value: "{class_filter}",
                        onchange: move |evt: Event<FormData>| class_filter.set(evt.value()),
                        option { value: "", "Semua kelas" }
                        for class in state.classes() {
                            option { key: "{class.id}", value: "{class.id}", "{class.name}" }
                        }
                    }
                    input {
                        r#type: "date",
                        class: "input input-bordered input-sm",
                        value: "{date_value}",
                        onchange: move |evt: Event<FormData>| {
                            date_filter.set(NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok());
                        },
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| {
                            class_filter.set(String::new());
                            date_filter.set(None);
                        },
                        "Reset filter"
                    }
                }
                if let Some(stats) = stats {
                    StatsCards { stats }
                }
                if total == 0 {
                    p { class: "text-center opacity-70 py-8", "Belum ada data presensi." }
                } else {
                    div { class: "overflow-x-auto",
                        table { class: "table table-sm",
                            thead {
                                tr {
                                    th { "Tanggal" }
                                    th { "Kelas" }
                                    th { "Siswa" }
                                    th { "Status" }
                                    th { "Keterangan" }
                                }
                            }
                            tbody {
                                for row in rows {
                                    tr { key: "{row.id}",
                                        td { "{row.day}" }
                                        td { "{row.class_name}" }
                                        td { "{row.student}" }
                                        td {
                                            span { class: "badge {row.badge}", "{row.label}" }
                                        }
                                        td { "{row.note}" }
                                    }
                                }
                            }
                        }
                    }
                    if total > limit {
                        p { class: "text-xs opacity-60",
                            "Menampilkan {limit} dari {total} data. Ekspor untuk melihat semuanya."
                        }
                    }
                }
            }
        }
    )
}
