use dioxus::prelude::*;

use crate::{client::store::AttendanceStats, model::attendance::AttendanceStatus};

#[component]
pub fn StatsCards(stats: AttendanceStats) -> Element {
    let counts = AttendanceStatus::ALL.map(|status| (status.code(), status.label(), stats.count(status)));
    let total = stats.total();

    rsx!(
        div { class: "stats stats-vertical sm:stats-horizontal shadow w-full",
            for (code, label, count) in counts {
                div { key: "{code}", class: "stat",
                    div { class: "stat-title", "{label}" }
                    div { class: "stat-value", "{count}" }
                }
            }
            div { class: "stat",
                div { class: "stat-title", "Total" }
                div { class: "stat-value", "{total}" }
            }
        }
    )
}
