use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Halaman tidak ditemukan | Presensi" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "Halaman tidak ditemukan" }
            p { class: "text-sm opacity-70", "/{path}" }
            Link {
                to: Route::Attendance {},
                class: "btn btn-primary",
                "Kembali ke presensi"
            }
        }
    )
}
