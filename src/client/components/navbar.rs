use dioxus::prelude::*;

use crate::client::{components::NoticeBanner, router::Route};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Attendance {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Presensi"
                        }
                        p { class: "text-xs",
                            "v{VERSION}"
                        }
                    }
                }
            }
        }

        NoticeBanner {}

        Outlet::<Route> {}
    }
}
