use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub message: String,
    #[props(default = "Konfirmasi")]
    pub confirm_label: &'static str,
    #[props(default = "Batal")]
    pub cancel_label: &'static str,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    rsx! {
        div {
            class: "modal modal-open",
            onclick: move |_| props.on_cancel.call(()),

            div {
                class: "modal-box",
                onclick: move |e| e.stop_propagation(),

                h3 { class: "text-lg font-bold", "{props.title}" }
                p { class: "py-4", "{props.message}" }

                div {
                    class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| props.on_cancel.call(()),
                        "{props.cancel_label}"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| props.on_confirm.call(()),
                        "{props.confirm_label}"
                    }
                }
            }
        }
    }
}
