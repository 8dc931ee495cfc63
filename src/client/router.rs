use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Attendance, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Attendance {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
