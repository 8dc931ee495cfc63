#![allow(non_snake_case)]

fn main() {
    dioxus::launch(presensi::client::App);
}
