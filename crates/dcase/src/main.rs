use dcase::components::App;
use dioxus::prelude::*;

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}
