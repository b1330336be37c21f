use leptos::prelude::*;
use shellfolio::App;
use shellfolio::config::APP_NAME;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    web_sys::console::info_1(&format!("{APP_NAME}: mounting").into());
    mount_to(root, App).forget();
}
