use leptos::prelude::*;
use metamask_login::App;
use metamask_login::config::{APP_NAME, MOUNT_ELEMENT_ID};
use metamask_login::utils::dom;

fn main() {
    console_error_panic_hook::set_once();

    dom::set_title(APP_NAME);

    let root = dom::html_element_by_id(MOUNT_ELEMENT_ID).expect("Failed to find #app element");

    mount_to(root, App).forget();
}
