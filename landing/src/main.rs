// folio Landing Page - Leptos 0.8 Edition
// Developed by The Folio Team (c)2025

use folio_landing::{App, init_logging};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    leptos::mount::mount_to_body(|| view! { <App/> });
}
