//! Root application component

use dioxus::prelude::*;

use crate::config::ConsoleConfig;
use crate::routes::Route;

/// Root component: global styles, the shared API client, the router.
#[component]
pub fn App() -> Element {
    // Every page and component grabs the client from context.
    use_context_provider(|| ConsoleConfig::from_env().client());

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }

        Router::<Route> {}
    }
}
