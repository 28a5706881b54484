//! Application shell: brand header, navigation, routed content.

use dioxus::prelude::*;
use reviews_client::ReviewsClient;

use crate::routes::Route;

/// Layout wrapped around every page.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { class: "brand", "Reviews Copilot" }
                nav {
                    NavLink { to: Route::Inbox {}, label: "Inbox" }
                    NavLink { to: Route::Analytics {}, label: "Analytics" }
                }
                HealthBadge {}
            }

            main { class: "container",
                Outlet::<Route> {}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active { "nav-link active" } else { "nav-link" },
            "{props.label}"
        }
    }
}

/// Backend liveness indicator, probed once when the shell mounts.
#[component]
fn HealthBadge() -> Element {
    let client = use_context::<ReviewsClient>();
    let mut healthy = use_signal(|| None::<bool>);

    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            healthy.set(Some(client.health().await.is_ok()));
        });
    });

    rsx! {
        match healthy() {
            None => rsx! { span { class: "health-badge muted", "backend: checking\u{2026}" } },
            Some(true) => rsx! { span { class: "health-badge ok", "backend: ok" } },
            Some(false) => rsx! { span { class: "health-badge down", "backend: down" } },
        }
    }
}
