//! Route definitions for the console

use dioxus::prelude::*;

use crate::components::AppShell;
use crate::pages::{Analytics, Inbox, ReviewDetail};

/// All console routes
///
/// Everything renders inside the shell; the layout closes itself at the
/// end of the enum.
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Inbox {},

        #[route("/reviews/:id")]
        ReviewDetail { id: i64 },

        #[route("/analytics")]
        Analytics {},
}
