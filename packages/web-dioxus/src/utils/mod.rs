//! Shared console utilities

pub mod clipboard;
pub mod debounce;
pub mod redact;

use std::time::Duration;

/// Runtime-appropriate timer: a browser timeout on wasm, the tokio
/// clock elsewhere.
pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
