//! Platform-specific execution utilities.
//!
//! The export flow waits out a fixed "processing" delay before delivering
//! the payload. Timers need different implementations on web (no tokio
//! runtime in the browser) and desktop, so the cfg split lives here rather
//! than at every await point.

/// Resolves after `ms` milliseconds. The delay always resolves; there is
/// no cancellation path.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Resolves after `ms` milliseconds. The delay always resolves; there is
/// no cancellation path.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}
