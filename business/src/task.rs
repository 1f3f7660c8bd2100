//! Fire-and-forget task spawning for native and web targets.

use std::future::Future;

/// Runs `future` in the background.
///
/// Native builds spawn onto the ambient Tokio runtime, so the caller must be
/// inside one (the binary enters a runtime before starting eframe; tests use
/// `#[tokio::test]`). Web builds run it on the JS event loop.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
