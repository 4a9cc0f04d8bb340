mod api;
mod components;
pub mod config;
mod pages;
mod router;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Installs logging, loads runtime config, then mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting AssetDesk frontend");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        router::mount_app();
    });
}
