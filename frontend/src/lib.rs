use leptos::*;

pub mod api;
mod components;
pub mod config;
pub mod domain;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Logs everything until the runtime config says whether debug output is on.
pub fn init_logging() {
    let _ = console_log::init_with_level(log::Level::Debug);
}

pub fn apply_log_level(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    log::set_max_level(level);
}

/// Boots the app: panic hook, logging, runtime config, then the router.
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("starting reservas frontend");

    spawn_local(async move {
        let settings = config::init().await;
        apply_log_level(settings.debug);
        log::info!("runtime config loaded (api: {})", settings.api_base_url);
    });

    router::mount_app();
}
