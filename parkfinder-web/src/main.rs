//! Park Finder entry point
//!
//! `dx serve` builds the web target by default; pass `--features desktop`
//! (with `default-features = false`) for a native window.

#[cfg(not(target_arch = "wasm32"))]
fn configure_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    configure_logging();
    tracing::info!("Starting Park Finder");
    dioxus::launch(parkfinder_web::App);
}
