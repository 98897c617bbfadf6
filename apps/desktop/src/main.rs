//! Carddex Desktop — Dioxus-powered card search widget.

use carddex_client::SearchClient;
use carddex_core::ClientConfig;
use dioxus::prelude::*;
use tracing::info;

mod app;
mod results;
mod search;
mod state;

use app::App;
use state::CLIENT;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carddex=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Configure the HTTP client before Dioxus launches — store in the
    // OnceLock, NOT in a signal.
    let cwd = std::env::current_dir().expect("Could not determine current directory");
    let config = ClientConfig::load(&cwd);
    info!(endpoint = %config.endpoint, "Starting Carddex");
    let client = SearchClient::new(&config).expect("Invalid endpoint in carddex.toml");
    CLIENT.set(client).ok();

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((12, 12, 16, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Carddex")
                            .with_inner_size(LogicalSize::new(1100.0, 800.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
