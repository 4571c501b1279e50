use tracing::info;

fn main() {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    info!("Starting bazaar");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(bazaar::ui::make_config())
        .launch(bazaar::ui::App);
}
