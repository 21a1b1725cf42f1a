use babbagebox::app::App;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("babbagebox=info")),
        )
        .init();

    tracing::info!("Starting BabbageBox");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(WindowBuilder::new().with_title("BabbageBox")))
        .launch(App);
}
