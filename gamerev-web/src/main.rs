use dioxus::prelude::*;
use gamerev_web::config::AppConfig;
use gamerev_web::App;
use tracing::{info, warn};

fn main() {
    let (config, problems) = AppConfig::load();
    dioxus::logger::init(config.log_level).expect("Failed to initialize logger");
    for problem in problems {
        warn!("Ignoring setting: {problem}");
    }
    info!("Using review backend at {}", config.api.base_url);

    LaunchBuilder::new().with_context(config).launch(App);
}
