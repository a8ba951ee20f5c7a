mod app;
mod effects;
mod input;
mod logging;
mod render;

use crawler_api::ClientSettings;

fn main() -> anyhow::Result<()> {
    logging::initialize();
    app::run(settings_from_env())
}

/// Backend base URL comes from `JOBCRAWLER_API_URL`; everything else keeps
/// the client defaults.
fn settings_from_env() -> ClientSettings {
    let mut settings = ClientSettings::default();
    if let Ok(base_url) = std::env::var("JOBCRAWLER_API_URL") {
        if !base_url.trim().is_empty() {
            settings.base_url = base_url;
        }
    }
    settings
}
