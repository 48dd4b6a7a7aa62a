mod app;
mod bridge;
mod logging;

pub mod components {
    pub mod campaigns;
    pub mod chatbot;
    pub mod collaboration;
    pub mod community;
    pub mod dashboard;
    pub mod emergency;
    pub mod footer;
    pub mod header;
    pub mod landing;
    pub mod map_view;
    pub mod my_issues;
    pub mod profile;
    pub mod report_issue;
    pub mod sidebar;
    pub mod transparency;
    pub mod voice_reporting;
}

use sahayak_core::AppConfig;

const CONFIG_JSON: &str = include_str!("../sahayak.json");

fn main() {
    let parsed = AppConfig::from_json(CONFIG_JSON);
    let config = parsed.as_ref().cloned().unwrap_or_default();
    logging::init(&config.log_level);
    if let Err(error) = parsed {
        tracing::warn!(%error, "embedded config rejected; using defaults");
    }
    tracing::info!(app = %config.app_name, city = %config.city, "starting");

    leptos::mount_to_body(move || {
        let config = config.clone();
        leptos::view! { <app::App config=config/> }
    });
}
