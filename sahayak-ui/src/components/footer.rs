use crate::app::app_config;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = app_config();
    view! {
      <footer class="footer">
        <span>{format!("© 2024 {} · Civic issue reporting for {}", config.app_name, config.city)}</span>
        <span class="meta">"Emergency: 911 · Helpline: 1800-123-4567"</span>
      </footer>
    }
}
