use crate::app::app_config;
use leptos::*;
use sahayak_core::Page;

#[component]
pub fn Header(page: Memo<Page>) -> impl IntoView {
    let config = app_config();
    let notifications = config.notification_count;

    view! {
      <header class="header">
        <div class="brand">{config.app_name}</div>
        <h1 class="page-title">{move || page.get().title()}</h1>
        <div class="header-actions">
          <button class="icon-button" title="Search">"🔍"</button>
          <button class="icon-button" title="Notifications">
            "🔔"
            <Show when=move || { notifications > 0 } fallback=|| ()>
              <span class="count">{notifications}</span>
            </Show>
          </button>
          <button class="icon-button" title="Settings">"⚙️"</button>
          <button class="icon-button avatar" title="Profile">"👤"</button>
        </div>
      </header>
    }
}
