use leptos::*;
use sahayak_core::page::SIDEBAR;
use sahayak_core::Page;

#[component]
pub fn Sidebar(
    current: Memo<Page>,
    on_navigate: Callback<Page>,
    on_emergency: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
      <nav class="sidebar">
        <ul class="menu">
          {SIDEBAR
              .iter()
              .map(|item| {
                  let page = item.page;
                  view! {
                    <li>
                      <button
                        class=move || if current.get() == page { "menu-item active" } else { "menu-item" }
                        on:click=move |_| on_navigate.call(page)
                      >
                        <span class="icon">{item.icon}</span>
                        <span>{item.title}</span>
                      </button>
                    </li>
                  }
              })
              .collect_view()}
        </ul>
        <div class="sidebar-footer">
          <button class="danger wide" on:click=move |_| on_emergency.call(())>"⚠️ Emergency Report"</button>
          <button class="ghost wide" on:click=move |_| on_logout.call(())>"Sign Out"</button>
        </div>
      </nav>
    }
}
