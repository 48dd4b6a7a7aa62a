use crate::app::{priority_class, status_class};
use leptos::*;
use sahayak_core::{sample, Page};

#[component]
fn StatCard(label: &'static str, value: &'static str, note: &'static str) -> impl IntoView {
    view! {
      <div class="card stat">
        <div class="meta">{label}</div>
        <div class="stat-value">{value}</div>
        <div class="meta">{note}</div>
      </div>
    }
}

#[component]
pub fn Dashboard(on_navigate: Callback<Page>, on_emergency: Callback<()>) -> impl IntoView {
    let recent = sample::recent_issues();

    view! {
      <div class="page dashboard">
        <section class="welcome card">
          <div>
            <h2>"Welcome back!"</h2>
            <p class="meta">"Here's what's happening in your community."</p>
          </div>
          <button class="danger" on:click=move |_| on_emergency.call(())>"⚠️ Report Emergency"</button>
        </section>

        <section class="grid four">
          <StatCard label="Issues Reported" value="12" note="+2 this month"/>
          <StatCard label="Resolved" value="8" note="67% resolution rate"/>
          <StatCard label="In Progress" value="3" note="Avg. 4 days"/>
          <StatCard label="Community Points" value="450" note="Level 3 Citizen"/>
        </section>

        <section class="grid three">
          <button class="card action" on:click=move |_| on_navigate.call(Page::Report)>
            <div class="icon">"📝"</div>
            <h3>"Report an Issue"</h3>
            <p class="meta">"Photo, voice note and location in three steps"</p>
          </button>
          <button class="card action" on:click=move |_| on_navigate.call(Page::VoiceReporting)>
            <div class="icon">"🎤"</div>
            <h3>"Voice Report"</h3>
            <p class="meta">"Describe the problem in your language"</p>
          </button>
          <button class="card action" on:click=move |_| on_navigate.call(Page::Map)>
            <div class="icon">"🗺️"</div>
            <h3>"View Map"</h3>
            <p class="meta">"See issues reported near you"</p>
          </button>
        </section>

        <section class="card">
          <div class="row spread">
            <h3>"Recent Issues"</h3>
            <button class="link" on:click=move |_| on_navigate.call(Page::MyIssues)>"View all"</button>
          </div>
          <ul class="list">
            {recent
                .into_iter()
                .map(|(_, title, status, priority, when)| view! {
                  <li class="row spread">
                    <div>
                      <div>{title}</div>
                      <div class="meta">{when}</div>
                    </div>
                    <div class="row">
                      <span class=priority_class(priority)>{priority.label()}</span>
                      <span class=status_class(status)>{status.label()}</span>
                    </div>
                  </li>
                })
                .collect_view()}
          </ul>
        </section>
      </div>
    }
}
