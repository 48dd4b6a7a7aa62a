use crate::app::priority_class;
use leptos::*;
use sahayak_core::filters::{filter_collaborations, CollabTab};
use sahayak_core::model::{CollabStatus, CollaborativeIssue, CollaboratorRole, UpdateKind};
use sahayak_core::sample;

fn collab_status_class(status: CollabStatus) -> &'static str {
    match status {
        CollabStatus::Open => "status pending",
        CollabStatus::InProgress => "status in-progress",
        CollabStatus::Resolved => "status resolved",
        CollabStatus::Pending => "status pending",
    }
}

fn role_icon(role: CollaboratorRole) -> &'static str {
    match role {
        CollaboratorRole::Creator => "👑",
        CollaboratorRole::Collaborator => "🤝",
        CollaboratorRole::Supporter => "👍",
    }
}

fn update_icon(kind: UpdateKind) -> &'static str {
    match kind {
        UpdateKind::Comment => "💬",
        UpdateKind::StatusChange => "🔄",
        UpdateKind::FileUpload => "📎",
        UpdateKind::CollaboratorAdded => "➕",
    }
}

#[component]
fn CollabCard(issue: CollaborativeIssue) -> impl IntoView {
    let expanded = create_rw_signal(false);
    let collaborators = issue.collaborators.clone();
    let updates = issue.updates.clone();

    view! {
      <li class="card collab">
        <div class="row spread">
          <div>
            <strong>{issue.title.clone()}</strong>
            <div class="meta">{format!("{} · {} · {}", issue.id, issue.category, issue.location)}</div>
          </div>
          <div class="row">
            <span class=priority_class(issue.priority)>{issue.priority.label()}</span>
            <span class=collab_status_class(issue.status)>{issue.status.label()}</span>
          </div>
        </div>
        <p>{issue.description.clone()}</p>
        <div class="row meta">
          <span>{format!("👥 {} collaborators", issue.collaborators.len())}</span>
          <span>{format!("👍 {} supporters", issue.supporters)}</span>
          <span>{if issue.public { "🌐 Public" } else { "🔒 Private" }}</span>
          <button class="link" on:click=move |_| expanded.update(|e| *e = !*e)>
            {move || if expanded.get() { "Hide details" } else { "Show details" }}
          </button>
        </div>
        <Show when=move || expanded.get() fallback=|| ()>
          <div class="grid two">
            <div>
              <h4>"Members"</h4>
              <ul class="list">
                {collaborators
                    .iter()
                    .map(|c| view! {
                      <li>{format!("{} {} · joined {}", role_icon(c.role), c.name, c.joined_at)}</li>
                    })
                    .collect_view()}
              </ul>
            </div>
            <div>
              <h4>"Updates"</h4>
              <ul class="list">
                {updates
                    .iter()
                    .map(|u| view! {
                      <li>
                        <div>{format!("{} {}", update_icon(u.kind), u.message)}</div>
                        <div class="meta">{format!("{} · {}", u.author, u.timestamp)}</div>
                      </li>
                    })
                    .collect_view()}
              </ul>
            </div>
          </div>
        </Show>
      </li>
    }
}

#[component]
pub fn Collaboration() -> impl IntoView {
    let issues = store_value(sample::collaborative_issues());
    let tab = create_rw_signal(CollabTab::Active);
    let search = create_rw_signal(String::new());

    let visible = create_memo(move |_| {
        issues.with_value(|all| {
            search.with(|q| filter_collaborations(all, q, tab.get()).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    view! {
      <div class="page collaboration">
        <section class="row filters">
          <div class="tabs">
            {CollabTab::ALL
                .into_iter()
                .map(|t| view! {
                  <button
                    class=move || if tab.get() == t { "tab active" } else { "tab" }
                    on:click=move |_| tab.set(t)
                  >
                    {t.label()}
                  </button>
                })
                .collect_view()}
          </div>
          <input
            type="search"
            placeholder="Search groups…"
            prop:value=move || search.get()
            on:input=move |ev| search.set(event_target_value(&ev))
          />
        </section>
        <Show
          when=move || visible.with(|v| !v.is_empty())
          fallback=|| view! { <p class="empty">"No collaborative issues here yet."</p> }
        >
          <ul class="list">
            <For
              each=move || visible.get()
              key=|issue| issue.id.clone()
              children=|issue| view! { <CollabCard issue=issue/> }
            />
          </ul>
        </Show>
      </div>
    }
}
