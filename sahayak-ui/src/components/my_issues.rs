use crate::app::{status_class, urgency_class};
use leptos::*;
use sahayak_core::filters::{filter_issues, progress_steps};
use sahayak_core::model::{Issue, IssueStatus};
use sahayak_core::sample;

#[component]
fn IssueDetail(issue: Issue, on_close: Callback<()>) -> impl IntoView {
    let steps = progress_steps(&issue);

    view! {
      <div class="modal-backdrop" on:click=move |_| on_close.call(())>
        <div class="modal" on:click=|ev| ev.stop_propagation()>
          <div class="row spread">
            <h2>{issue.title.clone()}</h2>
            <button class="icon-button" on:click=move |_| on_close.call(())>"✕"</button>
          </div>
          <p class="meta">{format!("{} · {} · {}", issue.id, issue.category, issue.location)}</p>
          <ol class="timeline">
            {steps
                .into_iter()
                .map(|step| view! {
                  <li class={if step.completed { "done" } else { "" }}>
                    <strong>{step.label}</strong>
                    <span class="meta">{step.date}</span>
                  </li>
                })
                .collect_view()}
          </ol>
          {issue.receipt_hash.map(|hash| view! {
              <div class="receipt">
                <span>"🔒 Verified resolution receipt"</span>
                <code>{hash}</code>
              </div>
          })}
        </div>
      </div>
    }
}

#[component]
pub fn MyIssues() -> impl IntoView {
    let issues = store_value(sample::my_issues());
    let search = create_rw_signal(String::new());
    let status = create_rw_signal("all".to_string());
    let selected = create_rw_signal(None::<Issue>);

    let visible = create_memo(move |_| {
        issues.with_value(|all| {
            search.with(|q| status.with(|s| filter_issues(all, q, s).into_iter().cloned().collect::<Vec<_>>()))
        })
    });
    let close = Callback::new(move |_: ()| selected.set(None));

    view! {
      <div class="page my-issues">
        <section class="row filters">
          <input
            type="search"
            placeholder="Search issues…"
            prop:value=move || search.get()
            on:input=move |ev| search.set(event_target_value(&ev))
          />
          <select on:change=move |ev| status.set(event_target_value(&ev))>
            <option value="all">"All statuses"</option>
            {IssueStatus::ALL
                .into_iter()
                .map(|s| view! { <option value=s.filter_key()>{s.label()}</option> })
                .collect_view()}
          </select>
        </section>

        <Show
          when=move || visible.with(|v| !v.is_empty())
          fallback=|| view! { <p class="empty">"No issues match your filters."</p> }
        >
          <ul class="list">
            <For
              each=move || visible.get()
              key=|issue| issue.id.clone()
              children=move |issue| {
                  let open = issue.clone();
                  view! {
                    <li class="card issue" on:click=move |_| selected.set(Some(open.clone()))>
                      <div class="row spread">
                        <div>
                          <strong>{issue.title}</strong>
                          <div class="meta">{format!("{} · {} · {}", issue.id, issue.category, issue.location)}</div>
                        </div>
                        <div class="row">
                          <span class=urgency_class(issue.urgency)>{issue.urgency.label()}</span>
                          <span class=status_class(issue.status)>{issue.status.label()}</span>
                        </div>
                      </div>
                      <div class="progress small">
                        <div class="bar" style=format!("width: {}%", issue.progress)></div>
                      </div>
                      <div class="row meta">
                        <span>{format!("Reported {}", issue.report_date)}</span>
                        <span>{format!("Updated {}", issue.last_update)}</span>
                        <span>{format!("👁 {}", issue.views)}</span>
                        <span>{format!("👍 {}", issue.votes)}</span>
                        <span>{format!("💬 {}", issue.comments)}</span>
                        {issue.receipt_hash.is_some().then(|| view! { <span class="verified">"🔒 Verified"</span> })}
                      </div>
                    </li>
                  }
              }
            />
          </ul>
        </Show>

        {move || selected.get().map(|issue| view! { <IssueDetail issue=issue on_close=close/> })}
      </div>
    }
}
