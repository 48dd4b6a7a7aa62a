use crate::app::{status_class, urgency_class};
use leptos::*;
use sahayak_core::model::{CommunityIssue, Vote};
use sahayak_core::sample;
use sahayak_core::votes::{self, nearby_stats};

#[component]
fn CommunityCard(issue: CommunityIssue, issues: RwSignal<Vec<CommunityIssue>>) -> impl IntoView {
    let id = store_value(issue.id.clone());
    let live = create_memo(move |_| {
        id.with_value(|id| issues.with(|all| all.iter().find(|i| &i.id == id).cloned()))
    });
    let comment = create_rw_signal(String::new());

    let apply = move |f: &dyn Fn(&mut CommunityIssue)| {
        id.with_value(|id| issues.update(|all| votes::with_issue(all, id, f)));
    };
    let count = move |get: fn(&CommunityIssue) -> u32| live.with(|i| i.as_ref().map_or(0, get));
    let voted = move |vote: Vote| live.with(|i| i.as_ref().is_some_and(|i| i.user_vote == vote));
    let validated = move || live.with(|i| i.as_ref().is_some_and(|i| i.validated));

    let post = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = comment.get_untracked();
        apply(&|i| {
            if !votes::comment(i, &text) {
                tracing::debug!(issue = %i.id, "blank comment ignored");
            }
        });
        comment.set(String::new());
    };

    view! {
      <li class="card community-issue">
        <div class="row spread">
          <div>
            <strong>{issue.title.clone()}</strong>
            <div class="meta">
              {format!("{} · {} · {} away · by {} · {}",
                  issue.category, issue.location, issue.distance, issue.reported_by, issue.report_date)}
            </div>
          </div>
          <div class="row">
            <span class=urgency_class(issue.urgency)>{issue.urgency.label()}</span>
            <span class=status_class(issue.status)>{issue.status.label()}</span>
          </div>
        </div>
        <p>{issue.description.clone()}</p>
        <div class="row actions">
          <button
            class=move || if voted(Vote::Up) { "chip selected" } else { "chip" }
            on:click=move |_| apply(&|i| votes::cast_vote(i, Vote::Up))
          >
            {move || format!("👍 {}", count(|i| i.upvotes))}
          </button>
          <button
            class=move || if voted(Vote::Down) { "chip selected" } else { "chip" }
            on:click=move |_| apply(&|i| votes::cast_vote(i, Vote::Down))
          >
            {move || format!("👎 {}", count(|i| i.downvotes))}
          </button>
          <span class="meta">{move || format!("💬 {}", count(|i| i.comments))}</span>
          <span class="meta">{format!("👁 {}", issue.views)}</span>
          <button class="primary" disabled=validated on:click=move |_| apply(&votes::validate)>
            {move || if validated() { "✅ Validated" } else { "Validate" }}
          </button>
        </div>
        <form class="row" on:submit=post>
          <input
            type="text"
            placeholder="Add a comment…"
            prop:value=move || comment.get()
            on:input=move |ev| comment.set(event_target_value(&ev))
          />
          <button type="submit" class="ghost">"Post"</button>
        </form>
      </li>
    }
}

/// Nearby reports from other residents, open for votes and validation.
#[component]
pub fn Community() -> impl IntoView {
    let issues = create_rw_signal(sample::community_issues());
    let stats = create_memo(move |_| issues.with(|all| nearby_stats(all)));
    let initial = issues.get_untracked();

    view! {
      <div class="page community">
        <section class="grid four">
          <div class="card stat">
            <div class="meta">"Nearby Issues"</div>
            <div class="stat-value">{move || stats.with(|s| s.total)}</div>
          </div>
          <div class="card stat">
            <div class="meta">"Validated"</div>
            <div class="stat-value">{move || stats.with(|s| s.validated)}</div>
          </div>
          <div class="card stat">
            <div class="meta">"My Validations"</div>
            <div class="stat-value">{move || stats.with(|s| s.my_validations)}</div>
          </div>
          <div class="card stat">
            <div class="meta">"Community Impact"</div>
            <div class="stat-value">{move || stats.with(|s| s.community_impact)}</div>
          </div>
        </section>
        <ul class="list">
          {initial
              .into_iter()
              .map(|issue| view! { <CommunityCard issue=issue issues=issues/> })
              .collect_view()}
        </ul>
      </div>
    }
}
