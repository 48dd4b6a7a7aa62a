use crate::app::campaign_class;
use leptos::*;
use sahayak_core::campaigns::{self, can_join, fill_percent};
use sahayak_core::filters::filter_campaigns;
use sahayak_core::model::Campaign;
use sahayak_core::sample::{self, CAMPAIGN_CATEGORIES, CAMPAIGN_STATUSES};
use sahayak_core::Page;

fn title_case(id: &str) -> String {
    if id == "all" {
        return "All".into();
    }
    let mut chars = id.chars();
    chars
        .next()
        .map(|c| c.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[component]
fn CampaignCard(campaign: Campaign, all: RwSignal<Vec<Campaign>>) -> impl IntoView {
    let id = campaign.id;
    let live = create_memo(move |_| all.with(|v| v.iter().find(|c| c.id == id).cloned()));
    let joined = move || live.with(|c| c.as_ref().is_some_and(|c| c.joined));
    let joinable = move || live.with(|c| c.as_ref().is_some_and(can_join));

    let toggle = move |_| {
        all.update(|v| {
            let Some(c) = v.iter_mut().find(|c| c.id == id) else {
                return;
            };
            let result = if c.joined { campaigns::leave(c) } else { campaigns::join(c) };
            if let Err(error) = result {
                tracing::warn!(%error, "campaign membership unchanged");
            }
        });
    };

    view! {
      <li class="card campaign">
        <div class="row spread">
          <h3>{campaign.title.clone()}</h3>
          <span class=campaign_class(campaign.status)>{campaign.status.label()}</span>
        </div>
        <p>{campaign.description.clone()}</p>
        <div class="meta">
          {format!("📅 {} · {} · 📍 {} · by {}", campaign.date, campaign.time, campaign.location, campaign.organizer)}
        </div>
        <div class="tags">
          {campaign.tags.iter().map(|t| view! { <span class="chip">{format!("#{t}")}</span> }).collect_view()}
        </div>
        <div class="progress small">
          <div class="bar" style=move || format!("width: {}%", live.with(|c| c.as_ref().map_or(0, fill_percent)))></div>
        </div>
        <div class="row spread">
          <span class="meta">
            {move || live.with(|c| c.as_ref().map_or(String::new(), |c| {
                format!("{}/{} participants", c.participants, c.max_participants)
            }))}
          </span>
          <span class="meta">{format!("Impact: {}", campaign.impact)}</span>
          <button
            class=move || if joined() { "ghost" } else { "primary" }
            disabled=move || !joined() && !joinable()
            on:click=toggle
          >
            {move || if joined() { "Leave" } else { "Join Campaign" }}
          </button>
        </div>
      </li>
    }
}

#[component]
pub fn Campaigns(on_navigate: Callback<Page>) -> impl IntoView {
    let all = create_rw_signal(sample::campaigns());
    let search = create_rw_signal(String::new());
    let category = create_rw_signal("all".to_string());
    let status = create_rw_signal("all".to_string());

    let visible = create_memo(move |_| {
        all.with(|v| {
            search.with(|q| {
                category.with(|cat| {
                    status.with(|s| filter_campaigns(v, q, cat, s).into_iter().map(|c| c.id).collect::<Vec<_>>())
                })
            })
        })
    });
    let joined = create_memo(move |_| all.with(|v| v.iter().filter(|c| c.joined).count()));

    view! {
      <div class="page campaigns">
        <section class="row spread">
          <div>
            <h2>"Community Campaigns"</h2>
            <p class="meta">{move || format!("You have joined {} campaign(s).", joined.get())}</p>
          </div>
          <div class="row">
            <button class="ghost" on:click=move |_| on_navigate.call(Page::Collaboration)>"Collaboration groups"</button>
            <button class="primary" on:click=move |_| on_navigate.call(Page::Report)>"Report an issue"</button>
          </div>
        </section>
        <section class="row filters">
          <input
            type="search"
            placeholder="Search campaigns…"
            prop:value=move || search.get()
            on:input=move |ev| search.set(event_target_value(&ev))
          />
          <select on:change=move |ev| category.set(event_target_value(&ev))>
            {CAMPAIGN_CATEGORIES.into_iter().map(|c| view! { <option value=c>{title_case(c)}</option> }).collect_view()}
          </select>
          <select on:change=move |ev| status.set(event_target_value(&ev))>
            {CAMPAIGN_STATUSES.into_iter().map(|s| view! { <option value=s>{title_case(s)}</option> }).collect_view()}
          </select>
        </section>
        <Show
          when=move || visible.with(|v| !v.is_empty())
          fallback=|| view! { <p class="empty">"No campaigns match your filters."</p> }
        >
          <ul class="list">
            <For
              each=move || visible.get()
              key=|id| *id
              children=move |id| {
                  all.with_untracked(|v| v.iter().find(|c| c.id == id).cloned())
                      .map(|campaign| view! { <CampaignCard campaign=campaign all=all/> })
              }
            />
          </ul>
        </Show>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn filter_labels() {
        assert_eq!(title_case("all"), "All");
        assert_eq!(title_case("upcoming"), "Upcoming");
        assert_eq!(title_case("Environment"), "Environment");
    }
}
