use leptos::*;
use sahayak_core::model::{ActivityKind, MonthlyGoal, UserProfile};
use sahayak_core::profile::{Pref, ProfileState, ProfileTab};

#[component]
fn Field(
    state: RwSignal<ProfileState>,
    label: &'static str,
    read: fn(&UserProfile) -> &String,
    write: fn(&mut UserProfile, String),
) -> impl IntoView {
    view! {
      <label>{label}</label>
      {move || {
          if state.with(ProfileState::editing) {
              view! {
                <input
                  type="text"
                  prop:value=move || state.with(|s| s.draft.as_ref().map(|d| read(d).clone()).unwrap_or_default())
                  on:input=move |ev| state.update(|s| {
                      if let Some(draft) = s.draft.as_mut() {
                          write(draft, event_target_value(&ev));
                      }
                  })
                />
              }
              .into_view()
          } else {
              view! { <p>{state.with(|s| read(&s.profile).clone())}</p> }.into_view()
          }
      }}
    }
}

fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Validated => "✅",
        ActivityKind::Commented => "💬",
        ActivityKind::Reported => "📝",
        ActivityKind::Badge => "🏅",
    }
}

#[component]
fn Overview(state: RwSignal<ProfileState>) -> impl IntoView {
    let editing = create_memo(move |_| state.with(ProfileState::editing));

    view! {
      <section class="card">
        <div class="row spread">
          <h2>{move || state.with(|s| s.profile.name.clone())}</h2>
          <Show
            when=move || editing.get()
            fallback=move || view! {
              <button class="ghost" on:click=move |_| state.update(ProfileState::begin_edit)>"Edit Profile"</button>
            }
          >
            <div class="row">
              <button class="primary" on:click=move |_| state.update(ProfileState::save)>"Save"</button>
              <button class="ghost" on:click=move |_| state.update(ProfileState::cancel)>"Cancel"</button>
            </div>
          </Show>
        </div>
        <Field state=state label="Name" read={|p| &p.name} write={|p, v| p.name = v}/>
        <Field state=state label="Email" read={|p| &p.email} write={|p, v| p.email = v}/>
        <Field state=state label="Phone" read={|p| &p.phone} write={|p, v| p.phone = v}/>
        <Field state=state label="Location" read={|p| &p.location} write={|p, v| p.location = v}/>
        <Field state=state label="Bio" read={|p| &p.bio} write={|p, v| p.bio = v}/>
        <p class="meta">{move || state.with(|s| format!("Member since {}", s.profile.join_date))}</p>
      </section>

      <section class="card">
        <h3>"Your Impact"</h3>
        <div class="grid four">
          {move || state.with(|s| {
              let st = &s.stats;
              [
                  ("Issues Reported", st.issues_reported),
                  ("Issues Resolved", st.issues_resolved),
                  ("Validations", st.community_validations),
                  ("Comments", st.comments_posted),
                  ("Total Views", st.total_views),
                  ("Upvotes", st.upvotes_received),
                  ("Community Points", st.community_points),
              ]
              .into_iter()
              .map(|(label, value)| view! {
                <div class="stat">
                  <div class="stat-value">{value}</div>
                  <div class="meta">{label}</div>
                </div>
              })
              .collect_view()
          })}
        </div>
      </section>

      <section class="card">
        <h3>"This Month"</h3>
        {move || state.with(|s| {
            s.goals
                .iter()
                .map(|g| view! {
                  <div class="row spread">
                    <span>{g.label.clone()}</span>
                    <span class="meta">{format!("{}/{}", g.actual, g.goal)}</span>
                  </div>
                  <div class="progress small">
                    <div class="bar" style=format!("width: {}%", MonthlyGoal::percent(g))></div>
                  </div>
                })
                .collect_view()
        })}
      </section>
    }
}

#[component]
fn Achievements(state: RwSignal<ProfileState>) -> impl IntoView {
    view! {
      <section class="card">
        <h3>{move || state.with(|s| s.stats.account_level.clone())}</h3>
        <div class="progress">
          <div class="bar" style=move || format!("width: {}%", state.with(ProfileState::level_progress))></div>
        </div>
        <p class="meta">
          {move || state.with(|s| format!(
              "{} / {} XP · {} points to the next level",
              s.stats.experience_points,
              s.stats.next_level_points,
              s.points_to_next_level(),
          ))}
        </p>
      </section>

      <section class="card">
        <h3>{move || state.with(|s| format!("Badges ({}/{})", s.earned_badges(), s.badges.len()))}</h3>
        <div class="grid three">
          {move || state.with(|s| {
              s.badges
                  .iter()
                  .map(|b| view! {
                    <div class={if b.earned() { "badge earned" } else { "badge locked" }}>
                      <strong>{b.name.clone()}</strong>
                      <div class="meta">{b.description.clone()}</div>
                      <div class="meta">{b.earned_date.clone().unwrap_or_else(|| "Not earned yet".into())}</div>
                    </div>
                  })
                  .collect_view()
          })}
        </div>
      </section>
    }
}

#[component]
fn ActivityFeed(state: RwSignal<ProfileState>) -> impl IntoView {
    view! {
      <section class="card">
        <h3>"Recent Activity"</h3>
        <ul class="list">
          {move || state.with(|s| {
              s.activity
                  .iter()
                  .map(|a| view! {
                    <li class="row">
                      <span class="icon">{activity_icon(a.kind)}</span>
                      <div>
                        <div>{a.title.clone()}</div>
                        <div class="meta">{a.date.clone()}</div>
                      </div>
                    </li>
                  })
                  .collect_view()
          })}
        </ul>
      </section>
    }
}

#[component]
fn Settings(state: RwSignal<ProfileState>) -> impl IntoView {
    view! {
      <section class="card">
        <h3>"Notifications"</h3>
        {Pref::ALL
            .into_iter()
            .map(|pref| view! {
              <label class="row spread">
                <span>{pref.label()}</span>
                <input
                  type="checkbox"
                  prop:checked=move || state.with(|s| s.prefs.get(pref))
                  on:change=move |_| state.update(|s| s.prefs.toggle(pref))
                />
              </label>
            })
            .collect_view()}
      </section>
    }
}

#[component]
pub fn Profile() -> impl IntoView {
    let state = create_rw_signal(ProfileState::default());
    let tab = create_memo(move |_| state.with(|s| s.tab));

    let panel = move || match tab.get() {
        ProfileTab::Overview => view! { <Overview state=state/> }.into_view(),
        ProfileTab::Achievements => view! { <Achievements state=state/> }.into_view(),
        ProfileTab::Activity => view! { <ActivityFeed state=state/> }.into_view(),
        ProfileTab::Settings => view! { <Settings state=state/> }.into_view(),
    };

    view! {
      <div class="page profile">
        <div class="tabs">
          {ProfileTab::ALL
              .into_iter()
              .map(|t| view! {
                <button
                  class=move || if tab.get() == t { "tab active" } else { "tab" }
                  on:click=move |_| state.update(|s| s.tab = t)
                >
                  {t.label()}
                </button>
              })
              .collect_view()}
        </div>
        {panel}
      </div>
    }
}
