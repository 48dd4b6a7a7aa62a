use crate::app::app_config;
use crate::bridge::{self, Delay, Ticker};
use leptos::*;
use sahayak_core::forms::{EmergencyForm, EmergencyKind};
use sahayak_core::submission::{MockSubmission, Tick};

/// Emergency report modal. Submitting runs the mock progress bar and closes
/// the dialog shortly after it completes.
#[component]
pub fn EmergencyDialog(on_close: Callback<()>) -> impl IntoView {
    let profile = app_config().emergency_submission;
    let form = create_rw_signal(EmergencyForm::default());
    let submission = create_rw_signal(None::<MockSubmission>);
    let ticker = Ticker::new();
    let closer = Delay::new();

    let can_submit = create_memo(move |_| form.with(EmergencyForm::can_submit));
    let submitting = move || submission.with(Option::is_some);

    let submit = move |_| {
        let started = form.with(|f| f.begin_submit(&profile));
        let started = match started {
            Ok(started) => started,
            Err(error) => {
                tracing::warn!(%error, "emergency report not submitted");
                return;
            }
        };
        submission.set(Some(started));
        let delay = profile.completion_delay_ms;
        ticker.start(bridge::millis(profile.interval_ms), move || {
            let tick = submission
                .try_update(|s| s.as_mut().map(MockSubmission::tick))
                .flatten();
            if tick == Some(Tick::Complete) {
                ticker.stop();
                closer.schedule(bridge::millis(delay), move || on_close.call(()));
            }
        });
    };

    let on_photo = move |ev: web_sys::Event| {
        let files = bridge::picked_files(&ev);
        spawn_local(async move {
            let photo = bridge::read_files(files).await.into_iter().next();
            form.update(|f| f.photo = photo);
        });
    };

    view! {
      <div class="emergency">
        <div class="row spread">
          <h2>"🚨 Emergency Report"</h2>
          <button class="icon-button" disabled=submitting on:click=move |_| on_close.call(())>"✕"</button>
        </div>
        <p class="warning">"For life-threatening emergencies call 911 first."</p>

        <div class="grid two">
          {EmergencyKind::ALL
              .into_iter()
              .map(|kind| view! {
                <button
                  class=move || if form.with(|f| f.kind == Some(kind)) { "card choice selected" } else { "card choice" }
                  disabled=submitting
                  on:click=move |_| form.update(|f| f.kind = Some(kind))
                >
                  <strong>{kind.label()}</strong>
                  <span class="meta">{kind.description()}</span>
                </button>
              })
              .collect_view()}
        </div>

        <label>"Title"</label>
        <input
          type="text"
          placeholder="Brief description of the emergency"
          prop:value=move || form.with(|f| f.title.clone())
          on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
        />
        <label>"Details"</label>
        <textarea
          rows="3"
          prop:value=move || form.with(|f| f.description.clone())
          on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
        ></textarea>
        <label>"Location"</label>
        <input
          type="text"
          prop:value=move || form.with(|f| f.location.clone())
          on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
        />
        <label>"Photo (optional)"</label>
        <input type="file" accept="image/*" on:change=on_photo/>
        {move || form.with(|f| f.photo.as_ref().map(|p| view! {
            <div class="meta">{format!("{} ({})", p.name, p.size_label())}</div>
        }))}

        <Show
          when=submitting
          fallback=move || view! {
            <button class="danger wide" disabled=move || !can_submit.get() on:click=submit>
              "Submit Emergency Report"
            </button>
          }
        >
          <div class="progress">
            <div
              class="bar"
              style=move || format!("width: {}%", submission.with(|s| s.as_ref().map_or(0, MockSubmission::progress)))
            ></div>
          </div>
          <p class="meta">
            {move || if submission.with(|s| s.as_ref().is_some_and(MockSubmission::is_complete)) {
                "✅ Report sent. Emergency services have been notified."
            } else {
                "Sending report…"
            }}
          </p>
        </Show>
      </div>
    }
}
