use crate::app::app_config;
use crate::bridge::{self, Delay, Ticker};
use leptos::*;
use sahayak_core::forms::{format_duration, ReportForm, WizardStep, MAX_PHOTOS, REPORT_CATEGORIES};
use sahayak_core::model::Priority;
use sahayak_core::submission::{MockSubmission, Tick};
use sahayak_core::Page;

#[component]
fn StepIndicator(form: RwSignal<ReportForm>) -> impl IntoView {
    view! {
      <ol class="steps">
        {WizardStep::ALL
            .into_iter()
            .map(|step| view! {
              <li class=move || {
                  let current = form.with(|f| f.step.number());
                  if step.number() < current {
                      "step done"
                  } else if step.number() == current {
                      "step current"
                  } else {
                      "step"
                  }
              }>
                <span class="step-number">{step.number()}</span>
                <span>{step.title()}</span>
              </li>
            })
            .collect_view()}
      </ol>
    }
}

#[component]
fn CaptureStep(form: RwSignal<ReportForm>) -> impl IntoView {
    let recorder = Ticker::new();
    // Leaving the step mid-recording keeps what was captured so far.
    on_cleanup(move || {
        form.try_update(|f| {
            if f.recorder.recording {
                f.stop_recording();
            }
        });
    });

    let start = move |_| {
        form.update(ReportForm::start_recording);
        recorder.start(bridge::millis(1000), move || {
            form.update(ReportForm::tick_recording);
            if !form.with_untracked(|f| f.recorder.recording) {
                recorder.stop();
            }
        });
    };
    let stop = move |_| {
        recorder.stop();
        form.update(ReportForm::stop_recording);
    };
    let on_photos = move |ev: web_sys::Event| {
        let files = bridge::picked_files(&ev);
        spawn_local(async move {
            let photos = bridge::read_files(files).await;
            form.update(|f| f.add_photos(photos));
        });
    };

    let recording = move || form.with(|f| f.recorder.recording);
    let seconds = move || form.with(|f| format_duration(f.recorder.seconds));

    view! {
      <section class="card">
        <h3>"🎤 Voice Note"</h3>
        <Show
          when=recording
          fallback=move || view! {
            <Show
              when=move || form.with(|f| f.voice.is_some())
              fallback=move || view! {
                <button class="primary" on:click=start>"Start Recording"</button>
              }
            >
              <div class="row">
                <span>{move || format!("✅ Voice note recorded ({})", seconds())}</span>
                <button class="link" on:click=move |_| form.update(ReportForm::discard_voice)>"Discard"</button>
              </div>
            </Show>
          }
        >
          <div class="row">
            <span class="recording-dot"></span>
            <span>{seconds}</span>
            <button class="danger" on:click=stop>"Stop"</button>
          </div>
        </Show>
      </section>

      <section class="card">
        <h3>{move || format!("📷 Photos ({}/{MAX_PHOTOS})", form.with(|f| f.photos.len()))}</h3>
        <input
          type="file"
          accept="image/*"
          multiple=true
          disabled=move || form.with(|f| f.photos.len() >= MAX_PHOTOS)
          on:change=on_photos
        />
        <ul class="thumbs">
          {move || form.with(|f| {
              f.photos
                  .iter()
                  .enumerate()
                  .map(|(index, photo)| view! {
                    <li class="thumb">
                      <span>{photo.name.clone()}</span>
                      <span class="meta">{photo.size_label()}</span>
                      <button class="link" on:click=move |_| form.update(|f| f.remove_photo(index))>"Remove"</button>
                    </li>
                  })
                  .collect_view()
          })}
        </ul>
      </section>
    }
}

#[component]
fn LocationStep(form: RwSignal<ReportForm>) -> impl IntoView {
    let city = app_config().city;

    view! {
      <section class="card">
        <h3>"📍 Location"</h3>
        <div class="row">
          <input
            type="text"
            placeholder="Street address or landmark"
            prop:value=move || form.with(|f| f.location.clone())
            on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
          />
          <button
            class="ghost"
            on:click=move |_| form.update(|f| f.location = format!("Current Location (GPS), {city}"))
          >
            "Use current location"
          </button>
        </div>

        <h3>"Category"</h3>
        <select on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))>
          <option value="" selected=move || form.with(|f| f.category.is_empty())>"Select a category"</option>
          {REPORT_CATEGORIES
              .into_iter()
              .map(|category| view! {
                <option value=category selected=move || form.with(|f| f.category == category)>{category}</option>
              })
              .collect_view()}
        </select>

        <h3>"Priority"</h3>
        <div class="grid four">
          {Priority::ALL
              .into_iter()
              .map(|priority| view! {
                <button
                  class=move || if form.with(|f| f.priority == Some(priority)) { "chip selected" } else { "chip" }
                  on:click=move |_| form.update(|f| f.priority = Some(priority))
                >
                  {priority.label()}
                </button>
              })
              .collect_view()}
        </div>

        <label class="row">
          <input
            type="checkbox"
            prop:checked=move || form.with(|f| f.anonymous)
            on:change=move |_| form.update(|f| f.anonymous = !f.anonymous)
          />
          "Report anonymously"
        </label>
        <label class="row">
          <input
            type="checkbox"
            prop:checked=move || form.with(|f| f.elderly_disabled)
            on:change=move |_| form.update(|f| f.elderly_disabled = !f.elderly_disabled)
          />
          "Affects elderly or disabled residents"
        </label>
      </section>
    }
}

fn or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        "—".to_string()
    } else {
        s.to_string()
    }
}

#[component]
fn ReviewStep(form: RwSignal<ReportForm>) -> impl IntoView {
    view! {
      <section class="card">
        <h3>"Review & Submit"</h3>
        <label>"Title"</label>
        <input
          type="text"
          placeholder="Short summary (optional)"
          prop:value=move || form.with(|f| f.title.clone())
          on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
        />
        <label>"Additional details"</label>
        <textarea
          rows="3"
          prop:value=move || form.with(|f| f.description.clone())
          on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
        ></textarea>
        <dl class="summary">
          <dt>"Voice note"</dt>
          <dd>{move || form.with(|f| if f.voice.is_some() { format_duration(f.recorder.seconds) } else { "None".into() })}</dd>
          <dt>"Photos"</dt>
          <dd>{move || form.with(|f| f.photos.len())}</dd>
          <dt>"Location"</dt>
          <dd>{move || form.with(|f| or_dash(&f.location))}</dd>
          <dt>"Category"</dt>
          <dd>{move || form.with(|f| or_dash(&f.category))}</dd>
          <dt>"Priority"</dt>
          <dd>{move || form.with(|f| f.priority.map_or("—", Priority::label))}</dd>
          <dt>"Anonymous"</dt>
          <dd>{move || if form.with(|f| f.anonymous) { "Yes" } else { "No" }}</dd>
        </dl>
      </section>
    }
}

/// Three-step report wizard. On completion the user lands on My Issues.
#[component]
pub fn ReportIssue(on_navigate: Callback<Page>) -> impl IntoView {
    let profile = app_config().report_submission;
    let form = create_rw_signal(ReportForm::default());
    let submission = create_rw_signal(None::<MockSubmission>);
    let ticker = Ticker::new();
    let done = Delay::new();

    let step = create_memo(move |_| form.with(|f| f.step));
    let submitting = move || submission.with(Option::is_some);

    let submit = move |_| {
        let started = match form.with(|f| f.begin_submit(&profile)) {
            Ok(started) => started,
            Err(error) => {
                tracing::warn!(%error, "report not submitted");
                return;
            }
        };
        submission.set(Some(started));
        ticker.start(bridge::millis(profile.interval_ms), move || {
            let tick = submission
                .try_update(|s| s.as_mut().map(MockSubmission::tick))
                .flatten();
            if tick == Some(Tick::Complete) {
                ticker.stop();
                done.schedule(bridge::millis(profile.completion_delay_ms), move || {
                    on_navigate.call(Page::MyIssues)
                });
            }
        });
    };

    let body = move || match step.get() {
        WizardStep::Capture => view! { <CaptureStep form=form/> }.into_view(),
        WizardStep::LocationPriority => view! { <LocationStep form=form/> }.into_view(),
        WizardStep::Review => view! { <ReviewStep form=form/> }.into_view(),
    };

    view! {
      <div class="page report">
        <StepIndicator form=form/>
        <Show
          when=submitting
          fallback=move || view! {
            {body}
            <div class="row spread">
              <button
                class="ghost"
                disabled=move || !form.with(ReportForm::can_go_back)
                on:click=move |_| form.update(ReportForm::back)
              >
                "Back"
              </button>
              <Show
                when=move || form.with(ReportForm::can_go_next)
                fallback=move || view! {
                  <button class="primary" disabled=move || !form.with(ReportForm::has_evidence) on:click=submit>
                    "Submit Report"
                  </button>
                }
              >
                <button class="primary" on:click=move |_| form.update(ReportForm::next)>
                  "Continue"
                </button>
              </Show>
            </div>
          }
        >
          <section class="card">
            <h3>"Submitting your report…"</h3>
            <div class="progress">
              <div
                class="bar"
                style=move || format!("width: {}%", submission.with(|s| s.as_ref().map_or(0, MockSubmission::progress)))
              ></div>
            </div>
            <p class="meta">
              {move || if submission.with(|s| s.as_ref().is_some_and(MockSubmission::is_complete)) {
                  "✅ Submitted. Taking you to My Issues…"
              } else {
                  "Uploading evidence"
              }}
            </p>
          </section>
        </Show>
      </div>
    }
}
