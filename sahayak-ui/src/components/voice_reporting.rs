use crate::app::app_config;
use crate::bridge::{self, Delay, Ticker};
use leptos::*;
use sahayak_core::forms::format_duration;
use sahayak_core::voice::{VoicePhase, VoiceSession, LANGUAGES};
use sahayak_core::Page;

#[component]
pub fn VoiceReporting(on_navigate: Callback<Page>) -> impl IntoView {
    let transcription_delay = app_config().transcription_delay_ms;
    let session = create_rw_signal(VoiceSession::default());
    let clock = Ticker::new();
    let processing = Delay::new();

    let phase = create_memo(move |_| session.with(|s| s.phase));

    let transcribe = move || {
        processing.schedule(bridge::millis(transcription_delay), move || {
            session.update(|s| s.finish_transcription(&mut rand::thread_rng()));
        });
    };
    let start = move |_| {
        processing.cancel();
        session.update(VoiceSession::start);
        clock.start(bridge::millis(1000), move || session.update(VoiceSession::tick));
    };
    let stop = move |_| {
        clock.stop();
        session.update(VoiceSession::stop);
        transcribe();
    };
    let retry = move |_| {
        match session.try_update(VoiceSession::retry) {
            Some(Ok(())) => transcribe(),
            Some(Err(error)) => tracing::warn!(%error, "cannot retry transcription"),
            None => {}
        }
    };
    let submit = move |_| {
        if session.with(VoiceSession::can_submit) {
            tracing::info!(language = %session.with_untracked(|s| s.language.clone()), "voice report submitted");
            on_navigate.call(Page::MyIssues);
        }
    };

    view! {
      <div class="page voice">
        <section class="card">
          <h3>"Language"</h3>
          <select
            disabled=move || phase.get() == VoicePhase::Recording
            on:change=move |ev| session.update(|s| s.language = event_target_value(&ev))
          >
            {LANGUAGES
                .iter()
                .map(|lang| {
                    let code = lang.code;
                    view! {
                      <option value=code selected=move || session.with(|s| s.language == code)>{lang.name}</option>
                    }
                })
                .collect_view()}
          </select>
        </section>

        <section class="card recorder">
          <div class="big-timer">{move || session.with(|s| format_duration(s.duration))}</div>
          {move || match phase.get() {
              VoicePhase::Recording => view! {
                <button class="danger round" on:click=stop>"⏹ Stop"</button>
                <p class="meta">"Listening… speak clearly"</p>
              }.into_view(),
              VoicePhase::Processing => view! {
                <p class="meta">"⏳ Transcribing your recording…"</p>
              }.into_view(),
              VoicePhase::Idle | VoicePhase::Transcribed => view! {
                <button class="primary round" on:click=start>"🎤 Record"</button>
              }.into_view(),
          }}
        </section>

        <Show when=move || phase.get() == VoicePhase::Transcribed fallback=|| ()>
          <section class="card">
            <div class="row spread">
              <h3>"Transcription"</h3>
              <span class="meta">{move || format!("Confidence: {}%", session.with(|s| s.confidence))}</span>
            </div>
            <textarea
              rows="5"
              prop:value=move || session.with(|s| s.transcript.clone())
              on:input=move |ev| session.update(|s| s.transcript = event_target_value(&ev))
            ></textarea>
            <div class="row">
              <button class="ghost" on:click=move |_| session.update(VoiceSession::toggle_playback)>
                {move || if session.with(|s| s.playing) { "⏸ Pause" } else { "▶ Play" }}
              </button>
              <button class="ghost" on:click=retry>"↻ Retry"</button>
              <button class="primary" disabled=move || !session.with(VoiceSession::can_submit) on:click=submit>
                "Submit Report"
              </button>
            </div>
          </section>
        </Show>
      </div>
    }
}
