use crate::app::app_config;
use crate::bridge::{self, Timeouts};
use leptos::*;
use sahayak_core::chatbot::{format_time, Chatbot};
use sahayak_core::model::Sender;

/// Floating help assistant. Closed, it is a single round button.
#[component]
pub fn ChatbotWidget(open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let reply_delay = app_config().chatbot_reply_delay_ms;
    let bot = create_rw_signal(Chatbot::default());
    let draft = create_rw_signal(String::new());
    let replies = Timeouts::new();

    let send = move |text: String| {
        let Some(question) = bot.try_update(|b| b.send(&text, chrono::Utc::now())).flatten() else {
            return;
        };
        draft.set(String::new());
        replies.schedule(bridge::millis(reply_delay), move || {
            bot.update(|b| b.reply(&question, &mut rand::thread_rng(), chrono::Utc::now()));
        });
    };

    let messages = move || {
        bot.with(|b| {
            b.messages
                .iter()
                .map(|m| {
                    let class = match m.sender {
                        Sender::User => "message user",
                        Sender::Bot => "message bot",
                    };
                    let replies = m.quick_replies.clone();
                    view! {
                      <div class=class>
                        <div class="bubble">{m.text.clone()}</div>
                        <div class="meta">{format_time(&m.timestamp)}</div>
                        <div class="quick-replies">
                          {replies
                              .into_iter()
                              .map(|reply| {
                                  let label = reply.clone();
                                  view! {
                                    <button class="chip" on:click=move |_| send(reply.clone())>{label}</button>
                                  }
                              })
                              .collect_view()}
                        </div>
                      </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
      <Show
        when=move || open.get()
        fallback=move || view! {
          <button class="chatbot-fab" title="Help" on:click=move |_| on_toggle.call(())>"💬"</button>
        }
      >
        <div class=move || if bot.with(|b| b.minimized) { "chatbot minimized" } else { "chatbot" }>
          <div class="chatbot-header row spread">
            <strong>"Sahayak Assistant"</strong>
            <div class="row">
              <button class="icon-button" on:click=move |_| bot.update(Chatbot::toggle_minimized)>"–"</button>
              <button class="icon-button" on:click=move |_| on_toggle.call(())>"✕"</button>
            </div>
          </div>
          <Show when=move || !bot.with(|b| b.minimized) fallback=|| ()>
            <div class="chatbot-body">
              {messages}
              <Show when=move || bot.with(|b| b.typing) fallback=|| ()>
                <div class="message bot"><div class="bubble typing">"…"</div></div>
              </Show>
            </div>
            <form
              class="chatbot-input row"
              on:submit=move |ev| {
                  ev.prevent_default();
                  if !bot.with_untracked(|b| b.typing) {
                      send(draft.get_untracked());
                  }
              }
            >
              <input
                type="text"
                placeholder="Type your question…"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
              />
              <button
                type="submit"
                class="primary"
                disabled=move || bot.with(|b| b.typing) || draft.with(|d| d.trim().is_empty())
              >
                "Send"
              </button>
            </form>
          </Show>
        </div>
      </Show>
    }
}
