use crate::app::app_config;
use leptos::*;

const LANGUAGES: [(&str, &str); 3] = [("en", "English"), ("hi", "हिंदी"), ("bn", "বাংলা")];

const FEATURES: [(&str, &str, &str); 4] = [
    ("🎤", "Voice + Photo", "Report an issue in seconds by speaking and snapping a photo."),
    ("🗺️", "Live Map", "See what is being reported around you."),
    ("👥", "Community", "Validate your neighbours' reports and join campaigns."),
    ("📊", "Transparency", "Track how quickly the city resolves issues."),
];

/// Sign-in screen. Credentials are not checked; any submit signs in.
#[component]
pub fn Landing(on_login: Callback<()>) -> impl IntoView {
    let config = app_config();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let language = create_rw_signal("en".to_string());

    view! {
      <div class="landing">
        <section class="hero">
          <h1>{config.app_name.clone()}</h1>
          <p>{format!("Report, track and resolve civic issues across {}.", config.city)}</p>
          <div class="features">
            {FEATURES
                .iter()
                .map(|&(icon, title, text)| view! {
                  <div class="card feature">
                    <div class="icon">{icon}</div>
                    <h3>{title}</h3>
                    <p class="meta">{text}</p>
                  </div>
                })
                .collect_view()}
          </div>
        </section>
        <section class="card login">
          <h2>"Sign in"</h2>
          <form on:submit=move |ev| {
              ev.prevent_default();
              tracing::debug!(language = %language.get_untracked(), "login submitted");
              on_login.call(());
          }>
            <input
              type="email"
              placeholder="Email"
              prop:value=move || email.get()
              on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
              type="password"
              placeholder="Password"
              prop:value=move || password.get()
              on:input=move |ev| password.set(event_target_value(&ev))
            />
            <select on:change=move |ev| language.set(event_target_value(&ev))>
              {LANGUAGES
                  .iter()
                  .map(|&(code, name)| view! {
                    <option value=code selected=move || language.get() == code>{name}</option>
                  })
                  .collect_view()}
            </select>
            <button type="submit" class="primary wide">"Sign In"</button>
          </form>
          <button class="ghost wide" on:click=move |_| on_login.call(())>"Continue as Guest"</button>
        </section>
      </div>
    }
}
