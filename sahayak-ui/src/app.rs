use crate::bridge;
use crate::components::{
    campaigns::Campaigns, chatbot::ChatbotWidget, collaboration::Collaboration,
    community::Community, dashboard::Dashboard, emergency::EmergencyDialog, footer::Footer,
    header::Header, landing::Landing, map_view::MapView, my_issues::MyIssues, profile::Profile,
    report_issue::ReportIssue, sidebar::Sidebar, transparency::Transparency,
    voice_reporting::VoiceReporting,
};
use leptos::*;
use sahayak_core::model::{CampaignStatus, IssueStatus, Priority, Urgency};
use sahayak_core::{AppConfig, Page, Session};

pub fn status_class(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Resolved => "status resolved",
        IssueStatus::InProgress => "status in-progress",
        IssueStatus::Pending => "status pending",
        IssueStatus::Rejected => "status rejected",
    }
}

pub fn urgency_class(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Emergency => "urgency emergency",
        Urgency::High => "urgency high",
        Urgency::Medium => "urgency medium",
        Urgency::Low => "urgency low",
    }
}

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "urgency emergency",
        Priority::High => "urgency high",
        Priority::Medium => "urgency medium",
        Priority::Low => "urgency low",
    }
}

pub fn campaign_class(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Upcoming => "status pending",
        CampaignStatus::Ongoing => "status in-progress",
        CampaignStatus::Completed => "status resolved",
    }
}

/// The app config provided at the root.
pub fn app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[component]
fn OfflineBanner(session: RwSignal<Session>) -> impl IntoView {
    view! {
      <div class="offline-banner">
        <span>"📴 You're currently offline. The app will sync your data when connection is restored."</span>
        <button class="link" on:click=move |_| session.update(Session::dismiss_banner)>"Dismiss"</button>
      </div>
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    let session = create_rw_signal(Session::new(bridge::is_online()));
    bridge::watch_connectivity(move |online| session.update(|s| s.set_online(online)));

    // Memos so that overlay toggles do not remount the current page.
    let logged_in = create_memo(move |_| session.with(|s| s.logged_in));
    let page = create_memo(move |_| session.with(Session::visible_page));
    let emergency_open = create_memo(move |_| session.with(|s| s.emergency_open));
    let chatbot_open = Signal::derive(move || session.with(|s| s.chatbot_open));
    let banner = create_memo(move |_| session.with(Session::banner_visible));

    let navigate = Callback::new(move |target: Page| session.update(|s| s.navigate(target)));
    let open_emergency = Callback::new(move |_: ()| session.update(Session::open_emergency));
    let close_emergency = Callback::new(move |_: ()| session.update(Session::close_emergency));
    let login = Callback::new(move |_: ()| session.update(Session::login));
    let logout = Callback::new(move |_: ()| session.update(Session::logout));
    let toggle_chatbot = Callback::new(move |_: ()| session.update(Session::toggle_chatbot));

    let current_page = move || match page.get() {
        Page::Landing | Page::Dashboard => {
            view! { <Dashboard on_navigate=navigate on_emergency=open_emergency/> }.into_view()
        }
        Page::Report => view! { <ReportIssue on_navigate=navigate/> }.into_view(),
        Page::MyIssues => view! { <MyIssues/> }.into_view(),
        Page::Map => view! { <MapView/> }.into_view(),
        Page::Community => view! { <Community/> }.into_view(),
        Page::Profile => view! { <Profile/> }.into_view(),
        Page::VoiceReporting => view! { <VoiceReporting on_navigate=navigate/> }.into_view(),
        Page::Campaigns => view! { <Campaigns on_navigate=navigate/> }.into_view(),
        Page::Transparency => view! { <Transparency/> }.into_view(),
        Page::Collaboration => view! { <Collaboration/> }.into_view(),
    };

    view! {
      <Show when=move || banner.get() fallback=|| ()>
        <OfflineBanner session=session/>
      </Show>
      <Show
        when=move || logged_in.get()
        fallback=move || view! { <Landing on_login=login/> }
      >
        <div class="shell">
          <Sidebar
            current=page
            on_navigate=navigate
            on_emergency=open_emergency
            on_logout=logout
          />
          <div class="main">
            <Header page=page/>
            <main class="content">{current_page}</main>
            <Footer/>
          </div>
          <Show when=move || emergency_open.get() fallback=|| ()>
            <div class="modal-backdrop">
              <div class="modal">
                <EmergencyDialog on_close=close_emergency/>
              </div>
            </div>
          </Show>
          <ChatbotWidget open=chatbot_open on_toggle=toggle_chatbot/>
        </div>
      </Show>
    }
}
