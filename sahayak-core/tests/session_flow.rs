use rand::rngs::StdRng;
use rand::SeedableRng;
use sahayak_core::chatbot::Chatbot;
use sahayak_core::forms::{EmergencyForm, EmergencyKind};
use sahayak_core::page::SIDEBAR;
use sahayak_core::submission::{MockSubmission, Tick};
use sahayak_core::{AppConfig, Page, Session};

#[test]
fn emergency_report_from_dashboard_closes_dialog_on_completion() {
    let config = AppConfig::default();
    let mut session = Session::new(true);
    session.login();
    session.open_emergency();

    let mut form = EmergencyForm::default();
    assert!(!form.can_submit());
    form.kind = Some(EmergencyKind::Electrical);
    assert!(!form.can_submit());
    form.title = "Downed line on Ring Road".into();
    assert!(form.can_submit());

    let mut submission = form
        .begin_submit(&config.emergency_submission)
        .expect("submit");
    let mut last = submission.progress();
    loop {
        let tick = submission.tick();
        assert!(submission.progress() >= last);
        last = submission.progress();
        if tick == Tick::Complete {
            break;
        }
    }
    assert_eq!(last, 100);
    session.close_emergency();
    assert!(!session.emergency_open);
    assert_eq!(session.visible_page(), Page::Dashboard);
}

#[test]
fn sidebar_walk_and_sign_out() {
    let mut session = Session::new(true);
    session.login();
    for (index, item) in SIDEBAR.iter().enumerate() {
        session.select_sidebar(index);
        assert_eq!(session.visible_page(), item.page);
    }
    session.navigate_id("no-such-page");
    assert_eq!(session.visible_page(), Page::Dashboard);
    session.logout();
    assert_eq!(session.visible_page(), Page::Landing);
}

#[test]
fn report_profile_takes_ten_ticks() {
    let config = AppConfig::default();
    let mut submission = MockSubmission::from_profile(&config.report_submission);
    let ticks = std::iter::from_fn(|| match submission.tick() {
        Tick::Running(_) => Some(()),
        Tick::Complete => None,
    })
    .count();
    assert_eq!(ticks + 1, 10);
}

#[test]
fn chatbot_quick_reply_round_trip() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut bot = Chatbot::default();
    let first_reply = bot.messages[0].quick_replies[0].clone();
    let sent = bot.send(&first_reply, chrono::Utc::now()).expect("sent");
    bot.reply(&sent, &mut rng, chrono::Utc::now());
    let answer = bot.messages.last().expect("answer");
    assert!(answer.quick_replies.iter().any(|r| r == "Guide Me"));
}
