use crate::page::{Page, SIDEBAR};
use serde::{Deserialize, Serialize};

/// Root application state: who is signed in, which page is showing and
/// which overlays are open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub logged_in: bool,
    pub page: Page,
    pub emergency_open: bool,
    pub chatbot_open: bool,
    pub online: bool,
    pub offline_banner: bool,
}

impl Session {
    pub fn new(online: bool) -> Self {
        Self {
            logged_in: false,
            page: Page::Landing,
            emergency_open: false,
            chatbot_open: false,
            online,
            offline_banner: false,
        }
    }

    /// Simulated sign-in; there is no credential check.
    pub fn login(&mut self) {
        self.logged_in = true;
        self.page = Page::Dashboard;
        tracing::info!("signed in");
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.page = Page::Landing;
        self.emergency_open = false;
        self.chatbot_open = false;
        tracing::info!("signed out");
    }

    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = self.page.id(), to = page.id(), "navigate");
        self.page = page;
    }

    pub fn navigate_id(&mut self, id: &str) {
        self.navigate(Page::from_id(id));
    }

    /// Select the sidebar entry at `index`. Out-of-range indices are ignored.
    pub fn select_sidebar(&mut self, index: usize) {
        if let Some(item) = SIDEBAR.get(index) {
            self.navigate(item.page);
        }
    }

    /// The page actually rendered: signed-out users only ever see the landing
    /// screen.
    pub fn visible_page(&self) -> Page {
        if self.logged_in {
            self.page
        } else {
            Page::Landing
        }
    }

    pub fn open_emergency(&mut self) {
        self.emergency_open = true;
    }

    pub fn close_emergency(&mut self) {
        self.emergency_open = false;
    }

    pub fn toggle_chatbot(&mut self) {
        self.chatbot_open = !self.chatbot_open;
    }

    pub fn set_online(&mut self, online: bool) {
        self.online = online;
        if !online {
            self.offline_banner = true;
            tracing::warn!("connection lost");
        } else {
            tracing::info!("connection restored");
        }
    }

    pub fn dismiss_banner(&mut self) {
        self.offline_banner = false;
    }

    pub fn banner_visible(&self) -> bool {
        self.offline_banner && !self.online
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_lands_on_dashboard() {
        let mut s = Session::new(true);
        assert_eq!(s.visible_page(), Page::Landing);
        s.navigate(Page::Map);
        assert_eq!(s.visible_page(), Page::Landing);
        s.login();
        assert_eq!(s.visible_page(), Page::Dashboard);
    }

    #[test]
    fn logout_resets_overlays() {
        let mut s = Session::new(true);
        s.login();
        s.open_emergency();
        s.toggle_chatbot();
        s.logout();
        assert_eq!(s.page, Page::Landing);
        assert!(!s.emergency_open);
        assert!(!s.chatbot_open);
    }

    #[test]
    fn every_sidebar_item_selects_its_page() {
        let mut s = Session::new(true);
        s.login();
        for (i, item) in SIDEBAR.iter().enumerate() {
            s.select_sidebar(i);
            assert_eq!(s.visible_page(), item.page);
            assert_eq!(Page::ALL.iter().filter(|p| **p == s.page).count(), 1);
        }
        s.select_sidebar(SIDEBAR.len());
        assert_eq!(s.page, SIDEBAR[SIDEBAR.len() - 1].page);
    }

    #[test]
    fn offline_banner_follows_connectivity() {
        let mut s = Session::new(true);
        assert!(!s.banner_visible());
        s.set_online(false);
        assert!(s.banner_visible());
        s.set_online(true);
        assert!(!s.banner_visible());
        assert!(s.offline_banner);

        s.set_online(false);
        s.dismiss_banner();
        assert!(!s.banner_visible());
    }
}
