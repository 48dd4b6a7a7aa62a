use serde::{Deserialize, Serialize};

/// Every screen the app can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Landing,
    Dashboard,
    Report,
    MyIssues,
    Map,
    Community,
    Profile,
    VoiceReporting,
    Campaigns,
    Transparency,
    Collaboration,
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Landing,
        Page::Dashboard,
        Page::Report,
        Page::MyIssues,
        Page::Map,
        Page::Community,
        Page::Profile,
        Page::VoiceReporting,
        Page::Campaigns,
        Page::Transparency,
        Page::Collaboration,
    ];

    /// Map a page identifier to its page. Unknown identifiers land on the
    /// dashboard.
    pub fn from_id(id: &str) -> Page {
        match id {
            "landing" => Page::Landing,
            "dashboard" => Page::Dashboard,
            "report" => Page::Report,
            "my-issues" => Page::MyIssues,
            "map" => Page::Map,
            "community" => Page::Community,
            "profile" => Page::Profile,
            "voice-reporting" => Page::VoiceReporting,
            "campaigns" => Page::Campaigns,
            "transparency" => Page::Transparency,
            "collaboration" => Page::Collaboration,
            other => {
                tracing::debug!(page = other, "unknown page id; falling back to dashboard");
                Page::Dashboard
            }
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Dashboard => "dashboard",
            Page::Report => "report",
            Page::MyIssues => "my-issues",
            Page::Map => "map",
            Page::Community => "community",
            Page::Profile => "profile",
            Page::VoiceReporting => "voice-reporting",
            Page::Campaigns => "campaigns",
            Page::Transparency => "transparency",
            Page::Collaboration => "collaboration",
        }
    }

    /// Header title.
    pub fn title(self) -> &'static str {
        match self {
            Page::Landing | Page::Dashboard => "Dashboard",
            Page::Report => "Report Issue",
            Page::MyIssues => "My Issues",
            Page::Map => "Map View",
            Page::Community => "Community",
            Page::Profile => "Profile",
            Page::VoiceReporting => "Voice Reporting",
            Page::Campaigns => "Campaigns",
            Page::Transparency => "Transparency",
            Page::Collaboration => "Collaboration",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub page: Page,
}

pub const SIDEBAR: [MenuItem; 10] = [
    MenuItem { title: "Dashboard", icon: "🏠", page: Page::Dashboard },
    MenuItem { title: "Report Issue", icon: "📝", page: Page::Report },
    MenuItem { title: "My Issues", icon: "📋", page: Page::MyIssues },
    MenuItem { title: "Map View", icon: "🗺️", page: Page::Map },
    MenuItem { title: "Community", icon: "👥", page: Page::Community },
    MenuItem { title: "Voice Reporting", icon: "🎤", page: Page::VoiceReporting },
    MenuItem { title: "Campaigns", icon: "📅", page: Page::Campaigns },
    MenuItem { title: "Transparency", icon: "📊", page: Page::Transparency },
    MenuItem { title: "Collaboration", icon: "🤝", page: Page::Collaboration },
    MenuItem { title: "Profile", icon: "👤", page: Page::Profile },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), page);
        }
    }

    #[test]
    fn unknown_id_falls_back_to_dashboard() {
        assert_eq!(Page::from_id("settings"), Page::Dashboard);
        assert_eq!(Page::from_id(""), Page::Dashboard);
    }

    #[test]
    fn sidebar_pages_are_distinct_and_titled() {
        for (i, item) in SIDEBAR.iter().enumerate() {
            assert_ne!(item.page, Page::Landing);
            assert_eq!(item.title, item.page.title());
            assert!(SIDEBAR[i + 1..].iter().all(|other| other.page != item.page));
        }
    }
}
