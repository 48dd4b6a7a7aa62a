use crate::model::{Activity, Badge, MonthlyGoal, NotificationPrefs, UserProfile, UserStats};
use crate::sample;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pref {
    EmailUpdates,
    PushNotifications,
    WeeklyDigest,
    NearbyIssues,
    ResolutionUpdates,
}

impl Pref {
    pub const ALL: [Pref; 5] = [
        Pref::EmailUpdates,
        Pref::PushNotifications,
        Pref::WeeklyDigest,
        Pref::NearbyIssues,
        Pref::ResolutionUpdates,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Pref::EmailUpdates => "Email updates",
            Pref::PushNotifications => "Push notifications",
            Pref::WeeklyDigest => "Weekly digest",
            Pref::NearbyIssues => "Nearby issues",
            Pref::ResolutionUpdates => "Resolution updates",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Overview,
    Achievements,
    Activity,
    Settings,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 4] = [
        ProfileTab::Overview,
        ProfileTab::Achievements,
        ProfileTab::Activity,
        ProfileTab::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Overview => "Overview",
            ProfileTab::Achievements => "Achievements",
            ProfileTab::Activity => "Activity",
            ProfileTab::Settings => "Settings",
        }
    }
}

impl NotificationPrefs {
    pub fn get(&self, pref: Pref) -> bool {
        match pref {
            Pref::EmailUpdates => self.email_updates,
            Pref::PushNotifications => self.push_notifications,
            Pref::WeeklyDigest => self.weekly_digest,
            Pref::NearbyIssues => self.nearby_issues,
            Pref::ResolutionUpdates => self.resolution_updates,
        }
    }

    pub fn toggle(&mut self, pref: Pref) {
        let slot = match pref {
            Pref::EmailUpdates => &mut self.email_updates,
            Pref::PushNotifications => &mut self.push_notifications,
            Pref::WeeklyDigest => &mut self.weekly_digest,
            Pref::NearbyIssues => &mut self.nearby_issues,
            Pref::ResolutionUpdates => &mut self.resolution_updates,
        };
        *slot = !*slot;
    }
}

/// Profile page state. Edits go to a draft that is either saved over the
/// profile or thrown away.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileState {
    pub profile: UserProfile,
    pub draft: Option<UserProfile>,
    pub stats: UserStats,
    pub prefs: NotificationPrefs,
    pub badges: Vec<Badge>,
    pub activity: Vec<Activity>,
    pub goals: Vec<MonthlyGoal>,
    pub tab: ProfileTab,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile: sample::user_profile(),
            draft: None,
            stats: sample::user_stats(),
            prefs: sample::notification_prefs(),
            badges: sample::badges(),
            activity: sample::recent_activity(),
            goals: sample::monthly_goals(),
            tab: ProfileTab::default(),
        }
    }
}

impl ProfileState {
    pub fn editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.profile.clone());
        }
    }

    pub fn save(&mut self) {
        if let Some(draft) = self.draft.take() {
            tracing::info!(name = %draft.name, "profile saved");
            self.profile = draft;
        }
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    pub fn earned_badges(&self) -> usize {
        self.badges.iter().filter(|b| b.earned()).count()
    }

    /// Progress toward the next account level, in whole percent.
    pub fn level_progress(&self) -> u8 {
        if self.stats.next_level_points == 0 {
            return 100;
        }
        let pct = u64::from(self.stats.experience_points) * 100
            / u64::from(self.stats.next_level_points);
        pct.min(100) as u8
    }

    pub fn points_to_next_level(&self) -> u32 {
        self.stats
            .next_level_points
            .saturating_sub(self.stats.experience_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActivityKind;

    #[test]
    fn edit_save_and_cancel() {
        let mut state = ProfileState::default();
        state.begin_edit();
        if let Some(draft) = state.draft.as_mut() {
            draft.name = "Priya Sharma".into();
        }
        state.cancel();
        assert_eq!(state.profile.name, "John Doe");

        state.begin_edit();
        if let Some(draft) = state.draft.as_mut() {
            draft.name = "Priya Sharma".into();
        }
        state.save();
        assert!(!state.editing());
        assert_eq!(state.profile.name, "Priya Sharma");
    }

    #[test]
    fn prefs_toggle() {
        let mut state = ProfileState::default();
        assert!(!state.prefs.get(Pref::NearbyIssues));
        state.prefs.toggle(Pref::NearbyIssues);
        assert!(state.prefs.get(Pref::NearbyIssues));
    }

    #[test]
    fn tabs_and_activity_feed() {
        let mut state = ProfileState::default();
        assert_eq!(state.tab, ProfileTab::Overview);
        state.tab = ProfileTab::Activity;
        assert_eq!(state.tab.label(), "Activity");
        assert_eq!(state.activity.len(), 4);
        assert_eq!(state.activity[0].kind, ActivityKind::Validated);
        let percents: Vec<u8> = state.goals.iter().map(MonthlyGoal::percent).collect();
        assert_eq!(percents, [60, 70, 80]);
    }

    #[test]
    fn level_and_badges() {
        let state = ProfileState::default();
        assert_eq!(state.level_progress(), 81);
        assert_eq!(state.points_to_next_level(), 660);
        assert_eq!(state.earned_badges(), 5);
    }
}
