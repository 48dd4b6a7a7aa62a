use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 4] = [
        IssueStatus::Pending,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IssueStatus::Pending => "Pending",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Rejected => "Rejected",
        }
    }

    /// Lower-cased label, the value used by the status filter.
    pub fn filter_key(self) -> &'static str {
        match self {
            IssueStatus::Pending => "pending",
            IssueStatus::InProgress => "in progress",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Rejected => "rejected",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
}

impl Urgency {
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Emergency => "emergency",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}

/// An issue the signed-in citizen reported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    pub status: IssueStatus,
    pub urgency: Urgency,
    pub report_date: String,
    pub last_update: String,
    pub progress: u8,
    pub views: u32,
    pub votes: u32,
    pub comments: u32,
    /// Receipt hash shown as a verification badge on resolved issues.
    pub receipt_hash: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    #[default]
    None,
    Up,
    Down,
}

/// A neighbour's report open for validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommunityIssue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub distance: String,
    pub status: IssueStatus,
    pub urgency: Urgency,
    pub reported_by: String,
    pub report_date: String,
    pub views: u32,
    pub upvotes: u32,
    pub downvotes: u32,
    pub comments: u32,
    pub validated: bool,
    pub user_vote: Vote,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl CampaignStatus {
    pub fn id(self) -> &'static str {
        match self {
            CampaignStatus::Upcoming => "upcoming",
            CampaignStatus::Ongoing => "ongoing",
            CampaignStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Upcoming => "Upcoming",
            CampaignStatus::Ongoing => "Ongoing",
            CampaignStatus::Completed => "Completed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: CampaignStatus,
    pub date: String,
    pub time: String,
    pub location: String,
    pub participants: u32,
    pub max_participants: u32,
    pub organizer: String,
    pub tags: Vec<String>,
    pub impact: String,
    pub joined: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollabStatus {
    Open,
    InProgress,
    Resolved,
    Pending,
}

impl CollabStatus {
    pub fn label(self) -> &'static str {
        match self {
            CollabStatus::Open => "open",
            CollabStatus::InProgress => "in-progress",
            CollabStatus::Resolved => "resolved",
            CollabStatus::Pending => "pending",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorRole {
    Creator,
    Collaborator,
    Supporter,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub name: String,
    pub role: CollaboratorRole,
    pub joined_at: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    Comment,
    StatusChange,
    FileUpload,
    CollaboratorAdded,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollabUpdate {
    pub author: String,
    pub message: String,
    pub timestamp: String,
    pub kind: UpdateKind,
}

/// A group effort around a shared civic problem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollaborativeIssue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub status: CollabStatus,
    pub priority: Priority,
    pub collaborators: Vec<Collaborator>,
    pub updates: Vec<CollabUpdate>,
    pub supporters: u32,
    pub public: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub quick_replies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub join_date: String,
    pub bio: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub issues_reported: u32,
    pub issues_resolved: u32,
    pub community_validations: u32,
    pub comments_posted: u32,
    pub total_views: u32,
    pub upvotes_received: u32,
    pub community_points: u32,
    pub account_level: String,
    pub experience_points: u32,
    pub next_level_points: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email_updates: bool,
    pub push_notifications: bool,
    pub weekly_digest: bool,
    pub nearby_issues: bool,
    pub resolution_updates: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub earned_date: Option<String>,
}

impl Badge {
    pub fn earned(&self) -> bool {
        self.earned_date.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Validated,
    Commented,
    Reported,
    Badge,
}

/// One line of the profile's recent-activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub title: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyGoal {
    pub label: String,
    pub goal: u32,
    pub actual: u32,
}

impl MonthlyGoal {
    pub fn percent(&self) -> u8 {
        if self.goal == 0 {
            return 100;
        }
        (u64::from(self.actual) * 100 / u64::from(self.goal)).min(100) as u8
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapIssue {
    pub id: u32,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub status: IssueStatus,
    pub urgency: Urgency,
}

/// A file picked in the browser, held in memory only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn size_label(&self) -> String {
        let len = self.bytes.len();
        if len >= 1024 * 1024 {
            format!("{:.1} MB", len as f64 / (1024.0 * 1024.0))
        } else if len >= 1024 {
            format!("{:.1} KB", len as f64 / 1024.0)
        } else {
            format!("{len} B")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ids_round_trip() {
        for p in Priority::ALL {
            assert_eq!(Priority::from_id(p.id()), Some(p));
        }
        assert_eq!(Priority::from_id("whenever"), None);
    }

    #[test]
    fn attachment_size_labels() {
        let small = Attachment {
            name: "a.jpg".into(),
            mime: "image/jpeg".into(),
            bytes: vec![0; 512],
        };
        assert_eq!(small.size_label(), "512 B");
        let bigger = Attachment {
            bytes: vec![0; 2048],
            ..small
        };
        assert_eq!(bigger.size_label(), "2.0 KB");
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
