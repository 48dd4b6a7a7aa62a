//! Hard-coded sample records. Every call returns a fresh copy so a page
//! mount starts from the same state.

use crate::model::{
    Activity, ActivityKind, Badge, Campaign, CampaignStatus, CollabStatus, CollabUpdate, CollaborativeIssue,
    Collaborator, CollaboratorRole, CommunityIssue, Issue, IssueStatus, MapIssue,
    MonthlyGoal, NotificationPrefs, Priority, UpdateKind, Urgency, UserProfile, UserStats, Vote,
};

#[allow(clippy::too_many_arguments)]
fn issue(
    id: &str,
    title: &str,
    category: &str,
    location: &str,
    status: IssueStatus,
    urgency: Urgency,
    dates: (&str, &str),
    progress: u8,
    counts: (u32, u32, u32),
    receipt_hash: Option<&str>,
) -> Issue {
    Issue {
        id: id.into(),
        title: title.into(),
        category: category.into(),
        location: location.into(),
        status,
        urgency,
        report_date: dates.0.into(),
        last_update: dates.1.into(),
        progress,
        views: counts.0,
        votes: counts.1,
        comments: counts.2,
        receipt_hash: receipt_hash.map(Into::into),
    }
}

pub fn my_issues() -> Vec<Issue> {
    vec![
        issue(
            "ISS-001",
            "Large pothole causing vehicle damage",
            "Roads & Infrastructure",
            "123 Main Street",
            IssueStatus::InProgress,
            Urgency::High,
            ("2024-12-08", "2024-12-10"),
            65,
            (47, 23, 8),
            None,
        ),
        issue(
            "ISS-002",
            "Broken streetlight near school",
            "Street Lighting",
            "456 Oak Avenue",
            IssueStatus::Resolved,
            Urgency::Medium,
            ("2024-12-05", "2024-12-09"),
            100,
            (32, 15, 4),
            Some("0xa1b2c3d4e5f6789abcdef0123456789abcdef0123456789"),
        ),
        issue(
            "ISS-003",
            "Overflowing trash bin on sidewalk",
            "Sanitation",
            "789 Pine Street",
            IssueStatus::Pending,
            Urgency::Low,
            ("2024-12-09", "2024-12-09"),
            10,
            (12, 8, 2),
            None,
        ),
        issue(
            "ISS-004",
            "Damaged playground equipment",
            "Parks & Recreation",
            "Central Park",
            IssueStatus::InProgress,
            Urgency::Medium,
            ("2024-12-06", "2024-12-11"),
            35,
            (89, 34, 12),
            None,
        ),
        issue(
            "ISS-005",
            "Faded crosswalk markings",
            "Traffic & Parking",
            "321 Elm Street",
            IssueStatus::Rejected,
            Urgency::Low,
            ("2024-12-04", "2024-12-07"),
            0,
            (18, 5, 3),
            None,
        ),
        issue(
            "ISS-006",
            "Water main leak fixed",
            "Infrastructure",
            "789 Water Street",
            IssueStatus::Resolved,
            Urgency::High,
            ("2024-11-28", "2024-12-02"),
            100,
            (156, 78, 23),
            Some("0x9f8e7d6c5b4a3928374829384729384827394827384"),
        ),
    ]
}

/// Short list shown on the dashboard.
pub fn recent_issues() -> Vec<(u32, &'static str, IssueStatus, Priority, &'static str)> {
    vec![
        (1, "Broken streetlight on MG Road", IssueStatus::Resolved, Priority::Medium, "2 days ago"),
        (2, "Pothole near City Mall", IssueStatus::InProgress, Priority::High, "5 days ago"),
        (3, "Overflowing garbage bin", IssueStatus::Pending, Priority::Urgent, "1 week ago"),
    ]
}

pub fn community_issues() -> Vec<CommunityIssue> {
    vec![
        CommunityIssue {
            id: "ISS-006".into(),
            title: "Broken fire hydrant leaking water".into(),
            description: "Fire hydrant on the corner has been leaking for several days, creating a puddle that freezes at night.".into(),
            category: "Infrastructure".into(),
            location: "145 Oak Street".into(),
            distance: "0.2 miles away".into(),
            status: IssueStatus::Pending,
            urgency: Urgency::High,
            reported_by: "Sarah M.".into(),
            report_date: "2024-12-11".into(),
            views: 23,
            upvotes: 8,
            downvotes: 1,
            comments: 3,
            validated: false,
            user_vote: Vote::None,
        },
        CommunityIssue {
            id: "ISS-007".into(),
            title: "Dead tree blocking sidewalk".into(),
            description: "Large tree fell during last storm and is completely blocking the sidewalk. Pedestrians have to walk in the street.".into(),
            category: "Parks & Recreation".into(),
            location: "67 Pine Avenue".into(),
            distance: "0.5 miles away".into(),
            status: IssueStatus::Pending,
            urgency: Urgency::Medium,
            reported_by: "Mike R.".into(),
            report_date: "2024-12-10".into(),
            views: 45,
            upvotes: 15,
            downvotes: 0,
            comments: 7,
            validated: true,
            user_vote: Vote::Up,
        },
        CommunityIssue {
            id: "ISS-008".into(),
            title: "Graffiti on public building".into(),
            description: "Extensive graffiti appeared overnight on the side of the community center building.".into(),
            category: "Public Property".into(),
            location: "234 Main Street".into(),
            distance: "0.8 miles away".into(),
            status: IssueStatus::Pending,
            urgency: Urgency::Low,
            reported_by: "Anonymous".into(),
            report_date: "2024-12-09".into(),
            views: 18,
            upvotes: 3,
            downvotes: 2,
            comments: 1,
            validated: false,
            user_vote: Vote::None,
        },
        CommunityIssue {
            id: "ISS-009".into(),
            title: "Dangerous intersection needs stop sign".into(),
            description: "This intersection has had 3 near-accidents this week. Cars don't slow down and it's dangerous for pedestrians.".into(),
            category: "Traffic & Parking".into(),
            location: "Elm St & 5th Ave".into(),
            distance: "1.2 miles away".into(),
            status: IssueStatus::InProgress,
            urgency: Urgency::High,
            reported_by: "Jennifer L.".into(),
            report_date: "2024-12-07".into(),
            views: 89,
            upvotes: 34,
            downvotes: 3,
            comments: 16,
            validated: true,
            user_vote: Vote::None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn campaign(
    id: u32,
    title: &str,
    description: &str,
    category: &str,
    status: CampaignStatus,
    when: (&str, &str),
    location: &str,
    seats: (u32, u32),
    organizer: &str,
    tags: &[&str],
    impact: &str,
) -> Campaign {
    Campaign {
        id,
        title: title.into(),
        description: description.into(),
        category: category.into(),
        status,
        date: when.0.into(),
        time: when.1.into(),
        location: location.into(),
        participants: seats.0,
        max_participants: seats.1,
        organizer: organizer.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        impact: impact.into(),
        joined: false,
    }
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        campaign(
            1,
            "Clean City Drive 2024",
            "Join us for a city-wide cleanup initiative to make our streets cleaner and greener.",
            "Environment",
            CampaignStatus::Upcoming,
            ("2024-01-15", "09:00 AM"),
            "Central Park, Delhi",
            (245, 500),
            "Delhi Municipal Corporation",
            &["cleanup", "environment", "community"],
            "Expected to clean 50+ streets",
        ),
        campaign(
            2,
            "Tree Plantation Marathon",
            "Help us plant 1000 trees across the city to combat pollution and create a greener environment.",
            "Environment",
            CampaignStatus::Ongoing,
            ("2024-01-20", "07:00 AM"),
            "Various locations",
            (89, 200),
            "Green Delhi Initiative",
            &["trees", "environment", "air-quality"],
            "Target: 1000 trees planted",
        ),
        campaign(
            3,
            "Road Safety Awareness Week",
            "Educational campaign to promote road safety and reduce traffic accidents in our city.",
            "Safety",
            CampaignStatus::Completed,
            ("2024-01-05", "10:00 AM"),
            "Multiple Schools",
            (150, 150),
            "Traffic Police Department",
            &["safety", "education", "traffic"],
            "500+ students educated",
        ),
        campaign(
            4,
            "Digital Literacy for Seniors",
            "Teaching elderly citizens how to use smartphones and digital services for better civic engagement.",
            "Education",
            CampaignStatus::Upcoming,
            ("2024-01-25", "03:00 PM"),
            "Community Center",
            (32, 100),
            "Digital India Initiative",
            &["education", "seniors", "digital"],
            "Empower 100+ seniors",
        ),
    ]
}

pub const CAMPAIGN_CATEGORIES: [&str; 6] =
    ["all", "Environment", "Safety", "Education", "Health", "Infrastructure"];

pub const CAMPAIGN_STATUSES: [&str; 4] = ["all", "upcoming", "ongoing", "completed"];

fn member(name: &str, role: CollaboratorRole, joined_at: &str) -> Collaborator {
    Collaborator {
        name: name.into(),
        role,
        joined_at: joined_at.into(),
    }
}

fn update(author: &str, message: &str, timestamp: &str, kind: UpdateKind) -> CollabUpdate {
    CollabUpdate {
        author: author.into(),
        message: message.into(),
        timestamp: timestamp.into(),
        kind,
    }
}

pub fn collaborative_issues() -> Vec<CollaborativeIssue> {
    vec![
        CollaborativeIssue {
            id: "1".into(),
            title: "Downtown Park Restoration Initiative".into(),
            description: "Collaborative effort to restore the downtown park including new playground equipment, landscaping, and lighting improvements.".into(),
            category: "parks".into(),
            location: "Downtown Park, Main Street".into(),
            status: CollabStatus::InProgress,
            priority: Priority::High,
            collaborators: vec![
                member("Sarah Johnson", CollaboratorRole::Creator, "2024-01-15"),
                member("Mike Chen", CollaboratorRole::Collaborator, "2024-01-16"),
                member("Emily Davis", CollaboratorRole::Collaborator, "2024-01-17"),
                member("Robert Wilson", CollaboratorRole::Supporter, "2024-01-18"),
            ],
            updates: vec![
                update("Sarah Johnson", "Created the collaborative issue and invited initial team members", "2024-01-15 10:00", UpdateKind::Comment),
                update("Mike Chen", "Added photos of current park conditions", "2024-01-16 14:30", UpdateKind::FileUpload),
                update("Emily Davis", "Status updated to in-progress", "2024-01-17 09:15", UpdateKind::StatusChange),
                update("Sarah Johnson", "City council has approved our proposal! Next step is budget allocation.", "2024-01-20 11:45", UpdateKind::Comment),
            ],
            supporters: 47,
            public: true,
        },
        CollaborativeIssue {
            id: "2".into(),
            title: "Neighborhood Street Lighting Campaign".into(),
            description: "Group effort to improve street lighting safety on Oak Avenue and surrounding residential streets.".into(),
            category: "lighting".into(),
            location: "Oak Avenue Neighborhood".into(),
            status: CollabStatus::Open,
            priority: Priority::Medium,
            collaborators: vec![
                member("David Park", CollaboratorRole::Creator, "2024-01-10"),
                member("Lisa Thompson", CollaboratorRole::Collaborator, "2024-01-12"),
                member("James Rodriguez", CollaboratorRole::Supporter, "2024-01-14"),
            ],
            updates: vec![
                update("David Park", "Started this group to address safety concerns on Oak Avenue", "2024-01-10 16:00", UpdateKind::Comment),
                update("Lisa Thompson", "Added safety incident reports from the past 6 months", "2024-01-12 10:20", UpdateKind::FileUpload),
                update("James Rodriguez", "James Rodriguez joined as a supporter", "2024-01-14 18:45", UpdateKind::CollaboratorAdded),
            ],
            supporters: 23,
            public: true,
        },
        CollaborativeIssue {
            id: "3".into(),
            title: "Riverside Drainage Cleanup".into(),
            description: "Neighbours cleared the blocked storm drains along the riverside walk before the monsoon.".into(),
            category: "sanitation".into(),
            location: "Riverside Walk".into(),
            status: CollabStatus::Resolved,
            priority: Priority::Urgent,
            collaborators: vec![member("Anita Rao", CollaboratorRole::Supporter, "2023-12-02")],
            updates: vec![update(
                "Anita Rao",
                "Drains cleared and inspected by the ward office",
                "2023-12-20 08:30",
                UpdateKind::StatusChange,
            )],
            supporters: 61,
            public: true,
        },
    ]
}

pub fn map_issues() -> Vec<MapIssue> {
    vec![
        MapIssue {
            id: 1,
            title: "Pothole at Times Square".into(),
            lat: 40.7589,
            lng: -73.9851,
            status: IssueStatus::Pending,
            urgency: Urgency::High,
        },
        MapIssue {
            id: 2,
            title: "Broken streetlight at Central Park".into(),
            lat: 40.7829,
            lng: -73.9654,
            status: IssueStatus::InProgress,
            urgency: Urgency::Medium,
        },
    ]
}

pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".into(),
        email: "john.doe@email.com".into(),
        phone: "+1 (555) 123-4567".into(),
        location: "Downtown District".into(),
        join_date: "2024-03-15".into(),
        bio: "Active community member passionate about improving our neighborhood.".into(),
    }
}

pub fn user_stats() -> UserStats {
    UserStats {
        issues_reported: 12,
        issues_resolved: 8,
        community_validations: 34,
        comments_posted: 67,
        total_views: 1543,
        upvotes_received: 89,
        community_points: 245,
        account_level: "Community Champion".into(),
        experience_points: 2840,
        next_level_points: 3500,
    }
}

pub fn notification_prefs() -> NotificationPrefs {
    NotificationPrefs {
        email_updates: true,
        push_notifications: true,
        weekly_digest: true,
        nearby_issues: false,
        resolution_updates: true,
    }
}

fn badge(id: &str, name: &str, description: &str, earned_date: Option<&str>) -> Badge {
    Badge {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        earned_date: earned_date.map(Into::into),
    }
}

pub fn badges() -> Vec<Badge> {
    vec![
        badge("first-report", "First Reporter", "Submitted your first issue report", Some("2024-03-16")),
        badge("community-validator", "Community Validator", "Validated 25+ community issues", Some("2024-05-22")),
        badge("frequent-contributor", "Frequent Contributor", "Reported 10+ issues", Some("2024-08-10")),
        badge("neighborhood-champion", "Neighborhood Champion", "Top contributor in your area", Some("2024-10-15")),
        badge("social-connector", "Social Connector", "Posted 50+ helpful comments", Some("2024-11-20")),
        badge("resolution-tracker", "Resolution Tracker", "Track issues until resolution", None),
    ]
}

pub fn recent_activity() -> Vec<Activity> {
    let a = |kind, title: &str, date: &str| Activity {
        kind,
        title: title.into(),
        date: date.into(),
    };
    vec![
        a(ActivityKind::Validated, "Validated pothole report on Main Street", "2 days ago"),
        a(ActivityKind::Commented, "Commented on streetlight issue", "4 days ago"),
        a(ActivityKind::Reported, "Reported broken sidewalk", "1 week ago"),
        a(ActivityKind::Badge, "Earned \"Social Connector\" badge", "2 weeks ago"),
    ]
}

pub fn monthly_goals() -> Vec<MonthlyGoal> {
    let g = |label: &str, goal, actual| MonthlyGoal {
        label: label.into(),
        goal,
        actual,
    };
    vec![g("Reports", 5, 3), g("Validations", 10, 7), g("Comments", 15, 12)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_per_list() {
        let issues = my_issues();
        for (i, a) in issues.iter().enumerate() {
            assert!(issues[i + 1..].iter().all(|b| b.id != a.id));
        }
        let camps = campaigns();
        for (i, a) in camps.iter().enumerate() {
            assert!(camps[i + 1..].iter().all(|b| b.id != a.id));
        }
    }

    #[test]
    fn receipts_only_on_resolved_issues() {
        for issue in my_issues() {
            if issue.receipt_hash.is_some() {
                assert_eq!(issue.status, IssueStatus::Resolved);
            }
        }
    }

    #[test]
    fn campaigns_never_start_over_capacity() {
        assert!(campaigns().iter().all(|c| c.participants <= c.max_participants));
    }

    #[test]
    fn map_issues_use_typed_status() {
        let pins = map_issues();
        assert_eq!(pins[0].urgency, Urgency::High);
        assert_eq!(pins[1].status, IssueStatus::InProgress);
        let json = serde_json::to_value(&pins[1]).expect("json");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["urgency"], "medium");
    }
}
