use crate::model::{Campaign, CollabStatus, CollaborativeIssue, CollaboratorRole, Issue, IssueStatus};
use serde::{Deserialize, Serialize};

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// My Issues list: search over title, category and location; `status` is
/// `"all"` or a lower-cased status label.
pub fn filter_issues<'a>(issues: &'a [Issue], search: &str, status: &str) -> Vec<&'a Issue> {
    let needle = search.to_lowercase();
    issues
        .iter()
        .filter(|i| {
            contains_ci(&i.title, &needle)
                || contains_ci(&i.category, &needle)
                || contains_ci(&i.location, &needle)
        })
        .filter(|i| status == "all" || i.status.filter_key() == status)
        .collect()
}

pub fn filter_campaigns<'a>(
    campaigns: &'a [Campaign],
    search: &str,
    category: &str,
    status: &str,
) -> Vec<&'a Campaign> {
    let needle = search.to_lowercase();
    campaigns
        .iter()
        .filter(|c| contains_ci(&c.title, &needle) || contains_ci(&c.description, &needle))
        .filter(|c| category == "all" || c.category == category)
        .filter(|c| status == "all" || c.status.id() == status)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollabTab {
    Active,
    Resolved,
    Mine,
    All,
}

impl CollabTab {
    pub const ALL: [CollabTab; 4] = [CollabTab::Active, CollabTab::Resolved, CollabTab::Mine, CollabTab::All];

    pub fn label(self) -> &'static str {
        match self {
            CollabTab::Active => "Active",
            CollabTab::Resolved => "Resolved",
            CollabTab::Mine => "My Groups",
            CollabTab::All => "All",
        }
    }
}

pub fn filter_collaborations<'a>(
    issues: &'a [CollaborativeIssue],
    search: &str,
    tab: CollabTab,
) -> Vec<&'a CollaborativeIssue> {
    let needle = search.to_lowercase();
    issues
        .iter()
        .filter(|i| {
            contains_ci(&i.title, &needle)
                || contains_ci(&i.description, &needle)
                || contains_ci(&i.location, &needle)
        })
        .filter(|i| match tab {
            CollabTab::Active => matches!(i.status, CollabStatus::Open | CollabStatus::InProgress),
            CollabTab::Resolved => i.status == CollabStatus::Resolved,
            CollabTab::Mine => i.collaborators.iter().any(|c| {
                matches!(c.role, CollaboratorRole::Creator | CollaboratorRole::Collaborator)
            }),
            CollabTab::All => true,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProgressStep {
    pub label: &'static str,
    pub completed: bool,
    /// Empty when the step has no date yet.
    pub date: String,
}

/// Status timeline shown in the issue detail dialog.
pub fn progress_steps(issue: &Issue) -> Vec<ProgressStep> {
    let worked = matches!(issue.status, IssueStatus::InProgress | IssueStatus::Resolved);
    let resolved = issue.status == IssueStatus::Resolved;
    let when = |cond: bool, date: &str| if cond { date.to_string() } else { String::new() };

    vec![
        ProgressStep {
            label: "Reported",
            completed: true,
            date: issue.report_date.clone(),
        },
        ProgressStep {
            label: "Under Review",
            completed: issue.progress >= 25,
            date: when(issue.status != IssueStatus::Pending, &issue.report_date),
        },
        ProgressStep {
            label: "Assigned",
            completed: issue.progress >= 50,
            date: when(worked, &issue.last_update),
        },
        ProgressStep {
            label: "In Progress",
            completed: issue.progress >= 75,
            date: when(worked, &issue.last_update),
        },
        ProgressStep {
            label: "Resolved",
            completed: resolved,
            date: when(resolved, &issue.last_update),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn issue_search_spans_fields() {
        let issues = sample::my_issues();
        let by_location = filter_issues(&issues, "OAK avenue", "all");
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].id, "ISS-002");

        let by_category = filter_issues(&issues, "parks", "all");
        assert_eq!(by_category[0].id, "ISS-004");
    }

    #[test]
    fn issue_status_filter() {
        let issues = sample::my_issues();
        let resolved = filter_issues(&issues, "", "resolved");
        assert_eq!(resolved.len(), 2);
        let in_progress = filter_issues(&issues, "", "in progress");
        assert!(in_progress.iter().all(|i| i.status == IssueStatus::InProgress));
        assert_eq!(filter_issues(&issues, "", "all").len(), issues.len());
    }

    #[test]
    fn campaign_filters_combine() {
        let campaigns = sample::campaigns();
        assert_eq!(filter_campaigns(&campaigns, "", "Environment", "all").len(), 2);
        assert_eq!(filter_campaigns(&campaigns, "", "Environment", "ongoing").len(), 1);
        assert_eq!(filter_campaigns(&campaigns, "seniors", "all", "all").len(), 1);
        assert_eq!(filter_campaigns(&campaigns, "smartphones", "all", "all").len(), 1);
        assert!(filter_campaigns(&campaigns, "", "Health", "all").is_empty());
        assert!(filter_campaigns(&campaigns, "concert", "all", "all").is_empty());
    }

    #[test]
    fn collaboration_tabs() {
        let issues = sample::collaborative_issues();
        assert_eq!(filter_collaborations(&issues, "", CollabTab::Active).len(), 2);
        assert_eq!(filter_collaborations(&issues, "", CollabTab::Resolved).len(), 1);
        assert_eq!(filter_collaborations(&issues, "", CollabTab::Mine).len(), 2);
        assert_eq!(filter_collaborations(&issues, "oak", CollabTab::All).len(), 1);
    }

    #[test]
    fn pending_issue_timeline() {
        let issues = sample::my_issues();
        let pending = issues.iter().find(|i| i.id == "ISS-003").unwrap();
        let steps = progress_steps(pending);
        assert_eq!(steps.len(), 5);
        assert!(steps[0].completed);
        assert!(steps[1..].iter().all(|s| !s.completed));
        assert!(steps[1].date.is_empty());
    }

    #[test]
    fn resolved_issue_timeline_is_complete() {
        let issues = sample::my_issues();
        let done = issues.iter().find(|i| i.id == "ISS-002").unwrap();
        let steps = progress_steps(done);
        assert!(steps.iter().all(|s| s.completed));
        assert_eq!(steps[4].date, "2024-12-09");
    }
}
