use crate::model::{CommunityIssue, Vote};
use serde::{Deserialize, Serialize};

/// Apply the viewer's vote: undo any previous vote, then either clear it
/// (same vote again) or record the new one.
pub fn cast_vote(issue: &mut CommunityIssue, vote: Vote) {
    match issue.user_vote {
        Vote::Up => issue.upvotes = issue.upvotes.saturating_sub(1),
        Vote::Down => issue.downvotes = issue.downvotes.saturating_sub(1),
        Vote::None => {}
    }

    if issue.user_vote == vote {
        issue.user_vote = Vote::None;
    } else {
        issue.user_vote = vote;
        match vote {
            Vote::Up => issue.upvotes += 1,
            Vote::Down => issue.downvotes += 1,
            Vote::None => {}
        }
    }
    tracing::debug!(issue = %issue.id, ?vote, up = issue.upvotes, down = issue.downvotes, "vote cast");
}

/// Mark an issue as validated by the viewer. Validating twice is a no-op.
pub fn validate(issue: &mut CommunityIssue) {
    if issue.validated {
        return;
    }
    issue.validated = true;
    issue.upvotes += 1;
}

/// Record a comment. Blank text is ignored. Returns whether it counted.
pub fn comment(issue: &mut CommunityIssue, text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    issue.comments += 1;
    true
}

/// Apply `f` to the issue with the given id, if present.
pub fn with_issue<F>(issues: &mut [CommunityIssue], id: &str, f: F)
where
    F: FnOnce(&mut CommunityIssue),
{
    if let Some(issue) = issues.iter_mut().find(|i| i.id == id) {
        f(issue);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyStats {
    pub total: usize,
    pub validated: usize,
    pub my_validations: usize,
    pub community_impact: u32,
}

pub fn nearby_stats(issues: &[CommunityIssue]) -> NearbyStats {
    NearbyStats {
        total: issues.len(),
        validated: issues.iter().filter(|i| i.validated).count(),
        my_validations: issues.iter().filter(|i| i.user_vote == Vote::Up).count(),
        community_impact: 156,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn fresh() -> CommunityIssue {
        let mut issue = sample::community_issues().remove(0);
        issue.upvotes = 8;
        issue.downvotes = 1;
        issue.user_vote = Vote::None;
        issue
    }

    #[test]
    fn up_then_down_moves_one_vote() {
        let mut issue = fresh();
        cast_vote(&mut issue, Vote::Up);
        assert_eq!((issue.upvotes, issue.downvotes), (9, 1));
        cast_vote(&mut issue, Vote::Down);
        assert_eq!((issue.upvotes, issue.downvotes), (8, 2));
        assert_eq!(issue.user_vote, Vote::Down);
    }

    #[test]
    fn repeating_a_vote_clears_it() {
        let mut issue = fresh();
        cast_vote(&mut issue, Vote::Down);
        cast_vote(&mut issue, Vote::Down);
        assert_eq!((issue.upvotes, issue.downvotes), (8, 1));
        assert_eq!(issue.user_vote, Vote::None);
    }

    #[test]
    fn validate_is_idempotent() {
        let mut issue = fresh();
        validate(&mut issue);
        validate(&mut issue);
        assert!(issue.validated);
        assert_eq!(issue.upvotes, 9);
    }

    #[test]
    fn blank_comments_are_ignored() {
        let mut issue = fresh();
        let before = issue.comments;
        assert!(!comment(&mut issue, "   "));
        assert!(comment(&mut issue, "Saw this too"));
        assert_eq!(issue.comments, before + 1);
    }

    #[test]
    fn stats_count_up_votes_as_validations() {
        let mut issues = sample::community_issues();
        let before = nearby_stats(&issues);
        let id = issues
            .iter()
            .find(|i| i.user_vote == Vote::None)
            .map(|i| i.id.clone())
            .expect("unvoted issue");
        with_issue(&mut issues, &id, |i| cast_vote(i, Vote::Up));
        let after = nearby_stats(&issues);
        assert_eq!(after.my_validations, before.my_validations + 1);
        assert_eq!(after.total, issues.len());
    }
}
