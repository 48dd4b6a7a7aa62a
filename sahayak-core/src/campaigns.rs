use crate::error::{Error, Result};
use crate::model::{Campaign, CampaignStatus};

pub fn join(campaign: &mut Campaign) -> Result<()> {
    if campaign.joined {
        return Err(Error::AlreadyJoined(campaign.id));
    }
    if campaign.status == CampaignStatus::Completed {
        return Err(Error::CampaignClosed(campaign.id));
    }
    if campaign.participants >= campaign.max_participants {
        return Err(Error::CampaignFull(campaign.id));
    }
    campaign.participants += 1;
    campaign.joined = true;
    tracing::info!(campaign = campaign.id, participants = campaign.participants, "joined campaign");
    Ok(())
}

pub fn leave(campaign: &mut Campaign) -> Result<()> {
    if !campaign.joined {
        return Err(Error::NotJoined(campaign.id));
    }
    campaign.participants = campaign.participants.saturating_sub(1);
    campaign.joined = false;
    Ok(())
}

/// Whether the join button should be enabled.
pub fn can_join(campaign: &Campaign) -> bool {
    !campaign.joined
        && campaign.status != CampaignStatus::Completed
        && campaign.participants < campaign.max_participants
}

pub fn fill_percent(campaign: &Campaign) -> u8 {
    if campaign.max_participants == 0 {
        return 100;
    }
    let pct = u64::from(campaign.participants) * 100 / u64::from(campaign.max_participants);
    pct.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn by_id(id: u32) -> Campaign {
        sample::campaigns()
            .into_iter()
            .find(|c| c.id == id)
            .expect("campaign")
    }

    #[test]
    fn join_then_leave() {
        let mut c = by_id(4);
        assert!(can_join(&c));
        join(&mut c).expect("join");
        assert_eq!(c.participants, 33);
        assert!(!can_join(&c));
        assert!(matches!(join(&mut c), Err(Error::AlreadyJoined(4))));
        leave(&mut c).expect("leave");
        assert_eq!(c.participants, 32);
        assert!(matches!(leave(&mut c), Err(Error::NotJoined(4))));
    }

    #[test]
    fn completed_campaign_rejects_joins() {
        let mut c = by_id(3);
        assert!(!can_join(&c));
        assert!(matches!(join(&mut c), Err(Error::CampaignClosed(3))));
        assert_eq!(fill_percent(&c), 100);
    }

    #[test]
    fn full_campaign_rejects_joins() {
        let mut c = by_id(2);
        c.participants = c.max_participants;
        assert!(matches!(join(&mut c), Err(Error::CampaignFull(2))));
    }

    #[test]
    fn fill_percent_rounds_down() {
        assert_eq!(fill_percent(&by_id(1)), 49);
    }
}
