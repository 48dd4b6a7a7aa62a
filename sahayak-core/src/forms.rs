use crate::config::SubmissionProfile;
use crate::error::{Error, Result};
use crate::model::{Attachment, Priority};
use crate::submission::MockSubmission;
use serde::{Deserialize, Serialize};

pub const MAX_PHOTOS: usize = 5;
pub const MAX_RECORDING_SECS: u32 = 120;

pub const REPORT_CATEGORIES: [&str; 8] = [
    "Roads & Transportation",
    "Water & Sanitation",
    "Street Lighting",
    "Waste Management",
    "Public Safety",
    "Parks & Recreation",
    "Building & Construction",
    "Traffic & Parking",
];

/// `m:ss`
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencyKind {
    Fire,
    Water,
    Electrical,
    Structural,
    Traffic,
    Other,
}

impl EmergencyKind {
    pub const ALL: [EmergencyKind; 6] = [
        EmergencyKind::Fire,
        EmergencyKind::Water,
        EmergencyKind::Electrical,
        EmergencyKind::Structural,
        EmergencyKind::Traffic,
        EmergencyKind::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EmergencyKind::Fire => "fire",
            EmergencyKind::Water => "water",
            EmergencyKind::Electrical => "electrical",
            EmergencyKind::Structural => "structural",
            EmergencyKind::Traffic => "traffic",
            EmergencyKind::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmergencyKind::Fire => "Fire Hazard",
            EmergencyKind::Water => "Water Emergency",
            EmergencyKind::Electrical => "Electrical Hazard",
            EmergencyKind::Structural => "Structural Damage",
            EmergencyKind::Traffic => "Traffic Emergency",
            EmergencyKind::Other => "Other Emergency",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EmergencyKind::Fire => "Fire, smoke, or fire hazards",
            EmergencyKind::Water => "Water main break, flooding",
            EmergencyKind::Electrical => "Downed power lines, electrical issues",
            EmergencyKind::Structural => "Building damage, fallen trees",
            EmergencyKind::Traffic => "Road blockage, traffic hazards",
            EmergencyKind::Other => "Other urgent public safety issues",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmergencyForm {
    pub kind: Option<EmergencyKind>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub photo: Option<Attachment>,
}

impl Default for EmergencyForm {
    fn default() -> Self {
        Self {
            kind: None,
            title: String::new(),
            description: String::new(),
            location: "Current Location (GPS)".into(),
            photo: None,
        }
    }
}

impl EmergencyForm {
    /// Submit stays disabled until a kind is picked and the title is filled.
    pub fn can_submit(&self) -> bool {
        self.kind.is_some() && !self.title.trim().is_empty()
    }

    pub fn begin_submit(&self, profile: &SubmissionProfile) -> Result<MockSubmission> {
        if self.kind.is_none() {
            return Err(Error::FormIncomplete("emergency type is required"));
        }
        if self.title.trim().is_empty() {
            return Err(Error::FormIncomplete("title is required"));
        }
        tracing::info!(kind = ?self.kind, "emergency report submitted");
        Ok(MockSubmission::from_profile(profile))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Capture = 1,
    LocationPriority = 2,
    Review = 3,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Capture,
        WizardStep::LocationPriority,
        WizardStep::Review,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Capture => "Voice + Photo Report",
            WizardStep::LocationPriority => "Location & Priority",
            WizardStep::Review => "Review & Submit",
        }
    }

    fn from_number(n: u8) -> Self {
        match n {
            0 | 1 => WizardStep::Capture,
            2 => WizardStep::LocationPriority,
            _ => WizardStep::Review,
        }
    }
}

/// Mock voice recorder. Ticks once a second and stops itself at the cap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recorder {
    pub recording: bool,
    pub seconds: u32,
}

impl Recorder {
    pub fn start(&mut self) {
        self.recording = true;
        self.seconds = 0;
    }

    /// Returns `true` when the cap was hit and the recorder stopped.
    pub fn tick(&mut self) -> bool {
        if !self.recording {
            return false;
        }
        if self.seconds >= MAX_RECORDING_SECS {
            self.recording = false;
            return true;
        }
        self.seconds += 1;
        false
    }

    pub fn stop(&mut self) {
        self.recording = false;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportForm {
    pub step: WizardStep,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Option<Priority>,
    pub anonymous: bool,
    pub elderly_disabled: bool,
    pub location: String,
    pub photos: Vec<Attachment>,
    pub voice: Option<Attachment>,
    pub recorder: Recorder,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            step: WizardStep::Capture,
            title: String::new(),
            description: String::new(),
            category: String::new(),
            priority: None,
            anonymous: false,
            elderly_disabled: false,
            location: String::new(),
            photos: Vec::new(),
            voice: None,
            recorder: Recorder::default(),
        }
    }
}

impl ReportForm {
    pub fn next(&mut self) {
        self.step = WizardStep::from_number(self.step.number() + 1);
    }

    pub fn back(&mut self) {
        self.step = WizardStep::from_number(self.step.number().saturating_sub(1));
    }

    pub fn can_go_back(&self) -> bool {
        self.step != WizardStep::Capture
    }

    pub fn can_go_next(&self) -> bool {
        self.step != WizardStep::Review
    }

    /// Add photos, keeping at most [`MAX_PHOTOS`]; extras are dropped.
    pub fn add_photos(&mut self, photos: impl IntoIterator<Item = Attachment>) {
        self.photos.extend(photos);
        if self.photos.len() > MAX_PHOTOS {
            tracing::debug!(dropped = self.photos.len() - MAX_PHOTOS, "photo limit reached");
            self.photos.truncate(MAX_PHOTOS);
        }
    }

    pub fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    pub fn start_recording(&mut self) {
        self.voice = None;
        self.recorder.start();
    }

    /// Advance the recorder by one second; attaches the note when the cap
    /// stops it.
    pub fn tick_recording(&mut self) {
        if self.recorder.tick() {
            self.attach_voice_note();
        }
    }

    pub fn stop_recording(&mut self) {
        self.recorder.stop();
        self.attach_voice_note();
    }

    fn attach_voice_note(&mut self) {
        self.voice = Some(Attachment {
            name: "voice_note.wav".into(),
            mime: "audio/wav".into(),
            bytes: b"mock".to_vec(),
        });
    }

    pub fn discard_voice(&mut self) {
        self.voice = None;
        self.recorder = Recorder::default();
    }

    /// Submitting needs something to look at: a voice note or a photo.
    pub fn has_evidence(&self) -> bool {
        self.voice.is_some() || !self.photos.is_empty()
    }

    pub fn begin_submit(&self, profile: &SubmissionProfile) -> Result<MockSubmission> {
        if !self.has_evidence() {
            return Err(Error::FormIncomplete("a voice note or photo is required"));
        }
        tracing::info!(
            photos = self.photos.len(),
            voice = self.voice.is_some(),
            anonymous = self.anonymous,
            "issue report submitted"
        );
        Ok(MockSubmission::from_profile(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn photo(n: usize) -> Attachment {
        Attachment {
            name: format!("photo-{n}.jpg"),
            mime: "image/jpeg".into(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn emergency_submit_disabled_without_title() {
        let config = AppConfig::default();
        let mut form = EmergencyForm {
            kind: Some(EmergencyKind::Water),
            ..Default::default()
        };
        assert!(!form.can_submit());
        assert!(matches!(
            form.begin_submit(&config.emergency_submission),
            Err(Error::FormIncomplete(_))
        ));

        form.title = "   ".into();
        assert!(!form.can_submit());

        form.title = "Main burst on 5th".into();
        assert!(form.can_submit());
        assert!(form.begin_submit(&config.emergency_submission).is_ok());
    }

    #[test]
    fn emergency_submit_needs_kind() {
        let form = EmergencyForm {
            title: "Sparks from pole".into(),
            ..Default::default()
        };
        assert!(!form.can_submit());
    }

    #[test]
    fn wizard_steps_clamp() {
        let mut form = ReportForm::default();
        form.back();
        assert_eq!(form.step, WizardStep::Capture);
        assert!(!form.can_go_back());
        form.next();
        form.next();
        form.next();
        assert_eq!(form.step, WizardStep::Review);
        assert!(!form.can_go_next());
    }

    #[test]
    fn photos_capped_at_five() {
        let mut form = ReportForm::default();
        form.add_photos((0..3).map(photo));
        form.add_photos((3..8).map(photo));
        assert_eq!(form.photos.len(), MAX_PHOTOS);
        assert_eq!(form.photos[4].name, "photo-4.jpg");
        form.remove_photo(0);
        form.remove_photo(99);
        assert_eq!(form.photos.len(), 4);
    }

    #[test]
    fn recording_stops_at_cap_and_attaches_note() {
        let mut form = ReportForm::default();
        assert!(!form.has_evidence());
        form.start_recording();
        for _ in 0..MAX_RECORDING_SECS {
            form.tick_recording();
        }
        assert!(form.recorder.recording);
        assert_eq!(format_duration(form.recorder.seconds), "2:00");
        form.tick_recording();
        assert!(!form.recorder.recording);
        assert!(form.has_evidence());
    }

    #[test]
    fn report_submit_requires_evidence() {
        let config = AppConfig::default();
        let mut form = ReportForm::default();
        assert!(form.begin_submit(&config.report_submission).is_err());
        form.stop_recording();
        assert!(form.begin_submit(&config.report_submission).is_ok());
    }

    #[test]
    fn location_and_priority_reachable_before_evidence() {
        let config = AppConfig::default();
        let mut form = ReportForm::default();
        assert!(form.can_go_next());
        form.next();
        assert_eq!(form.step, WizardStep::LocationPriority);
        form.priority = Some(Priority::High);
        form.next();
        assert_eq!(form.step, WizardStep::Review);
        assert!(!form.has_evidence());
        assert!(form.begin_submit(&config.report_submission).is_err());
    }

    #[test]
    fn durations_pad_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
    }
}
