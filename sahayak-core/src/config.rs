use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Timing profile for one kind of mock submission. Fields missing from a
/// partial profile fall back to the report profile's values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionProfile {
    /// Percentage points added per tick.
    pub step: u8,
    pub interval_ms: u64,
    /// Delay between reaching 100% and the completion callback.
    pub completion_delay_ms: u64,
}

impl SubmissionProfile {
    pub fn emergency() -> Self {
        Self {
            step: 20,
            interval_ms: 300,
            completion_delay_ms: 500,
        }
    }

    pub fn report() -> Self {
        Self {
            step: 10,
            interval_ms: 200,
            completion_delay_ms: 2000,
        }
    }
}

impl Default for SubmissionProfile {
    fn default() -> Self {
        Self::report()
    }
}

fn emergency_profile<'de, D>(deserializer: D) -> std::result::Result<SubmissionProfile, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Default, Deserialize)]
    #[serde(default)]
    struct Partial {
        step: Option<u8>,
        interval_ms: Option<u64>,
        completion_delay_ms: Option<u64>,
    }

    let partial = Partial::deserialize(deserializer)?;
    let base = SubmissionProfile::emergency();
    Ok(SubmissionProfile {
        step: partial.step.unwrap_or(base.step),
        interval_ms: partial.interval_ms.unwrap_or(base.interval_ms),
        completion_delay_ms: partial.completion_delay_ms.unwrap_or(base.completion_delay_ms),
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    /// Raster tile URL with `{z}`, `{x}` and `{y}` placeholders.
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 40.7589,
            center_lng: -73.9851,
            zoom: 13,
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "© OpenStreetMap contributors".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    pub city: String,
    pub log_level: String,
    #[serde(deserialize_with = "emergency_profile")]
    pub emergency_submission: SubmissionProfile,
    pub report_submission: SubmissionProfile,
    pub chatbot_reply_delay_ms: u64,
    pub transcription_delay_ms: u64,
    pub notification_count: u32,
    pub map: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Sahayak".into(),
            city: "Delhi".into(),
            log_level: "info".into(),
            emergency_submission: SubmissionProfile::emergency(),
            report_submission: SubmissionProfile::report(),
            chatbot_reply_delay_ms: 1500,
            transcription_delay_ms: 2000,
            notification_count: 3,
            map: MapConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        tracing::debug!(app = %config.app_name, city = %config.city, "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"city": "Pune", "chatbot_reply_delay_ms": 10}"#)
            .expect("parse");
        assert_eq!(config.city, "Pune");
        assert_eq!(config.chatbot_reply_delay_ms, 10);
        assert_eq!(config.emergency_submission.step, 20);
        assert_eq!(config.report_submission.completion_delay_ms, 2000);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            AppConfig::from_json("{not json"),
            Err(crate::Error::InvalidConfig(_))
        ));
        assert!(AppConfig::from_json("42").is_err());
    }

    #[test]
    fn partial_nested_objects_keep_defaults() {
        let config = AppConfig::from_json(r#"{"map": {"zoom": 12}}"#).expect("map");
        assert_eq!(config.map.zoom, 12);
        assert_eq!(config.map.center_lat, MapConfig::default().center_lat);
        assert_eq!(config.map.tile_url, MapConfig::default().tile_url);

        let config = AppConfig::from_json(
            r#"{"report_submission": {"step": 5}, "emergency_submission": {"interval_ms": 100}}"#,
        )
        .expect("profiles");
        assert_eq!(config.report_submission.step, 5);
        assert_eq!(config.report_submission.interval_ms, 200);
        assert_eq!(config.report_submission.completion_delay_ms, 2000);
        assert_eq!(config.emergency_submission.step, 20);
        assert_eq!(config.emergency_submission.interval_ms, 100);
        assert_eq!(config.emergency_submission.completion_delay_ms, 500);
    }
}
