use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: [Language; 12] = [
    Language { code: "en-US", name: "English (US)" },
    Language { code: "es-ES", name: "Spanish (Spain)" },
    Language { code: "fr-FR", name: "French (France)" },
    Language { code: "de-DE", name: "German (Germany)" },
    Language { code: "it-IT", name: "Italian (Italy)" },
    Language { code: "pt-BR", name: "Portuguese (Brazil)" },
    Language { code: "zh-CN", name: "Chinese (Simplified)" },
    Language { code: "ja-JP", name: "Japanese" },
    Language { code: "ko-KR", name: "Korean" },
    Language { code: "ar-SA", name: "Arabic (Saudi Arabia)" },
    Language { code: "hi-IN", name: "Hindi (India)" },
    Language { code: "ru-RU", name: "Russian" },
];

const TRANSCRIPTIONS: [(&str, &str); 7] = [
    ("en-US", "There is a large pothole on Main Street near the intersection with Oak Avenue. The hole is approximately two feet wide and poses a danger to vehicles, especially motorcycles and bicycles. This needs urgent repair as it could cause accidents."),
    ("es-ES", "Hay un bache grande en la Calle Principal cerca de la intersección con Oak Avenue. El hoyo tiene aproximadamente dos pies de ancho y representa un peligro para los vehículos."),
    ("fr-FR", "Il y a un grand nid-de-poule sur Main Street près de l'intersection avec Oak Avenue. Le trou fait environ deux pieds de large et représente un danger pour les véhicules."),
    ("de-DE", "Es gibt ein großes Schlagloch in der Main Street in der Nähe der Kreuzung mit der Oak Avenue. Das Loch ist etwa zwei Fuß breit und stellt eine Gefahr für Fahrzeuge dar."),
    ("zh-CN", "主街靠近橡树大道交叉口有一个大坑洞。这个洞大约两英尺宽，对车辆特别是摩托车和自行车构成危险。"),
    ("ja-JP", "オーク・アベニューとの交差点近くのメイン・ストリートに大きな穴があります。穴は約2フィート幅で、車両、特にオートバイや自転車にとって危険です。"),
    ("hi-IN", "ओक एवेन्यू के साथ चौराहे के पास मुख्य सड़क पर एक बड़ा गड्ढा है। यह गड्ढा लगभग दो फुट चौड़ा है और वाहनों के लिए खतरनाक है।"),
];

/// Canned transcription for a language, English when none exists.
pub fn mock_transcription(code: &str) -> &'static str {
    TRANSCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(TRANSCRIPTIONS[0].1, |(_, text)| text)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoicePhase {
    Idle,
    Recording,
    Processing,
    Transcribed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceSession {
    pub language: String,
    pub phase: VoicePhase,
    pub duration: u32,
    pub transcript: String,
    pub confidence: u8,
    pub has_audio: bool,
    pub playing: bool,
}

impl Default for VoiceSession {
    fn default() -> Self {
        Self {
            language: "en-US".into(),
            phase: VoicePhase::Idle,
            duration: 0,
            transcript: String::new(),
            confidence: 0,
            has_audio: false,
            playing: false,
        }
    }
}

impl VoiceSession {
    pub fn start(&mut self) {
        self.phase = VoicePhase::Recording;
        self.duration = 0;
        self.transcript.clear();
        self.confidence = 0;
        self.has_audio = true;
        self.playing = false;
    }

    pub fn tick(&mut self) {
        if self.phase == VoicePhase::Recording {
            self.duration += 1;
        }
    }

    pub fn stop(&mut self) {
        if self.phase == VoicePhase::Recording {
            self.phase = VoicePhase::Processing;
        }
    }

    /// Complete processing with the canned text and a confidence of 80..=99.
    pub fn finish_transcription<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.transcript = mock_transcription(&self.language).to_string();
        self.confidence = rng.gen_range(80..100);
        self.phase = VoicePhase::Transcribed;
        tracing::debug!(language = %self.language, confidence = self.confidence, "transcribed");
    }

    /// Re-run transcription on the existing recording.
    pub fn retry(&mut self) -> Result<()> {
        if !self.has_audio {
            return Err(Error::NoRecording);
        }
        self.phase = VoicePhase::Processing;
        Ok(())
    }

    pub fn toggle_playback(&mut self) {
        if self.has_audio {
            self.playing = !self.playing;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase == VoicePhase::Transcribed && !self.transcript.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(mock_transcription("ko-KR"), mock_transcription("en-US"));
        assert!(mock_transcription("de-DE").contains("Schlagloch"));
    }

    #[test]
    fn recording_flow() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = VoiceSession::default();
        assert!(matches!(session.retry(), Err(Error::NoRecording)));

        session.language = "fr-FR".into();
        session.start();
        session.tick();
        session.tick();
        session.stop();
        session.tick();
        assert_eq!(session.duration, 2);
        assert_eq!(session.phase, VoicePhase::Processing);
        assert!(!session.can_submit());

        session.finish_transcription(&mut rng);
        assert!((80..100).contains(&session.confidence));
        assert!(session.transcript.contains("nid-de-poule"));
        assert!(session.can_submit());

        session.retry().expect("retry");
        assert_eq!(session.phase, VoicePhase::Processing);
    }
}
